//! Configuration loading and precedence merging.
//!
//! Responsibilities:
//! - Load a `SettingsConfig` from an on-disk TOML file.
//! - Merge an ordered precedence list of configurations into one.
//!
//! Does NOT handle:
//! - Resolving the configuration file path (caller concern).
//! - Consuming the resolved endpoint (see the processor crate).
//!
//! Invariants / Assumptions:
//! - A missing file is a normal case, not an error.
//! - A load failure never yields a partial configuration.
//! - Later entries in the precedence list override earlier ones, per field.

mod error;
mod file;
mod merge;

pub use error::ConfigError;
pub use file::load_settings_config;
pub use merge::merge_settings_configs;
