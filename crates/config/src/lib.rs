//! Configuration resolution for the settings transaction processor.
//!
//! This crate provides the typed configuration value, a TOML file loader,
//! and the precedence merge that produces the single effective configuration
//! consumed by the processor at startup.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, load_settings_config, merge_settings_configs};
pub use types::SettingsConfig;
