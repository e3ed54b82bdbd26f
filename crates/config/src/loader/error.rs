//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Does NOT handle:
//! - Error handling for the processor's transport (see the processor crate).
//!
//! Invariants:
//! - Every variant names the configuration file path it arose from.
//! - Unrecognized-key failures carry the offending key and value so startup
//!   reports pinpoint the bad entry.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the settings processor configuration.
///
/// All variants are fatal to startup: the hosting process reports the error
/// to the operator and aborts rather than running with a partial
/// configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unrecognized key '{key}' (value {value}) in config file at {path}")]
    UnrecognizedKey {
        path: PathBuf,
        key: String,
        value: String,
    },

    #[error("Invalid value for '{key}' in config file at {path}: {message}")]
    InvalidValue {
        path: PathBuf,
        key: String,
        message: String,
    },
}
