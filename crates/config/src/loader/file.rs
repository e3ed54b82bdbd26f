//! TOML file loading for the settings processor configuration.
//!
//! Responsibilities:
//! - Read and parse the configuration file at a caller-supplied path.
//! - Validate that the file only contains recognized schema keys.
//!
//! Does NOT handle:
//! - Locating the file (the caller resolves `<base-dir>/etc/settings.toml`).
//! - Applying defaults for unset fields (see `merge.rs` and
//!   `SettingsConfig::default`).
//!
//! Invariants:
//! - A nonexistent file yields an all-unset configuration, never an error.
//! - Any unrecognized key or malformed syntax fails the whole load; no
//!   partial configuration escapes.
//! - The file is opened, read, and closed within this call; no environment
//!   or global state is touched.

use std::fs;
use std::path::Path;

use super::error::ConfigError;
use crate::types::SettingsConfig;

/// Load a `SettingsConfig` from the TOML file at `path`.
///
/// A path that does not refer to an existing file is the normal
/// "no user override present" case and yields a configuration with every
/// field unset.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read, is not valid
/// TOML, names a key outside the recognized schema, or binds a recognized
/// key to a value of the wrong type.
pub fn load_settings_config(path: &Path) -> Result<SettingsConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(
            path = %path.display(),
            "Settings config file not found, using unset configuration"
        );
        return Ok(SettingsConfig::new(None));
    }

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let table: toml::Table = raw.parse().map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    for (key, value) in &table {
        if !SettingsConfig::KEYS.contains(&key.as_str()) {
            return Err(ConfigError::UnrecognizedKey {
                path: path.to_path_buf(),
                key: key.clone(),
                value: value.to_string(),
            });
        }
    }

    let connect = match table.get("connect") {
        None => None,
        Some(toml::Value::String(endpoint)) => Some(endpoint.clone()),
        Some(other) => {
            return Err(ConfigError::InvalidValue {
                path: path.to_path_buf(),
                key: "connect".to_string(),
                message: format!("expected a string, found {}", other.type_str()),
            });
        }
    };

    let config = SettingsConfig::new(connect);
    tracing::debug!(
        path = %path.display(),
        config = config.to_toml_lines().join("; "),
        "Loaded settings config file"
    );
    Ok(config)
}
