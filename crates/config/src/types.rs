//! Configuration value type for the settings transaction processor.
//!
//! Responsibilities:
//! - Define the recognized configuration schema as an explicit value type.
//! - Track, per field, whether a value was explicitly set or left unset.
//! - Provide the mapping and TOML-line serialization forms used for
//!   diagnostics.
//!
//! Does NOT handle:
//! - Loading configuration from files (see `loader` module).
//! - Merging configurations across precedence levels (see `loader` module).
//!
//! Invariants:
//! - The schema is closed: no instance can carry a key outside `KEYS`.
//! - An unset field is `None`, never a sentinel value of the field's type.
//! - Serialization emits only set fields, in schema-declaration order.
//! - Instances are immutable once constructed; merging allocates a new one.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CONNECT_ENDPOINT;

/// Settings processor configuration, with every field tri-stated.
///
/// A `None` field falls through to the next lower-precedence source at merge
/// time; only the all-default constructor (`Default`) fills in built-in
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsConfig {
    /// Validator endpoint the processor connects to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    connect: Option<String>,
}

impl SettingsConfig {
    /// Recognized top-level configuration keys, in schema-declaration order.
    pub const KEYS: &'static [&'static str] = &["connect"];

    /// Create a configuration with explicit per-field values.
    ///
    /// Fields passed as `None` are unset, not defaulted.
    pub fn new(connect: Option<String>) -> Self {
        Self { connect }
    }

    /// The validator endpoint, if set by this configuration.
    pub fn connect(&self) -> Option<&str> {
        self.connect.as_deref()
    }

    /// The set fields as an ordered key/value mapping, in schema order.
    pub fn to_map(&self) -> toml::Table {
        let mut map = toml::Table::new();
        if let Some(connect) = &self.connect {
            map.insert("connect".to_string(), toml::Value::String(connect.clone()));
        }
        map
    }

    /// The set fields rendered as `key = "value"` TOML lines, one per
    /// `to_map` entry, in the same order.
    pub fn to_toml_lines(&self) -> Vec<String> {
        self.to_map()
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect()
    }
}

impl Default for SettingsConfig {
    /// Creates a configuration with every field at its built-in default.
    ///
    /// This is the lowest-precedence entry of a merge: placing it first in
    /// the precedence list makes the defaults apply wherever no other source
    /// sets a field.
    fn default() -> Self {
        Self {
            connect: Some(DEFAULT_CONNECT_ENDPOINT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_sets_every_field() {
        let config = SettingsConfig::default();
        assert_eq!(config.connect(), Some("tcp://localhost:4004"));
    }

    #[test]
    fn test_new_with_none_leaves_field_unset() {
        let config = SettingsConfig::new(None);
        assert_eq!(config.connect(), None);
        assert_ne!(config, SettingsConfig::default());
    }

    #[test]
    fn test_to_map_contains_only_set_fields() {
        let config = SettingsConfig::new(Some("tcp://validator:4004".to_string()));
        let map = config.to_map();
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("connect").and_then(|v| v.as_str()),
            Some("tcp://validator:4004")
        );

        let unset = SettingsConfig::new(None);
        assert!(unset.to_map().is_empty());
    }

    #[test]
    fn test_to_toml_lines_renders_quoted_values() {
        let config = SettingsConfig::default();
        assert_eq!(
            config.to_toml_lines(),
            vec![r#"connect = "tcp://localhost:4004""#.to_string()]
        );

        let unset = SettingsConfig::new(None);
        assert!(unset.to_toml_lines().is_empty());
    }

    #[test]
    fn test_equality_is_field_by_field() {
        let a = SettingsConfig::new(Some("tcp://validator:4004".to_string()));
        let b = SettingsConfig::new(Some("tcp://validator:4004".to_string()));
        let c = SettingsConfig::new(Some("tcp://other:4004".to_string()));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serde_round_trip_preserves_set_fields() {
        let config = SettingsConfig::default();
        let rendered = toml::to_string(&config).unwrap();
        let parsed: SettingsConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_serde_skips_unset_fields() {
        let config = SettingsConfig::new(None);
        let rendered = toml::to_string(&config).unwrap();
        assert!(rendered.is_empty());

        let parsed: SettingsConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
