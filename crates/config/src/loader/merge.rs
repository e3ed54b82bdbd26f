//! Precedence merging of partial configurations.
//!
//! Responsibilities:
//! - Resolve an ordered list of partial configurations into one effective
//!   configuration.
//!
//! Does NOT handle:
//! - Validation (inputs were validated at load time or constructed against
//!   the schema).
//!
//! Invariants:
//! - Later entries override earlier ones, per field independently.
//! - Inputs are never mutated; the result is a fresh instance.
//! - The schema is flat, so there is no deep merge.

use crate::types::SettingsConfig;

/// Merge an ordered precedence list of configurations into one.
///
/// For each recognized field, the resolved value is the value from the last
/// entry that sets it; a field no entry sets stays unset. An empty list
/// yields an all-unset configuration.
pub fn merge_settings_configs(configs: &[SettingsConfig]) -> SettingsConfig {
    let mut connect = None;
    for config in configs {
        if let Some(endpoint) = config.connect() {
            connect = Some(endpoint.to_string());
        }
    }
    SettingsConfig::new(connect)
}
