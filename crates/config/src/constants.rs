//! Centralized constants for the settings transaction processor.
//!
//! Built-in defaults live here so the loader, the merge, and the tests all
//! agree on a single definition.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default validator endpoint the settings transaction processor connects to.
pub const DEFAULT_CONNECT_ENDPOINT: &str = "tcp://localhost:4004";

// =============================================================================
// Configuration File Conventions
// =============================================================================

/// Conventional file name of the settings processor configuration, resolved
/// by the caller as `<base-dir>/etc/settings.toml`.
pub const DEFAULT_SETTINGS_CONFIG_FILE: &str = "settings.toml";
