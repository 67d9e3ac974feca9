//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tyreg.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tyreg";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TYREG";

/// Separator between the prefix and nested keys (e.g., `TYREG__REGISTRY__STRICT`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// REGISTRY CONSTANTS
// ============================================================================

/// Registrars fill in missing dependencies unless strict mode is configured
pub const DEFAULT_STRICT: bool = false;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_FILTER_ENV: &str = "TYREG_LOG";
