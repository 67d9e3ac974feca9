//! Configuration types

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Registry configuration
    pub registry: RegistryConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Fail on missing registrar dependencies instead of creating them
    pub strict: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict: DEFAULT_STRICT,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}
