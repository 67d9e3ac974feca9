//! Configuration management
//!
//! Configuration is merged from defaults, an optional TOML file and
//! `TYREG__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, RegistryConfig};
