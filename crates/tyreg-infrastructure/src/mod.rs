//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the [`tyreg`] registry.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML and environment configuration via Figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Builds a registry from the registrar catalog |
//! | [`error_ext`] | Context helpers mapping foreign errors into [`tyreg::Error`] |
//! | [`constants`] | Centralized configuration constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{bootstrap, bootstrap_into};
pub use config::{AppConfig, ConfigLoader, LoggingConfig, RegistryConfig};
pub use error_ext::ErrorContext;
