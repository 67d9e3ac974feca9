//! Registry bootstrap
//!
//! Runs the registrar catalog against an explicitly constructed registry,
//! using the strictness from configuration.

use tracing::info;
use tyreg::{list_registrars, register_all, Registry, Result};

use crate::config::AppConfig;

/// Build a registry from scratch using every catalog registrar
pub fn bootstrap(config: &AppConfig) -> Result<Registry> {
    bootstrap_into(Registry::new(), config)
}

/// Run every catalog registrar against a pre-seeded registry
pub fn bootstrap_into(registry: Registry, config: &AppConfig) -> Result<Registry> {
    let strict = config.registry.strict;
    let registrars: Vec<&str> = list_registrars().into_iter().map(|(name, _)| name).collect();
    info!(strict, ?registrars, "Bootstrapping registry");

    let registry = register_all(registry, strict)?;

    info!(components = registry.len(), "Registry ready");
    Ok(registry)
}
