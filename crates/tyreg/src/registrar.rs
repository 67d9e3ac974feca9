//! Registrar convention and catalog
//!
//! A registrar populates a [`Registry`] with the objects a module needs.
//! Modules expose registrars through the [`REGISTRARS`] distributed slice so
//! that [`register_all`] can discover them without a central list.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  1. Module defines:  #[linkme::distributed_slice(REGISTRARS)] │
//! │                      static ENTRY: RegistrarEntry = ...       │
//! │                              ↓                                │
//! │  2. Caller builds:   Registry::new()                          │
//! │                              ↓                                │
//! │  3. register_all:    entries sorted by (order, name),         │
//! │                      registry threaded through each           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog only holds functions. Registries are always constructed by the
//! caller and passed along explicitly.
//!
//! ```ignore
//! #[linkme::distributed_slice(REGISTRARS)]
//! static CLOCK_REGISTRAR: RegistrarEntry = RegistrarEntry {
//!     name: "clock",
//!     description: "System clock",
//!     order: 0,
//!     register: |mut registry, strict| {
//!         require::<dyn Clock, _, _>(&mut registry, "clock", strict, || SystemClock)?;
//!         Ok(registry)
//!     },
//! };
//! ```

use std::any::type_name;

use tracing::{debug, warn};

use crate::component::Component;
use crate::error::{Error, Result};
use crate::registry::Registry;

/// Populates a registry with the objects a module requires
pub trait Registrar {
    /// Return a registry guaranteed to contain this module's objects
    ///
    /// With `strict` set, a missing dependency is an error instead of being
    /// created on the fly. Lenient mode suits tests and development.
    fn register(&self, registry: Registry, strict: bool) -> Result<Registry>;
}

impl<F> Registrar for F
where
    F: Fn(Registry, bool) -> Result<Registry>,
{
    fn register(&self, registry: Registry, strict: bool) -> Result<Registry> {
        self(registry, strict)
    }
}

/// Ensure `Q` resolves, creating it with `make` when lenient
///
/// An ambiguous `Q` is reported as [`Error::Duplicate`] in either mode, since
/// storing another candidate would not make it resolvable.
pub fn require<Q, T, F>(
    registry: &mut Registry,
    registrar: &str,
    strict: bool,
    make: F,
) -> Result<()>
where
    Q: ?Sized + 'static,
    T: Component,
    F: FnOnce() -> T,
{
    match registry.get::<Q>() {
        Ok(_) => Ok(()),
        Err(err) if err.is_duplicate() => Err(err),
        Err(_) if strict => Err(Error::missing_dependency(registrar, type_name::<Q>())),
        Err(_) => {
            warn!(
                registrar,
                dependency = type_name::<Q>(),
                "Creating missing dependency"
            );
            registry.store(make());
            Ok(())
        }
    }
}

/// Catalog entry for a module registrar
///
/// Modules submit entries with `#[linkme::distributed_slice(REGISTRARS)]`.
pub struct RegistrarEntry {
    /// Unique registrar name (e.g., "clock", "storage")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Position in the run; lower runs first, ties broken by name
    pub order: i32,
    /// Registration function
    pub register: fn(Registry, bool) -> Result<Registry>,
}

impl Registrar for RegistrarEntry {
    fn register(&self, registry: Registry, strict: bool) -> Result<Registry> {
        (self.register)(registry, strict).map_err(|err| {
            if err.is_resolution() {
                Error::registrar(self.name, err.to_string())
            } else {
                err
            }
        })
    }
}

#[linkme::distributed_slice]
pub static REGISTRARS: [RegistrarEntry] = [..];

/// Run every catalog registrar against `registry`
pub fn register_all(registry: Registry, strict: bool) -> Result<Registry> {
    register_entries(REGISTRARS.iter(), registry, strict)
}

/// Run the given registrars in `(order, name)` order, threading the registry
pub fn register_entries<'a, I>(entries: I, registry: Registry, strict: bool) -> Result<Registry>
where
    I: IntoIterator<Item = &'a RegistrarEntry>,
{
    let mut entries: Vec<&RegistrarEntry> = entries.into_iter().collect();
    entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(b.name)));

    entries.into_iter().try_fold(registry, |registry, entry| {
        debug!(registrar = entry.name, strict, "Running registrar");
        entry.register(registry, strict)
    })
}

/// List catalog registrars as `(name, description)` in run order
pub fn list_registrars() -> Vec<(&'static str, &'static str)> {
    let mut entries: Vec<&RegistrarEntry> = REGISTRARS.iter().collect();
    entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(b.name)));
    entries
        .into_iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
