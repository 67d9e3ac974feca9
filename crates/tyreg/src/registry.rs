//! Type registry
//!
//! Holds at most one instance per runtime type and resolves queries by exact
//! type, ancestor or capability. Resolution is strict: a query must match
//! exactly one stored instance, otherwise it fails with
//! [`Error::NotFound`] or [`Error::Duplicate`]. An exact-type match is not
//! preferred over ancestor or capability matches on other entries.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::component::{Component, Entry};
use crate::error::{Error, Result};
use crate::instance::Instance;
use crate::query::Query;

/// Registry for basic dependency injection by type
///
/// Cloning is shallow: the clone holds the same instances in an independent
/// map, so later `store`/`flush` calls on either side do not affect the other.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<TypeId, Entry>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding a single instance
    pub fn from_component<T: Component>(instance: T) -> Self {
        Self::new().with(instance)
    }

    /// Create a registry from erased entries, each stored under its own type
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut registry = Self::new();
        for entry in entries {
            registry.store_entry(entry);
        }
        registry
    }

    fn from_map(entries: HashMap<TypeId, Entry>) -> Self {
        Self { entries }
    }

    /// Store an instance under its exact runtime type, replacing any previous one
    pub fn store<T: Component>(&mut self, instance: T) -> &mut Self {
        self.store_arc(Arc::new(instance))
    }

    /// Store a shared handle; lookups return the same allocation
    pub fn store_arc<T: Component>(&mut self, instance: Arc<T>) -> &mut Self {
        self.store_entry(Entry::from_arc(instance))
    }

    /// Store a pre-built entry
    pub fn store_entry(&mut self, entry: Entry) -> &mut Self {
        let key = entry.key();
        let replaced = self.entries.insert(key.id(), entry).is_some();
        debug!(component = key.name(), replaced, "Stored component");
        self
    }

    /// Consuming form of [`Registry::store`] for building registries inline
    pub fn with<T: Component>(mut self, instance: T) -> Self {
        self.store(instance);
        self
    }

    /// Resolve a query to the single stored instance that satisfies it
    ///
    /// Every stored entry that answers the query (by exact type, ancestor or
    /// capability) is a candidate. Zero candidates is `NotFound`, more than
    /// one is `Duplicate`.
    pub fn resolve(&self, query: &Query) -> Result<Instance> {
        let matches: Vec<Instance> = self
            .entries
            .values()
            .filter_map(|entry| entry.view_for(query).map(|view| Instance::new(entry, view)))
            .collect();

        trace!(query = %query, matches = matches.len(), "Resolved query");

        match matches.as_slice() {
            [] => Err(Error::not_found(query.to_string())),
            [single] => Ok(single.clone()),
            _ => Err(Error::duplicate(
                query.to_string(),
                matches
                    .iter()
                    .map(|instance| instance.type_name().to_string())
                    .collect(),
            )),
        }
    }

    /// Get the instance for a type or capability (`dyn Trait`)
    pub fn get<Q: ?Sized + 'static>(&self) -> Result<Arc<Q>> {
        let query = Query::of::<Q>();
        let instance = self.resolve(&query)?;
        // Views are keyed by the TypeId of the handle they hold.
        instance
            .downcast::<Q>()
            .ok_or_else(|| Error::not_found(query.to_string()))
    }

    /// Get the instance for a type or capability, or `default` if it does not
    /// resolve to exactly one instance
    pub fn get_or_else<Q: ?Sized + 'static>(&self, default: Arc<Q>) -> Arc<Q> {
        self.get::<Q>().unwrap_or(default)
    }

    /// Get the instance for a type or capability if it resolves
    pub fn get_or_none<Q: ?Sized + 'static>(&self) -> Option<Arc<Q>> {
        self.get::<Q>().ok()
    }

    /// Whether `Q` resolves to exactly one instance
    pub fn contains<Q: ?Sized + 'static>(&self) -> bool {
        self.get::<Q>().is_ok()
    }

    /// Negation of [`Registry::contains`]
    pub fn missing<Q: ?Sized + 'static>(&self) -> bool {
        !self.contains::<Q>()
    }

    /// Get an instance by fully-qualified type or trait name
    pub fn get_named(&self, name: &str) -> Result<Instance> {
        self.resolve(&Query::named(name))
    }

    /// Name-based [`Registry::get_or_else`]
    pub fn get_named_or_else(&self, name: &str, default: Instance) -> Instance {
        self.get_named(name).unwrap_or(default)
    }

    /// Name-based [`Registry::get_or_none`]
    pub fn get_named_or_none(&self, name: &str) -> Option<Instance> {
        self.get_named(name).ok()
    }

    /// Name-based [`Registry::contains`]
    pub fn contains_named(&self, name: &str) -> bool {
        self.get_named(name).is_ok()
    }

    /// Name-based [`Registry::missing`]
    pub fn missing_named(&self, name: &str) -> bool {
        !self.contains_named(name)
    }

    /// Remove every stored instance
    pub fn flush(&mut self) {
        debug!(removed = self.entries.len(), "Flushed registry");
        self.entries = HashMap::new();
    }

    /// Number of stored instances
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fully-qualified names of the stored runtime types, sorted
    pub fn stored_types(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> =
            self.entries.values().map(|entry| entry.key().name()).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("components", &self.stored_types())
            .finish()
    }
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        debug!(components = self.entries.len(), "Cloned registry");
        Self::from_map(self.entries.clone())
    }
}

impl FromIterator<Entry> for Registry {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl Extend<Entry> for Registry {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.store_entry(entry);
        }
    }
}
