//! Type-erased resolution result

use std::fmt;
use std::sync::Arc;

use crate::component::{Entry, Handle, View, ViewKind};
use crate::query::TypeKey;

/// A resolved instance whose static type the caller may not know
///
/// Returned by name-based lookups. Use [`Instance::downcast`] with the type or
/// capability the name refers to in order to get a typed handle.
#[derive(Clone)]
pub struct Instance {
    stored: TypeKey,
    origin: Handle,
    view: View,
}

impl Instance {
    pub(crate) fn new(entry: &Entry, view: &View) -> Self {
        Self {
            stored: entry.key(),
            origin: Arc::clone(entry.origin()),
            view: view.clone(),
        }
    }

    /// Typed handle for the identifier this instance was resolved through
    pub fn downcast<Q: ?Sized + 'static>(&self) -> Option<Arc<Q>> {
        (*self.view.handle).downcast_ref::<Arc<Q>>().cloned()
    }

    /// Fully-qualified name of the stored runtime type
    pub fn type_name(&self) -> &'static str {
        self.stored.name()
    }

    /// Fully-qualified name of the identifier that matched
    pub fn view_name(&self) -> &'static str {
        self.view.key.name()
    }

    /// How the stored instance answered the query
    pub fn kind(&self) -> ViewKind {
        self.view.kind
    }

    /// Whether both results refer to the same stored allocation
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.origin), Arc::as_ptr(&other.origin))
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type", &self.stored)
            .field("view", &self.view.key)
            .field("kind", &self.view.kind)
            .finish()
    }
}
