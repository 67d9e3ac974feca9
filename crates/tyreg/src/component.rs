//! Capability advertisement
//!
//! Rust has no runtime reflection over supertypes or implemented traits, so
//! each storable type declares up front which identifiers it answers to. The
//! declaration happens once, when the value is stored, and yields an
//! [`Entry`]: the value's exact type plus one typed handle per ancestor or
//! capability.
//!
//! ```ignore
//! trait Blue: Send + Sync {}
//! struct BlueThing;
//! impl Blue for BlueThing {}
//!
//! impl Component for BlueThing {
//!     fn provides(provides: Provides<Self>) -> Provides<Self> {
//!         provides.capability::<dyn Blue>(|it| it.clone())
//!     }
//! }
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::query::{Query, TypeKey};

/// Erased `Arc<Q>` for some `Q`
pub(crate) type Handle = Arc<dyn Any + Send + Sync>;

/// How a stored instance came to answer an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// The instance's own runtime type
    Exact,
    /// A supertype in the instance's ancestor chain
    Ancestor,
    /// A trait implemented by the instance or one of its ancestors
    Capability,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => f.write_str("exact"),
            Self::Ancestor => f.write_str("ancestor"),
            Self::Capability => f.write_str("capability"),
        }
    }
}

/// One identifier a stored instance satisfies, with the handle answering it
#[derive(Clone)]
pub(crate) struct View {
    pub(crate) key: TypeKey,
    pub(crate) kind: ViewKind,
    pub(crate) handle: Handle,
}

/// A type that can be stored in a [`Registry`](crate::Registry)
///
/// The default implementation advertises only the exact type. Override
/// [`Component::provides`] to declare ancestors and capabilities.
///
/// Trait objects are identified by their exact type, auto traits included:
/// a capability declared as `dyn Blue + Send + Sync` answers
/// `get::<dyn Blue + Send + Sync>()` but not `get::<dyn Blue>()`. Make
/// `Send + Sync` supertraits of the capability and declare plain `dyn Blue`.
pub trait Component: Send + Sync + 'static {
    /// Declare the ancestors and capabilities of this type
    fn provides(provides: Provides<Self>) -> Provides<Self>
    where
        Self: Sized,
    {
        provides
    }
}

/// Builder collecting the views of one instance
pub struct Provides<T> {
    instance: Arc<T>,
    views: Vec<View>,
    // Keys currently answered by a view taken over from a parent
    inherited: Vec<TypeKey>,
}

impl<T: Component> Provides<T> {
    fn new(instance: Arc<T>) -> Self {
        let exact = View {
            key: TypeKey::of::<T>(),
            kind: ViewKind::Exact,
            handle: Arc::new(Arc::clone(&instance)),
        };
        Self {
            instance,
            views: vec![exact],
            inherited: Vec::new(),
        }
    }

    /// Declare a supertype
    ///
    /// For a supertype modelled as a trait the cast is an unsizing coercion
    /// (`|it| it.clone()`); for a concrete parent held by composition it
    /// returns the embedded handle.
    pub fn ancestor<A>(self, cast: fn(&Arc<T>) -> Arc<A>) -> Self
    where
        A: ?Sized + Send + Sync + 'static,
    {
        self.push(ViewKind::Ancestor, cast)
    }

    /// Declare an implemented capability, usually `dyn Trait`
    pub fn capability<C>(self, cast: fn(&Arc<T>) -> Arc<C>) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.push(ViewKind::Capability, cast)
    }

    /// Declare a concrete parent component and inherit everything it provides
    ///
    /// The parent's exact type becomes an ancestor; its ancestors and
    /// capabilities are carried over with their kind unchanged. A key this
    /// type declares itself through [`Provides::ancestor`] or
    /// [`Provides::capability`] overrides the inherited view, whichever call
    /// comes first.
    pub fn extends<P: Component>(mut self, project: fn(&Arc<T>) -> Arc<P>) -> Self {
        let parent = P::provides(Provides::new(project(&self.instance)));
        for mut view in parent.views {
            if view.kind == ViewKind::Exact {
                view.kind = ViewKind::Ancestor;
            }
            self.inherit(view);
        }
        self
    }

    fn push<Q>(mut self, kind: ViewKind, cast: fn(&Arc<T>) -> Arc<Q>) -> Self
    where
        Q: ?Sized + Send + Sync + 'static,
    {
        let key = TypeKey::of::<Q>();
        let slot = self.position(&key);
        if slot.is_some() && !self.inherited.contains(&key) {
            return self;
        }

        let handle: Arc<Q> = cast(&self.instance);
        let view = View {
            key,
            kind,
            handle: Arc::new(handle),
        };
        match slot {
            Some(index) => {
                self.views[index] = view;
                self.inherited.retain(|inherited| *inherited != key);
            }
            None => self.views.push(view),
        }
        self
    }

    // Own declarations replace inherited ones; otherwise the first view of a
    // key wins. The exact view is always first.
    fn inherit(&mut self, view: View) {
        if self.position(&view.key).is_none() {
            self.inherited.push(view.key);
            self.views.push(view);
        }
    }

    fn position(&self, key: &TypeKey) -> Option<usize> {
        self.views.iter().position(|view| view.key == *key)
    }

    fn into_entry(self) -> Entry {
        Entry {
            origin: self.instance,
            views: self.views.into(),
        }
    }
}

/// A type-erased instance together with all the identifiers it satisfies
#[derive(Clone)]
pub struct Entry {
    origin: Handle,
    views: Arc<[View]>,
}

impl Entry {
    /// Wrap a value, computing its views
    pub fn new<T: Component>(instance: T) -> Self {
        Self::from_arc(Arc::new(instance))
    }

    /// Wrap a shared handle; the registry keeps the same allocation
    pub fn from_arc<T: Component>(instance: Arc<T>) -> Self {
        T::provides(Provides::new(instance)).into_entry()
    }

    /// Key of the exact runtime type, used as the storage key
    pub fn key(&self) -> TypeKey {
        self.views[0].key
    }

    /// Every identifier this entry answers, with how it answers it
    pub fn identifiers(&self) -> impl Iterator<Item = (TypeKey, ViewKind)> + '_ {
        self.views.iter().map(|view| (view.key, view.kind))
    }

    pub(crate) fn origin(&self) -> &Handle {
        &self.origin
    }

    pub(crate) fn view_for(&self, query: &Query) -> Option<&View> {
        self.views.iter().find(|view| query.matches(&view.key))
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("type", &self.key())
            .field(
                "views",
                &self
                    .views
                    .iter()
                    .map(|view| format!("{} ({})", view.key, view.kind))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
