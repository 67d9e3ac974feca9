//! Query identifiers
//!
//! A [`TypeKey`] is the runtime identity of a type or capability and is what
//! stored instances advertise. A [`Query`] asks for one of those identities,
//! either by type handle or by fully-qualified name.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime identity of a type or capability (`dyn Trait`)
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key for `T`, which may be a trait object
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The `TypeId` this key compares by
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully-qualified name as reported by the compiler
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this key answers a query by name
    pub fn matches_name(&self, name: &str) -> bool {
        normalize(self.name) == normalize(name)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// What a caller asks the registry for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Lookup by type handle
    Type(TypeKey),
    /// Lookup by fully-qualified name, e.g. `my_crate::services::Clock`
    Name(String),
}

impl Query {
    /// Query for `T` by type handle
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Type(TypeKey::of::<T>())
    }

    /// Query by fully-qualified name
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self::Name(name.into())
    }

    /// Whether a key advertised by a stored instance answers this query
    pub fn matches(&self, key: &TypeKey) -> bool {
        match self {
            Self::Type(wanted) => wanted == key,
            Self::Name(name) => key.matches_name(name),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(key) => write!(f, "Type {}", key),
            Self::Name(name) => write!(f, "Type named '{}'", name),
        }
    }
}

impl From<TypeKey> for Query {
    fn from(key: TypeKey) -> Self {
        Self::Type(key)
    }
}

impl From<&str> for Query {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Query {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Trait objects are reported as `dyn path::Trait`; compare on the path alone
fn normalize(name: &str) -> &str {
    let name = name.trim();
    name.strip_prefix("dyn ").unwrap_or(name).trim_start()
}
