//! # tyreg
//!
//! Minimal in-process registry for dependency injection by type.
//!
//! Callers store instances and later retrieve them by concrete type, by
//! supertype or by capability (`dyn Trait`). A lookup must resolve to exactly
//! one stored instance; an absent or ambiguous lookup is an error rather than
//! a silent choice.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | The [`Registry`] store and its resolution routine |
//! | [`component`] | [`Component`] and the [`Provides`] builder for declaring ancestors and capabilities |
//! | [`query`] | [`TypeKey`] and [`Query`] identifiers |
//! | [`instance`] | Type-erased [`Instance`] returned by name lookups |
//! | [`registrar`] | [`Registrar`] convention and the linkme-backed catalog |
//! | [`error`] | [`Error`] and [`Result`] |
//!
//! ```ignore
//! use tyreg::{registry, Component, Provides};
//!
//! trait Blue: Send + Sync {}
//! struct BlueThing;
//! impl Blue for BlueThing {}
//! impl Component for BlueThing {
//!     fn provides(provides: Provides<Self>) -> Provides<Self> {
//!         provides.capability::<dyn Blue>(|it| it.clone())
//!     }
//! }
//!
//! let registry = registry![BlueThing];
//! let blue = registry.get::<dyn Blue>()?;
//! ```

pub mod component;
pub mod error;
pub mod instance;
mod macros;
pub mod query;
pub mod registrar;
pub mod registry;

pub use component::{Component, Entry, Provides, ViewKind};
pub use error::{Error, Result};
pub use instance::Instance;
pub use query::{Query, TypeKey};
pub use registrar::{
    list_registrars, register_all, register_entries, require, Registrar, RegistrarEntry,
    REGISTRARS,
};
pub use registry::Registry;

