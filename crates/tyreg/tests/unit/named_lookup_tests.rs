//! Unit tests for lookups by fully-qualified name

use std::any::type_name;
use std::sync::Arc;

use tyreg::{registry, Instance, Query, Registry, ViewKind};

use crate::fixtures::*;

fn bare<T: ?Sized>() -> &'static str {
    type_name::<T>().trim_start_matches("dyn ")
}

#[test]
fn test_named_lookup_agrees_with_typed_lookup() {
    let registry = registry![RedThing, BlueThing, GreenSquare::new(), ASquare];

    let queries: [(&str, bool); 5] = [
        (type_name::<RedThing>(), registry.contains::<RedThing>()),
        (bare::<dyn Blue>(), registry.contains::<dyn Blue>()),
        (bare::<dyn Square>(), registry.contains::<dyn Square>()),
        (type_name::<GreenThing>(), registry.contains::<GreenThing>()),
        (bare::<dyn Circle>(), registry.contains::<dyn Circle>()),
    ];

    for (name, typed) in queries {
        assert_eq!(registry.contains_named(name), typed, "name: {name}");
        assert_eq!(registry.missing_named(name), !typed, "name: {name}");
    }
}

#[test]
fn test_named_lookup_downcasts_to_capability() {
    let blue = Arc::new(BlueThing);
    let mut registry = Registry::new();
    registry.store_arc(Arc::clone(&blue));

    let instance = registry.get_named(bare::<dyn Blue>()).unwrap();

    assert_eq!(instance.kind(), ViewKind::Capability);
    assert!(instance.type_name().ends_with("BlueThing"));
    let as_blue = instance.downcast::<dyn Blue>().unwrap();
    assert!(std::ptr::addr_eq(Arc::as_ptr(&as_blue), Arc::as_ptr(&blue)));
    assert!(instance.downcast::<BlueThing>().is_none());
}

#[test]
fn test_named_lookup_accepts_dyn_prefix() {
    let registry = registry![BlueThing];

    let with_prefix = registry.get_named(type_name::<dyn Blue>()).unwrap();
    let without_prefix = registry.get_named(bare::<dyn Blue>()).unwrap();

    assert!(with_prefix.ptr_eq(&without_prefix));
}

#[test]
fn test_named_lookup_by_ancestor() {
    let registry = registry![GreenCircle::new()];

    let instance = registry.get_named(type_name::<GreenThing>()).unwrap();

    assert_eq!(instance.kind(), ViewKind::Ancestor);
    assert!(instance.view_name().ends_with("GreenThing"));
    assert_eq!(instance.downcast::<GreenThing>().unwrap().shade, "circle");
}

#[test]
fn test_named_lookup_failures() {
    let registry = registry![GreenSquare::new(), ASquare];

    assert!(registry
        .get_named(bare::<dyn Square>())
        .unwrap_err()
        .is_duplicate());
    assert!(registry
        .get_named("no::such::Type")
        .unwrap_err()
        .is_not_found());
    // Short names are not fully qualified
    assert!(registry.get_named("ASquare").unwrap_err().is_not_found());
}

#[test]
fn test_named_fallbacks() {
    let registry = registry![ASquare];
    let fallback: Instance = registry![RedThing]
        .get_named(type_name::<RedThing>())
        .unwrap();

    let missing = registry.get_named_or_else(bare::<dyn Red>(), fallback.clone());
    let present = registry.get_named_or_else(type_name::<ASquare>(), fallback.clone());

    assert!(missing.ptr_eq(&fallback));
    assert!(!present.ptr_eq(&fallback));
    assert!(registry.get_named_or_none(bare::<dyn Square>()).is_some());
    assert!(registry.get_named_or_none(bare::<dyn Red>()).is_none());
}

#[test]
fn test_resolve_with_explicit_query() {
    let registry = registry![Triangle];

    let by_type = registry.resolve(&Query::of::<dyn Shape>()).unwrap();
    let by_name = registry.resolve(&Query::from(bare::<dyn Shape>())).unwrap();

    assert!(by_type.ptr_eq(&by_name));
    assert_eq!(by_type.kind(), ViewKind::Ancestor);
}
