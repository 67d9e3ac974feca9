//! Unit tests for storing and typed lookups

use std::sync::Arc;

use tyreg::{registry, Entry, Registry};

use crate::fixtures::*;

#[test]
fn test_store_then_get_returns_same_instance() {
    let conn = Arc::new(DatabaseConnectionString("db://local".to_string()));
    let mut registry = Registry::new();
    registry.store_arc(Arc::clone(&conn));

    let resolved = registry.get::<DatabaseConnectionString>().unwrap();

    assert!(Arc::ptr_eq(&resolved, &conn));
}

#[test]
fn test_store_same_type_overwrites() {
    let mut registry = Registry::new();
    registry
        .store(DatabaseConnectionString("first".to_string()))
        .store(DatabaseConnectionString("second".to_string()));

    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.get::<DatabaseConnectionString>().unwrap().0,
        "second"
    );
}

#[test]
fn test_empty_registry_is_not_found() {
    let registry = Registry::new();

    assert!(registry.get::<RedThing>().unwrap_err().is_not_found());
    assert!(registry.get::<dyn Red>().err().unwrap().is_not_found());
    assert!(registry.is_empty());
}

#[test]
fn test_registry_macro_stores_each_instance() {
    let registry = registry![RedThing, GreenThing::default(), BlueThing];

    assert_eq!(registry.len(), 3);
    assert!(registry.contains::<RedThing>());
    assert!(registry.contains::<GreenThing>());
    assert!(registry.contains::<BlueThing>());
}

#[test]
fn test_registry_macro_empty() {
    let registry = registry![];

    assert!(registry.is_empty());
}

#[test]
fn test_from_component_and_entries() {
    let single = Registry::from_component(BlueThing);
    assert!(single.contains::<dyn Blue>());

    let many = Registry::from_entries([Entry::new(RedThing), Entry::new(BlueThing)]);
    assert_eq!(many.len(), 2);

    let collected: Registry = [Entry::new(RedThing), Entry::new(RedThing)]
        .into_iter()
        .collect();
    assert_eq!(collected.len(), 1);
}

#[test]
fn test_get_or_else_falls_back_when_missing() {
    let registry = Registry::new();
    let fallback: Arc<dyn Blue> = Arc::new(BlueThing);

    let resolved = registry.get_or_else::<dyn Blue>(Arc::clone(&fallback));

    assert!(Arc::ptr_eq(&resolved, &fallback));
}

#[test]
fn test_get_or_else_falls_back_when_ambiguous() {
    let registry = registry![GreenSquare::new(), ASquare];
    let fallback: Arc<dyn Square> = Arc::new(ASquare);

    let resolved = registry.get_or_else::<dyn Square>(Arc::clone(&fallback));

    assert!(Arc::ptr_eq(&resolved, &fallback));
}

#[test]
fn test_get_or_else_prefers_resolved_instance() {
    let stored = Arc::new(ASquare);
    let mut registry = Registry::new();
    registry.store_arc(Arc::clone(&stored));
    let fallback: Arc<dyn Square> = Arc::new(ASquare);

    let resolved = registry.get_or_else::<ASquare>(Arc::new(ASquare));
    let by_capability = registry.get_or_else::<dyn Square>(Arc::clone(&fallback));

    assert!(Arc::ptr_eq(&resolved, &stored));
    assert!(!Arc::ptr_eq(&by_capability, &fallback));
}

#[test]
fn test_get_or_none() {
    let registry = registry![RedThing];

    assert!(registry.get_or_none::<dyn Red>().is_some());
    assert!(registry.get_or_none::<dyn Blue>().is_none());
}

#[test]
fn test_contains_and_missing_are_complements() {
    let registry = registry![GreenSquare::new(), GreenCircle::new(), ASquare, BlueThing];

    let answers = [
        (registry.contains::<dyn Blue>(), registry.missing::<dyn Blue>()),
        (registry.contains::<dyn Red>(), registry.missing::<dyn Red>()),
        (registry.contains::<dyn Square>(), registry.missing::<dyn Square>()),
        (registry.contains::<dyn Circle>(), registry.missing::<dyn Circle>()),
        (registry.contains::<GreenThing>(), registry.missing::<GreenThing>()),
        (registry.contains::<ASquare>(), registry.missing::<ASquare>()),
    ];

    for (contains, missing) in answers {
        assert_ne!(contains, missing);
    }
    assert!(registry.contains::<dyn Blue>());
    assert!(registry.missing::<dyn Square>());
}

#[test]
fn test_stored_types_sorted() {
    let registry = registry![RedThing, BlueThing];

    let names = registry.stored_types();

    assert_eq!(names.len(), 2);
    assert!(names[0].ends_with("BlueThing"));
    assert!(names[1].ends_with("RedThing"));
    assert!(format!("{:?}", registry).contains("RedThing"));
}
