//! Integration test for the process-wide registry slot.
//!
//! The slot can only be filled once per process, so everything lives in a
//! single test.

use livery::{shared, ThemeError, ThemeRegistry};

#[test]
fn shared_registry_is_write_once() {
    assert!(shared::get().is_none());
    assert!(shared::default_theme().is_none());

    let registry = ThemeRegistry::from_yaml("Default:\n  rows: 2\nNight: {}\n").unwrap();
    let installed = shared::install(registry).unwrap();
    assert_eq!(installed.len(), 2);

    let default = shared::default_theme().unwrap();
    assert_eq!(default.name(), "Default");
    assert_eq!(shared::get().unwrap().get("Night").unwrap().integer_for("rows"), 2);

    let again = ThemeRegistry::from_yaml("Default: {}\n").unwrap();
    assert!(matches!(
        shared::install(again),
        Err(ThemeError::AlreadyInstalled)
    ));

    // Already present, so no lookup happens for the name.
    let loaded = shared::get_or_load("does-not-exist").unwrap();
    assert!(std::ptr::eq(loaded, installed));
}
