use super::*;
use crate::fake::{FakeNode, MemoryStore};

const KEY: &str = "portfolio-theme";

fn controller(store: MemoryStore) -> ThemeController<FakeNode, MemoryStore> {
    ThemeController::init(FakeNode::default(), store, KEY).expect("init succeeds")
}

fn assert_exclusive(root: &FakeNode, theme: Theme) {
    assert!(root.has_class(theme.class_name()));
    assert!(!root.has_class(theme.flipped().class_name()));
}

// =============================================================
// Theme
// =============================================================

#[test]
fn stored_light_is_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn stored_dark_is_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn missing_or_unknown_value_is_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn flipped_twice_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.flipped().flipped(), theme);
        assert_ne!(theme.flipped(), theme);
    }
}

// =============================================================
// Controller init
// =============================================================

#[test]
fn init_without_preference_applies_dark() {
    let ctl = controller(MemoryStore::default());
    assert_eq!(ctl.current(), Theme::Dark);
    assert_exclusive(ctl.root(), Theme::Dark);
}

#[test]
fn init_with_light_preference_applies_light() {
    let ctl = controller(MemoryStore::with(KEY, "light"));
    assert_eq!(ctl.current(), Theme::Light);
    assert_exclusive(ctl.root(), Theme::Light);
}

#[test]
fn init_replaces_stale_class_on_root() {
    let root = FakeNode::with_class(DARK_MODE_CLASS);
    let ctl = ThemeController::init(root, MemoryStore::with(KEY, "light"), KEY).expect("init succeeds");
    assert_exclusive(ctl.root(), Theme::Light);
}

#[test]
fn init_does_not_write() {
    let ctl = controller(MemoryStore::default());
    assert_eq!(ctl.store().writes, 0);
    assert!(ctl.store().values.is_empty());
}

#[test]
fn init_propagates_read_failure() {
    let store = MemoryStore { fail_reads: true, ..MemoryStore::default() };
    let result = ThemeController::init(FakeNode::default(), store, KEY);
    assert!(matches!(result, Err(StorageError::Read(_))));
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_flips_applies_and_persists() {
    let mut ctl = controller(MemoryStore::default());
    assert_eq!(ctl.toggle().expect("toggle"), Theme::Light);
    assert_exclusive(ctl.root(), Theme::Light);
    assert_eq!(ctl.store().values.get(KEY).map(String::as_str), Some("light"));
}

#[test]
fn double_toggle_restores_state_and_stored_value() {
    for initial in ["light", "dark"] {
        let mut ctl = controller(MemoryStore::with(KEY, initial));
        let start = ctl.current();
        ctl.toggle().expect("first toggle");
        ctl.toggle().expect("second toggle");
        assert_eq!(ctl.current(), start);
        assert_eq!(ctl.store().values.get(KEY).map(String::as_str), Some(initial));
    }
}

#[test]
fn toggle_sequence_matches_parity() {
    for initial in [None, Some("light"), Some("dark")] {
        for n in 1..=7 {
            let store = initial.map_or_else(MemoryStore::default, |v| MemoryStore::with(KEY, v));
            let mut ctl = controller(store);
            let start = ctl.current();
            for _ in 0..n {
                ctl.toggle().expect("toggle");
            }
            let expected = if n % 2 == 0 { start } else { start.flipped() };
            assert_eq!(ctl.current(), expected);
            assert_eq!(ctl.store().values.get(KEY).map(String::as_str), Some(expected.as_str()));
            assert_exclusive(ctl.root(), expected);
        }
    }
}

#[test]
fn toggle_write_failure_still_switches_page() {
    let store = MemoryStore { fail_writes: true, ..MemoryStore::default() };
    let mut ctl = controller(store);
    let result = ctl.toggle();
    assert!(matches!(result, Err(StorageError::Write(_))));
    assert_eq!(ctl.current(), Theme::Light);
    assert_exclusive(ctl.root(), Theme::Light);
}
