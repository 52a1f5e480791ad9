use super::*;
use crate::test_support::{BrokenStore, RecordingScope};
use std::sync::atomic::Ordering;

fn controller(store: MemoryPreferences, scope: &RecordingScope) -> ThemeController {
    ThemeController::new(Box::new(store), Box::new(scope.clone()))
}

#[test]
fn initialize_defaults_to_dark_without_persisted_value() {
    let scope = RecordingScope::default();
    let mut theme = controller(MemoryPreferences::new(), &scope);

    assert_eq!(theme.initialize(), ThemePreference::Dark);
    assert!(scope.calls().is_empty(), "initialize must not touch the style scope");
}

#[test]
fn initialize_reads_persisted_light() {
    let scope = RecordingScope::default();
    let mut theme = controller(MemoryPreferences::with_entry("theme", "light"), &scope);

    assert_eq!(theme.initialize(), ThemePreference::Light);
}

#[test]
fn initialize_treats_unrecognized_value_as_dark() {
    for raw in ["", "LIGHT", "blue", " light"] {
        let scope = RecordingScope::default();
        let mut theme = controller(MemoryPreferences::with_entry("theme", raw), &scope);
        assert_eq!(theme.initialize(), ThemePreference::Dark, "value {raw:?}");
    }
}

#[test]
fn toggle_is_an_involution() {
    for preference in [ThemePreference::Dark, ThemePreference::Light] {
        let once = ThemeController::toggle(preference);
        assert_ne!(once, preference);
        assert_eq!(ThemeController::toggle(once), preference);
    }
}

#[test]
fn apply_twice_matches_apply_once() {
    for preference in [ThemePreference::Dark, ThemePreference::Light] {
        let once_store = MemoryPreferences::new();
        let once_scope = RecordingScope::default();
        let mut once = controller(once_store.clone(), &once_scope);
        once.apply(preference);

        let twice_store = MemoryPreferences::new();
        let twice_scope = RecordingScope::default();
        let mut twice = controller(twice_store.clone(), &twice_scope);
        twice.apply(preference);
        twice.apply(preference);

        assert_eq!(once_store.snapshot(), twice_store.snapshot());
        assert_eq!(once_scope.is_dark(), twice_scope.is_dark());
        assert_eq!(once.persistence_mode(), twice.persistence_mode());
    }
}

#[test]
fn apply_persists_literal_and_updates_scope() {
    let store = MemoryPreferences::new();
    let scope = RecordingScope::default();
    let mut theme = controller(store.clone(), &scope);

    theme.apply(ThemePreference::Light);

    assert_eq!(store.snapshot().get("theme").map(String::as_str), Some("light"));
    assert_eq!(scope.is_dark(), Some(false));
    assert_eq!(theme.persistence_mode(), PersistenceMode::Durable);
}

#[test]
fn unreadable_storage_degrades_to_in_memory_dark() {
    let scope = RecordingScope::default();
    let mut theme = ThemeController::new(
        Box::new(BrokenStore::unavailable()),
        Box::new(scope.clone()),
    );

    assert_eq!(theme.initialize(), ThemePreference::Dark);
    assert_eq!(theme.persistence_mode(), PersistenceMode::InMemory);

    theme.apply(ThemePreference::Light);
    assert_eq!(scope.is_dark(), Some(false));
}

#[test]
fn failed_write_stops_further_durable_writes() {
    let store = BrokenStore::read_only();
    let attempts = store.write_attempts.clone();
    let scope = RecordingScope::default();
    let mut theme = ThemeController::new(Box::new(store), Box::new(scope.clone()));

    theme.apply(ThemePreference::Dark);
    theme.apply(ThemePreference::Light);
    theme.apply(ThemePreference::Dark);

    assert_eq!(attempts.load(Ordering::SeqCst), 1);
    assert_eq!(theme.persistence_mode(), PersistenceMode::InMemory);
    assert_eq!(scope.calls(), vec![true, false, true]);
}

#[test]
fn file_backed_preference_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");

    let scope = RecordingScope::default();
    let mut first = ThemeController::new(
        Box::new(storage::PreferenceFile::new(path.clone())),
        Box::new(scope.clone()),
    );
    let initial = first.initialize();
    first.apply(ThemeController::toggle(initial));

    let mut second = ThemeController::new(
        Box::new(storage::PreferenceFile::new(path)),
        Box::new(RecordingScope::default()),
    );
    assert_eq!(second.initialize(), ThemePreference::Light);
}

#[test]
fn corrupt_preference_file_is_overwritten_by_next_toggle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{not json").expect("seed");

    let scope = RecordingScope::default();
    let mut theme = ThemeController::new(
        Box::new(storage::PreferenceFile::new(path.clone())),
        Box::new(scope.clone()),
    );

    let initial = theme.initialize();
    assert_eq!(initial, ThemePreference::Dark);
    assert_eq!(theme.persistence_mode(), PersistenceMode::Durable);

    theme.apply(ThemeController::toggle(initial));

    let reopened = storage::PreferenceFile::new(path);
    assert_eq!(reopened.get("theme").expect("get").as_deref(), Some("light"));
    assert_eq!(scope.is_dark(), Some(false));
}
