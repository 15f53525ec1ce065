//! Preference store persistence tests.

use simplelife_core::{JsonStore, PreferenceStore};

#[test]
fn set_location_survives_reload_without_touching_activities() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = PreferenceStore::load(JsonStore::with_dir(dir.path()));
    let seed = store.preferences().activities.clone();
    assert_eq!(seed.len(), 10);
    store.set_location("Springfield");
    drop(store);

    let reloaded = PreferenceStore::load(JsonStore::with_dir(dir.path()));
    assert_eq!(reloaded.preferences().location, "Springfield");
    assert_eq!(reloaded.preferences().activities, seed);
}

#[test]
fn activity_pool_edits_are_durable() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = PreferenceStore::load(JsonStore::with_dir(dir.path()));
    store.remove_activity("Meditate");
    store.add_activity("Play chess");
    drop(store);

    let reloaded = PreferenceStore::load(JsonStore::with_dir(dir.path()));
    let activities = &reloaded.preferences().activities;
    assert!(!activities.iter().any(|a| a == "Meditate"));
    assert_eq!(activities.last().map(String::as_str), Some("Play chess"));
}

#[test]
fn corrupt_document_degrades_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("preferences.json"), "{\"activities\": 42}").unwrap();

    let store = PreferenceStore::load(JsonStore::with_dir(dir.path()));
    assert_eq!(store.preferences().activities.len(), 10);
    assert_eq!(store.preferences().location, "");
}

#[test]
fn suggestion_comes_from_the_stored_pool() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = PreferenceStore::load(JsonStore::with_dir(dir.path()));
    for seed in store.preferences().activities.clone() {
        store.remove_activity(&seed);
    }
    store.add_activity("Take a nap");

    assert_eq!(store.suggest_break().unwrap(), "Take a nap");
}

#[test]
fn suggestion_over_empty_pool_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = PreferenceStore::load(JsonStore::with_dir(dir.path()));
    for seed in store.preferences().activities.clone() {
        store.remove_activity(&seed);
    }

    assert!(store.suggest_break().is_err());
}
