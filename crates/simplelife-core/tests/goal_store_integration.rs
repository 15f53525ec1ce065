//! Goal store persistence tests.
//!
//! Exercises the store together with the JSON document adapter: every
//! mutation must be durable and a reload must observe the exact sequence.

use proptest::prelude::*;
use simplelife_core::{GoalStore, JsonStore};

#[test]
fn goal_list_roundtrips_through_storage() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = GoalStore::load(JsonStore::with_dir(dir.path()));
    store.add("Buy milk");
    store.add("Walk dog");
    let toggled = store.goals()[0].id;
    store.toggle(toggled);
    let saved = store.goals().to_vec();
    drop(store);

    let reloaded = GoalStore::load(JsonStore::with_dir(dir.path()));
    assert_eq!(reloaded.goals(), saved.as_slice());
}

#[test]
fn reorder_scenario_walk_dog_before_buy_milk() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = GoalStore::load(JsonStore::with_dir(dir.path()));

    let milk = store.add("Buy milk").unwrap().id;
    let dog = store.add("Walk dog").unwrap().id;
    assert!(store.reorder(dog, milk));
    drop(store);

    let reloaded = GoalStore::load(JsonStore::with_dir(dir.path()));
    let texts: Vec<&str> = reloaded.goals().iter().map(|g| g.text.as_str()).collect();
    assert_eq!(texts, ["Walk dog", "Buy milk"]);
}

#[test]
fn delete_is_durable() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = GoalStore::load(JsonStore::with_dir(dir.path()));

    let id = store.add("Buy milk").unwrap().id;
    store.add("Walk dog");
    store.delete(id);
    drop(store);

    let reloaded = GoalStore::load(JsonStore::with_dir(dir.path()));
    assert_eq!(reloaded.goals().len(), 1);
    assert!(!reloaded.goals().iter().any(|g| g.id == id));
}

#[test]
fn new_ids_never_collide_with_persisted_ones() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = GoalStore::load(JsonStore::with_dir(dir.path()));
    let first = store.add("Buy milk").unwrap().id;
    drop(store);

    let mut reloaded = GoalStore::load(JsonStore::with_dir(dir.path()));
    let second = reloaded.add("Walk dog").unwrap().id;
    assert_ne!(first, second);
}

#[test]
fn persisted_document_uses_camel_case_shape() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = GoalStore::load(JsonStore::with_dir(dir.path()));
    store.add("Buy milk");

    let raw = std::fs::read_to_string(dir.path().join("goals.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &doc.as_array().unwrap()[0];

    assert!(entry["id"].is_u64());
    assert_eq!(entry["text"], "Buy milk");
    assert_eq!(entry["completed"], false);
    assert!(entry["createdAt"].is_string());
}

proptest! {
    #[test]
    fn reorder_preserves_the_id_set(len in 2usize..8, from in 0usize..8, to in 0usize..8) {
        let from = from % len;
        let to = to % len;

        let dir = tempfile::tempdir().unwrap();
        let mut store = GoalStore::load(JsonStore::with_dir(dir.path()));
        let ids: Vec<u64> = (0..len)
            .map(|i| store.add(&format!("goal {i}")).unwrap().id)
            .collect();

        store.reorder(ids[from], ids[to]);

        let mut after: Vec<u64> = store.goals().iter().map(|g| g.id).collect();
        prop_assert_eq!(after.len(), len);
        after.sort_unstable();
        let mut expected = ids;
        expected.sort_unstable();
        prop_assert_eq!(after, expected);
    }
}
