//! User preferences: break-activity pool and saved location.

use serde::{Deserialize, Serialize};

use crate::breaks;
use crate::error::CoreError;
use crate::storage::JsonStore;

const PREFERENCES_KEY: &str = "preferences";

/// First-run activity pool.
const SEED_ACTIVITIES: [&str; 10] = [
    "Watch a series",
    "Go for a walk",
    "Take a nap",
    "Read a book",
    "Listen to music",
    "Meditate",
    "Call a friend",
    "Do some stretching",
    "Have a snack",
    "Browse social media",
];

/// User preferences document.
///
/// `activities` holds distinct labels in insertion order; `location` is
/// free text and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub activities: Vec<String>,
    pub location: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            activities: SEED_ACTIVITIES.iter().map(|s| s.to_string()).collect(),
            location: String::new(),
        }
    }
}

/// Preferences backed by the `"preferences"` document.
///
/// Loaded once per session; every mutator persists the whole document
/// before returning.
pub struct PreferenceStore {
    prefs: Preferences,
    store: JsonStore,
}

impl PreferenceStore {
    /// Load preferences, seeding the default pool on first run or when the
    /// document is unreadable.
    pub fn load(store: JsonStore) -> Self {
        let prefs = store.load_or(PREFERENCES_KEY, Preferences::default);
        log::debug!("loaded {} activities", prefs.activities.len());
        Self { prefs, store }
    }

    /// Read-only snapshot.
    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Append an activity to the pool.
    ///
    /// Input is trimmed; blank input and exact-match duplicates are a
    /// silent no-op returning `false`.
    pub fn add_activity(&mut self, raw: &str) -> bool {
        let activity = raw.trim();
        if activity.is_empty() || self.prefs.activities.iter().any(|a| a == activity) {
            return false;
        }
        self.prefs.activities.push(activity.to_string());
        self.persist();
        true
    }

    /// Remove the exact-match activity. Absent labels are a silent no-op.
    pub fn remove_activity(&mut self, text: &str) -> bool {
        let Some(pos) = self.prefs.activities.iter().position(|a| a == text) else {
            return false;
        };
        self.prefs.activities.remove(pos);
        self.persist();
        true
    }

    /// Replace the saved location unconditionally (empty is allowed).
    pub fn set_location(&mut self, raw: &str) {
        self.prefs.location = raw.trim().to_string();
        self.persist();
    }

    /// Pick one random break activity from the current pool.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPool`] when the pool is empty.
    pub fn suggest_break(&self) -> Result<&str, CoreError> {
        breaks::suggest_break(&self.prefs.activities, &mut rand::thread_rng())
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(PREFERENCES_KEY, &self.prefs) {
            log::warn!("failed to persist preferences, keeping in-memory state: {e}");
        }
    }
}
