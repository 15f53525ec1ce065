//! Goal list: ordered, user-reorderable to-do items.
//!
//! The sequence order is the display/priority order. Every mutation writes
//! the full list back through the persistence adapter before returning, so
//! the on-disk document always matches in-memory state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::JsonStore;

const GOALS_KEY: &str = "goals";

/// A user-entered task item with completion state.
///
/// Persisted inside the `"goals"` document as
/// `{id, text, completed, createdAt}` with an RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique within the active list
    pub id: u64,
    /// Non-empty, trimmed
    pub text: String,
    pub completed: bool,
    /// Informational only, never mutated
    pub created_at: DateTime<Utc>,
}

/// Ordered goal list backed by the `"goals"` document.
///
/// Ids come from a monotonic in-memory counter seeded from the loaded list,
/// so goals created back-to-back can never collide.
pub struct GoalStore {
    goals: Vec<Goal>,
    next_id: u64,
    store: JsonStore,
}

impl GoalStore {
    /// Load the goal list, falling back to an empty list when the document
    /// is absent or unreadable.
    pub fn load(store: JsonStore) -> Self {
        let goals: Vec<Goal> = store.load_or(GOALS_KEY, Vec::new);
        let next_id = goals.iter().map(|g| g.id).max().map_or(1, |max| max + 1);
        log::debug!("loaded {} goals", goals.len());
        Self {
            goals,
            next_id,
            store,
        }
    }

    /// Read-only snapshot in display order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Append a new goal with a fresh id.
    ///
    /// Input is trimmed first; blank input is ignored and returns `None`.
    pub fn add(&mut self, raw: &str) -> Option<&Goal> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        self.goals.push(Goal {
            id: self.next_id,
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
        });
        self.next_id += 1;
        self.persist();
        self.goals.last()
    }

    /// Flip the completion flag of the goal with `id`.
    ///
    /// Unknown ids are a silent no-op and return `false`.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.completed = !goal.completed;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Remove the goal with `id`. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        if self.goals.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Move the dragged goal to sit immediately before the target goal.
    ///
    /// The dragged goal is removed first, then inserted at the target's
    /// post-removal index. A no-op when either id is unknown or the two
    /// ids are equal.
    pub fn reorder(&mut self, dragged_id: u64, target_id: u64) -> bool {
        if dragged_id == target_id {
            return false;
        }
        let Some(from) = self.goals.iter().position(|g| g.id == dragged_id) else {
            return false;
        };
        if !self.goals.iter().any(|g| g.id == target_id) {
            return false;
        }
        let dragged = self.goals.remove(from);
        // The target still exists; removal only shifted its index.
        let to = self
            .goals
            .iter()
            .position(|g| g.id == target_id)
            .unwrap_or(self.goals.len());
        self.goals.insert(to, dragged);
        self.persist();
        true
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(GOALS_KEY, &self.goals) {
            log::warn!("failed to persist goals, keeping in-memory state: {e}");
        }
    }
}
