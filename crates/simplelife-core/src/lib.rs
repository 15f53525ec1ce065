//! # SimpleLife Core Library
//!
//! This library provides the core logic for the SimpleLife productivity
//! widget: an ordered goal list, a break-activity picker, user preferences,
//! and a static list of local events. It implements a CLI-first philosophy
//! where all operations are available via a standalone CLI binary, with any
//! GUI being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Storage**: whole-document JSON persistence, one file per named
//!   document under the user data directory
//! - **Goal Store**: ordered, user-reorderable to-do list
//! - **Preference Store**: break-activity pool and saved location
//! - **Break Suggester**: pure uniform-random pick over the activity pool
//!
//! ## Key Components
//!
//! - [`GoalStore`]: goal list with add/toggle/delete/reorder
//! - [`PreferenceStore`]: preference mutation and break suggestion
//! - [`JsonStore`]: document persistence adapter
//! - [`CoreError`]: library error taxonomy

pub mod breaks;
pub mod error;
pub mod events;
pub mod goal;
pub mod prefs;
pub mod storage;

pub use breaks::suggest_break;
pub use error::{CoreError, StorageError};
pub use events::LocalEvent;
pub use goal::{Goal, GoalStore};
pub use prefs::{PreferenceStore, Preferences};
pub use storage::JsonStore;
