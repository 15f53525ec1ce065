pub mod breaks;
pub mod events;
pub mod goal;
pub mod prefs;
