//! Preference management commands for CLI.

use clap::Subcommand;
use simplelife_core::{JsonStore, PreferenceStore};

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show current preferences
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an activity to the break pool
    AddActivity {
        /// Activity label
        text: String,
    },
    /// Remove an activity from the break pool
    RemoveActivity {
        /// Activity label (exact match)
        text: String,
    },
    /// Save your location
    SetLocation {
        /// Location text (may be empty to clear)
        #[arg(default_value = "")]
        text: String,
    },
}

pub fn run(action: PrefsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = PreferenceStore::load(JsonStore::open()?);

    match action {
        PrefsAction::Show { json } => {
            let prefs = store.preferences();
            if json {
                println!("{}", serde_json::to_string_pretty(prefs)?);
            } else {
                println!("Activities:");
                for activity in &prefs.activities {
                    println!("  - {activity}");
                }
                if prefs.location.is_empty() {
                    println!("Location: (not set)");
                } else {
                    println!("Location: {}", prefs.location);
                }
            }
        }
        PrefsAction::AddActivity { text } => {
            if store.add_activity(&text) {
                println!("Activity added: {}", text.trim());
            } else {
                println!("Nothing added: activity is empty or already present");
            }
        }
        PrefsAction::RemoveActivity { text } => {
            if store.remove_activity(&text) {
                println!("Activity removed: {text}");
            } else {
                println!("Activity not found: {text}");
            }
        }
        PrefsAction::SetLocation { text } => {
            store.set_location(&text);
            println!("Location saved");
        }
    }
    Ok(())
}
