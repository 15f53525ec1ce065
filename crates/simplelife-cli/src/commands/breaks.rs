//! Break suggestion commands for CLI.

use clap::Subcommand;
use simplelife_core::{JsonStore, PreferenceStore};

#[derive(Subcommand)]
pub enum BreakAction {
    /// Suggest a random break activity
    Suggest,
}

pub fn run(action: BreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = PreferenceStore::load(JsonStore::open()?);

    match action {
        BreakAction::Suggest => {
            let activity = store.suggest_break()?;
            println!("How about: {activity}? Take a moment to recharge!");
        }
    }
    Ok(())
}
