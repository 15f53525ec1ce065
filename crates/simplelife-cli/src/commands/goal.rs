//! Goal management commands for CLI.

use clap::Subcommand;
use simplelife_core::{GoalStore, JsonStore};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Add a new goal
    Add {
        /// Goal text
        text: String,
    },
    /// List goals in display order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle a goal's completion state
    Toggle {
        /// Goal ID
        id: u64,
    },
    /// Delete a goal
    Delete {
        /// Goal ID
        id: u64,
    },
    /// Move a goal so it sits immediately before another goal
    Move {
        /// Goal ID to move
        id: u64,
        /// Goal ID to insert before
        #[arg(long)]
        before: u64,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = GoalStore::load(JsonStore::open()?);

    match action {
        GoalAction::Add { text } => match store.add(&text) {
            Some(goal) => println!("Goal created: {}", goal.id),
            None => println!("Nothing to add: goal text is empty"),
        },
        GoalAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.goals())?);
            } else if store.goals().is_empty() {
                println!("No goals yet. Add your first goal!");
            } else {
                for goal in store.goals() {
                    let mark = if goal.completed { "x" } else { " " };
                    println!("[{mark}] {:>4}  {}", goal.id, goal.text);
                }
            }
        }
        GoalAction::Toggle { id } => {
            if store.toggle(id) {
                println!("Toggled goal {id}");
            } else {
                println!("Goal not found: {id}");
            }
        }
        GoalAction::Delete { id } => {
            if store.delete(id) {
                println!("Deleted goal {id}");
            } else {
                println!("Goal not found: {id}");
            }
        }
        GoalAction::Move { id, before } => {
            if store.reorder(id, before) {
                println!("Moved goal {id} before {before}");
            } else {
                println!("Nothing moved: check both ids exist and differ");
            }
        }
    }
    Ok(())
}
