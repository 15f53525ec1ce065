//! Local events commands for CLI.

use clap::Subcommand;
use simplelife_core::events::local_events;

#[derive(Subcommand)]
pub enum EventsAction {
    /// List upcoming local events
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: EventsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        EventsAction::List { json } => {
            let events = local_events();
            if json {
                println!("{}", serde_json::to_string_pretty(events)?);
            } else {
                for event in events {
                    println!("{}", event.title);
                    println!("  Time: {}", event.time);
                    println!("  Location: {}", event.location);
                    println!("  {}", event.description);
                }
            }
        }
    }
    Ok(())
}
