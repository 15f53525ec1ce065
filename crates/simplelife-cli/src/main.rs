use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "simplelife-cli", version, about = "SimpleLife CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Goal list management
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Preference management
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
    /// Break suggestions
    Break {
        #[command(subcommand)]
        action: commands::breaks::BreakAction,
    },
    /// Local events
    Events {
        #[command(subcommand)]
        action: commands::events::EventsAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Goal { action } => commands::goal::run(action),
        Commands::Prefs { action } => commands::prefs::run(action),
        Commands::Break { action } => commands::breaks::run(action),
        Commands::Events { action } => commands::events::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
