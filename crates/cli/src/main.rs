//! Haven CLI - relief-operation console
//!
//! Usage:
//!   haven          - Start the interactive session
//!   haven demo     - Run a scripted end-to-end scenario

use clap::{Parser, Subcommand};
use cli::commands::DemoCommand;
use cli::interactive::InteractiveSession;

#[derive(Parser)]
#[command(name = "haven")]
#[command(about = "Haven - relief camp, victim, and supply tracking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted walkthrough of the registry
    Demo(DemoCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo(cmd)) => cmd.run(),
        None => {
            // No subcommand - start the interactive session
            let mut session = InteractiveSession::new();
            session.run()
        }
    }
}
