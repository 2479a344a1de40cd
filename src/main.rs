//! dropshell - DigitalOcean droplet selector and SSH launcher
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dropshell::DropletCommand;
use dropshell_core::logging::current_log_file;

/// dropshell - browse droplets and open a shell on one
#[derive(Parser, Debug)]
#[command(name = "dropshell")]
#[command(about = "Browse DigitalOcean droplets and SSH into one", long_about = None)]
struct Args {
    /// Settings file (defaults to <config dir>/dropshell/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Work with droplets
    Droplet {
        #[command(subcommand)]
        action: DropletAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum DropletAction {
    /// List every droplet as a table
    List,
    /// Select a droplet and open a shell on it
    Ssh,
}

impl From<DropletAction> for DropletCommand {
    fn from(action: DropletAction) -> Self {
        match action {
            DropletAction::List => DropletCommand::List,
            DropletAction::Ssh => DropletCommand::Ssh,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let Commands::Droplet { action } = args.command;

    if let Err(e) = dropshell::run(args.config.as_deref(), action.into()).await {
        eprintln!("Error: {e}");
        eprintln!("Details are in {}", current_log_file().display());
        std::process::exit(1);
    }
}
