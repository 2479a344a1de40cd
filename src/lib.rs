//! dropshell - browse DigitalOcean droplets and open a shell on one
//!
//! The binary is a thin clap wrapper around [`run`]. Everything that can
//! fail before the terminal is taken over (settings, credentials) does so
//! here, so errors reach stderr on a normal screen.

use std::path::Path;
use std::sync::Arc;

use dropshell_api::listing::{fetch_all_rows, render_table};
use dropshell_api::{DropletsClient, EnvAuthenticator};
use dropshell_app::config::{load_settings, Settings};
use dropshell_app::SelectorExit;
use dropshell_core::prelude::*;
use dropshell_core::{logging, InstanceSummary};
use dropshell_ssh::{SessionLauncher, SessionOutcome, SshLauncher};

/// What to do once settings and credentials are in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropletCommand {
    /// Print every droplet as a table
    List,
    /// Pick a droplet interactively and open a shell on it
    Ssh,
}

/// Main application entry point
pub async fn run(config: Option<&Path>, command: DropletCommand) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the selector owns stdout)
    logging::init()?;

    let result = execute(config, command).await;

    if let Err(ref e) = result {
        error!("Fatal {} error: {:?}", e.category(), e);
    }

    info!("dropshell exiting");
    result
}

async fn execute(config: Option<&Path>, command: DropletCommand) -> Result<()> {
    let settings = load_settings(config)?;
    debug!("Settings: {:?}", settings);

    let authenticator = EnvAuthenticator::new(settings.api.token_env.clone());
    let client = DropletsClient::new(settings.api.client_options(), &authenticator)?;

    match command {
        DropletCommand::List => list(&client, &settings).await,
        DropletCommand::Ssh => ssh(client, &settings).await,
    }
}

async fn list(client: &DropletsClient, settings: &Settings) -> Result<()> {
    let rows = fetch_all_rows(client, settings.list.page_size).await?;
    print!("{}", render_table(&rows));
    Ok(())
}

async fn ssh(client: DropletsClient, settings: &Settings) -> Result<()> {
    let exit = dropshell_tui::run_selector(Arc::new(client), settings.selector.page_size).await?;

    match exit {
        SelectorExit::Selected(item) => launch(&item, settings).await,
        SelectorExit::Quit => {
            info!("Selector closed without a selection");
            Ok(())
        }
        SelectorExit::Failed(e) => Err(e),
    }
}

async fn launch(item: &InstanceSummary, settings: &Settings) -> Result<()> {
    if !item.has_public_addr() {
        return Err(Error::NoAddress {
            name: item.name.clone(),
        });
    }

    println!("Logging into droplet {} ...", item.name);
    info!(
        "Launching session on {} ({}) as {}",
        item.name, item.public_addr, settings.ssh.user
    );

    let launcher = SshLauncher::new(settings.ssh.launcher_config());
    match launcher.launch(&item.public_addr).await? {
        SessionOutcome::Completed => {
            info!("Session on {} completed", item.name);
        }
        SessionOutcome::Interrupted => {
            println!("SSH session finished");
            info!("Session on {} ended by interrupt", item.name);
        }
    }

    Ok(())
}
