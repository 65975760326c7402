//! refs - References pre-registration client
//!
//! Joins the waitlist from the terminal and gives admins a view of who
//! signed up.
//!
//! # Examples
//!
//! ```bash
//! # Join the waitlist
//! refs register someone@example.com
//!
//! # Log in, then list and export registrations
//! refs admin login --username admin --password secret
//! refs admin dashboard
//! refs admin export --out-dir ./exports
//! ```

mod admin_commands;
mod cli;
mod commands;

use crate::{admin_commands::AdminCommands, cli::Cli, commands::Commands};

use refs_cli::{App, CliResult, logger, render};
use refs_config::Config;
use refs_core::{FileSessionStore, Route};

use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run one command and print its screen. Returns whether the flow ended in
/// its success state.
async fn run(cli: Cli) -> CliResult<bool> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };

    let mut config = Config::load_from(&config_dir)?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path(&config_dir),
        config.logging.colored,
    )?;

    info!("Starting refs v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = FileSessionStore::new(config.session_path(&config_dir));
    let app = App::from_config(&config, store);

    let screen = match cli.command {
        Commands::Register { email } => app.register(&email).await,

        Commands::Admin { action } => match action {
            AdminCommands::Login { username, password } => {
                app.login(&username, &password).await
            }
            AdminCommands::Dashboard => app.enter(Route::AdminDashboard).await,
            AdminCommands::Export { out_dir } => {
                let (screen, written) = app.export(&out_dir).await?;
                let ok = screen.succeeded();

                println!("{}", render::render_screen(&screen));
                match written {
                    Some(path) => println!("Exported to {}", path.display()),
                    None if ok => println!("Nothing to export."),
                    None => {}
                }
                return Ok(ok);
            }
            AdminCommands::Logout => {
                let screen = app.logout().await?;
                println!("Logged out.");
                screen
            }
        },

        Commands::Open { path } => app.open(&path).await,
    };

    println!("{}", render::render_screen(&screen));
    Ok(screen.succeeded())
}
