//! hh - Helping Hands portal session CLI
//!
//! Drives the portal's session store from a terminal. The session survives
//! between invocations in the config directory.
//!
//! # Examples
//!
//! ```bash
//! # Sign in as the demo admin
//! hh login --email admin@helpinghands.org --password admin123
//!
//! # May the current session open the donor pages?
//! hh gate --path /donor --role donor --pretty
//!
//! hh logout
//! ```

use hh_api::MockApiService;
use hh_auth::{CredentialTable, FileStorage, NotificationLevel, SessionStore};
use hh_cli::{App, Cli, Result as CliErrorResult, logger};
use hh_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.recovery_hint() {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<()> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let storage = FileStorage::new(Config::config_dir()?, &config.session.storage_key);
    let store = SessionStore::new(storage, CredentialTable::builtin(), &config.session);
    store.initialize().await;

    let app = App::new(store, MockApiService::new(&config.api));
    let mut notifications = app.subscribe();

    let result = app.run(cli.command).await;

    while let Ok(notification) = notifications.try_recv() {
        let tag = match notification.level {
            NotificationLevel::Success => "ok",
            NotificationLevel::Error => "error",
        };
        eprintln!("[{tag}] {}", notification.message);
    }

    let value = result?;
    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{output}");

    Ok(())
}
