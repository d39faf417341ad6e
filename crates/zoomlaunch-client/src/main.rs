//! zoomlaunch CLI entry point.

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing::debug;

use zoomlaunch_client::cli::{Cli, Command, ConfigAction};
use zoomlaunch_client::commands;
use zoomlaunch_client::config::ClientConfig;
use zoomlaunch_client::error::{ClientError, ClientResult};
use zoomlaunch_client::opener::SystemOpener;
use zoomlaunch_client::store::MeetingStore;
use zoomlaunch_core::tracing::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => return report(&e),
    };

    // Initialize tracing
    if let Err(e) = init_tracing(tracing_config(&cli, &config)) {
        eprintln!("Error: {}", e);
        return ExitCode::from(2);
    }

    // Run the command
    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn tracing_config(cli: &Cli, config: &ClientConfig) -> TracingConfig {
    let base = if cli.debug || config.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::cli()
    };
    let format = cli.log_format.unwrap_or(config.logging.format);
    let base = base.with_format(format.into());
    match config.logging.filter {
        Some(ref filter) => base.with_env_filter(filter.clone()),
        None => base,
    }
}

fn report(err: &ClientError) -> ExitCode {
    eprintln!("Error: {}", err);
    ExitCode::from(err.exit_code())
}

fn load_config(cli: &Cli) -> ClientResult<ClientConfig> {
    let mut config = match cli.config {
        Some(ref path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load()?,
    };
    if let Some(ref path) = cli.meetings {
        config.meetings.path = Some(path.clone());
    }
    Ok(config)
}

fn run(cli: Cli, config: &ClientConfig) -> ClientResult<()> {
    let store = MeetingStore::new(config.meetings_path());
    debug!(path = %store.path().display(), "using meeting file");

    match cli.command {
        None => commands::show::run(&store.load()?, None),
        Some(Command::Show { index }) => commands::show::run(&store.load()?, index),
        Some(Command::Launch { target, password }) => {
            let meetings = store.load()?;
            commands::launch::run(
                &meetings,
                &SystemOpener,
                &config.launch.scheme,
                &target,
                password.as_deref(),
            )
        }
        Some(Command::Next) => {
            let meetings = store.load()?;
            commands::next::run(
                &meetings,
                &SystemOpener,
                &config.launch.scheme,
                config.schedule.window_minutes,
                Local::now().naive_local(),
            )
        }
        Some(Command::Config { action }) => {
            let config_path = cli.config.unwrap_or_else(ClientConfig::default_path);
            match action {
                ConfigAction::Dump => commands::config::dump(config, &config_path),
                ConfigAction::Path => commands::config::path(config, &config_path),
            }
        }
    }
}
