mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use config::Config;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tqloot=info,tqloot_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Flush) {
        Commands::Flush => {
            let path = Config::load()?.equipment_path(cli.path);
            commands::flush::handle(&path)?;
        }

        Commands::Configure { default_path, show } => {
            commands::configure::handle(default_path, show)?;
        }

        Commands::Slots => commands::slots::handle(),
    }

    Ok(())
}
