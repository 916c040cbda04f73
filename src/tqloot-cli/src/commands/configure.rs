//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up tqloot defaults.

use crate::config::{Config, FALLBACK_EQUIPMENT_PATH};
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `default_path` - Optional equipment file to use when `--path` is omitted
/// * `show` - If true, show current configuration
pub fn handle(default_path: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if let Some(path) = default_path {
        config.set_default_path(path.clone());
        config.save()?;
        println!("Default equipment file configured: {}", path.display());
        if let Ok(config_path) = Config::config_path() {
            println!("Config saved to: {}", config_path.display());
        }
    } else {
        show_usage();
    }

    Ok(())
}

fn show_config(config: &Config) {
    match &config.default_path {
        Some(path) => println!("Default equipment file: {}", path.display()),
        None => println!(
            "No default equipment file configured (using {})",
            FALLBACK_EQUIPMENT_PATH
        ),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn show_usage() {
    println!("Usage: tqloot configure --default-path EQUIPMENT.yml");
    println!("   or: tqloot configure --show");
}
