//! CLI argument definitions for tqloot

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tqloot")]
#[command(about = "Titan Quest loot table generator", long_about = None)]
pub struct Cli {
    /// Path to the equipment YAML (falls back to the configured default, then str_lvl_45.yml)
    #[arg(short, long, env = "TQLOOT_PATH", global = true)]
    pub path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the loot tables for an equipment file (default)
    #[command(visible_alias = "f")]
    Flush,

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the default equipment file
        #[arg(long)]
        default_path: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },

    /// List the valid equipment slot names
    Slots,
}
