//! Flush command handler
//!
//! Loads an equipment file and writes its loot tables.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use tqloot::{Equipment, FlushSummary};

/// Load the equipment at `path` and write all of its tables
pub fn handle(path: &Path) -> Result<FlushSummary> {
    info!(path = %path.display(), "loading equipment");

    let equipment = Equipment::from_file(path)
        .with_context(|| format!("Failed to load equipment from {}", path.display()))?;

    let summary = equipment
        .flush()
        .with_context(|| format!("Failed to write tables under {}", equipment.dir().display()))?;

    println!(
        "Wrote {} tables for {} slot(s) to {}",
        summary.tables.len(),
        summary.slot_dirs.len(),
        equipment.dir().display()
    );

    Ok(summary)
}
