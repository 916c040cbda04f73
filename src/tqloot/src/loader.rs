//! Loading equipment descriptions from YAML
//!
//! ```yaml
//! Name: str_lvl_45
//! Path: out
//! Items:
//!   - SlotIdentifier: Head
//!     BaseName: Helm
//!     BaseRecord: records/item/equipmenthelm/helm.dbr
//!     PrefixName: Keen
//!     PrefixRecord: records/item/lootmagicalaffixes/prefix/keen.dbr
//!     SuffixName: of Fire
//!     SuffixRecord: records/item/lootmagicalaffixes/suffix/offire.dbr
//! ```
//!
//! The tables for this file end up under `out/str_lvl_45/Head/`: the
//! equipment `Name` is always appended to `Path`, so output lands one
//! directory below `Path` rather than directly in it.
//!
//! `Name` and `Path` are required. `Items` and every item field default to
//! empty when missing.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::equipment::{Equipment, Item};
use crate::slot::SlotError;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read equipment file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse equipment YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Item {base_name:?} is not valid: {source}")]
    InvalidItem {
        base_name: String,
        #[source]
        source: SlotError,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EquipmentFile {
    name: String,
    path: PathBuf,
    #[serde(default)]
    items: Vec<Item>,
}

impl Equipment {
    /// Parse an equipment description, rejecting any item with an unknown slot
    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        let file: EquipmentFile = serde_yaml::from_str(yaml)?;

        for item in &file.items {
            item.validate().map_err(|source| LoadError::InvalidItem {
                base_name: item.base_name.clone(),
                source,
            })?;
        }

        debug!(name = %file.name, items = file.items.len(), "parsed equipment");
        Ok(Equipment::new(file.name, &file.path).with_items(file.items))
    }

    /// Read and parse an equipment description file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }
}
