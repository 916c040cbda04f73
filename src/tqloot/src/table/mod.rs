//! Loot table records
//!
//! A table is a flat `.dbr` record: a four-line header naming its template,
//! followed by a kind-specific body. Every line has the form `key,value,`
//! terminated by `\n`. Values are written verbatim; there is no quoting or
//! escaping, so values must not contain commas or newlines.

mod builder;
mod kind;

pub use builder::{build_affix_table, build_item_table, build_merchant_table};
pub use kind::{table_kind_by_code, table_kind_info, TableKind, TableKindInfo, TABLE_KINDS};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Weight given to every randomizer and loot entry
pub const DEFAULT_WEIGHT: u32 = 100;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Unknown table kind: {0}")]
    UnknownTableKind(String),

    #[error("Failed to write table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A generated loot table, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    path: PathBuf,
    kind: TableKind,
    header: Vec<u8>,
    body: Vec<u8>,
}

impl Table {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn header(&self) -> &[u8] {
        &self.header
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Header followed directly by body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header.len() + self.body.len());
        bytes.extend_from_slice(&self.header);
        bytes.extend_from_slice(&self.body);
        bytes
    }

    /// Write the table to its path, replacing any existing file
    ///
    /// A failure part way through may leave a truncated file behind.
    pub fn write(&self) -> Result<(), TableError> {
        fs::write(&self.path, self.to_bytes()).map_err(|source| TableError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), kind = %self.kind, "wrote table");
        Ok(())
    }
}

/// Render the four header lines for a table kind
pub fn render_header(kind: TableKind, description: &str) -> Result<Vec<u8>, TableError> {
    let info =
        table_kind_info(kind).ok_or_else(|| TableError::UnknownTableKind(format!("{kind:?}")))?;

    let mut header = Fields::new();
    header.push("templateName", info.template);
    header.push("ActorName", "");
    header.push("Class", info.class);
    header.push("FileDescription", description);
    Ok(header.into_bytes())
}

/// Line buffer for the `key,value,` record grammar
#[derive(Debug, Default)]
struct Fields {
    buf: Vec<u8>,
}

impl Fields {
    fn new() -> Self {
        Self::default()
    }

    /// Append `key,value,\n`
    fn push(&mut self, key: &str, value: impl std::fmt::Display) {
        self.buf.extend_from_slice(format!("{key},{value},\n").as_bytes());
    }

    /// Append `key,path,\n` with the path's bytes copied unchanged
    fn push_path(&mut self, key: &str, path: &Path) {
        self.buf.extend_from_slice(key.as_bytes());
        self.buf.push(b',');
        self.buf.extend_from_slice(path.as_os_str().as_encoded_bytes());
        self.buf.extend_from_slice(b",\n");
    }

    /// Append `key,value\n` without the trailing separator
    fn push_bare(&mut self, key: &str, value: impl std::fmt::Display) {
        self.buf.extend_from_slice(format!("{key},{value}\n").as_bytes());
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
