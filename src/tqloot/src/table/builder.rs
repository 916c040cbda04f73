//! Constructors for the affix, item and merchant tables
//!
//! These are pure: nothing touches the filesystem until [`Table::write`].
//! Tables refer to each other only by path string.

use std::path::{Path, PathBuf};

use super::{render_header, Fields, Table, TableError, TableKind, DEFAULT_WEIGHT};

/// Build a randomizer table for a single prefix or suffix
///
/// An empty `affix_record` is allowed and yields an empty randomizer entry.
pub fn build_affix_table(
    path: impl Into<PathBuf>,
    affix_name: &str,
    affix_record: &str,
) -> Result<Table, TableError> {
    let mut body = Fields::new();
    body.push("randomizerName1", affix_record);
    body.push("randomizerWeight1", DEFAULT_WEIGHT);

    Ok(Table {
        path: path.into(),
        kind: TableKind::Affix,
        header: render_header(TableKind::Affix, affix_name)?,
        body: body.into_bytes(),
    })
}

/// Build the item table that rolls `loot_record` with both affix tables
pub fn build_item_table(
    path: impl Into<PathBuf>,
    loot_record: &str,
    prefix_table: &Path,
    suffix_table: &Path,
    description: &str,
) -> Result<Table, TableError> {
    let mut body = Fields::new();
    // The engine expects this first line without a trailing comma
    body.push_bare("bothPrefixSuffix", DEFAULT_WEIGHT);

    body.push("lootName1", loot_record);
    body.push("lootWeight1", DEFAULT_WEIGHT);

    body.push("prefixRandomizerChance", DEFAULT_WEIGHT);
    body.push_path("prefixRandomizerName1", prefix_table);
    body.push("prefixRandomizerWeight1", "");

    body.push("suffixRandomizerChance", DEFAULT_WEIGHT);
    body.push_path("suffixRandomizerName1", suffix_table);
    body.push("suffixRandomizerWeight1", "");

    Ok(Table {
        path: path.into(),
        kind: TableKind::Item,
        header: render_header(TableKind::Item, description)?,
        body: body.into_bytes(),
    })
}

/// Build the merchant table selling everything from `item_table`
pub fn build_merchant_table(
    path: impl Into<PathBuf>,
    item_table: &Path,
    description: &str,
) -> Result<Table, TableError> {
    let mut body = Fields::new();
    body.push_path("lootName1", item_table);
    body.push("lootWeight1", DEFAULT_WEIGHT);

    Ok(Table {
        path: path.into(),
        kind: TableKind::Merchant,
        header: render_header(TableKind::Merchant, description)?,
        body: body.into_bytes(),
    })
}
