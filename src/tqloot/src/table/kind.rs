//! Table kind definitions

use std::fmt;
use std::str::FromStr;

use super::TableError;

/// The three loot table templates the generator knows how to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Prefix or suffix randomizer table
    Affix,
    /// Fixed-weight item table linking a base record to its affix tables
    Item,
    /// Master table exposing an item table for sale
    Merchant,
}

/// Static template metadata for a table kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableKindInfo {
    pub kind: TableKind,
    pub code: &'static str,
    pub template: &'static str,
    pub class: &'static str,
}

/// Template metadata for every table kind
pub const TABLE_KINDS: &[TableKindInfo] = &[
    TableKindInfo {
        kind: TableKind::Affix,
        code: "itemAffixTable",
        template: "database\\Templates\\LootRandomizerTable.tpl",
        class: "LootRandomizerTable.tpl",
    },
    TableKindInfo {
        kind: TableKind::Item,
        code: "itemTable",
        template: "database\\Templates\\LootItemTable_FixedWeight.tpl",
        class: "LootItemTable_FixedWeight.tpl",
    },
    TableKindInfo {
        kind: TableKind::Merchant,
        code: "merchantTable",
        template: "database\\Templates\\LootMasterTable.tpl",
        class: "LootMasterTable.tpl",
    },
];

/// Get template metadata for a kind
pub fn table_kind_info(kind: TableKind) -> Option<&'static TableKindInfo> {
    TABLE_KINDS.iter().find(|info| info.kind == kind)
}

/// Get template metadata by kind code
pub fn table_kind_by_code(code: &str) -> Option<&'static TableKindInfo> {
    TABLE_KINDS.iter().find(|info| info.code == code)
}

impl TableKind {
    /// Kind code from [`TABLE_KINDS`]
    pub fn code(self) -> &'static str {
        table_kind_info(self).map_or("", |info| info.code)
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TableKind {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        table_kind_by_code(s)
            .map(|info| info.kind)
            .ok_or_else(|| TableError::UnknownTableKind(s.to_string()))
    }
}
