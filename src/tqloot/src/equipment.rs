//! Equipment sets and flushing them to loot tables on disk.
//!
//! Each item in an equipment set becomes one slot directory holding four
//! tables:
//!
//! ```text
//! {folder}/{name}/{slot}/itemPrefixTable.dbr
//! {folder}/{name}/{slot}/itemSuffixTable.dbr
//! {folder}/{name}/{slot}/itemTable.dbr
//! {folder}/{name}/{slot}/merchantTable.dbr
//! ```
//!
//! Writes are not transactional. If a flush fails, every table written
//! before the failure stays on disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::slot::{self, Slot, SlotError};
use crate::table::{
    build_affix_table, build_item_table, build_merchant_table, Table, TableError,
};

pub const PREFIX_TABLE_FILE: &str = "itemPrefixTable.dbr";
pub const SUFFIX_TABLE_FILE: &str = "itemSuffixTable.dbr";
pub const ITEM_TABLE_FILE: &str = "itemTable.dbr";
pub const MERCHANT_TABLE_FILE: &str = "merchantTable.dbr";

#[derive(Error, Debug)]
pub enum EquipmentError {
    #[error(transparent)]
    Slot(#[from] SlotError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One piece of equipment with its optional prefix and suffix
///
/// An affix with an empty name and record means "no affix".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Item {
    pub slot_identifier: String,
    pub base_name: String,
    pub base_record: String,
    pub prefix_name: String,
    pub prefix_record: String,
    pub suffix_name: String,
    pub suffix_record: String,
}

impl Item {
    /// Resolve the item's slot
    pub fn validate(&self) -> Result<Slot, SlotError> {
        slot::resolve(&self.slot_identifier)
    }

    /// `"{prefix} {base} {suffix}"`, empty parts included
    pub fn description(&self) -> String {
        format!("{} {} {}", self.prefix_name, self.base_name, self.suffix_name)
    }
}

/// A named equipment set and the directory its tables go into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    name: String,
    dir: PathBuf,
    items: Vec<Item>,
}

impl Equipment {
    /// Create an empty equipment set rooted at `folder/name`
    pub fn new(name: impl Into<String>, folder: impl AsRef<Path>) -> Self {
        let name = name.into();
        let dir = folder.as_ref().join(&name);
        Equipment {
            name,
            dir,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root directory of the generated tables
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Directory for a slot's tables
    pub fn slot_dir(&self, slot: Slot) -> PathBuf {
        self.dir.join(slot.as_str())
    }

    /// Write the tables of every item, in declaration order
    ///
    /// Stops at the first invalid slot or filesystem error. Tables written
    /// for earlier items (and earlier tables of the failing item) are left
    /// in place.
    pub fn flush(&self) -> Result<FlushSummary, EquipmentError> {
        create_dir(&self.dir)?;

        let mut summary = FlushSummary::default();
        for item in &self.items {
            self.flush_item(item, &mut summary)?;
        }

        info!(
            equipment = %self.name,
            dir = %self.dir.display(),
            slots = summary.slot_dirs.len(),
            tables = summary.tables.len(),
            "flushed equipment"
        );
        Ok(summary)
    }

    fn flush_item(&self, item: &Item, summary: &mut FlushSummary) -> Result<(), EquipmentError> {
        let slot = item.validate()?;
        let slot_dir = self.slot_dir(slot);
        create_dir(&slot_dir)?;

        let tables = ItemTables::build(&slot_dir, item)?;
        for table in tables.iter() {
            table.write()?;
            summary.tables.push(table.path().to_path_buf());
        }

        info!(slot = %slot, item = %item.base_name, dir = %slot_dir.display(), "wrote slot tables");
        summary.slot_dirs.push(slot_dir);
        Ok(())
    }
}

/// What a successful flush wrote, in write order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlushSummary {
    pub slot_dirs: Vec<PathBuf>,
    pub tables: Vec<PathBuf>,
}

/// The four linked tables generated for one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTables {
    pub prefix: Table,
    pub suffix: Table,
    pub item: Table,
    pub merchant: Table,
}

impl ItemTables {
    /// Build an item's tables for `slot_dir` without writing anything
    pub fn build(slot_dir: &Path, item: &Item) -> Result<Self, TableError> {
        let prefix = build_affix_table(
            slot_dir.join(PREFIX_TABLE_FILE),
            &item.prefix_name,
            &item.prefix_record,
        )?;
        let suffix = build_affix_table(
            slot_dir.join(SUFFIX_TABLE_FILE),
            &item.suffix_name,
            &item.suffix_record,
        )?;
        let item_table = build_item_table(
            slot_dir.join(ITEM_TABLE_FILE),
            &item.base_record,
            prefix.path(),
            suffix.path(),
            &item.description(),
        )?;
        let merchant = build_merchant_table(
            slot_dir.join(MERCHANT_TABLE_FILE),
            item_table.path(),
            &item.base_name,
        )?;

        Ok(ItemTables {
            prefix,
            suffix,
            item: item_table,
            merchant,
        })
    }

    /// Tables in write order: prefix, suffix, item, merchant
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        [&self.prefix, &self.suffix, &self.item, &self.merchant].into_iter()
    }
}

fn create_dir(path: &Path) -> Result<(), EquipmentError> {
    fs::create_dir_all(path).map_err(|source| EquipmentError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(slot: &str) -> Item {
        Item {
            slot_identifier: slot.to_string(),
            base_name: "Ring of X".to_string(),
            base_record: "records/item/equipmentring/ring_x.dbr".to_string(),
            prefix_name: "Keen".to_string(),
            prefix_record: "records/item/lootmagicalaffixes/prefix/keen.dbr".to_string(),
            suffix_name: "of Fire".to_string(),
            suffix_record: "records/item/lootmagicalaffixes/suffix/offire.dbr".to_string(),
        }
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_new_joins_folder_and_name() {
        let equipment = Equipment::new("test_equip", "test_out");
        assert_eq!(equipment.name(), "test_equip");
        assert_eq!(equipment.dir(), Path::new("test_out/test_equip"));
        assert!(equipment.items().is_empty());

        let mut equipment = equipment;
        equipment.add_item(test_item("Arm"));
        assert_eq!(equipment.items(), [test_item("Arm")]);
        assert_eq!(equipment.dir(), Path::new("test_out/test_equip"));
    }

    #[test]
    fn test_item_description() {
        let item = test_item("Amulet");
        assert_eq!(item.description(), "Keen Ring of X of Fire");

        let plain = Item {
            base_name: "Helm".to_string(),
            ..Item::default()
        };
        assert_eq!(plain.description(), " Helm ");
    }

    #[test]
    fn test_item_validate() {
        assert_eq!(test_item("Head").validate().unwrap(), Slot::Head);
        assert!(matches!(
            test_item("Foo").validate(),
            Err(SlotError::InvalidSlot(ref s)) if s == "Foo"
        ));
    }

    #[test]
    fn test_item_tables_cross_references() {
        let slot_dir = Path::new("out/TestEquip/Amulet");
        let tables = ItemTables::build(slot_dir, &test_item("Amulet")).unwrap();

        let item_body = String::from_utf8(tables.item.body().to_vec()).unwrap();
        assert!(item_body.contains(&format!(
            "prefixRandomizerName1,{},\n",
            tables.prefix.path().display()
        )));
        assert!(item_body.contains(&format!(
            "suffixRandomizerName1,{},\n",
            tables.suffix.path().display()
        )));
        assert!(item_body.contains("lootName1,records/item/equipmentring/ring_x.dbr,\n"));

        let merchant_body = String::from_utf8(tables.merchant.body().to_vec()).unwrap();
        assert_eq!(
            merchant_body,
            format!(
                "lootName1,{},\nlootWeight1,100,\n",
                tables.item.path().display()
            )
        );

        let order: Vec<&Path> = tables.iter().map(Table::path).collect();
        assert_eq!(
            order,
            [
                slot_dir.join(PREFIX_TABLE_FILE).as_path(),
                slot_dir.join(SUFFIX_TABLE_FILE).as_path(),
                slot_dir.join(ITEM_TABLE_FILE).as_path(),
                slot_dir.join(MERCHANT_TABLE_FILE).as_path(),
            ]
        );
    }

    #[test]
    fn test_flush_writes_slot_tables() {
        let temp_dir = tempfile::tempdir().unwrap();
        let out = temp_dir.path().join("out");
        let equipment = Equipment::new("TestEquip", &out).with_items([test_item("Amulet")]);

        let summary = equipment.flush().unwrap();

        let slot_dir = out.join("TestEquip").join("Amulet");
        assert_eq!(summary.slot_dirs, vec![slot_dir.clone()]);
        assert_eq!(summary.tables.len(), 4);

        let mut files: Vec<String> = fs::read_dir(&slot_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        files.sort();
        assert_eq!(
            files,
            [
                "itemPrefixTable.dbr",
                "itemSuffixTable.dbr",
                "itemTable.dbr",
                "merchantTable.dbr"
            ]
        );

        let prefix = read(&slot_dir.join(PREFIX_TABLE_FILE));
        assert!(prefix.contains("FileDescription,Keen,\n"));
        assert!(prefix.ends_with(
            "randomizerName1,records/item/lootmagicalaffixes/prefix/keen.dbr,\nrandomizerWeight1,100,\n"
        ));

        let item_table = read(&slot_dir.join(ITEM_TABLE_FILE));
        assert!(item_table.contains("FileDescription,Keen Ring of X of Fire,\n"));
        assert!(item_table.contains(&format!(
            "prefixRandomizerName1,{},\n",
            slot_dir.join(PREFIX_TABLE_FILE).display()
        )));
        assert!(item_table.contains(&format!(
            "suffixRandomizerName1,{},\n",
            slot_dir.join(SUFFIX_TABLE_FILE).display()
        )));

        let merchant = read(&slot_dir.join(MERCHANT_TABLE_FILE));
        assert!(merchant.contains("FileDescription,Ring of X,\n"));
        assert!(merchant.contains(&format!(
            "lootName1,{},\n",
            slot_dir.join(ITEM_TABLE_FILE).display()
        )));
    }

    #[test]
    fn test_flush_overwrites_previous_run() {
        let temp_dir = tempfile::tempdir().unwrap();
        let equipment =
            Equipment::new("TestEquip", temp_dir.path()).with_items([test_item("Head")]);
        equipment.flush().unwrap();

        let mut changed = test_item("Head");
        changed.base_name = "Helm".to_string();
        Equipment::new("TestEquip", temp_dir.path())
            .with_items([changed])
            .flush()
            .unwrap();

        let merchant = read(&equipment.slot_dir(Slot::Head).join(MERCHANT_TABLE_FILE));
        assert!(merchant.contains("FileDescription,Helm,\n"));
    }

    #[test]
    fn test_flush_empty_equipment_creates_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let equipment = Equipment::new("Empty", temp_dir.path());

        let summary = equipment.flush().unwrap();
        assert!(summary.tables.is_empty());
        assert!(equipment.dir().is_dir());
    }

    #[test]
    fn test_flush_invalid_slot_keeps_earlier_items() {
        let temp_dir = tempfile::tempdir().unwrap();
        let equipment = Equipment::new("TestEquip", temp_dir.path())
            .with_items([test_item("Torso"), test_item("Foo"), test_item("Leg")]);

        let err = equipment.flush().unwrap_err();
        assert!(matches!(
            err,
            EquipmentError::Slot(SlotError::InvalidSlot(ref s)) if s == "Foo"
        ));

        // Earlier item stays, failing and later items are never written
        assert!(equipment
            .slot_dir(Slot::Torso)
            .join(MERCHANT_TABLE_FILE)
            .is_file());
        assert!(!equipment.dir().join("Foo").exists());
        assert!(!equipment.slot_dir(Slot::Leg).exists());
    }

    #[test]
    fn test_flush_stops_at_first_failed_table_write() {
        let temp_dir = tempfile::tempdir().unwrap();
        let equipment = Equipment::new("E", temp_dir.path())
            .with_items([test_item("Arm"), test_item("Leg")]);

        // A directory where the item table should go makes its write fail
        let arm_dir = equipment.slot_dir(Slot::Arm);
        fs::create_dir_all(arm_dir.join(ITEM_TABLE_FILE)).unwrap();

        let err = equipment.flush().unwrap_err();
        let item_table = arm_dir.join(ITEM_TABLE_FILE);
        assert!(matches!(
            err,
            EquipmentError::Table(TableError::Io { ref path, .. }) if *path == item_table
        ));

        assert!(arm_dir.join(PREFIX_TABLE_FILE).is_file());
        assert!(arm_dir.join(SUFFIX_TABLE_FILE).is_file());
        assert!(!arm_dir.join(MERCHANT_TABLE_FILE).exists());
        assert!(!equipment.slot_dir(Slot::Leg).exists());
    }

    #[test]
    fn test_flush_fails_when_root_is_a_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("Blocked"), b"").unwrap();
        let equipment =
            Equipment::new("Blocked", temp_dir.path()).with_items([test_item("Arm")]);

        let err = equipment.flush().unwrap_err();
        assert!(matches!(err, EquipmentError::CreateDir { ref path, .. } if path == equipment.dir()));
    }
}
