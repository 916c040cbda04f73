//! # tqloot
//!
//! Titan Quest loot table generator.
//!
//! This library turns an equipment description (a set of items, each with a
//! base record and an optional prefix and suffix) into the linked `.dbr`
//! loot tables the game reads:
//! - a randomizer table for the prefix and one for the suffix
//! - an item table rolling the base record with both affix tables
//! - a merchant table selling the item table
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let equipment = tqloot::Equipment::from_file("str_lvl_45.yml")?;
//! let summary = equipment.flush()?;
//! println!("Wrote {} tables", summary.tables.len());
//! # Ok(())
//! # }
//! ```

pub mod equipment;
pub mod loader;
pub mod slot;
pub mod table;

#[doc(inline)]
pub use equipment::{Equipment, EquipmentError, FlushSummary, Item, ItemTables};
#[doc(inline)]
pub use loader::LoadError;
#[doc(inline)]
pub use slot::{all_slots, resolve as resolve_slot, Slot, SlotError, ALL_SLOTS};
#[doc(inline)]
pub use table::{
    build_affix_table, build_item_table, build_merchant_table, render_header, Table, TableError,
    TableKind,
};
