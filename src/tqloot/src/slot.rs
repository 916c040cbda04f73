//! Equipment slot definitions
//!
//! A character carries exactly nine pieces of equipment. Each slot has a
//! canonical name which is both its serialized form and the name of the
//! directory its loot tables are written into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid slot: {0:?}")]
    InvalidSlot(String),
}

/// Equipment attachment point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Slot {
    Amulet,
    Arm,
    Head,
    Leg,
    RingLeft,
    RingRight,
    Torso,
    WeaponLeft,
    WeaponRight,
    /// Sentinel for failed lookups. Never returned by [`resolve`] and has
    /// no canonical name.
    Unknown,
}

/// All valid slots, in canonical order
pub const ALL_SLOTS: [Slot; 9] = [
    Slot::Amulet,
    Slot::Arm,
    Slot::Head,
    Slot::Leg,
    Slot::RingLeft,
    Slot::RingRight,
    Slot::Torso,
    Slot::WeaponLeft,
    Slot::WeaponRight,
];

/// Iterate the nine valid slots in canonical order
pub fn all_slots() -> impl Iterator<Item = Slot> {
    ALL_SLOTS.into_iter()
}

/// Resolve a canonical slot name (case-sensitive, exact match)
pub fn resolve(identifier: &str) -> Result<Slot, SlotError> {
    ALL_SLOTS
        .iter()
        .copied()
        .find(|slot| slot.as_str() == identifier)
        .ok_or_else(|| SlotError::InvalidSlot(identifier.to_string()))
}

impl Slot {
    /// Canonical name; empty for [`Slot::Unknown`]
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Amulet => "Amulet",
            Slot::Arm => "Arm",
            Slot::Head => "Head",
            Slot::Leg => "Leg",
            Slot::RingLeft => "RingLeft",
            Slot::RingRight => "RingRight",
            Slot::Torso => "Torso",
            Slot::WeaponLeft => "WeaponLeft",
            Slot::WeaponRight => "WeaponRight",
            Slot::Unknown => "",
        }
    }

    pub fn is_valid(self) -> bool {
        self != Slot::Unknown
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

impl TryFrom<String> for Slot {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        resolve(&value)
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        slot.as_str().to_string()
    }
}
