//! Slot listing

use tqloot::all_slots;

/// Canonical slot names, one per line
pub fn listing() -> String {
    all_slots().map(|slot| format!("{slot}\n")).collect()
}

pub fn handle() {
    print!("{}", listing());
}
