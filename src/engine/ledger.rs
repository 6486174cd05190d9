//! Per-run resource ledger.

use crate::Color;
use std::fmt;

/// Gold and key counters owned by a single walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ledger {
    gold: u32,
    keys: [u32; 3],
}

impl Ledger {
    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn keys(&self, color: Color) -> u32 {
        self.keys[color.index()]
    }

    pub fn has_key(&self, color: Color) -> bool {
        self.keys(color) > 0
    }

    pub(crate) fn add_gold(&mut self) {
        self.gold += 1;
    }

    pub(crate) fn add_key(&mut self, color: Color) {
        self.keys[color.index()] += 1;
    }

    /// Drop all gold, returning how much was lost.
    pub(crate) fn drop_gold(&mut self) -> u32 {
        std::mem::take(&mut self.gold)
    }

    /// Spend one key of `color`. Returns false (and spends nothing) if none is held.
    pub(crate) fn take_key(&mut self, color: Color) -> bool {
        let slot = &mut self.keys[color.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}G", self.gold)?;
        for color in Color::ALL {
            write!(f, " {}={}", color.name(), self.keys(color))?;
        }
        Ok(())
    }
}
