//! Arena grid of typed cells.
//!
//! Cells live in one `Vec` and refer to each other by [`CellId`] (their index),
//! so neighbor links never form ownership cycles. The walker only ever holds
//! ids and goes through [`Grid`] for every read or mutation.
//!
//! ```text
//!            north (id - cols)
//!                  │
//! west (id - 1) ── id ── east (id + 1)
//!                  │
//!            south (id + cols)
//! ```
//!
//! Links that would leave the map (or wrap to another row) are `None`.

use crate::map::LoadError;
use crate::{Category, CellId, Direction};

bitflags::bitflags! {
    /// Mutable per-cell state used during a run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        /// Currently on the walker's stack.
        const IN_PATH = 1 << 0;
        /// Was on the stack and has been backtracked out of.
        const RETIRED = 1 << 1;
        /// Designated start cell.
        const START   = 1 << 2;
    }
}

/// One grid location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub id: CellId,
    pub category: Category,
    pub neighbors: [Option<CellId>; 4],
    pub flags: CellFlags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    start: CellId,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from row-major categories and wire up the neighbor table.
    pub fn from_categories(
        rows: usize,
        cols: usize,
        categories: Vec<Category>,
        start: CellId,
    ) -> Result<Self, LoadError> {
        if rows == 0 || cols == 0 {
            return Err(LoadError::InvalidHeader { line: 0, text: format!("{rows} {cols}") });
        }
        if categories.len() != rows * cols {
            return Err(LoadError::RowCount { expected: rows, found: categories.len() / cols });
        }
        if start >= categories.len() {
            return Err(LoadError::MissingStart);
        }

        let cells = categories
            .into_iter()
            .enumerate()
            .map(|(id, category)| {
                let row = id / cols;
                let col = id % cols;
                let neighbors = [
                    (row > 0).then(|| id - cols),
                    (col + 1 < cols).then(|| id + 1),
                    (row + 1 < rows).then(|| id + cols),
                    (col > 0).then(|| id - 1),
                ];
                let flags = if id == start { CellFlags::START } else { CellFlags::empty() };
                Cell { id, category, neighbors, flags }
            })
            .collect();

        Ok(Grid { rows, cols, start, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> CellId {
        self.start
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn neighbor(&self, id: CellId, dir: Direction) -> Option<CellId> {
        self.cells[id].neighbors[dir.index()]
    }

    /// Neighbors in scan order; absent links are skipped.
    pub fn neighbors(&self, id: CellId) -> impl Iterator<Item = CellId> + '_ {
        self.cells[id].neighbors.iter().flatten().copied()
    }

    pub fn category(&self, id: CellId) -> Category {
        self.cells[id].category
    }

    /// On the live path, or retired from it.
    pub fn is_marked(&self, id: CellId) -> bool {
        self.cells[id].flags.intersects(CellFlags::IN_PATH | CellFlags::RETIRED)
    }

    pub fn is_in_path(&self, id: CellId) -> bool {
        self.cells[id].flags.contains(CellFlags::IN_PATH)
    }

    pub fn mark_in_path(&mut self, id: CellId) {
        self.cells[id].flags.insert(CellFlags::IN_PATH);
    }

    /// Take a cell off the live path. It stays marked as retired so the same
    /// run never re-enters it.
    pub fn unmark_in_path(&mut self, id: CellId) {
        let flags = &mut self.cells[id].flags;
        flags.remove(CellFlags::IN_PATH);
        flags.insert(CellFlags::RETIRED);
    }

    /// Idempotent.
    pub fn rewrite_to_floor(&mut self, id: CellId) {
        self.cells[id].category = Category::Floor;
    }

    pub fn is_adjacent_to_lava(&self, id: CellId) -> bool {
        self.neighbors(id).any(|n| self.category(n) == Category::Lava)
    }

    /// Clear every run flag except `START`, leaving categories untouched.
    pub fn reset_marks(&mut self) {
        for cell in &mut self.cells {
            cell.flags &= CellFlags::START;
        }
    }
}
