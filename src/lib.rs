#[macro_use]
mod macros;
mod api;
mod engine;
mod grid;
mod map;
mod stack;

pub use api::{
    EscapeError, FailureReason, Options, Outcome, RunDetails, escape_file, escape_grid, escape_str, escape_verbose_with,
};
pub use engine::{Ledger, RunMetrics, RunResult, Walker, is_collectible_for};
pub use grid::{Cell, CellFlags, Grid};
pub use map::{LoadError, cell_symbol, load_file, parse_map};
pub use stack::{BoundedStack, CAPACITY_STEP, INITIAL_CAPACITY, StackError};

// --- Core vocabulary ---------------------------------------------------------

/// Stable identifier of a cell; its index in the grid arena.
pub type CellId = usize;

/// Key and door colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Slot in per-color tables such as [`Ledger`] key counters.
    pub fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Blue => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

/// What a cell currently holds.
///
/// Gold, keys and doors are rewritten to `Floor` once consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Floor,
    Wall,
    Lava,
    Exit,
    Gold,
    Key(Color),
    LockedDoor(Color),
}

impl Category {
    /// Gold or a key.
    pub fn is_collectible(self) -> bool {
        matches!(self, Category::Gold | Category::Key(_))
    }

    /// Walls and lava can never be entered.
    pub fn is_blocking(self) -> bool {
        matches!(self, Category::Wall | Category::Lava)
    }
}

/// The four neighbor directions.
///
/// The discriminant order is the scan order used when choosing the next cell,
/// so changing it changes every path the walker produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn index(self) -> usize {
        self as usize
    }
}
