//! Neighbor-selection policy.
//!
//! Every step the walker asks for the next cell to enter from `curr`. Each of
//! the (up to) four neighbors is scanned once, in [`Direction`] order, and
//! given the first rank whose predicate accepts it:
//!
//! ```text
//! eligible?  present ∧ ¬marked ∧ ¬wall ∧ ¬lava
//!     │
//!     ├─ Target  exit, or collectible relative to curr
//!     ├─ Floor   plain floor
//!     └─ Door    locked door whose key is held (no key spent here)
//! ```
//!
//! The lowest rank wins; among equal ranks the earlier direction wins. This is
//! the same outcome as three separate passes with early return, but the rule
//! list is data and each predicate can be tested on its own.

use crate::engine::ledger::Ledger;
use crate::grid::{Cell, Grid};
use crate::{Category, CellId, Direction};

/// Priority bucket of a candidate neighbor (lower is preferred).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Rank {
    Target,
    Floor,
    Door,
}

type RankPredicate = fn(&Cell, &Cell, &Ledger) -> bool;

/// Ranked predicates, highest priority first.
const RANKED: [(Rank, RankPredicate); 3] =
    [(Rank::Target, is_target), (Rank::Floor, is_plain_floor), (Rank::Door, is_openable_door)];

/// Whether `neighbor` counts as a collectible worth heading for from `curr`.
///
/// A neighbor holding gold or a key qualifies unless `curr` itself is also a
/// collectible, in which case only a neighbor with a smaller id qualifies.
/// The id comparison is a deterministic tie-break, not a geometric rule.
pub fn is_collectible_for(curr: &Cell, neighbor: &Cell) -> bool {
    if !neighbor.category.is_collectible() {
        return false;
    }
    if curr.category.is_collectible() {
        return neighbor.id < curr.id;
    }
    true
}

fn is_target(curr: &Cell, neighbor: &Cell, _ledger: &Ledger) -> bool {
    neighbor.category == Category::Exit || is_collectible_for(curr, neighbor)
}

fn is_plain_floor(_curr: &Cell, neighbor: &Cell, _ledger: &Ledger) -> bool {
    neighbor.category == Category::Floor
}

fn is_openable_door(_curr: &Cell, neighbor: &Cell, ledger: &Ledger) -> bool {
    matches!(neighbor.category, Category::LockedDoor(color) if ledger.has_key(color))
}

/// Rank of `neighbor` seen from `curr`, or `None` if it cannot be entered now.
pub(crate) fn rank(grid: &Grid, curr: CellId, neighbor: CellId, ledger: &Ledger) -> Option<Rank> {
    if grid.is_marked(neighbor) || grid.category(neighbor).is_blocking() {
        return None;
    }
    let (curr, neighbor) = (grid.cell(curr), grid.cell(neighbor));
    RANKED.iter().find(|(_, accepts)| accepts(curr, neighbor, ledger)).map(|(rank, _)| *rank)
}

/// Choose the next cell to enter from `curr`, if any.
pub(crate) fn next_cell(grid: &Grid, curr: CellId, ledger: &Ledger) -> Option<(CellId, Rank)> {
    Direction::ALL
        .iter()
        .filter_map(|&dir| grid.neighbor(curr, dir))
        .filter_map(|n| rank(grid, curr, n, ledger).map(|r| (n, r)))
        // `min_by_key` keeps the first of equal minima, i.e. the earliest direction.
        .min_by_key(|&(_, r)| r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::parse_map;
    use crate::{CellFlags, Color};

    fn cell(id: CellId, category: Category) -> Cell {
        Cell { id, category, neighbors: [None; 4], flags: CellFlags::empty() }
    }

    #[test]
    fn collectible_tie_break_prefers_smaller_id() {
        let gold_here = cell(5, Category::Gold);
        assert!(is_collectible_for(&gold_here, &cell(3, Category::Gold)));
        assert!(is_collectible_for(&gold_here, &cell(4, Category::Key(Color::Red))));
        assert!(!is_collectible_for(&gold_here, &cell(7, Category::Gold)));
        assert!(!is_collectible_for(&gold_here, &cell(6, Category::Key(Color::Blue))));
    }

    #[test]
    fn collectible_from_non_collectible_ignores_ids() {
        let floor = cell(1, Category::Floor);
        assert!(is_collectible_for(&floor, &cell(9, Category::Gold)));
        assert!(is_collectible_for(&floor, &cell(0, Category::Key(Color::Green))));
        assert!(!is_collectible_for(&floor, &cell(0, Category::Floor)));
        assert!(!is_collectible_for(&floor, &cell(0, Category::Exit)));
        assert!(!is_collectible_for(&floor, &cell(0, Category::LockedDoor(Color::Red))));
    }

    #[test]
    fn target_outranks_floor_regardless_of_direction() {
        // North and east are floor, west is gold: gold wins even though it scans last.
        let grid = parse_map("2 3\n#.#\n$S.\n").unwrap();
        assert_eq!(next_cell(&grid, 4, &Ledger::default()), Some((3, Rank::Target)));
    }

    #[test]
    fn earlier_direction_wins_within_rank() {
        // Floors to the north, east, south and west of the centre.
        let grid = parse_map("3 3\n#.#\n.S.\n#.#\n").unwrap();
        assert_eq!(next_cell(&grid, 4, &Ledger::default()), Some((1, Rank::Floor)));
    }

    #[test]
    fn doors_need_a_key_and_rank_last() {
        let grid = parse_map("1 3\nR.S\n").unwrap();
        let mut ledger = Ledger::default();
        assert_eq!(rank(&grid, 1, 0, &ledger), None);

        ledger.add_key(Color::Red);
        assert_eq!(rank(&grid, 1, 0, &ledger), Some(Rank::Door));

        // Picking the door does not spend the key.
        let grid = parse_map("1 2\nRS\n").unwrap();
        assert_eq!(next_cell(&grid, 1, &ledger), Some((0, Rank::Door)));
        assert_eq!(ledger.keys(Color::Red), 1);
    }

    #[test]
    fn skips_marked_walls_and_lava() {
        let mut grid = parse_map("3 3\n#~#\n.S$\n#E#\n").unwrap();
        // West floor, east gold, south exit; north lava never qualifies.
        assert_eq!(rank(&grid, 4, 1, &Ledger::default()), None);
        assert_eq!(next_cell(&grid, 4, &Ledger::default()), Some((5, Rank::Target)));

        grid.mark_in_path(5);
        assert_eq!(next_cell(&grid, 4, &Ledger::default()), Some((7, Rank::Target)));

        grid.mark_in_path(7);
        grid.unmark_in_path(7);
        assert_eq!(next_cell(&grid, 4, &Ledger::default()), Some((3, Rank::Floor)));

        grid.mark_in_path(3);
        assert_eq!(next_cell(&grid, 4, &Ledger::default()), None);
    }
}
