use crate::CellId;
use crate::engine::{Ledger, RunMetrics, Walker};
use crate::grid::Grid;
use crate::map::{LoadError, load_file, parse_map};
use crate::stack::StackError;
use std::fmt;
use std::path::Path;

/// Options that affect a walk.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Stop with [`EscapeError::StepBudgetExhausted`] after this many steps.
    ///
    /// A walk is bounded by the grid size anyway; this is a host-side cap.
    pub step_budget: Option<u64>,
    /// Print per-step trace lines to stderr (same as `MINE_ESCAPE_DEBUG=1`).
    pub trace: bool,
}

/// Why a completed walk found no exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Every reachable cell was explored without reaching an exit.
    NoSolution,
}

/// Result of a completed walk.
///
/// Running out of options is a valid outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success {
        /// Entered cell ids in push order, start first.
        path: Vec<CellId>,
        /// Gold held when the exit was reached.
        final_gold: u32,
    },
    Failure {
        reason: FailureReason,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// `Path: 0 1 2 1G` on success, `No solution found` otherwise.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { path, final_gold } => {
                f.write_str("Path: ")?;
                for id in path {
                    write!(f, "{id} ")?;
                }
                write!(f, "{final_gold}G")
            }
            Outcome::Failure { reason: FailureReason::NoSolution } => f.write_str("No solution found"),
        }
    }
}

/// Errors that prevent a walk from producing an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EscapeError {
    #[error("could not load map: {0}")]
    Load(#[from] LoadError),

    #[error("walker stack invariant violated: {0}")]
    Stack(#[from] StackError),

    #[error("step budget of {budget} exhausted before the walk finished")]
    StepBudgetExhausted { budget: u64 },
}

/// Extra state returned by [`escape_verbose_with`].
#[derive(Debug, Clone)]
pub struct RunDetails {
    pub outcome: Outcome,
    /// Ledger at termination (gold and keys still held).
    pub ledger: Ledger,
    /// Cells still on the stack when the walk stopped, bottom to top.
    pub live_path: Vec<CellId>,
    pub metrics: RunMetrics,
    /// Grid after the walk: consumed items are floor, visited cells are flagged.
    pub grid: Grid,
}

/// Walk a copy of `grid`; the caller's grid is left untouched.
pub fn escape_grid(grid: &Grid, options: &Options) -> Result<Outcome, EscapeError> {
    let mut grid = grid.clone();
    Walker::new(&mut grid, options).run()
}

/// Parse `text` as a map and walk it.
///
/// # Example
/// ```
/// use mine_escape::{Options, escape_str};
///
/// let out = escape_str("1 3\nS$E\n", &Options::default()).unwrap();
/// assert_eq!(out.to_string(), "Path: 0 1 2 1G");
/// ```
pub fn escape_str(text: &str, options: &Options) -> Result<Outcome, EscapeError> {
    let mut grid = parse_map(text)?;
    Walker::new(&mut grid, options).run()
}

/// Load the map at `path` and walk it.
pub fn escape_file(path: impl AsRef<Path>, options: &Options) -> Result<Outcome, EscapeError> {
    let mut grid = load_file(path)?;
    Walker::new(&mut grid, options).run()
}

/// Walk `grid` and return the outcome with ledger, metrics and final grid.
pub fn escape_verbose_with(mut grid: Grid, options: &Options) -> Result<RunDetails, EscapeError> {
    let run = Walker::new(&mut grid, options).run_with_metrics()?;
    Ok(RunDetails { outcome: run.outcome, ledger: run.ledger, live_path: run.live_path, metrics: run.metrics, grid })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn display_matches_compatibility_format() {
        let ok = Outcome::Success { path: vec![0, 4, 5], final_gold: 3 };
        assert_eq!(ok.to_string(), "Path: 0 4 5 3G");

        let none = Outcome::Failure { reason: FailureReason::NoSolution };
        assert_eq!(none.to_string(), "No solution found");
        assert!(!none.is_success());
    }

    #[test]
    fn escape_grid_leaves_caller_grid_untouched() {
        let grid = parse_map("1 3\nS$E\n").unwrap();
        let first = escape_grid(&grid, &Options::default()).unwrap();
        let second = escape_grid(&grid, &Options::default()).unwrap();

        assert_eq!(first, second);
        assert_eq!(grid.category(1), crate::Category::Gold);
        assert!(!grid.is_marked(1));
    }

    #[test]
    fn malformed_map_surfaces_as_load_error() {
        let err = escape_str("2 2\nS.\n", &Options::default()).unwrap_err();
        assert_eq!(err, EscapeError::Load(LoadError::RowCount { expected: 2, found: 1 }));
        assert!(err.to_string().starts_with("could not load map:"));
    }

    #[test]
    fn missing_file_surfaces_as_load_error() {
        let err = escape_file("/no/such/mine.map", &Options::default()).unwrap_err();
        assert!(matches!(err, EscapeError::Load(LoadError::Io { .. })));
    }

    #[test]
    fn verbose_run_returns_final_state() {
        let grid = parse_map("1 4\nSrRE\n").unwrap();
        let details = escape_verbose_with(grid, &Options::default()).unwrap();

        assert_eq!(details.outcome, Outcome::Success { path: vec![0, 1, 2, 3], final_gold: 0 });
        assert_eq!(details.ledger.keys(Color::Red), 0);
        assert_eq!(details.live_path, vec![0, 1, 2, 3]);
        assert_eq!(details.metrics.doors_unlocked, 1);
        assert_eq!(details.grid.category(2), crate::Category::Floor);
    }

    #[test]
    fn step_budget_stops_the_walk() {
        let opts = Options { step_budget: Some(2), trace: false };
        let err = escape_str("1 4\nS..E\n", &opts).unwrap_err();
        assert_eq!(err, EscapeError::StepBudgetExhausted { budget: 2 });

        // Four steps are enough: three moves and the exit check.
        let opts = Options { step_budget: Some(4), trace: false };
        assert!(escape_str("1 4\nS..E\n", &opts).unwrap().is_success());
    }
}
