//! The backtracking walk.
//!
//! One iteration of the loop looks at the top of the stack and does three
//! things in order:
//!
//! ```text
//! (1) curr = peek                     exit? ──▶ Succeeded
//! (2) effects on curr                 key → +1 key │ gold → +1 gold │ near lava → gold = 0
//! (3) next = select::next_cell(curr)  none → pop curr (retire); empty? ──▶ Failed
//!                                     some → push next; unlock door if next is one
//! ```
//!
//! The effects in (2) are an either/or chain: a gold or key cell that also
//! touches lava is only picked up, it never costs gold that same step.
//!
//! Every pushed id is appended to the path log, which is what a successful run
//! reports. Backtracking pops the stack but never rewrites the log.

use super::ledger::Ledger;
use super::metrics::{RunMetrics, RunResult};
use super::select::{Rank, next_cell};
use crate::api::{EscapeError, FailureReason, Options, Outcome};
use crate::grid::Grid;
use crate::stack::BoundedStack;
use crate::{Category, CellId};
use std::time::Instant;

/// Walks a grid from its start cell towards an exit.
///
/// A walker holds the grid mutably for the whole run: it marks cells, retires
/// them on backtrack and rewrites consumed gold, keys and doors to floor.
/// Usage: `Walker::new(&mut grid, &options).run()`.
#[derive(Debug)]
pub struct Walker<'g> {
    grid: &'g mut Grid,
    stack: BoundedStack<CellId>,
    ledger: Ledger,
    /// Push-order log of entered cells, start first.
    path: Vec<CellId>,
    step_budget: Option<u64>,
    trace: bool,
}

enum Halt {
    Succeeded,
    Failed,
}

impl<'g> Walker<'g> {
    /// Prepare a run: the stack holds exactly the start cell, which is marked
    /// as on the path, and the ledger is empty.
    pub fn new(grid: &'g mut Grid, options: &Options) -> Self {
        let start = grid.start();
        let mut stack = BoundedStack::new();
        stack.push(start);
        grid.mark_in_path(start);

        Walker {
            grid,
            stack,
            ledger: Ledger::default(),
            path: vec![start],
            step_budget: options.step_budget,
            trace: options.trace || debug_enabled!(),
        }
    }

    /// Run the walk to completion and return the outcome with run metrics.
    pub fn run_with_metrics(mut self) -> Result<RunResult, EscapeError> {
        let total_start = Instant::now();
        let mut metrics = RunMetrics {
            max_depth: self.stack.len(),
            peak_capacity: self.stack.capacity(),
            ..RunMetrics::default()
        };

        let halt = loop {
            if let Some(budget) = self.step_budget {
                if metrics.steps >= budget {
                    if self.trace {
                        eprintln!("[done] budget={budget} exhausted depth={}", self.stack.len());
                    }
                    return Err(EscapeError::StepBudgetExhausted { budget });
                }
            }
            metrics.steps += 1;

            let curr = *self.stack.peek()?;
            if self.trace {
                eprintln!(
                    "[step] n={} curr={} category={:?} depth={} ledger=\"{}\"",
                    metrics.steps,
                    curr,
                    self.grid.category(curr),
                    self.stack.len(),
                    self.ledger
                );
            }

            if self.apply_cell_effects(curr, &mut metrics) {
                break Halt::Succeeded;
            }

            match next_cell(self.grid, curr, &self.ledger) {
                Some((next, rank)) => self.advance(next, rank, &mut metrics),
                None => {
                    self.backtrack(&mut metrics)?;
                    if self.stack.is_empty() {
                        break Halt::Failed;
                    }
                }
            }
        };

        let outcome = match halt {
            Halt::Succeeded => Outcome::Success { path: self.path, final_gold: self.ledger.gold() },
            Halt::Failed => Outcome::Failure { reason: FailureReason::NoSolution },
        };
        metrics.total = total_start.elapsed();

        if self.trace {
            eprintln!("[done] outcome=\"{}\" steps={} backtracks={}", outcome, metrics.steps, metrics.backtracks);
        }

        Ok(RunResult { outcome, ledger: self.ledger, live_path: self.stack.iter().copied().collect(), metrics })
    }

    /// Run the walk and return only the outcome.
    pub fn run(self) -> Result<Outcome, EscapeError> {
        self.run_with_metrics().map(|result| result.outcome)
    }

    /// Apply pickup or lava effects for the cell on top of the stack.
    ///
    /// Returns true when `curr` is an exit.
    fn apply_cell_effects(&mut self, curr: CellId, metrics: &mut RunMetrics) -> bool {
        match self.grid.category(curr) {
            Category::Exit => return true,
            Category::Key(color) => {
                self.ledger.add_key(color);
                self.grid.rewrite_to_floor(curr);
                metrics.keys_collected += 1;
                if self.trace {
                    eprintln!("[pickup] cell={curr} key={} held={}", color.name(), self.ledger.keys(color));
                }
            }
            Category::Gold => {
                self.ledger.add_gold();
                self.grid.rewrite_to_floor(curr);
                metrics.gold_collected += 1;
                if self.trace {
                    eprintln!("[pickup] cell={curr} gold held={}", self.ledger.gold());
                }
            }
            _ if self.grid.is_adjacent_to_lava(curr) => {
                let lost = self.ledger.drop_gold();
                if lost > 0 {
                    metrics.lava_resets += 1;
                    metrics.gold_lost += u64::from(lost);
                    if self.trace {
                        eprintln!("[lava] cell={curr} lost={lost}");
                    }
                }
            }
            _ => {}
        }
        false
    }

    /// Enter `next`, unlocking it if it is a door whose key is held.
    fn advance(&mut self, next: CellId, rank: Rank, metrics: &mut RunMetrics) {
        self.stack.push(next);
        self.grid.mark_in_path(next);
        self.path.push(next);

        metrics.advances += 1;
        metrics.max_depth = metrics.max_depth.max(self.stack.len());
        metrics.peak_capacity = metrics.peak_capacity.max(self.stack.capacity());

        if self.trace {
            eprintln!("[advance] next={next} rank={rank:?} depth={}", self.stack.len());
        }

        if let Category::LockedDoor(color) = self.grid.category(next) {
            if self.ledger.take_key(color) {
                self.grid.rewrite_to_floor(next);
                metrics.doors_unlocked += 1;
                if self.trace {
                    eprintln!("[unlock] cell={next} door={} keys_left={}", color.name(), self.ledger.keys(color));
                }
            }
        }
    }

    /// Pop the current cell and retire it from the path.
    fn backtrack(&mut self, metrics: &mut RunMetrics) -> Result<(), EscapeError> {
        let popped = self.stack.pop()?;
        self.grid.unmark_in_path(popped);
        metrics.backtracks += 1;

        if self.trace {
            eprintln!("[backtrack] cell={popped} depth={}", self.stack.len());
        }
        Ok(())
    }
}
