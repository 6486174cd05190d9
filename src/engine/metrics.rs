//! Walk metrics.
//!
//! Counters are cheap enough to collect on every run; the verbose API and the
//! CLI report surface them, the plain API drops them.
//!
//! ## Design notes
//!
//! - `steps` counts loop iterations (one peek each), so a run that succeeds
//!   immediately on an exit start still records one step.
//! - `max_depth` and `peak_capacity` describe the stack, not the path log.

use crate::CellId;
use crate::api::Outcome;
use crate::engine::ledger::Ledger;
use std::time::Duration;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunMetrics {
    /// Elapsed time for [`Walker::run_with_metrics`](crate::Walker::run_with_metrics).
    pub total: Duration,
    /// Loop iterations executed.
    pub steps: u64,
    /// Pushes after the start cell.
    pub advances: u64,
    /// Pops caused by dead ends.
    pub backtracks: u64,
    pub gold_collected: u64,
    pub keys_collected: u64,
    pub doors_unlocked: u64,
    /// Lava-adjacent steps that actually cost gold.
    pub lava_resets: u64,
    /// Total gold dropped to lava.
    pub gold_lost: u64,
    /// Deepest the stack got.
    pub max_depth: usize,
    /// Largest capacity the stack reached.
    pub peak_capacity: usize,
}

/// Walker output bundled with run state and metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub outcome: Outcome,
    /// Ledger at termination.
    pub ledger: Ledger,
    /// Stack contents at termination, bottom to top.
    pub live_path: Vec<CellId>,
    pub metrics: RunMetrics,
}
