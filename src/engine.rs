//! Traversal engine.
//!
//! The engine walks a [`Grid`](crate::Grid) from its start cell to an exit
//! using a priority-ordered depth-first search. The live path is kept on a
//! [`BoundedStack`](crate::BoundedStack); resources picked up along the way
//! are tracked in a per-run [`Ledger`].
//!
//! ## How the parts work together
//!
//! ```text
//!                  ┌──────────── Walker::run_with_metrics (walker.rs) ───────────┐
//!                  │                                                            │
//! grid.start() ──▶ │ push ─▶ peek curr ─▶ effects (key │ gold │ lava)           │
//!                  │            ▲                 │                             │
//!                  │            │                 ▼                             │
//!                  │            │        select::next_cell (select.rs)          │
//!                  │            │          ranked: Target < Floor < Door        │
//!                  │            │                 │                             │
//!                  │            └── push next ◀───┴───▶ pop curr (backtrack)    │
//!                  └────────────────────────────────────────────────────────────┘
//!                                       │
//!                                       ▼
//!                       RunResult { outcome, ledger, metrics }
//! ```
//!
//! ## Responsibilities by module
//!
//! - `ledger.rs`: gold and per-color key counters for one run.
//! - `select.rs`: the neighbor-selection policy, expressed as a ranked list of
//!   predicates, plus the collectible tie-break.
//! - `walker.rs`: the step loop (pickups, lava loss, advance/backtrack, door
//!   unlocking) and the path log.
//! - `metrics.rs`: counters and timing for a run.
//!
//! ## Debugging
//!
//! Set `MINE_ESCAPE_DEBUG=1` (or `Options::trace`) to print one trace line per
//! step, pickup, unlock and backtrack.

#[path = "engine/ledger.rs"]
mod ledger;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/select.rs"]
mod select;
#[path = "engine/walker.rs"]
mod walker;


pub use ledger::Ledger;
pub use metrics::{RunMetrics, RunResult};
pub use select::is_collectible_for;
pub use walker::Walker;
