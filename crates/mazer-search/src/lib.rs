//! Heuristic search over parsed mazes.
//!
//! Three interchangeable strategies share a single node-expansion
//! skeleton, differing only in the priority used to order the frontier:
//!
//! | Strategy | Priority | Optimal on unit-cost grids |
//! |---|---|---|
//! | [`Strategy::BreadthFirst`] | g | yes |
//! | [`Strategy::Greedy`] | h | no |
//! | [`Strategy::AStar`] | g + h | yes (admissible heuristic) |
//!
//! Ties are broken by lower priority, then lower h, then insertion order
//! (FIFO), so repeated runs with identical inputs produce identical paths
//! and identical [`TraceEvent`] sequences.
//!
//! [`SearchEngine`] owns and reuses all internal state (node array,
//! scratch buffers, trace) so that repeated queries against the same grid
//! incur no allocations after warm-up. The one-shot helpers
//! [`find_path`] and [`trace_of`] wrap a fresh engine.

mod distance;
mod engine;
mod result;
mod route;
mod strategy;
mod trace;

pub use distance::{chebyshev, manhattan};
pub use engine::SearchEngine;
pub use result::{SearchFailure, SearchResult};
pub use route::{find_path, trace_of};
pub use strategy::{Heuristic, Strategy};
pub use trace::TraceEvent;
