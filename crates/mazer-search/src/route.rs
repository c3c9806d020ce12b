//! One-shot entry points over a fresh [`SearchEngine`].

use mazer_core::Grid;

use crate::engine::SearchEngine;
use crate::result::SearchResult;
use crate::strategy::{Heuristic, Strategy};
use crate::trace::TraceEvent;

/// Solve `grid` start→goal (→exit when present) with a fresh engine.
pub fn find_path(grid: &Grid, strategy: Strategy, heuristic: Heuristic) -> SearchResult {
    let mut engine = SearchEngine::for_grid(grid);
    engine.route(grid, strategy, heuristic)
}

/// The exploration order [`find_path`] would take on `grid`, as an
/// ordered batch of events. Identical inputs reproduce identical traces.
pub fn trace_of(grid: &Grid, strategy: Strategy, heuristic: Heuristic) -> Vec<TraceEvent> {
    let mut engine = SearchEngine::for_grid(grid);
    engine.set_trace(true);
    engine.route(grid, strategy, heuristic);
    engine.take_trace()
}
