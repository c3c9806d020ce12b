use std::collections::BinaryHeap;

use mazer_core::{Grid, Position};

use crate::result::{SearchFailure, SearchResult};
use crate::strategy::{Heuristic, Strategy};
use crate::trace::TraceEvent;

/// Uniform step cost between 4-adjacent cells.
const STEP_COST: i32 = 1;

#[derive(Clone)]
struct Node {
    g: i32,
    h: i32,
    parent: usize,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    priority: i32,
    h: i32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the lowest priority first.
        // Ties: lower h, then earliest inserted (FIFO). This chain makes
        // pop order, and therefore paths and traces, fully deterministic.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

enum Outcome {
    Found,
    Exhausted,
    Cancelled,
}

/// Frontier, cost bookkeeping and parent links for maze searches.
///
/// The engine owns all per-run state (a flat node array invalidated
/// lazily via a generation counter, a scratch neighbor buffer, the trace
/// buffer) so that repeated searches against the same grid incur no
/// allocations after warm-up. Nothing is shared between engines, so
/// independent searches may run concurrently on their own engines.
pub struct SearchEngine {
    width: i32,
    height: i32,
    nodes: Vec<Node>,
    generation: u32,
    nbuf: Vec<Position>,
    trace: Vec<TraceEvent>,
    trace_enabled: bool,
    budget: Option<usize>,
}

impl SearchEngine {
    /// Create an engine for a grid of the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width: width.max(0),
            height: height.max(0),
            nodes: vec![Node::default(); len],
            generation: 0,
            nbuf: Vec::with_capacity(4),
            trace: Vec::new(),
            trace_enabled: false,
            budget: None,
        }
    }

    /// Create an engine sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    /// Cap the number of node expansions per leg. Exceeding the budget
    /// ends the run with [`SearchFailure::Cancelled`]. `None` (the
    /// default) means unbounded.
    pub fn set_budget(&mut self, budget: Option<usize>) {
        self.budget = budget;
    }

    /// Enable or disable trace recording (disabled by default).
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace_enabled = enabled;
    }

    /// The events recorded by the last `search`/`route` call, in
    /// exploration order. Empty unless tracing is enabled.
    pub fn last_trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    /// Take ownership of the last trace, leaving the buffer empty.
    pub fn take_trace(&mut self) -> Vec<TraceEvent> {
        std::mem::take(&mut self.trace)
    }

    /// Search a single origin-to-target leg.
    ///
    /// Pops the frontier by (priority, h, insertion order) until the
    /// target is reached or the frontier empties. `origin == target`
    /// returns `Found([origin], 0)` immediately.
    pub fn search(
        &mut self,
        grid: &Grid,
        origin: Position,
        target: Position,
        strategy: Strategy,
        heuristic: Heuristic,
    ) -> SearchResult {
        self.trace.clear();
        self.run(grid, origin, target, strategy, heuristic)
    }

    /// Solve the whole maze: start→goal, then goal→exit when the maze
    /// has an exit marker.
    ///
    /// Leg paths are concatenated with the duplicated junction cell
    /// dropped and leg costs added. If either leg fails, the whole route
    /// fails and no partial path is returned. With tracing enabled the
    /// trace accumulates across both legs.
    pub fn route(&mut self, grid: &Grid, strategy: Strategy, heuristic: Heuristic) -> SearchResult {
        self.trace.clear();
        let (mut path, cost) = match self.run(grid, grid.start(), grid.goal(), strategy, heuristic)
        {
            SearchResult::Found { path, cost } => (path, cost),
            failure => return failure,
        };
        let Some(exit) = grid.exit() else {
            return SearchResult::Found { path, cost };
        };
        match self.run(grid, grid.goal(), exit, strategy, heuristic) {
            SearchResult::Found {
                path: second,
                cost: second_cost,
            } => {
                path.extend(second.into_iter().skip(1));
                SearchResult::Found {
                    path,
                    cost: cost + second_cost,
                }
            }
            failure => failure,
        }
    }

    fn run(
        &mut self,
        grid: &Grid,
        origin: Position,
        target: Position,
        strategy: Strategy,
        heuristic: Heuristic,
    ) -> SearchResult {
        self.fit_to(grid);

        let (Some(start_idx), Some(goal_idx)) = (self.idx(origin), self.idx(target)) else {
            return SearchResult::NotFound(SearchFailure::Exhausted);
        };
        if !grid.is_walkable(origin) || !grid.is_walkable(target) {
            return SearchResult::NotFound(SearchFailure::Exhausted);
        }
        if start_idx == goal_idx {
            return SearchResult::Found {
                path: vec![origin],
                cost: 0,
            };
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let start_h = if strategy.uses_heuristic() {
            heuristic.estimate(origin, target)
        } else {
            0
        };
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.h = start_h;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            priority: strategy.priority(0, start_h),
            h: start_h,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded: usize = 0;

        let outcome = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search Outcome::Exhausted;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if let Some(limit) = self.budget {
                if expanded >= limit {
                    break 'search Outcome::Cancelled;
                }
            }
            expanded += 1;

            if self.trace_enabled {
                self.trace.push(TraceEvent::Expanded(self.position(ci)));
            }

            if ci == goal_idx {
                break 'search Outcome::Found;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_pos = self.position(ci);

            nbuf.clear();
            grid.walkable_neighbors(current_pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + STEP_COST;

                if self.nodes[ni].generation == cur_gen && tentative_g >= self.nodes[ni].g {
                    // Already reached at least as cheaply.
                    continue;
                }

                let h = if strategy.uses_heuristic() {
                    heuristic.estimate(np, target)
                } else {
                    0
                };
                seq += 1;

                let n = &mut self.nodes[ni];
                n.g = tentative_g;
                n.h = h;
                n.parent = ci;
                n.generation = cur_gen;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    priority: strategy.priority(tentative_g, h),
                    h,
                    seq,
                });
                if self.trace_enabled {
                    self.trace.push(TraceEvent::Pushed(np));
                }
            }
        };

        self.nbuf = nbuf;

        match outcome {
            Outcome::Exhausted => SearchResult::NotFound(SearchFailure::Exhausted),
            Outcome::Cancelled => SearchResult::NotFound(SearchFailure::Cancelled),
            Outcome::Found => {
                let cost = self.nodes[goal_idx].g;
                let mut path = Vec::new();
                let mut ci = goal_idx;
                while ci != usize::MAX {
                    path.push(self.position(ci));
                    ci = self.nodes[ci].parent;
                }
                path.reverse();
                SearchResult::Found { path, cost }
            }
        }
    }

    /// Resize node storage when the grid dimensions change.
    fn fit_to(&mut self, grid: &Grid) {
        if self.width == grid.width() && self.height == grid.height() {
            return;
        }
        self.width = grid.width();
        self.height = grid.height();
        let len = (self.width.max(0) as usize) * (self.height.max(0) as usize);
        self.nodes.clear();
        self.nodes.resize(len, Node::default());
        self.generation = 0;
    }

    #[inline]
    fn idx(&self, p: Position) -> Option<usize> {
        if p.row < 0 || p.row >= self.height || p.col < 0 || p.col >= self.width {
            return None;
        }
        Some((p.row * self.width + p.col) as usize)
    }

    #[inline]
    fn position(&self, idx: usize) -> Position {
        Position::new(idx as i32 / self.width, idx as i32 % self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::parse_maze;

    fn assert_path_valid(grid: &Grid, path: &[Position]) {
        for p in path {
            assert!(grid.is_walkable(*p), "path crosses wall at {p}");
        }
        for pair in path.windows(2) {
            let d = (pair[0].row - pair[1].row).abs() + (pair[0].col - pair[1].col).abs();
            assert_eq!(d, 1, "path not 4-adjacent between {} and {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn detour_around_wall() {
        let grid = parse_maze("M..\n.#.\n..C").unwrap();
        for strategy in [Strategy::BreadthFirst, Strategy::AStar] {
            let mut engine = SearchEngine::for_grid(&grid);
            let result = engine.search(
                &grid,
                grid.start(),
                grid.goal(),
                strategy,
                Heuristic::Manhattan,
            );
            let SearchResult::Found { path, cost } = result else {
                panic!("expected a path for {strategy:?}");
            };
            assert_eq!(cost, 4);
            assert_eq!(path.len(), 5);
            assert_eq!(path[0], grid.start());
            assert_eq!(path[4], grid.goal());
            assert_path_valid(&grid, &path);
        }
    }

    #[test]
    fn walled_off_goal_exhausts() {
        let grid = parse_maze("M#C").unwrap();
        for strategy in [Strategy::BreadthFirst, Strategy::Greedy, Strategy::AStar] {
            let mut engine = SearchEngine::for_grid(&grid);
            let result = engine.search(
                &grid,
                grid.start(),
                grid.goal(),
                strategy,
                Heuristic::Manhattan,
            );
            assert_eq!(result, SearchResult::NotFound(SearchFailure::Exhausted));
        }
    }

    #[test]
    fn origin_equals_target() {
        let grid = parse_maze("M.C").unwrap();
        let mut engine = SearchEngine::for_grid(&grid);
        let result = engine.search(
            &grid,
            grid.start(),
            grid.start(),
            Strategy::AStar,
            Heuristic::Manhattan,
        );
        assert_eq!(
            result,
            SearchResult::Found {
                path: vec![grid.start()],
                cost: 0
            }
        );
    }

    #[test]
    fn out_of_bounds_target_exhausts() {
        let grid = parse_maze("M.C").unwrap();
        let mut engine = SearchEngine::for_grid(&grid);
        let result = engine.search(
            &grid,
            grid.start(),
            Position::new(5, 5),
            Strategy::AStar,
            Heuristic::Manhattan,
        );
        assert_eq!(result, SearchResult::NotFound(SearchFailure::Exhausted));
    }

    #[test]
    fn repeated_searches_are_deterministic() {
        let grid = parse_maze("M....\n.###.\n.....\n.###.\n....C").unwrap();
        let mut engine = SearchEngine::for_grid(&grid);
        engine.set_trace(true);

        let first = engine.search(
            &grid,
            grid.start(),
            grid.goal(),
            Strategy::AStar,
            Heuristic::Manhattan,
        );
        let first_trace = engine.take_trace();
        let second = engine.search(
            &grid,
            grid.start(),
            grid.goal(),
            Strategy::AStar,
            Heuristic::Manhattan,
        );
        let second_trace = engine.take_trace();

        assert_eq!(first, second);
        assert_eq!(first_trace, second_trace);
        assert!(!first_trace.is_empty());
    }

    #[test]
    fn astar_matches_breadth_first_cost() {
        let mazes = [
            "M..\n.#.\n..C",
            "M....\n.###.\n.....\n.###.\n....C",
            "M#...\n.#.#.\n.#.#.\n...#C\n####.",
            "M.........C",
            "M.\n.C",
        ];
        for maze in mazes {
            let grid = parse_maze(maze).unwrap();
            let mut engine = SearchEngine::for_grid(&grid);
            let bfs = engine.search(
                &grid,
                grid.start(),
                grid.goal(),
                Strategy::BreadthFirst,
                Heuristic::Manhattan,
            );
            let astar = engine.search(
                &grid,
                grid.start(),
                grid.goal(),
                Strategy::AStar,
                Heuristic::Manhattan,
            );
            match (&bfs, &astar) {
                (
                    SearchResult::Found { cost: bfs_cost, .. },
                    SearchResult::Found {
                        cost: astar_cost,
                        path,
                    },
                ) => {
                    assert_eq!(bfs_cost, astar_cost, "suboptimal A* on:\n{maze}");
                    assert_path_valid(&grid, path);
                }
                _ => panic!("expected both strategies to solve:\n{maze}"),
            }
        }
    }

    #[test]
    fn greedy_finds_a_valid_path() {
        let grid = parse_maze("M....\n.###.\n.....\n.###.\n....C").unwrap();
        let mut engine = SearchEngine::for_grid(&grid);
        let result = engine.search(
            &grid,
            grid.start(),
            grid.goal(),
            Strategy::Greedy,
            Heuristic::Manhattan,
        );
        let SearchResult::Found { path, cost } = result else {
            panic!("greedy should still find some path");
        };
        assert_path_valid(&grid, &path);
        assert_eq!(cost as usize, path.len() - 1);
    }

    #[test]
    fn chebyshev_heuristic_is_also_optimal() {
        let grid = parse_maze("M....\n####.\n....C").unwrap();
        let mut engine = SearchEngine::for_grid(&grid);
        let result = engine.search(
            &grid,
            grid.start(),
            grid.goal(),
            Strategy::AStar,
            Heuristic::Chebyshev,
        );
        assert_eq!(result.cost(), Some(6));
    }

    #[test]
    fn budget_cancels_long_searches() {
        let grid = parse_maze("M....\n.###.\n.....\n.###.\n....C").unwrap();
        let mut engine = SearchEngine::for_grid(&grid);
        engine.set_budget(Some(2));
        let result = engine.search(
            &grid,
            grid.start(),
            grid.goal(),
            Strategy::BreadthFirst,
            Heuristic::Manhattan,
        );
        assert_eq!(result, SearchResult::NotFound(SearchFailure::Cancelled));

        // A generous budget leaves the result untouched.
        engine.set_budget(Some(10_000));
        let result = engine.search(
            &grid,
            grid.start(),
            grid.goal(),
            Strategy::BreadthFirst,
            Heuristic::Manhattan,
        );
        assert!(result.is_found());
    }

    #[test]
    fn trace_starts_by_expanding_origin() {
        let grid = parse_maze("M..\n.#.\n..C").unwrap();
        let mut engine = SearchEngine::for_grid(&grid);
        engine.set_trace(true);
        let result = engine.search(
            &grid,
            grid.start(),
            grid.goal(),
            Strategy::AStar,
            Heuristic::Manhattan,
        );
        assert!(result.is_found());
        let trace = engine.last_trace();
        assert_eq!(trace[0], TraceEvent::Expanded(grid.start()));
        // Expansion ends on the target.
        assert_eq!(
            trace
                .iter()
                .rev()
                .find(|e| matches!(e, TraceEvent::Expanded(_))),
            Some(&TraceEvent::Expanded(grid.goal()))
        );
    }

    #[test]
    fn engine_refits_to_a_differently_sized_grid() {
        let small = parse_maze("M.C").unwrap();
        let big = parse_maze("M....\n.###.\n....C").unwrap();
        let mut engine = SearchEngine::for_grid(&small);
        assert!(
            engine
                .search(
                    &small,
                    small.start(),
                    small.goal(),
                    Strategy::AStar,
                    Heuristic::Manhattan
                )
                .is_found()
        );
        let result = engine.search(
            &big,
            big.start(),
            big.goal(),
            Strategy::AStar,
            Heuristic::Manhattan,
        );
        assert_eq!(result.cost(), Some(6));
    }
}
