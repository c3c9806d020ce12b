//! Command-line maze solver.
//!
//! Reads a maze file (one row per line: `#` wall, `.` ground, `M` start,
//! `C` goal, `D` optional exit), routes start→goal→exit, and prints the
//! maze with the walked path overlaid as `*`, or JSON with `--json`.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mazer_core::{CellKind, Grid, Position, SymbolTable, parse_maze};
use mazer_search::{Heuristic, SearchEngine, SearchResult, Strategy, TraceEvent};

#[derive(Parser)]
#[command(name = "mazer", about = "Solve text mazes with informed search", version)]
struct Args {
    /// Maze file to solve.
    maze: PathBuf,

    /// Frontier ordering.
    #[arg(long, value_enum, default_value_t = StrategyArg::Astar)]
    strategy: StrategyArg,

    /// Heuristic for greedy and A* strategies.
    #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    heuristic: HeuristicArg,

    /// Cap on node expansions per leg; exceeding it cancels the search.
    #[arg(long)]
    budget: Option<usize>,

    /// Also print the exploration order.
    #[arg(long)]
    trace: bool,

    /// Emit machine-readable JSON instead of the rendered maze.
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum StrategyArg {
    /// Breadth-first: priority = g.
    Bfs,
    /// Greedy best-first: priority = h.
    Greedy,
    /// A*: priority = g + h.
    Astar,
}

impl From<StrategyArg> for Strategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Bfs => Strategy::BreadthFirst,
            StrategyArg::Greedy => Strategy::Greedy,
            StrategyArg::Astar => Strategy::AStar,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Chebyshev,
}

impl From<HeuristicArg> for Heuristic {
    fn from(value: HeuristicArg) -> Self {
        match value {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Chebyshev => Heuristic::Chebyshev,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("mazer: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let text = fs::read_to_string(&args.maze)
        .with_context(|| format!("reading {}", args.maze.display()))?;
    let grid = parse_maze(&text)
        .with_context(|| format!("parsing {}", args.maze.display()))?;
    log::debug!(
        "parsed {}x{} maze, start {} goal {} exit {:?}",
        grid.height(),
        grid.width(),
        grid.start(),
        grid.goal(),
        grid.exit(),
    );

    let mut engine = SearchEngine::for_grid(&grid);
    engine.set_budget(args.budget);
    engine.set_trace(args.trace || args.json);
    let result = engine.route(&grid, args.strategy.into(), args.heuristic.into());
    let trace = engine.take_trace();
    log::debug!("{} trace events recorded", trace.len());

    if args.json {
        let payload = serde_json::json!({
            "result": &result,
            "trace": &trace,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(if result.is_found() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    if args.trace {
        for event in &trace {
            match event {
                TraceEvent::Expanded(p) => println!("expand {p}"),
                TraceEvent::Pushed(p) => println!("push   {p}"),
            }
        }
    }

    match result {
        SearchResult::Found { path, cost } => {
            print!("{}", render(&grid, &path));
            println!("solved in {cost} steps");
            Ok(ExitCode::SUCCESS)
        }
        SearchResult::NotFound(reason) => {
            eprintln!("mazer: {reason}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Render the maze with walked ground cells overlaid as `*`.
///
/// The overlay is a display decoration computed from the returned path;
/// the grid itself is never mutated.
fn render(grid: &Grid, path: &[Position]) -> String {
    let symbols = SymbolTable::default();
    let walked: HashSet<Position> = path.iter().copied().collect();
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let p = Position::new(row, col);
            let Some(kind) = grid.kind_at(p) else {
                continue;
            };
            if kind == CellKind::Ground && walked.contains(&p) {
                out.push('*');
            } else {
                out.push(symbols.symbol_of(kind).unwrap_or(' '));
            }
        }
        out.push('\n');
    }
    out
}
