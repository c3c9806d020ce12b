//! Grid data model and maze text parsing.
//!
//! A maze is described as plain text, one row per line, one character per
//! cell. [`parse_maze`] turns such text into an immutable [`Grid`]: a
//! rectangular table of [`CellKind`]s with located start, goal and
//! (optional) exit markers. The character-to-cell mapping is configuration,
//! injectable via [`SymbolTable`].
//!
//! Parsing is a pure function from text to `Grid`-or-[`ParseError`]; it
//! performs no I/O and never panics on bad input.

mod cell;
mod geom;
mod grid;
mod parse;
mod symbols;

pub use cell::CellKind;
pub use geom::Position;
pub use grid::Grid;
pub use parse::{ParseError, parse_maze, parse_maze_with};
pub use symbols::SymbolTable;
