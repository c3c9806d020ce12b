//! Maze text parsing and validation.

use std::fmt;

use crate::cell::CellKind;
use crate::geom::Position;
use crate::grid::Grid;
use crate::symbols::SymbolTable;

/// Parse maze text with the default symbol table.
pub fn parse_maze(text: &str) -> Result<Grid, ParseError> {
    parse_maze_with(text, &SymbolTable::default())
}

/// Parse maze text with an injected symbol table.
///
/// One line per maze row, one character per cell. A file-final newline
/// (trailing blank lines) is tolerated; any other blank line makes the
/// shape malformed. Lines may end in `\r`, which is ignored.
pub fn parse_maze_with(text: &str, symbols: &SymbolTable) -> Result<Grid, ParseError> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(ParseError::MalformedShape {
            line: 0,
            width: 0,
            expected: 0,
        });
    }

    let expected = lines[0].chars().count();
    let mut cells = Vec::with_capacity(lines.len() * expected);
    let mut start = None;
    let mut goal = None;
    let mut exit = None;

    for (row, line) in lines.iter().enumerate() {
        let width = line.chars().count();
        if width != expected || width == 0 {
            return Err(ParseError::MalformedShape {
                line: row,
                width,
                expected,
            });
        }
        for (col, ch) in line.chars().enumerate() {
            let pos = Position::new(row as i32, col as i32);
            let Some(kind) = symbols.kind_of(ch) else {
                return Err(ParseError::UnknownSymbol { ch, pos });
            };
            let marker = match kind {
                CellKind::Start => Some(&mut start),
                CellKind::Goal => Some(&mut goal),
                CellKind::Exit => Some(&mut exit),
                _ => None,
            };
            if let Some(slot) = marker {
                if slot.replace(pos).is_some() {
                    return Err(ParseError::DuplicateMarker { kind, pos });
                }
            }
            cells.push(kind);
        }
    }

    let Some(start) = start else {
        return Err(ParseError::MissingStart);
    };
    let Some(goal) = goal else {
        return Err(ParseError::MissingGoal);
    };

    Ok(Grid {
        cells,
        width: expected as i32,
        height: lines.len() as i32,
        start,
        goal,
        exit,
    })
}

/// Errors that can occur when parsing maze text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A row's length differs from the first row's (or the maze is empty).
    MalformedShape {
        line: usize,
        width: usize,
        expected: usize,
    },
    /// No start marker present.
    MissingStart,
    /// No goal marker present.
    MissingGoal,
    /// A second start, goal or exit marker was found.
    DuplicateMarker { kind: CellKind, pos: Position },
    /// A character outside the symbol table was found.
    UnknownSymbol { ch: char, pos: Position },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedShape {
                line,
                width,
                expected,
            } => write!(
                f,
                "maze is not rectangular: line {line} has width {width}, expected {expected}"
            ),
            Self::MissingStart => write!(f, "maze has no start marker"),
            Self::MissingGoal => write!(f, "maze has no goal marker"),
            Self::DuplicateMarker { kind, pos } => {
                write!(f, "maze has a second {kind} marker at {pos}")
            }
            Self::UnknownSymbol { ch, pos } => {
                write!(f, "maze contains unknown symbol \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
