//! The parsed maze: a rectangular table of cells plus marker positions.

use crate::cell::CellKind;
use crate::geom::Position;

/// An immutable rectangular maze.
///
/// Built exclusively by the parser, which guarantees the invariants:
/// all rows have equal length, exactly one [`CellKind::Start`], exactly
/// one [`CellKind::Goal`], at most one [`CellKind::Exit`]. The grid is
/// never mutated after construction, so it can be shared read-only by
/// any number of concurrent searches.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) cells: Vec<CellKind>,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) start: Position,
    pub(crate) goal: Position,
    pub(crate) exit: Option<Position>,
}

impl Grid {
    /// Width in columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// (height, width) as a `Position`-shaped pair.
    #[inline]
    pub fn size(&self) -> Position {
        Position::new(self.height, self.width)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.row >= 0 && p.row < self.height && p.col >= 0 && p.col < self.width
    }

    #[inline]
    pub(crate) fn idx(&self, p: Position) -> usize {
        (p.row * self.width + p.col) as usize
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn kind_at(&self, p: Position) -> Option<CellKind> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.idx(p)])
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_walkable(&self, p: Position) -> bool {
        self.kind_at(p).is_some_and(CellKind::is_walkable)
    }

    /// The unique start marker.
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// The unique goal marker.
    #[inline]
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// The exit marker, if the maze has one.
    #[inline]
    pub fn exit(&self) -> Option<Position> {
        self.exit
    }

    /// Append the walkable 4-neighbors of `p` into `buf`, in the fixed
    /// up/right/down/left order. The caller clears `buf` before calling.
    pub fn walkable_neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        for n in p.neighbors_4() {
            if self.is_walkable(n) {
                buf.push(n);
            }
        }
    }
}
