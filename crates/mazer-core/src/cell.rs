//! Cell terrain kinds.

use std::fmt;

/// What a single maze cell is.
///
/// Rendering-only states ("walked", "door opened") are not modeled here;
/// they are decorations a renderer computes from a returned path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Wall,
    Ground,
    Start,
    Goal,
    Exit,
}

impl CellKind {
    /// Whether the search may stand on this cell.
    #[inline]
    pub fn is_walkable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Wall => "wall",
            CellKind::Ground => "ground",
            CellKind::Start => "start",
            CellKind::Goal => "goal",
            CellKind::Exit => "exit",
        };
        f.write_str(name)
    }
}
