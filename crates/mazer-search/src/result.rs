use std::fmt;

use mazer_core::Position;

/// Outcome of a search or multi-leg route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    /// A route exists. `path` runs from origin to target inclusive;
    /// consecutive positions are 4-adjacent and none is a wall. `cost`
    /// is the number of steps taken (unit step cost).
    Found { path: Vec<Position>, cost: i32 },
    /// No route was produced.
    NotFound(SearchFailure),
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Position]> {
        match self {
            SearchResult::Found { path, .. } => Some(path),
            SearchResult::NotFound(_) => None,
        }
    }

    /// The total cost, if a path was found.
    pub fn cost(&self) -> Option<i32> {
        match self {
            SearchResult::Found { cost, .. } => Some(*cost),
            SearchResult::NotFound(_) => None,
        }
    }
}

/// Why a search produced no path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchFailure {
    /// The frontier emptied before the target was reached.
    Exhausted,
    /// The caller-imposed expansion budget ran out first.
    Cancelled,
}

impl fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(f, "no route exists between the endpoints"),
            Self::Cancelled => write!(f, "search cancelled: expansion budget exceeded"),
        }
    }
}

impl std::error::Error for SearchFailure {}
