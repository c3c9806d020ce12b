use mazer_core::Position;

use crate::distance::{chebyshev, manhattan};

/// How the frontier is ordered. All strategies share the same expansion
/// skeleton; only the priority function differs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Priority = g. h is not computed. Shortest step count on
    /// uniform-cost grids.
    BreadthFirst,
    /// Priority = h. Fast, not guaranteed optimal.
    Greedy,
    /// Priority = g + h. Optimal when the heuristic is admissible.
    AStar,
}

impl Strategy {
    /// The frontier priority of a node with the given g and h costs.
    #[inline]
    pub fn priority(self, g: i32, h: i32) -> i32 {
        match self {
            Strategy::BreadthFirst => g,
            Strategy::Greedy => h,
            Strategy::AStar => g + h,
        }
    }

    /// Whether this strategy evaluates the heuristic at all.
    #[inline]
    pub(crate) fn uses_heuristic(self) -> bool {
        !matches!(self, Strategy::BreadthFirst)
    }
}

/// Named heuristic functions. Both are admissible on a 4-connected grid
/// with unit step cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    Manhattan,
    Chebyshev,
}

impl Heuristic {
    /// Estimated remaining cost from `from` to `to`. Never overestimates.
    #[inline]
    pub fn estimate(self, from: Position, to: Position) -> i32 {
        match self {
            Heuristic::Manhattan => manhattan(from, to),
            Heuristic::Chebyshev => chebyshev(from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priorities() {
        assert_eq!(Strategy::BreadthFirst.priority(3, 9), 3);
        assert_eq!(Strategy::Greedy.priority(3, 9), 9);
        assert_eq!(Strategy::AStar.priority(3, 9), 12);
    }

    #[test]
    fn estimates() {
        let a = Position::new(1, 1);
        let b = Position::new(4, 5);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 7);
        assert_eq!(Heuristic::Chebyshev.estimate(a, b), 4);
    }
}
