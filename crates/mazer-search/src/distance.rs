use mazer_core::Position;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two positions.
#[inline]
pub fn chebyshev(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Position::new(0, 0);
        let b = Position::new(2, 3);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(chebyshev(a, b), 3);
        assert_eq!(manhattan(b, a), 5);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn chebyshev_never_exceeds_manhattan() {
        for (a, b) in [
            (Position::new(0, 0), Position::new(5, 1)),
            (Position::new(3, 3), Position::new(0, 7)),
            (Position::new(-2, 4), Position::new(4, -2)),
        ] {
            assert!(chebyshev(a, b) <= manhattan(a, b));
        }
    }
}
