use warren_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent for 4-connected unit-cost grids.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_and_diagonal() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 0)), 3);
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(-2, 1), Point::new(2, -1)), 6);
        assert_eq!(manhattan(Point::new(5, 5), Point::new(5, 5)), 0);
    }
}
