use super::types::Point;

/// True iff `p1`, `p2`, `p3` lie on one line.
///
/// Uses `(y2−y1)(x3−x2) = (y3−y2)(x2−x1)` in integer arithmetic, so there is no
/// division and no round-off. Repeated points are always collinear.
#[inline]
pub fn is_collinear(p1: Point, p2: Point, p3: Point) -> bool {
    let lhs = (p2.y as i128 - p1.y as i128) * (p3.x as i128 - p2.x as i128);
    let rhs = (p3.y as i128 - p2.y as i128) * (p2.x as i128 - p1.x as i128);
    lhs == rhs
}

/// Squared Euclidean distance `|a − b|²`, exact.
#[inline]
pub fn distance_sq(a: Point, b: Point) -> i128 {
    let dx = a.x as i128 - b.x as i128;
    let dy = a.y as i128 - b.y as i128;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collinear_diagonal_and_offset_triples() {
        assert!(is_collinear(Point::new(1, 2), Point::new(3, 4), Point::new(5, 6)));
        assert!(!is_collinear(Point::new(1, 2), Point::new(3, 4), Point::new(5, 7)));
    }

    #[test]
    fn collinear_vertical_and_repeated() {
        let p = Point::new(3, 4);
        assert!(is_collinear(p, Point::new(3, 9), Point::new(3, -1)));
        assert!(is_collinear(p, p, Point::new(-7, 11)));
        assert!(is_collinear(p, p, p));
    }

    #[test]
    fn collinear_survives_large_coordinates() {
        let big = i64::MAX / 2;
        assert!(is_collinear(
            Point::new(-big, -big),
            Point::new(0, 0),
            Point::new(big, big)
        ));
        assert!(!is_collinear(
            Point::new(-big, -big),
            Point::new(0, 0),
            Point::new(big, big - 1)
        ));
    }

    #[test]
    fn distance_is_sum_of_squares() {
        assert_eq!(distance_sq(Point::new(3, 4), Point::new(1, 2)), 8);
        assert_eq!(distance_sq(Point::new(3, 4), Point::new(2, 6)), 5);
        assert_eq!(distance_sq(Point::new(0, 0), Point::new(0, 0)), 0);
    }
}
