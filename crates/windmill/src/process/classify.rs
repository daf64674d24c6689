use crate::plane::{is_collinear, Line, Plane, Point};

use super::line::directional_segments;

fn count_where(
    plane: &Plane,
    pivot: Point,
    line: &Line,
    side: impl Fn(i64, i64, i64) -> bool,
) -> usize {
    let segs = directional_segments(pivot, line);
    let front = segs.front;
    let (far_x, near_x) = (front.end.x, segs.back.end.x);
    plane
        .iter()
        .filter(|&&p| p != pivot)
        .filter(|p| side(p.x, far_x, near_x))
        .filter(|&&p| !is_collinear(front.start, front.end, p))
        .count()
}

/// Points strictly right of both line endpoints and not collinear with the front
/// segment. Excludes the pivot. A front segment collapsed onto the pivot makes
/// every point collinear, so the count is 0.
pub fn count_in_front(plane: &Plane, pivot: Point, line: &Line) -> usize {
    count_where(plane, pivot, line, |x, a, b| x > a && x > b)
}

/// Points strictly left of both line endpoints and not collinear with the front
/// segment. Excludes the pivot.
pub fn count_behind(plane: &Plane, pivot: Point, line: &Line) -> usize {
    count_where(plane, pivot, line, |x, a, b| x < a && x < b)
}
