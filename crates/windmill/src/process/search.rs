//! Next-pivot search.
//!
//! Rotation is clockwise about the pivot. Candidates are every other plane point,
//! ordered by exact squared distance to the pivot (stable sort, so equal distances
//! keep plane order). The closest candidate wins unless it already lies right of
//! both line endpoints, i.e. the sweep has passed it; then the runner-up wins.
//! The right-of test only makes sense for the vertical line from `line_through_pivot`.

use crate::error::WindmillError;
use crate::plane::{distance_sq, Line, Plane, Point};

use super::line::directional_segments;

/// Plane points other than `pivot`, nearest first.
pub(crate) fn candidates_by_distance(plane: &Plane, pivot: Point) -> Vec<Point> {
    let mut out: Vec<Point> = plane.iter().copied().filter(|&p| p != pivot).collect();
    out.sort_by_key(|&p| distance_sq(p, pivot));
    out
}

/// The point the rotating line strikes next.
///
/// Errors with `NoIntersection` when no other point exists, or when the closest
/// point is already swept and nothing else is left.
pub fn next_intersection_point(
    plane: &Plane,
    pivot: Point,
    line: &Line,
) -> Result<Point, WindmillError> {
    let ranked = candidates_by_distance(plane, pivot);
    let closest = *ranked
        .first()
        .ok_or_else(|| WindmillError::no_intersection(pivot))?;

    let segs = directional_segments(pivot, line);
    let swept = closest.x > segs.front.end.x && closest.x > segs.back.end.x;
    tracing::trace!(
        pivot = ?(pivot.x, pivot.y),
        closest = ?(closest.x, closest.y),
        candidates = ranked.len(),
        swept,
        "next_intersection_point"
    );
    if !swept {
        return Ok(closest);
    }
    ranked
        .get(1)
        .copied()
        .ok_or_else(|| WindmillError::no_intersection(pivot))
}
