//! Flat call surface named after the process operations.
//!
//! Thin wrappers over `plane` and `process` for callers that think in terms of
//! the individual operations (pivot, line, segments, next point, counts).
//! The module functions remain the primary API.

use rand::Rng;

use crate::error::WindmillError;
use crate::plane::{self, DirectionalSegments, Line, Plane, Point};
use crate::process;

pub use crate::plane::is_collinear;

pub fn generate_random_plane<R: Rng + ?Sized>(
    size: usize,
    density: f64,
    rng: &mut R,
) -> Result<Plane, WindmillError> {
    plane::generate_random_plane(size, density, rng)
}

pub fn get_pivot_point<R: Rng + ?Sized>(
    plane: &Plane,
    rng: &mut R,
) -> Result<Point, WindmillError> {
    plane::pick_pivot(plane, rng)
}

pub fn get_line_points_from_pivot(plane: &Plane, pivot: Point) -> Result<Line, WindmillError> {
    process::line_through_pivot(plane, pivot)
}

pub fn get_directional_line_segments(pivot: Point, line: &Line) -> DirectionalSegments {
    process::directional_segments(pivot, line)
}

pub fn get_next_intersection_point(
    plane: &Plane,
    pivot: Point,
    line: &Line,
) -> Result<Point, WindmillError> {
    process::next_intersection_point(plane, pivot, line)
}

pub fn get_number_of_points_in_front_of_line(plane: &Plane, pivot: Point, line: &Line) -> usize {
    process::count_in_front(plane, pivot, line)
}

pub fn get_number_of_points_behind_line(plane: &Plane, pivot: Point, line: &Line) -> usize {
    process::count_behind(plane, pivot, line)
}
