//! Value types for the windmill process.
//!
//! - `Point`: integer lattice point (nalgebra vector, exact equality and hashing).
//! - `Plane`: ordered, duplicate-free point set with a membership index.
//! - `Line`, `Segment`, `DirectionalSegments`: the sweeping line and its two rays.
//!
//! References
//! - Code cross-refs: `predicates::{is_collinear, distance_sq}`, `process::{line_through_pivot, directional_segments}`

use std::collections::HashSet;

use nalgebra::Vector2;

use super::predicates::is_collinear;

/// Lattice point `(x, y)`.
pub type Point = Vector2<i64>;

/// Finite point set with a stable iteration order.
///
/// Invariants:
/// - `points` holds each point at most once.
/// - `index` contains exactly the elements of `points`.
/// - Iteration follows insertion order, so tie-breaks downstream are reproducible.
#[derive(Clone, Debug, Default)]
pub struct Plane {
    points: Vec<Point>,
    index: HashSet<Point>,
}

impl Plane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `p` at the end of the order. Returns `false` if it was already present.
    pub fn insert(&mut self, p: Point) -> bool {
        if !self.index.insert(p) {
            return false;
        }
        self.points.push(p);
        true
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.index.contains(p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Lowest and highest y over the whole plane, or `None` if empty.
    pub fn y_extent(&self) -> Option<(i64, i64)> {
        let first = self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first.y, first.y), |(lo, hi), p| (lo.min(p.y), hi.max(p.y))),
        )
    }

    /// At least three points and not all of them on one line.
    pub fn supports_rotation(&self) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let a = self.points[0];
        let Some(b) = self.points.iter().copied().find(|&p| p != a) else {
            return false;
        };
        self.points.iter().any(|&p| !is_collinear(a, b, p))
    }
}

impl FromIterator<Point> for Plane {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut plane = Plane::new();
        for p in iter {
            plane.insert(p);
        }
        plane
    }
}

impl<'a> IntoIterator for &'a Plane {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sweeping line given by two endpoints.
///
/// From `line_through_pivot`, `near` is the low-y end and `far` the high-y end,
/// both on the vertical through the pivot. Hand-built lines may be arbitrary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub near: Point,
    pub far: Point,
}

impl Line {
    #[inline]
    pub fn new(near: Point, far: Point) -> Self {
        Self { near, far }
    }
}

/// Directed segment `start → end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// The line split at the pivot: `front = pivot → far`, `back = pivot → near`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionalSegments {
    pub front: Segment,
    pub back: Segment,
}
