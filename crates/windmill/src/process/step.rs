use crate::error::WindmillError;
use crate::plane::{Line, Plane, Point};

use super::classify::{count_behind, count_in_front};
use super::line::line_through_pivot;
use super::search::next_intersection_point;

/// One advance of the windmill: the line at `pivot`, the point it strikes, and
/// how the remaining points split around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub pivot: Point,
    pub line: Line,
    pub next: Point,
    pub in_front: usize,
    pub behind: usize,
}

/// Run a single step from `pivot`. The line is rebuilt from scratch.
pub fn step(plane: &Plane, pivot: Point) -> Result<Step, WindmillError> {
    let line = line_through_pivot(plane, pivot)?;
    let next = next_intersection_point(plane, pivot, &line)?;
    let s = Step {
        pivot,
        line,
        next,
        in_front: count_in_front(plane, pivot, &line),
        behind: count_behind(plane, pivot, &line),
    };
    tracing::debug!(
        pivot = ?(pivot.x, pivot.y),
        next = ?(next.x, next.y),
        in_front = s.in_front,
        behind = s.behind,
        "windmill step"
    );
    Ok(s)
}

/// Successive steps of the process over a fixed plane.
///
/// Unbounded: callers bound it (`take(n)`) and decide when to stop. After a
/// failing step the iterator yields that error once and then ends.
#[derive(Clone, Debug)]
pub struct Windmill<'a> {
    plane: &'a Plane,
    pivot: Option<Point>,
}

impl<'a> Windmill<'a> {
    /// Start at `pivot`, which must belong to `plane`.
    pub fn new(plane: &'a Plane, pivot: Point) -> Result<Self, WindmillError> {
        if !plane.contains(&pivot) {
            return Err(WindmillError::invalid(format!(
                "pivot ({}, {}) is not a point of the plane",
                pivot.x, pivot.y
            )));
        }
        Ok(Self {
            plane,
            pivot: Some(pivot),
        })
    }

    /// Current pivot, `None` once the process has failed.
    pub fn pivot(&self) -> Option<Point> {
        self.pivot
    }
}

impl Iterator for Windmill<'_> {
    type Item = Result<Step, WindmillError>;

    fn next(&mut self) -> Option<Self::Item> {
        let pivot = self.pivot?;
        match step(self.plane, pivot) {
            Ok(s) => {
                self.pivot = Some(s.next);
                Some(Ok(s))
            }
            Err(e) => {
                self.pivot = None;
                Some(Err(e))
            }
        }
    }
}
