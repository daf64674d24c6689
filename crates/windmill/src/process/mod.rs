//! The windmill process: line construction, next-pivot search, and point counting.
//!
//! Purpose
//! - Given a plane and a pivot, build the vertical line through the pivot, find
//!   the point the clockwise sweep strikes next, and count the points on either side.
//! - `step` bundles one advance; `Windmill` chains steps for callers that drive
//!   the process (step limits and cycle detection belong to the caller).
//!
//! Orientation
//! - `front` is the ray pivot → far (high-y) endpoint, `back` is pivot → near.
//! - "In front" means right of both endpoints, "behind" left of both. These
//!   x-only tests are tied to the vertical construction; a tilted line would need
//!   a half-plane test against its direction vector.
//!
//! References
//! - Code cross-refs: `plane::{Plane, Line, DirectionalSegments, is_collinear, distance_sq}`

mod classify;
mod line;
mod search;
mod step;

pub use classify::{count_behind, count_in_front};
pub use line::{directional_segments, line_through_pivot};
pub use search::next_intersection_point;
pub use step::{step, Step, Windmill};
