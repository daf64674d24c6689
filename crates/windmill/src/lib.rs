//! The windmill process over finite lattice point sets.
//!
//! A line through a pivot point sweeps clockwise until it strikes another point
//! of the set; that point becomes the new pivot and the sweep continues. This
//! crate computes one such advance at a time and reports how the other points
//! split around the line.
//!
//! Layout
//! - `plane`: points, planes, lines, exact predicates, seeded generation.
//! - `process`: line builder, segment split, next-pivot search, point counts, stepping.
//!
//! Everything here is a pure function of its inputs (randomness is passed in as
//! an `Rng`), so a `Plane` can be shared read-only across threads.

pub mod api;
pub mod error;
pub mod plane;
pub mod process;

pub use error::WindmillError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::WindmillError;
    pub use crate::plane::{
        distance_sq, generate_random_plane, is_collinear, pick_pivot, DirectionalSegments, Line,
        Plane, PlaneCfg, Point, Segment,
    };
    pub use crate::process::{
        count_behind, count_in_front, directional_segments, line_through_pivot,
        next_intersection_point, step, Step, Windmill,
    };
}
