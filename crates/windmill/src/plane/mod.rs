//! Point sets in the integer plane.
//!
//! Purpose
//! - Hold the plane the windmill sweeps over as an ordered, duplicate-free sequence
//!   with a hash index, so membership is O(1) and iteration order is reproducible.
//! - Provide the exact geometry predicates the process relies on.
//! - Generate random planes and pivots from an injected `Rng`.
//!
//! References
//! - Code cross-refs: `Plane`, `Point`, `is_collinear`, `distance_sq`, `PlaneCfg`

mod predicates;
pub mod rand;
mod types;

pub use predicates::{distance_sq, is_collinear};
pub use self::rand::{generate_random_plane, pick_pivot, PlaneCfg};
pub use types::{DirectionalSegments, Line, Plane, Point, Segment};
