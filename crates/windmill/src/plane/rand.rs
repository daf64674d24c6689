//! Random planes on an integer grid and random pivot choice.
//!
//! Model
//! - Walk the `size × size` unit cells with lower-left corner `(x, y)`, `x, y ∈ [0, size)`.
//! - Keep a cell with probability `density`; a kept cell contributes one of its four
//!   integer corners, x and y drawn independently.
//! - Neighbouring cells share corners, so the plane dedups and may hold fewer than
//!   the number of kept cells.
//!
//! All randomness comes from the caller's `Rng`; seed a `StdRng` for reproducible draws.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Plane, Point};
use crate::error::WindmillError;

/// Grid sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneCfg {
    /// Cells per axis. Must be > 0.
    pub size: usize,
    /// Per-cell inclusion probability in [0, 1].
    pub density: f64,
}

impl Default for PlaneCfg {
    fn default() -> Self {
        Self {
            size: 10,
            density: 0.3,
        }
    }
}

impl PlaneCfg {
    pub fn validate(&self) -> Result<(), WindmillError> {
        if self.size == 0 {
            return Err(WindmillError::invalid("size must be > 0"));
        }
        if i64::try_from(self.size).is_err() {
            return Err(WindmillError::invalid("size does not fit the coordinate type"));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(WindmillError::invalid(format!(
                "density must lie in [0, 1], got {}",
                self.density
            )));
        }
        Ok(())
    }

    /// Draw a plane with this configuration.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Plane, WindmillError> {
        self.validate()?;
        let n = self.size as i64;
        let mut plane = Plane::new();
        for x in 0..n {
            for y in 0..n {
                if rng.gen_bool(self.density) {
                    let px = x + rng.gen_range(0..=1);
                    let py = y + rng.gen_range(0..=1);
                    plane.insert(Point::new(px, py));
                }
            }
        }
        Ok(plane)
    }
}

/// Random plane over a `size × size` grid; see the module docs for the model.
///
/// Errors with `InvalidInput` for `size == 0` or density outside `[0, 1]` (NaN included).
pub fn generate_random_plane<R: Rng + ?Sized>(
    size: usize,
    density: f64,
    rng: &mut R,
) -> Result<Plane, WindmillError> {
    PlaneCfg { size, density }.draw(rng)
}

/// Uniformly random member of `plane`.
pub fn pick_pivot<R: Rng + ?Sized>(plane: &Plane, rng: &mut R) -> Result<Point, WindmillError> {
    plane
        .points()
        .choose(rng)
        .copied()
        .ok_or_else(|| WindmillError::invalid("cannot pick a pivot from an empty plane"))
}
