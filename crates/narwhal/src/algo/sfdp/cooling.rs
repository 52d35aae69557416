use crate::algo::{Point, Real};
use nalgebra as na;

/// Multiplicative step change: shrink by this on regression, grow by its inverse on progress.
pub const COOLING_FACTOR: f64 = 0.9;

/// Consecutive energy improvements needed before the step grows.
pub const PROGRESS_THRESHOLD: u32 = 5;

/// Adaptive step update from Hu (2005), `(step, progress)` after observing `energy`.
pub fn update_step<T: Real>(step: T, energy: T, previous_energy: T, progress: u32) -> (T, u32) {
    let t = na::convert::<f64, T>(COOLING_FACTOR);
    if energy < previous_energy {
        let progress = progress + 1;
        if progress >= PROGRESS_THRESHOLD {
            (step / t, 0)
        } else {
            (step, progress)
        }
    } else {
        (t * step, 0)
    }
}

/// Whether every node moved strictly less than `threshold` between two snapshots.
pub fn within_tolerance<T: Real, const D: usize>(
    positions: &[Point<T, D>],
    previous: &[Point<T, D>],
    threshold: T,
) -> bool {
    positions
        .iter()
        .zip(previous)
        .all(|(p, q)| (p - q).norm() < threshold)
}
