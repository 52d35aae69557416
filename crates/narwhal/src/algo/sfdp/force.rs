//! Spring-electrical force magnitudes (Hu, "Efficient and high quality force-directed graph
//! drawing", 2005).
//!
//! The magnitudes are signed along the direction from a node towards the other node: positive
//! pulls, negative pushes.

use crate::algo::{Point, Real};

/// Attraction between adjacent nodes: `‖a − b‖² / K`.
pub fn attractive_force<T: Real, const D: usize>(a: &Point<T, D>, b: &Point<T, D>, k: T) -> T {
    attraction((a - b).norm(), k)
}

/// Repulsion between non-adjacent nodes: `−C·K² / ‖a − b‖`.
///
/// Not finite for coincident points; the engine never evaluates it for those.
pub fn repulsive_force<T: Real, const D: usize>(
    a: &Point<T, D>,
    b: &Point<T, D>,
    c: T,
    k: T,
) -> T {
    repulsion((a - b).norm(), c, k)
}

pub(crate) fn attraction<T: Real>(distance: T, k: T) -> T {
    distance * distance / k
}

pub(crate) fn repulsion<T: Real>(distance: T, c: T, k: T) -> T {
    -c * k * k / distance
}

/// Unit vector from `from` towards `to`, and the distance between them.
///
/// `None` when the points coincide, in which case the pair exerts no force.
pub(crate) fn direction<T: Real, const D: usize>(
    from: &Point<T, D>,
    to: &Point<T, D>,
) -> Option<(Point<T, D>, T)> {
    let delta = to - from;
    let distance = delta.norm();
    if distance == T::zero() {
        return None;
    }
    Some((delta / distance, distance))
}

/// Unit vector of `v`, or zero for the zero vector.
pub(crate) fn unit_or_zero<T: Real, const D: usize>(v: &Point<T, D>) -> Point<T, D> {
    let n = v.norm();
    if n == T::zero() {
        Point::zeros()
    } else {
        v / n
    }
}
