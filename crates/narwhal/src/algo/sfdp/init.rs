use crate::algo::{Point, Real};
use nalgebra as na;
use rand::Rng;
use rand::SeedableRng;
use rand::distributions::Standard;
use rand_chacha::ChaCha8Rng;

/// Start positions for `len` nodes.
///
/// Supplied positions are taken in order; nodes past the supplied prefix are drawn from
/// `[-1, 1)^D` and mapped through `min + extent ⊙ r`, where `extent = max - min` over the bounding
/// box of the supplied prefix (the unit box when nothing was supplied). A dimension in which every
/// supplied position agrees gets extent 1 instead of 0, otherwise random nodes would start on top
/// of the anchors.
pub(crate) fn start_positions<T: Real, const D: usize>(
    len: usize,
    supplied: &[Point<T, D>],
    seed: u64,
) -> Vec<Point<T, D>> {
    let taken = len.min(supplied.len());
    let mut positions: Vec<Point<T, D>> = Vec::with_capacity(len);
    positions.extend_from_slice(&supplied[..taken]);
    if taken == len {
        return positions;
    }

    let (min, extent) = bounding_box(&supplied[..taken]);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in taken..len {
        let r = Point::<T, D>::from_fn(|_, _| {
            let u: f64 = rng.sample(Standard);
            na::convert::<f64, T>(2.0 * u - 1.0)
        });
        positions.push(min + extent.component_mul(&r));
    }
    positions
}

/// Per-dimension `(min, max - min)` of `points`.
///
/// Defaults to the unit box. A dimension with zero extent gets extent 1 so that randomized nodes
/// never collapse onto a single supplied anchor.
fn bounding_box<T: Real, const D: usize>(points: &[Point<T, D>]) -> (Point<T, D>, Point<T, D>) {
    let Some((first, rest)) = points.split_first() else {
        return (Point::zeros(), Point::repeat(T::one()));
    };
    let mut min = *first;
    let mut max = *first;
    for p in rest {
        min = min.zip_map(p, |a, b| if b < a { b } else { a });
        max = max.zip_map(p, |a, b| if b > a { b } else { a });
    }
    let extent = (max - min).map(|e| if e > T::zero() { e } else { T::one() });
    (min, extent)
}

#[cfg(test)]
mod tests {
    use super::{bounding_box, start_positions};
    use nalgebra::Vector2;

    #[test]
    fn supplied_prefix_is_copied_in_order() {
        let supplied = vec![Vector2::new(3.0, 4.0), Vector2::new(-1.0, 2.0)];
        let positions = start_positions(4, &supplied, 1);
        assert_eq!(positions.len(), 4);
        assert_eq!(&positions[..2], &supplied[..]);
    }

    #[test]
    fn surplus_supplied_positions_are_ignored() {
        let supplied = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(2.0, 0.0),
        ];
        let positions = start_positions(2, &supplied, 1);
        assert_eq!(positions, supplied[..2].to_vec());
    }

    #[test]
    fn random_fill_without_anchors_stays_in_signed_unit_box() {
        let positions = start_positions::<f64, 2>(64, &[], 7);
        for p in &positions {
            for &c in p.iter() {
                assert!((-1.0..1.0).contains(&c), "coordinate out of range: {c}");
            }
        }
    }

    #[test]
    fn random_fill_maps_through_anchor_box() {
        let supplied = vec![Vector2::new(10.0, 0.0), Vector2::new(14.0, 2.0)];
        let positions = start_positions(50, &supplied, 3);
        // min + (max - min) * r with r in [-1, 1) spans [2 * min - max, max).
        for p in &positions[2..] {
            assert!((6.0..14.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((-2.0..2.0).contains(&p.y), "y out of range: {}", p.y);
        }
    }

    #[test]
    fn same_seed_same_positions() {
        let a = start_positions::<f32, 3>(16, &[], 42);
        let b = start_positions::<f32, 3>(16, &[], 42);
        let c = start_positions::<f32, 3>(16, &[], 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn empty_layout_has_no_positions() {
        assert!(start_positions::<f64, 2>(0, &[], 1).is_empty());
    }

    #[test]
    fn degenerate_box_dimension_gets_unit_extent() {
        let (min, extent) = bounding_box(&[Vector2::new(5.0, 1.0), Vector2::new(5.0, 3.0)]);
        assert_eq!(min, Vector2::new(5.0, 1.0));
        assert_eq!(extent, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn single_anchor_does_not_swallow_random_nodes() {
        let supplied = vec![Vector2::new(0.0, 0.0)];
        let positions = start_positions(3, &supplied, 1);
        assert_ne!(positions[1], positions[0]);
        assert_ne!(positions[2], positions[0]);
    }
}
