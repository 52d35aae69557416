pub mod sfdp;

use crate::adjacency::AdjacencyMatrix;
use crate::error::Result;
use nalgebra as na;

/// Coordinate element type. Implemented for every real nalgebra scalar (`f32`, `f64`).
pub trait Real: na::RealField + Copy {}

impl<T: na::RealField + Copy> Real for T {}

/// A point in `D`-dimensional layout space.
pub type Point<T, const D: usize> = na::SVector<T, D>;

/// A layout algorithm that is driven one snapshot at a time.
///
/// `initialize` produces snapshot #0 together with the state needed to continue, and each `step`
/// consumes the previous state to produce the next snapshot. `Ok(None)` is the terminal signal.
pub trait IterativeLayout {
    type Position: Clone;
    type State;

    fn initialize(&self, adjacency: &AdjacencyMatrix) -> (Vec<Self::Position>, Self::State);

    fn step(
        &self,
        adjacency: &AdjacencyMatrix,
        state: Self::State,
    ) -> Result<Option<(Vec<Self::Position>, Self::State)>>;

    /// Lazily yields every snapshot, starting with the initial positions.
    fn iter<'a>(&'a self, adjacency: &'a AdjacencyMatrix) -> LayoutIter<'a, Self>
    where
        Self: Sized,
    {
        LayoutIter {
            layout: self,
            adjacency,
            phase: Phase::Fresh,
        }
    }
}

enum Phase<S> {
    Fresh,
    Running(S),
    Done,
}

/// Pull-based snapshot sequence over an [`IterativeLayout`].
///
/// The sequence is finite and cannot be restarted. A step error is yielded once, after which the
/// iterator is exhausted.
pub struct LayoutIter<'a, L: IterativeLayout> {
    layout: &'a L,
    adjacency: &'a AdjacencyMatrix,
    phase: Phase<L::State>,
}

impl<'a, L: IterativeLayout> LayoutIter<'a, L> {
    /// Continues from `state` without re-emitting an initial snapshot.
    pub fn resume(layout: &'a L, adjacency: &'a AdjacencyMatrix, state: L::State) -> Self {
        Self {
            layout,
            adjacency,
            phase: Phase::Running(state),
        }
    }
}

impl<L: IterativeLayout> Iterator for LayoutIter<'_, L> {
    type Item = Result<Vec<L::Position>>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::Fresh => {
                let (positions, state) = self.layout.initialize(self.adjacency);
                self.phase = Phase::Running(state);
                Some(Ok(positions))
            }
            Phase::Running(state) => match self.layout.step(self.adjacency, state) {
                Ok(Some((positions, state))) => {
                    self.phase = Phase::Running(state);
                    Some(Ok(positions))
                }
                Ok(None) => None,
                Err(e) => Some(Err(e)),
            },
            Phase::Done => None,
        }
    }
}

impl<L: IterativeLayout> std::iter::FusedIterator for LayoutIter<'_, L> {}
