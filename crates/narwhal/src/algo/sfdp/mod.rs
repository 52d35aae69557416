//! Spring-electrical layout (Yifan Hu's model) with optional fixed nodes.
//!
//! Every node is pulled towards its adjacent nodes with `‖d‖² / K` and pushed away from every
//! non-adjacent node with `C·K² / ‖d‖`. Nodes move a fixed step along their net force; the step
//! grows after a run of energy improvements and shrinks on any regression. The run stops once no
//! node moves `K·tol` or more in a single step, or after `iterations` snapshots.

mod cooling;
mod force;
mod init;

pub use cooling::{COOLING_FACTOR, PROGRESS_THRESHOLD, update_step, within_tolerance};
pub use force::{attractive_force, repulsive_force};

use crate::adjacency::AdjacencyMatrix;
use crate::algo::{IterativeLayout, Point, Real};
use crate::error::{Error, Result};
use nalgebra as na;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct SfdpOptions<T: Real, const D: usize> {
    /// Convergence threshold, relative to `k`.
    pub tol: T,
    /// Relative strength of repulsion.
    pub c: T,
    /// Natural edge length.
    pub k: T,
    /// Upper bound on the number of snapshots, the initial one included.
    pub iterations: usize,
    /// Start positions for the first `initial_positions.len()` nodes. Remaining nodes start at
    /// seeded random positions.
    pub initial_positions: Vec<Point<T, D>>,
    pub seed: u64,
    /// Keep nodes covered by `initial_positions` in place for the whole run.
    ///
    /// Anchoring is by index: node `i` is fixed iff `i < initial_positions.len()`.
    pub fixed: bool,
}

impl<T: Real, const D: usize> Default for SfdpOptions<T, D> {
    fn default() -> Self {
        Self {
            tol: T::one(),
            c: na::convert(0.2),
            k: T::one(),
            iterations: 100,
            initial_positions: Vec::new(),
            seed: 1,
            fixed: false,
        }
    }
}

/// Converts dynamically sized coordinate rows into `D`-dimensional points.
pub fn points_from_rows<T, R, const D: usize>(rows: &[R]) -> Result<Vec<Point<T, D>>>
where
    T: Real,
    R: AsRef<[T]>,
{
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let row = row.as_ref();
            if row.len() != D {
                return Err(Error::DimensionMismatch {
                    index,
                    expected: D,
                    found: row.len(),
                });
            }
            Ok(Point::from_column_slice(row))
        })
        .collect()
}

/// Validated spring-electrical layout configuration.
#[derive(Debug, Clone)]
pub struct Sfdp<T: Real, const D: usize> {
    options: SfdpOptions<T, D>,
}

impl<T: Real, const D: usize> Sfdp<T, D> {
    pub fn new(options: SfdpOptions<T, D>) -> Result<Self> {
        if D == 0 {
            return Err(Error::ZeroDimension);
        }
        if !(options.k.is_finite() && options.k > T::zero()) {
            return Err(Error::InvalidOption {
                name: "k",
                reason: "must be finite and positive",
            });
        }
        if !(options.tol.is_finite() && options.tol >= T::zero()) {
            return Err(Error::InvalidOption {
                name: "tol",
                reason: "must be finite and non-negative",
            });
        }
        if !options.c.is_finite() {
            return Err(Error::InvalidOption {
                name: "c",
                reason: "must be finite",
            });
        }
        if let Some(index) = options
            .initial_positions
            .iter()
            .position(|p| !p.iter().all(|c| c.is_finite()))
        {
            return Err(Error::NonFiniteInitialPosition { index });
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &SfdpOptions<T, D> {
        &self.options
    }

    /// Whether node `i` keeps its initial position for the whole run.
    pub fn is_fixed(&self, node: usize) -> bool {
        self.options.fixed && node < self.options.initial_positions.len()
    }

    /// Runs the layout to termination.
    pub fn run(&self, adjacency: &AdjacencyMatrix) -> Result<LayoutRun<T, D>> {
        let (mut positions, mut state) = self.initialize(adjacency);
        let mut snapshots = 1usize;
        let converged = loop {
            let stopped = state.stopped;
            match self.step(adjacency, state)? {
                Some((next_positions, next_state)) => {
                    positions = next_positions;
                    state = next_state;
                    snapshots += 1;
                }
                None => break stopped,
            }
        };
        tracing::debug!(snapshots, converged, "sfdp layout finished");
        Ok(LayoutRun {
            positions,
            snapshots,
            converged,
        })
    }

    fn net_force(
        &self,
        adjacency: &AdjacencyMatrix,
        positions: &[Point<T, D>],
        node: usize,
    ) -> Point<T, D> {
        let SfdpOptions { c, k, .. } = self.options;
        let here = &positions[node];
        let mut total = Point::zeros();
        for (other, (there, &adjacent)) in positions.iter().zip(adjacency.row(node)).enumerate() {
            if other == node {
                continue;
            }
            let Some((unit, distance)) = force::direction(here, there) else {
                continue;
            };
            let magnitude = if adjacent {
                force::attraction(distance, k)
            } else {
                force::repulsion(distance, c, k)
            };
            total += unit * magnitude;
        }
        total
    }

    /// Net force on every node, read from `positions` only.
    fn net_forces(
        &self,
        adjacency: &AdjacencyMatrix,
        positions: &[Point<T, D>],
    ) -> Vec<Point<T, D>> {
        #[cfg(feature = "parallel")]
        let nodes = (0..positions.len()).into_par_iter();
        #[cfg(not(feature = "parallel"))]
        let nodes = 0..positions.len();
        nodes
            .map(|node| self.net_force(adjacency, positions, node))
            .collect()
    }
}

impl<T: Real, const D: usize> IterativeLayout for Sfdp<T, D> {
    type Position = Point<T, D>;
    type State = LayoutState<T, D>;

    fn initialize(&self, adjacency: &AdjacencyMatrix) -> (Vec<Point<T, D>>, LayoutState<T, D>) {
        let len = adjacency.len();
        let positions =
            init::start_positions(len, &self.options.initial_positions, self.options.seed);
        let supplied = len.min(self.options.initial_positions.len());
        tracing::debug!(
            nodes = len,
            supplied,
            randomized = len - supplied,
            fixed = self.options.fixed,
            "sfdp layout initialized"
        );
        (positions.clone(), LayoutState::new(positions))
    }

    fn step(
        &self,
        adjacency: &AdjacencyMatrix,
        state: LayoutState<T, D>,
    ) -> Result<Option<(Vec<Point<T, D>>, LayoutState<T, D>)>> {
        if state.positions.len() != adjacency.len() {
            return Err(Error::SizeMismatch {
                expected: adjacency.len(),
                found: state.positions.len(),
            });
        }
        if state.stopped || state.iteration >= self.options.iterations {
            return Ok(None);
        }
        if state.positions.is_empty() {
            return Ok(None);
        }

        let previous = &state.positions;
        let forces = self.net_forces(adjacency, previous);
        let energy = forces
            .iter()
            .fold(T::zero(), |acc, f| acc + f.norm_squared());

        let positions: Vec<Point<T, D>> = previous
            .iter()
            .zip(&forces)
            .enumerate()
            .map(|(node, (p, f))| {
                if self.is_fixed(node) {
                    *p
                } else {
                    p + force::unit_or_zero(f) * state.step
                }
            })
            .collect();

        if !energy.is_finite() {
            tracing::warn!(iteration = state.iteration, "sfdp energy is not finite");
            return Err(Error::NonFinite {
                iteration: state.iteration,
                node: None,
            });
        }
        if let Some(node) = positions
            .iter()
            .position(|p| !p.iter().all(|c| c.is_finite()))
        {
            tracing::warn!(iteration = state.iteration, node, "sfdp position is not finite");
            return Err(Error::NonFinite {
                iteration: state.iteration,
                node: Some(node),
            });
        }

        let (step, progress) = update_step(state.step, energy, state.energy, state.progress);
        let threshold = self.options.k * self.options.tol;
        let stopped = within_tolerance(&positions, previous, threshold);
        tracing::trace!(
            iteration = state.iteration,
            energy = %energy,
            step = %step,
            progress,
            stopped,
            "sfdp step"
        );

        let next = LayoutState {
            iteration: state.iteration + 1,
            energy,
            step,
            progress,
            positions: positions.clone(),
            stopped,
        };
        Ok(Some((positions, next)))
    }
}

/// Loop-carried state between two snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState<T: Real, const D: usize> {
    iteration: usize,
    energy: T,
    step: T,
    progress: u32,
    positions: Vec<Point<T, D>>,
    stopped: bool,
}

impl<T: Real, const D: usize> LayoutState<T, D> {
    /// Start state at `positions`: iteration 1, unbounded energy, unit step, no progress.
    pub fn new(positions: Vec<Point<T, D>>) -> Self {
        Self {
            iteration: 1,
            energy: na::convert(f64::INFINITY),
            step: T::one(),
            progress: 0,
            positions,
            stopped: false,
        }
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn energy(&self) -> T {
        self.energy
    }

    pub fn step(&self) -> T {
        self.step
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn positions(&self) -> &[Point<T, D>] {
        &self.positions
    }

    /// Set once a step moved every node less than `K·tol`; the next step ends the sequence.
    pub fn is_converged(&self) -> bool {
        self.stopped
    }
}

/// Outcome of [`Sfdp::run`].
#[derive(Debug, Clone)]
pub struct LayoutRun<T: Real, const D: usize> {
    pub positions: Vec<Point<T, D>>,
    /// Snapshots produced, the initial one included.
    pub snapshots: usize,
    /// `true` when the tolerance check, rather than the iteration cap, ended the run.
    pub converged: bool,
}
