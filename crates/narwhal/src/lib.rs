#![forbid(unsafe_code)]

//! Headless spring-electrical graph layout (Yifan Hu's model) with fixed-node anchoring.
//!
//! The engine works on an [`AdjacencyMatrix`] and yields one position snapshot per step through
//! [`IterativeLayout`] / [`LayoutIter`]; [`layout`] wraps it for id-keyed graphs.
//!
//! ```
//! use narwhal::{AdjacencyMatrix, IterativeLayout, Sfdp, SfdpOptions};
//!
//! let adjacency = AdjacencyMatrix::from_edges(3, [(0, 1), (1, 2)], true)?;
//! let sfdp = Sfdp::new(SfdpOptions::<f64, 2>::default())?;
//! let last = sfdp.iter(&adjacency).last().transpose()?;
//! assert_eq!(last.map(|p| p.len()), Some(3));
//! # Ok::<(), narwhal::Error>(())
//! ```

pub mod adjacency;
pub mod algo;
pub mod error;
pub mod graph;

pub use adjacency::AdjacencyMatrix;
pub use algo::sfdp::{LayoutRun, LayoutState, Sfdp, SfdpOptions, points_from_rows};
pub use algo::{IterativeLayout, LayoutIter, Point, Real};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, LayoutResult, Node, layout};
