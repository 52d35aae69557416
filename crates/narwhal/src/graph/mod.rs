use crate::adjacency::AdjacencyMatrix;
use crate::algo::Point;
use crate::algo::sfdp::{Sfdp, SfdpOptions, points_from_rows};
use crate::error::{Error, Result};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// Directed edges only attract their source towards their target.
    pub directed: bool,
}

impl Graph {
    pub fn validate(&self) -> Result<()> {
        self.node_index().map(|_| ())
    }

    /// Node ids in layout order: nodes with an explicit position first, each group in
    /// declaration order.
    fn node_index(&self) -> Result<IndexSet<&str, FxBuildHasher>> {
        let mut index: IndexSet<&str, FxBuildHasher> =
            IndexSet::with_capacity_and_hasher(self.nodes.len(), FxBuildHasher);
        let placed = self.nodes.iter().filter(|n| n.position.is_some());
        let floating = self.nodes.iter().filter(|n| n.position.is_none());
        for n in placed.chain(floating) {
            if !index.insert(n.id.as_str()) {
                return Err(Error::DuplicateNode {
                    node_id: n.id.clone(),
                });
            }
        }
        for e in &self.edges {
            if !index.contains(e.source.as_str()) || !index.contains(e.target.as_str()) {
                return Err(Error::MissingEndpoint {
                    edge_id: e.id.clone(),
                });
            }
        }
        Ok(index)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    /// Optional initial position. Pinned in place when the layout runs with `fixed`.
    pub position: Option<Vec<f64>>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: None,
        }
    }

    pub fn at(id: impl Into<String>, position: impl Into<Vec<f64>>) -> Self {
        Self {
            id: id.into(),
            position: Some(position.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{source}->{target}"),
            source,
            target,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutResult<const D: usize> {
    pub positions: std::collections::BTreeMap<String, Point<f64, D>>,
    /// Snapshots produced, the initial one included.
    pub snapshots: usize,
    pub converged: bool,
}

/// Lays out an id-keyed graph.
///
/// Node positions replace `options.initial_positions`. Positioned nodes are moved to the front of
/// the node order, so with `options.fixed` exactly those nodes stay in place.
pub fn layout<const D: usize>(
    graph: &Graph,
    options: &SfdpOptions<f64, D>,
) -> Result<LayoutResult<D>> {
    let index = graph.node_index()?;

    let rows: Vec<&[f64]> = graph
        .nodes
        .iter()
        .filter_map(|n| n.position.as_deref())
        .collect();
    let initial_positions = points_from_rows::<f64, _, D>(&rows)?;

    let mut adjacency = AdjacencyMatrix::new(index.len());
    for e in &graph.edges {
        // Both endpoints were checked by `node_index`.
        let (Some(a), Some(b)) = (
            index.get_index_of(e.source.as_str()),
            index.get_index_of(e.target.as_str()),
        ) else {
            continue;
        };
        adjacency.set_edge(a, b);
        if !graph.directed {
            adjacency.set_edge(b, a);
        }
    }

    let sfdp = Sfdp::new(SfdpOptions {
        initial_positions,
        ..options.clone()
    })?;
    let run = sfdp.run(&adjacency)?;

    let positions = index
        .iter()
        .zip(run.positions)
        .map(|(id, p)| ((*id).to_string(), p))
        .collect();
    Ok(LayoutResult {
        positions,
        snapshots: run.snapshots,
        converged: run.converged,
    })
}
