#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph contains an edge with a missing endpoint: {edge_id}")]
    MissingEndpoint { edge_id: String },

    #[error("graph contains more than one node with id {node_id}")]
    DuplicateNode { node_id: String },

    #[error("adjacency matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("adjacency matrix entry ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidAdjacencyEntry { row: usize, col: usize, value: u8 },

    #[error("adjacency matrix for {len} nodes does not fit in memory")]
    TooManyNodes { len: usize },

    #[error("edge ({from}, {to}) is out of bounds for {len} nodes")]
    EdgeOutOfBounds { from: usize, to: usize, len: usize },

    #[error("position {index} has {found} coordinates, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("initial position {index} has a non-finite coordinate")]
    NonFiniteInitialPosition { index: usize },

    #[error("invalid option `{name}`: {reason}")]
    InvalidOption {
        name: &'static str,
        reason: &'static str,
    },

    #[error("layout dimension must be at least 1")]
    ZeroDimension,

    #[error("layout state holds {found} positions but the adjacency matrix has {expected} nodes")]
    SizeMismatch { expected: usize, found: usize },

    #[error(
        "layout diverged at iteration {iteration}{}",
        .node.map(|n| format!(" (node {n})")).unwrap_or_default()
    )]
    NonFinite {
        iteration: usize,
        node: Option<usize>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
