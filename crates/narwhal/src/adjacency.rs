use crate::error::{Error, Result};

/// Square 0/1 matrix over node indices.
///
/// Entry `(i, j)` set means node `i` is pulled towards node `j`; every unset off-diagonal pair
/// repels. The matrix does not have to be symmetric. The diagonal is ignored by the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    len: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// An `n`-node matrix without edges.
    ///
    /// # Panics
    ///
    /// Panics if `len * len` overflows `usize`. [`AdjacencyMatrix::from_edges`] and
    /// [`AdjacencyMatrix::from_rows`] report that case as [`Error::TooManyNodes`] instead.
    pub fn new(len: usize) -> Self {
        match Self::with_len(len) {
            Ok(m) => m,
            Err(_) => panic!("adjacency matrix for {len} nodes overflows usize"),
        }
    }

    fn with_len(len: usize) -> Result<Self> {
        let cells = len.checked_mul(len).ok_or(Error::TooManyNodes { len })?;
        Ok(Self {
            len,
            cells: vec![false; cells],
        })
    }

    /// Builds a matrix from dense rows of `0`/`1` entries.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let len = rows.len();
        let mut m = Self::with_len(len)?;
        for (row, entries) in rows.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != len {
                return Err(Error::NotSquare {
                    row,
                    expected: len,
                    found: entries.len(),
                });
            }
            for (col, &value) in entries.iter().enumerate() {
                match value {
                    0 => {}
                    1 => m.cells[row * len + col] = true,
                    _ => return Err(Error::InvalidAdjacencyEntry { row, col, value }),
                }
            }
        }
        Ok(m)
    }

    /// Builds a matrix from an edge list. With `symmetric`, every edge is set in both directions.
    pub fn from_edges<I>(len: usize, edges: I, symmetric: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut m = Self::with_len(len)?;
        for (from, to) in edges {
            if from >= len || to >= len {
                return Err(Error::EdgeOutOfBounds { from, to, len });
            }
            m.set_edge(from, to);
            if symmetric {
                m.set_edge(to, from);
            }
        }
        Ok(m)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is not below [`AdjacencyMatrix::len`].
    pub fn set_edge(&mut self, from: usize, to: usize) {
        assert!(from < self.len && to < self.len, "edge out of bounds");
        self.cells[from * self.len + to] = true;
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from < self.len && to < self.len && self.cells[from * self.len + to]
    }

    /// Outgoing neighbors of `node` in index order.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        let row = if node < self.len {
            &self.cells[node * self.len..(node + 1) * self.len]
        } else {
            &[][..]
        };
        row.iter()
            .enumerate()
            .filter_map(|(j, &set)| set.then_some(j))
    }

    pub(crate) fn row(&self, node: usize) -> &[bool] {
        &self.cells[node * self.len..(node + 1) * self.len]
    }
}
