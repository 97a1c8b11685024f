//! Module to contain definition of an [`Edge`] and the path topology.

/// An undirected edge between two nodes.
pub type Edge = (u64, u64);

/// Path graph over the nodes `0..nodes`.
///
/// Every node `i` is connected to node `i + 1`, so the graph is connected and acyclic
/// with exactly `nodes - 1` edges.
#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct PathGraph {
    /// Number of distinct node ids on the path.
    nodes: u64,
}

impl PathGraph {
    /// Create a path spanning `nodes` node ids.
    ///
    /// # Arguments
    /// * `nodes` - The number of node ids, `0..nodes`.
    pub fn new(nodes: u64) -> Self {
        PathGraph { nodes }
    }

    /// Number of node ids on the path.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Number of edges on the path. Zero for a path with fewer than two nodes.
    pub fn edge_count(&self) -> u64 {
        self.nodes.saturating_sub(1)
    }

    /// Last edge of the path, if there is one.
    pub fn last_edge(&self) -> Option<Edge> {
        if self.nodes >= 2 {
            Some((self.nodes - 2, self.nodes - 1))
        } else {
            None
        }
    }
}

impl IntoIterator for PathGraph {
    type Item = Edge;
    type IntoIter = PathIterator;

    fn into_iter(self) -> Self::IntoIter {
        PathIterator::from(self)
    }
}

/// Iterator over the edges of a [`PathGraph`], in order from node `0`.
#[derive(Clone, Debug)]
pub struct PathIterator {
    /// Left node of the next edge.
    i: u64,
    /// Path we're iterating over.
    p: PathGraph,
}

impl From<PathGraph> for PathIterator {
    fn from(p: PathGraph) -> Self {
        Self { i: 0, p }
    }
}

impl Iterator for PathIterator {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i + 1 < self.p.nodes {
            let c_i = self.i;
            self.i += 1;
            Some((c_i, c_i + 1))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.p.edge_count().saturating_sub(self.i) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathIterator {}
