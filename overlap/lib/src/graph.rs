use setfamily::SetId;

use crate::error::GraphError;

/// An undirected multigraph over `0..vertex_count`, represented as adjacency lists.
///
/// Vertices are set ids from the family whose overlap graph this is, so edges connect
/// two sets that are known to overlap. `add_edge` is append-only and cheap
/// (amortised `O(1)`); duplicate and reversed-duplicate edges are expected to
/// accumulate during construction and are only cleaned up once, by [`Graph::sort`].
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<SetId>>,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn neighbours(&self, v: SetId) -> &[SetId] {
        &self.adjacency[v.index()]
    }

    /// Adds an edge `{a, b}` to both adjacency lists.
    ///
    /// Used internally by `compute_max`'s graph builders, which already guarantee
    /// `a != b` and both in range; those callers go through [`Graph::add_edge_unchecked`]
    /// instead to skip the repeated validation. This checked entry point exists for
    /// callers (principally the test oracle) building a graph directly from untrusted
    /// or hand-written edge lists.
    pub fn add_edge(&mut self, a: SetId, b: SetId) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        if a.index() >= vertex_count {
            return Err(GraphError::VertexOutOfRange { vertex: a.index(), vertex_count });
        }
        if b.index() >= vertex_count {
            return Err(GraphError::VertexOutOfRange { vertex: b.index(), vertex_count });
        }
        if a == b {
            return Err(GraphError::SelfLoop { vertex: a.index() });
        }
        self.add_edge_unchecked(a, b);
        Ok(())
    }

    pub(crate) fn add_edge_unchecked(&mut self, a: SetId, b: SetId) {
        debug_assert!(a != b, "self-loop at vertex {}", a.index());
        debug_assert!(
            a.index() < self.adjacency.len() && b.index() < self.adjacency.len(),
            "vertex out of range: {} / {} (vertex_count {})",
            a.index(),
            b.index(),
            self.adjacency.len()
        );
        self.adjacency[a.index()].push(b);
        self.adjacency[b.index()].push(a);
    }

    /// Deduplicates and rebuilds each adjacency list in descending order.
    ///
    /// Descending order is arbitrary; dedup is the part that matters, turning the
    /// edge multiset built up during construction into a simple graph. Sorting is
    /// just a cheap way to get there, and gives deterministic output for a fixed
    /// edge set.
    pub fn sort(&mut self) {
        for neighbours in &mut self.adjacency {
            neighbours.sort_unstable_by(|a, b| b.cmp(a));
            neighbours.dedup();
        }
    }

    /// Labels each vertex with its (1-based) connected component and returns the
    /// component count alongside, via an explicit stack-based DFS (never recursive:
    /// ground sets large enough to matter would blow a call-stack-based DFS before
    /// they'd trouble this one).
    pub fn connected_components(&self) -> (Vec<usize>, usize) {
        let n = self.vertex_count();
        let mut labels = vec![0usize; n];
        let mut next_label = 1;
        let mut stack = Vec::new();

        for start in 0..n {
            if labels[start] != 0 {
                continue;
            }
            labels[start] = next_label;
            stack.push(SetId::from_usize(start));
            while let Some(v) = stack.pop() {
                for &w in self.neighbours(v) {
                    if labels[w.index()] == 0 {
                        labels[w.index()] = next_label;
                        stack.push(w);
                    }
                }
            }
            next_label += 1;
        }

        (labels, next_label - 1)
    }
}
