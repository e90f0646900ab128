use std::fmt;

/// Errors from building or mutating a [`Graph`](crate::Graph) directly. `compute_max`
/// and the two graph constructions never produce these themselves (they only ever
/// connect vertices that already exist, and never connect a vertex to itself); they
/// exist for the rarer case of a caller building a `Graph` by hand, e.g. the test
/// oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint was outside `[0, vertex_count)`.
    VertexOutOfRange { vertex: usize, vertex_count: usize },
    /// An edge both started and ended at the same vertex.
    SelfLoop { vertex: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GraphError::VertexOutOfRange { vertex, vertex_count } => write!(
                f,
                "vertex {vertex} is outside the graph's range [0, {vertex_count})"
            ),
            GraphError::SelfLoop { vertex } => {
                write!(f, "vertex {vertex} cannot be connected to itself")
            }
        }
    }
}

impl std::error::Error for GraphError {}
