//! Linear-time construction of the connected components of the overlap graph of a
//! set family.
//!
//! Two sets overlap if they intersect but neither contains the other. Given a family
//! of `n` subsets of a ground set of size `G`, this crate computes the connected
//! components of the graph whose edges are overlapping pairs, without ever building
//! that (potentially quadratic) graph: [`compute_max`] derives a linear number of
//! witness relationships via two partition-refinement passes over [`setfamily`], and
//! either [`build_dahlhaus`] or [`build_subgraph`] turns those witnesses into a sparse
//! graph with the same connected components as the full overlap graph.

mod compute_max;
mod dahlhaus;
mod error;
mod graph;
mod subgraph;

#[cfg(test)]
mod oracle;

pub use compute_max::compute_max;
pub use dahlhaus::build_dahlhaus;
pub use error::GraphError;
pub use graph::Graph;
pub use subgraph::build_subgraph;
