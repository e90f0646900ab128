use itertools::Itertools;
use setfamily::{Family, SlIndex};

use crate::graph::Graph;

/// Builds the Dahlhaus graph: a sparse subgraph of the overlap graph that preserves
/// connected components, built in one pass over each ground element's membership
/// list.
///
/// For each ground element `e`, walks consecutive pairs `(set, set')` of sets
/// containing `e` and adds an edge whenever `set'` is no bigger than the largest
/// `Max`-witness size seen so far among sets containing `e` up to and including
/// `set`. `family` must already have `compute_max` applied (every set's `max` field
/// populated), since that's what `smax` tracks.
pub fn build_dahlhaus(family: &Family) -> Graph {
    let sl = SlIndex::build(family);
    let mut graph = Graph::new(family.len());
    let mut edges_added = 0usize;

    for e in 0..family.grnd_size() {
        let members: Vec<_> = sl.iter(e).collect();
        let mut smax: Option<usize> = None;

        for (set, next_set) in members.iter().copied().tuple_windows() {
            if let Some(max_id) = family.max(set) {
                let max_size = family.size(max_id);
                smax = Some(match smax {
                    Some(sm) if sm >= max_size => sm,
                    _ => max_size,
                });
            }
            if let Some(sm) = smax {
                if family.size(next_set) <= sm {
                    graph.add_edge_unchecked(set, next_set);
                    edges_added += 1;
                }
            }
        }
    }

    log::debug!("dahlhaus graph: {edges_added} candidate edges before dedup");
    graph.sort();
    graph
}
