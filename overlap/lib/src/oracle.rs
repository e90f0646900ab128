//! Quadratic reference construction of the overlap graph, ported from the reference
//! `testset`/`graph_overlap_create` pair. Used only as an oracle in tests, to cross-
//! check the two linear-time constructions against brute force; never exported, never
//! linked into the CLI binary.

use std::collections::HashSet;

use setfamily::{Family, SetId};

use crate::graph::Graph;

#[derive(Debug, PartialEq, Eq)]
enum Relation {
    Overlap,
    Equal,
    Superset,
    Subset,
    Disjoint,
}

fn testset(family: &Family, a: SetId, b: SetId) -> Relation {
    let sa: HashSet<usize> = family.members(a).iter().copied().collect();
    let sb: HashSet<usize> = family.members(b).iter().copied().collect();

    let amb = sa.difference(&sb).count();
    let bma = sb.difference(&sa).count();
    let aib = sa.intersection(&sb).count();

    if amb > 0 && bma > 0 && aib > 0 {
        Relation::Overlap
    } else if amb == 0 && bma == 0 {
        Relation::Equal
    } else if amb == 0 {
        Relation::Superset
    } else if bma == 0 {
        Relation::Subset
    } else {
        Relation::Disjoint
    }
}

/// Builds the full overlap graph by testing every pair of sets directly: `O(size^2 *
/// grnd_size)`, nowhere near the linear-time bound the rest of this crate promises.
pub(crate) fn overlap_graph_oracle(family: &Family) -> Graph {
    let mut graph = Graph::new(family.len());
    let ids: Vec<SetId> = family.iter().map(|(id, _)| id).collect();

    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            if testset(family, a, b) == Relation::Overlap {
                graph.add_edge_unchecked(a, b);
            }
        }
    }

    graph.sort();
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_detects_genuine_overlap_only() {
        let mut family = Family::new(4);
        let a = family.add_set(&[0, 1]).unwrap();
        let b = family.add_set(&[1, 2]).unwrap();
        let c = family.add_set(&[0, 1, 2, 3]).unwrap();
        let d = family.add_set(&[3]).unwrap();

        assert_eq!(testset(&family, a, b), Relation::Overlap);
        assert_eq!(testset(&family, a, c), Relation::Subset);
        assert_eq!(testset(&family, c, a), Relation::Superset);
        assert_eq!(testset(&family, a, d), Relation::Disjoint);
        assert_eq!(testset(&family, c, c), Relation::Equal);
    }
}
