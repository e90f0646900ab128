use overlap_utils::{Arena, ArenaIdx};
use setfamily::{Family, SetId, SlIndex};

use crate::graph::Graph;

/// A candidate overlap edge, pending confirmation against an SL membership list.
///
/// `right` is the ground element `mright(y)`; quintuples are first bucketed by
/// `mleft(y)` (to check against `SL(mleft(y))`), then, for survivors, rebucketed by
/// `right` (to check against `SL(mright(y))`).
#[derive(Clone, Copy)]
struct Quintuple {
    right: usize,
    x: SetId,
    y: SetId,
    maxx: SetId,
    next: Option<ArenaIdx>,
}

fn reverse_list(head: Option<ArenaIdx>, arena: &mut Arena<Quintuple>) -> Option<ArenaIdx> {
    let mut prev = None;
    let mut current = head;
    while let Some(idx) = current {
        let next = arena[idx].next;
        arena[idx].next = prev;
        prev = Some(idx);
        current = next;
    }
    prev
}

/// Builds a sparse subgraph of the overlap graph that preserves connected components,
/// by generating at most one candidate edge per (set, ground element) pair and
/// confirming each one against a membership list in `O(1)` amortised.
///
/// `family` must already have `compute_max` applied. Independent of [`build_dahlhaus`]
/// (different sparsification, same guarantee on components), used in tests to
/// cross-check connected-component results.
pub fn build_subgraph(family: &Family) -> Graph {
    let grnd_size = family.grnd_size();
    let sl = SlIndex::build(family);
    let mut graph = Graph::new(family.len());

    let mut arena: Arena<Quintuple> = Arena::new();
    let mut ql: Vec<Option<ArenaIdx>> = vec![None; grnd_size];

    for e in 0..grnd_size {
        let members: Vec<SetId> = sl.iter(e).collect();
        let mut x: Option<SetId> = None;
        let mut maxx: Option<SetId> = None;
        let mut smax: Option<usize> = None;

        for &set in &members {
            if let Some(m) = family.max(set) {
                graph.add_edge_unchecked(set, m);
            }

            if let Some(sm) = smax {
                if family.size(set) <= sm && maxx != Some(set) {
                    let left = family
                        .mleft(set)
                        .expect("compute_max populates mleft for every set");
                    let right = family
                        .mright(set)
                        .expect("compute_max populates mright for every set");
                    let node = Quintuple {
                        right,
                        x: x.expect("smax is only ever set alongside x"),
                        y: set,
                        maxx: maxx.expect("smax is only ever set alongside maxx"),
                        next: ql[left],
                    };
                    ql[left] = Some(arena.alloc(node));
                }
            }

            if let Some(m) = family.max(set) {
                let max_size = family.size(m);
                let improves = match smax {
                    Some(sm) => max_size > sm,
                    None => true,
                };
                if improves {
                    x = Some(set);
                    maxx = Some(m);
                    smax = Some(max_size);
                }
            }
        }
    }

    for head in ql.iter_mut() {
        *head = reverse_list(*head, &mut arena);
    }

    let mut qr: Vec<Option<ArenaIdx>> = vec![None; grnd_size];
    for e in 0..grnd_size {
        let members: Vec<SetId> = sl.iter(e).collect();
        let mut cursor = 0usize;
        let mut node = ql[e];
        while let Some(idx) = node {
            let quintuple = arena[idx];
            let next = quintuple.next;
            while cursor < members.len() && members[cursor] < quintuple.y {
                cursor += 1;
            }
            if cursor < members.len() && members[cursor] == quintuple.y {
                arena[idx].next = qr[quintuple.right];
                qr[quintuple.right] = Some(idx);
                cursor += 1;
            } else {
                graph.add_edge_unchecked(quintuple.y, quintuple.x);
            }
            node = next;
        }
    }

    for head in qr.iter_mut() {
        *head = reverse_list(*head, &mut arena);
    }

    for e in 0..grnd_size {
        let members: Vec<SetId> = sl.iter(e).collect();
        let mut cursor = 0usize;
        let mut node = qr[e];
        while let Some(idx) = node {
            let quintuple = arena[idx];
            let next = quintuple.next;
            while cursor < members.len() && members[cursor] < quintuple.y {
                cursor += 1;
            }
            if cursor < members.len() && members[cursor] == quintuple.y {
                graph.add_edge_unchecked(quintuple.y, quintuple.maxx);
                cursor += 1;
            } else {
                graph.add_edge_unchecked(quintuple.y, quintuple.x);
            }
            node = next;
        }
    }

    graph.sort();
    graph
}
