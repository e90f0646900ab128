use overlap_utils::{Arena, ArenaIdx};

use crate::family::{Family, SetId};

struct SlNode {
    set: SetId,
    next: Option<ArenaIdx>,
}

/// Per-ground-element membership lists, one singly-linked list per element.
///
/// Built by walking the (already sorted) family once and prepending each membership
/// onto its element's list, so construction is `O(sum of set sizes)`. The graph
/// builders (Dahlhaus, sparse overlap subgraph) both walk these lists once each;
/// neither ever needs random access into the family's raw membership vectors again.
pub struct SlIndex {
    heads: Vec<Option<ArenaIdx>>,
    nodes: Arena<SlNode>,
}

impl SlIndex {
    pub fn build(family: &Family) -> Self {
        let grnd_size = family.grnd_size();
        let mut heads = vec![None; grnd_size];
        let mut nodes = Arena::new();

        for (id, set) in family.iter() {
            for &e in set.members() {
                let node = nodes.alloc(SlNode { set: id, next: heads[e] });
                heads[e] = Some(node);
            }
        }

        Self { heads, nodes }
    }

    /// Walks the list for ground element `e`, starting at its head.
    pub fn iter(&self, e: usize) -> SlIter<'_> {
        SlIter {
            nodes: &self.nodes,
            current: self.heads[e],
        }
    }
}

pub struct SlIter<'a> {
    nodes: &'a Arena<SlNode>,
    current: Option<ArenaIdx>,
}

impl<'a> Iterator for SlIter<'a> {
    type Item = SetId;

    fn next(&mut self) -> Option<SetId> {
        let idx = self.current?;
        let node = &self.nodes[idx];
        self.current = node.next;
        Some(node.set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_membership_appears_exactly_once_per_element() {
        let mut family = Family::new(4);
        family.add_set(&[0, 1]).unwrap();
        family.add_set(&[1, 2]).unwrap();
        family.add_set(&[0, 2, 3]).unwrap();

        let sl = SlIndex::build(&family);
        assert_eq!(sl.iter(0).count(), 2);
        assert_eq!(sl.iter(1).count(), 2);
        assert_eq!(sl.iter(2).count(), 2);
        assert_eq!(sl.iter(3).count(), 1);
    }

    #[test]
    fn element_touched_by_no_set_has_an_empty_list() {
        let mut family = Family::new(3);
        family.add_set(&[0]).unwrap();
        let sl = SlIndex::build(&family);
        assert_eq!(sl.iter(1).count(), 0);
        assert_eq!(sl.iter(2).count(), 0);
    }
}
