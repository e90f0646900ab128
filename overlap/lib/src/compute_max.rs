use setfamily::{AmIndex, Family, NoopVisitor, Refine, RefineVisitor, SetId};

/// Visitor for the second refinement pass: every time a class splits while refining by
/// `witness`, the positions that moved into the new (high) part of the class are
/// exactly the `right` values of sets whose left/right window is, for the first time,
/// split by `witness`, so `witness` is their `Max`.
struct MaxVisitor<'a> {
    family: &'a mut Family,
    am: &'a mut AmIndex,
    witness: SetId,
}

impl<'a> RefineVisitor for MaxVisitor<'a> {
    fn on_split(&mut self, _class_start: usize, split_at: usize, class_end: usize) {
        for right in (split_at + 1)..=class_end {
            self.am.assign_max_through(self.family, right, split_at, self.witness);
        }
    }
}

/// Computes, for every set in `family`, its `Max` witness: the first set `Y` (taken in
/// non-increasing-size order) whose refinement separates the set's leftmost member
/// from its rightmost member. Sets with no such witness keep `max() == None`.
///
/// Sorts `family` first (a no-op if it's already sorted), so callers can add sets in
/// any order before calling this. Runs in `O(grnd_size + sum of set sizes)`: one
/// refinement pass to learn each set's `left`/`right` window, then a second refinement
/// pass, driven by an AM index whose cursors only ever advance, to assign witnesses.
pub fn compute_max(family: &mut Family) {
    family.sort();
    let grnd_size = family.grnd_size();
    let ids: Vec<SetId> = family.iter().map(|(id, _)| id).collect();
    log::debug!("compute_max: {} sets over a ground set of size {grnd_size}", ids.len());

    let mut refine = Refine::new(grnd_size);
    let mut noop = NoopVisitor;
    for &id in &ids {
        let members = family.members(id).to_vec();
        refine.refine(&members, &mut noop);
    }

    for &id in &ids {
        let mut left = None;
        let mut right = None;
        let mut mleft = 0;
        let mut mright = 0;
        for &e in family.members(id) {
            let pos = refine.position(e);
            let is_new_left = match left {
                None => true,
                Some(l) => pos < l,
            };
            if is_new_left {
                left = Some(pos);
                mleft = e;
            }
            let is_new_right = match right {
                None => true,
                Some(r) => pos > r,
            };
            if is_new_right {
                right = Some(pos);
                mright = e;
            }
        }
        family.set_left_right(
            id,
            left.expect("sets are non-empty"),
            right.expect("sets are non-empty"),
            mleft,
            mright,
        );
    }

    let mut am = AmIndex::build(family);

    let mut refine = Refine::new(grnd_size);
    let mut size_class_start = 0;
    for (i, &id) in ids.iter().enumerate() {
        let members = family.members(id).to_vec();
        {
            let mut visitor = MaxVisitor {
                family: &mut *family,
                am: &mut am,
                witness: id,
            };
            refine.refine(&members, &mut visitor);
        }

        let is_last = i == ids.len() - 1;
        let next_size_differs = !is_last && family.size(ids[i + 1]) != family.size(id);
        if is_last || next_size_differs {
            // Every set in this size class is done being a candidate Max witness for
            // anything smaller; retire them from the AM structure all at once.
            while size_class_start <= i {
                let pos = family
                    .ampos(ids[size_class_start])
                    .expect("AmIndex::build records ampos for every set");
                am.deactivate(pos);
                size_class_start += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setfamily::Family;

    #[test]
    fn disjoint_sets_have_no_max() {
        let mut family = Family::new(4);
        family.add_set(&[0, 1]).unwrap();
        family.add_set(&[2, 3]).unwrap();
        compute_max(&mut family);

        for (_, set) in family.iter() {
            assert_eq!(set.max(), None);
        }
    }

    #[test]
    fn two_overlapping_sets_witness_each_other_or_the_larger_one() {
        // {0,1,2} and {1,2,3} overlap: neither contains the other, and they share 1,2.
        let mut family = Family::new(4);
        family.add_set(&[0, 1, 2]).unwrap();
        family.add_set(&[1, 2, 3]).unwrap();
        compute_max(&mut family);

        // With only two sets in the family, whichever one is processed first in the
        // second pass is the only candidate witness for the other.
        let maxes: Vec<_> = family.iter().map(|(_, s)| s.max().is_some()).collect();
        assert!(maxes.iter().any(|&has_max| has_max));
    }
}
