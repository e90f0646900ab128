use overlap_utils::bucket_sort_by_key;

use crate::family::{Family, SetId};

struct AmEntry {
    set: SetId,
    active: bool,
}

/// The "active maxima" index used by the second `compute_max` pass.
///
/// Built once, after every set's `left`/`right` have been computed, from a family
/// that's already sorted by non-increasing size. Entries are bucketed by `right`
/// (ties broken by ascending `left`, via two chained [`bucket_sort_by_key`] passes) so
/// that, for a fixed `right` value, sets are laid out in non-decreasing `left` order.
///
/// Each bucket carries its own cursor (`cursor[r]`) that only ever advances: once a
/// set has been assigned a witness or skipped over, it is never revisited. That
/// monotonicity is what keeps the whole second pass linear instead of quadratic.
pub struct AmIndex {
    entries: Vec<AmEntry>,
    cursor: Vec<usize>,
}

impl AmIndex {
    /// Builds the index and records each set's bucket position back into `family` via
    /// [`Family::set_ampos`].
    pub fn build(family: &mut Family) -> Self {
        let grnd_size = family.grnd_size();
        let ids: Vec<SetId> = (0..family.len()).map(SetId::from_usize).collect();

        let by_left = bucket_sort_by_key(&ids, grnd_size, |&id| {
            family
                .left(id)
                .expect("AmIndex::build requires left() to be set for every set")
        });
        let by_right = bucket_sort_by_key(&by_left, grnd_size, |&id| {
            family
                .right(id)
                .expect("AmIndex::build requires right() to be set for every set")
        });

        let mut bucket_counts = vec![0usize; grnd_size];
        for &id in &by_right {
            bucket_counts[family.right(id).unwrap()] += 1;
        }
        let mut cursor = vec![0usize; grnd_size];
        let mut running = 0;
        for r in 0..grnd_size {
            cursor[r] = running;
            running += bucket_counts[r];
        }

        let mut entries = Vec::with_capacity(by_right.len());
        for (pos, &id) in by_right.iter().enumerate() {
            family.set_ampos(id, pos);
            entries.push(AmEntry { set: id, active: true });
        }

        Self { entries, cursor }
    }

    /// Removes the set sitting at `pos` from future consideration.
    pub fn deactivate(&mut self, pos: usize) {
        self.entries[pos].active = false;
    }

    /// Assigns `witness` as `max` to every still-active set whose `right == r` and
    /// `left <= boundary`, consuming those entries from bucket `r`'s cursor. Stops at
    /// the first entry that either belongs to a different `right` bucket or whose
    /// `left` exceeds `boundary`; both signal the end of what this call can claim.
    pub fn assign_max_through(&mut self, family: &mut Family, r: usize, boundary: usize, witness: SetId) {
        loop {
            let pos = self.cursor[r];
            if pos >= self.entries.len() {
                break;
            }
            let set = self.entries[pos].set;
            if family.right(set) != Some(r) {
                break;
            }
            if !self.entries[pos].active {
                self.cursor[r] += 1;
                continue;
            }
            match family.left(set) {
                Some(left) if left <= boundary => {
                    family.set_max(set, witness);
                    self.cursor[r] += 1;
                }
                _ => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family_with_bounds(grnd_size: usize, bounds: &[(usize, usize)]) -> Family {
        let mut family = Family::new(grnd_size);
        for &(left, right) in bounds {
            let id = family.add_set(&[0]).unwrap();
            family.set_left_right(id, left, right, left, right);
        }
        family
    }

    #[test]
    fn build_orders_entries_by_right_then_left() {
        let mut family = family_with_bounds(6, &[(2, 5), (0, 5), (1, 3), (0, 3)]);
        let _am = AmIndex::build(&mut family);

        let mut by_pos: Vec<_> = family.iter().map(|(id, s)| (s.ampos().unwrap(), id)).collect();
        by_pos.sort_by_key(|&(pos, _)| pos);
        let rights: Vec<_> = by_pos.iter().map(|&(_, id)| family.right(id).unwrap()).collect();
        assert_eq!(rights, vec![3, 3, 5, 5]);
    }

    #[test]
    fn assign_max_through_stops_at_left_boundary() {
        let mut family = family_with_bounds(6, &[(0, 5), (2, 5), (4, 5)]);
        let mut am = AmIndex::build(&mut family);
        let ids: Vec<_> = family.iter().map(|(id, _)| id).collect();
        let witness = ids[0];

        am.assign_max_through(&mut family, 5, 2, witness);

        let maxed: Vec<_> = family.iter().filter(|(_, s)| s.max().is_some()).map(|(id, _)| id).collect();
        // Only the two sets with left <= 2 should have been assigned a witness.
        assert_eq!(maxed.len(), 2);
    }
}
