use index_vec::{define_index_type, IndexVec};
use overlap_utils::{bucket_sort_by_key, ScratchGuard};

use crate::error::FamilyError;

define_index_type! {
    /// A set's position in the family. Reassigned by [`Family::sort`], so callers that
    /// hold on to a `SetId` across a `sort()` call will be pointing at the wrong set.
    pub struct SetId = usize;
}

/// One member of the family: its elements plus the fields `compute_max` fills in.
#[derive(Debug, Clone)]
pub struct Set {
    members: Vec<usize>,
    left: Option<usize>,
    right: Option<usize>,
    mleft: Option<usize>,
    mright: Option<usize>,
    max: Option<SetId>,
    ampos: Option<usize>,
}

impl Set {
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn left(&self) -> Option<usize> {
        self.left
    }

    pub fn right(&self) -> Option<usize> {
        self.right
    }

    pub fn mleft(&self) -> Option<usize> {
        self.mleft
    }

    pub fn mright(&self) -> Option<usize> {
        self.mright
    }

    pub fn max(&self) -> Option<SetId> {
        self.max
    }

    pub fn ampos(&self) -> Option<usize> {
        self.ampos
    }
}

/// A family of subsets of `0..grnd_size`.
///
/// Holds the raw membership data plus the per-set fields (`left`, `right`, `max`, ...)
/// that [`Refine`](crate::Refine) and the AM/SL indices fill in during `compute_max`.
/// `Family` itself only knows how to store and sort sets; it has no idea what `max`
/// means, it just has somewhere to put it.
pub struct Family {
    grnd_size: usize,
    sets: IndexVec<SetId, Set>,
    scratch: Vec<i32>,
}

impl Family {
    pub fn new(grnd_size: usize) -> Self {
        Self {
            grnd_size,
            sets: IndexVec::new(),
            scratch: vec![0; grnd_size],
        }
    }

    pub fn grnd_size(&self) -> usize {
        self.grnd_size
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn get(&self, id: SetId) -> &Set {
        &self.sets[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SetId, &Set)> {
        self.sets.iter_enumerated()
    }

    pub fn size(&self, id: SetId) -> usize {
        self.sets[id].size()
    }

    pub fn members(&self, id: SetId) -> &[usize] {
        &self.sets[id].members
    }

    pub fn left(&self, id: SetId) -> Option<usize> {
        self.sets[id].left
    }

    pub fn right(&self, id: SetId) -> Option<usize> {
        self.sets[id].right
    }

    pub fn mleft(&self, id: SetId) -> Option<usize> {
        self.sets[id].mleft
    }

    pub fn mright(&self, id: SetId) -> Option<usize> {
        self.sets[id].mright
    }

    pub fn max(&self, id: SetId) -> Option<SetId> {
        self.sets[id].max
    }

    pub fn ampos(&self, id: SetId) -> Option<usize> {
        self.sets[id].ampos
    }

    /// Adds a set, validating membership in `O(members.len())` via a scratch buffer.
    ///
    /// Rejects elements outside `[0, grnd_size)` and sets that repeat an element. Sets
    /// must be non-empty; that precondition is a caller bug, not recoverable input
    /// error, so it's an assertion rather than an `Err`.
    pub fn add_set(&mut self, members: &[usize]) -> Result<SetId, FamilyError> {
        assert!(!members.is_empty(), "sets must be non-empty");

        let grnd_size = self.grnd_size;
        let mut error = None;
        {
            let mut guard = ScratchGuard::new(&mut self.scratch);
            let mut touched = Vec::with_capacity(members.len());
            for &e in members {
                if e >= grnd_size {
                    error = Some(FamilyError::InvalidMember {
                        element: e,
                        grnd_size,
                    });
                    break;
                }
                if guard.get(e) != 0 {
                    error = Some(FamilyError::DuplicateMember { element: e });
                    break;
                }
                guard.increment(e);
                touched.push(e);
            }
            for e in touched {
                guard.reset(e);
            }
        }

        if let Some(err) = error {
            return Err(err);
        }

        Ok(self.sets.push(Set {
            members: members.to_vec(),
            left: None,
            right: None,
            mleft: None,
            mright: None,
            max: None,
            ampos: None,
        }))
    }

    /// Clears every `compute_max`-derived field, leaving membership untouched. Called
    /// between the two refinement passes so the second pass starts from a blank slate.
    pub fn clear(&mut self) {
        for set in self.sets.iter_mut() {
            set.left = None;
            set.right = None;
            set.mleft = None;
            set.mright = None;
            set.max = None;
            set.ampos = None;
        }
    }

    pub fn check_sort(&self) -> bool {
        self.sets
            .iter()
            .zip(self.sets.iter().skip(1))
            .all(|(a, b)| a.size() >= b.size())
    }

    /// Reorders sets into non-increasing size order (ties may land in any order). A
    /// no-op if the family is already sorted.
    pub fn sort(&mut self) {
        if self.check_sort() {
            log::trace!("family already sorted, skipping");
            return;
        }

        let max_size = self.grnd_size;
        let ids: Vec<SetId> = self.sets.indices().collect();
        let by_size = bucket_sort_by_key(&ids, max_size + 1, |&id| self.sets[id].size());

        let mut reordered: Vec<Set> = Vec::with_capacity(self.sets.len());
        for &id in by_size.iter().rev() {
            reordered.push(self.sets[id].clone());
        }
        self.sets = IndexVec::from_vec(reordered);
    }

    pub fn set_left_right(&mut self, id: SetId, left: usize, right: usize, mleft: usize, mright: usize) {
        let set = &mut self.sets[id];
        set.left = Some(left);
        set.right = Some(right);
        set.mleft = Some(mleft);
        set.mright = Some(mright);
    }

    pub fn set_max(&mut self, id: SetId, max: SetId) {
        self.sets[id].max = Some(max);
    }

    pub fn set_ampos(&mut self, id: SetId, pos: usize) {
        self.sets[id].ampos = Some(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_set_rejects_out_of_range_member() {
        let mut family = Family::new(4);
        let err = family.add_set(&[0, 4]).unwrap_err();
        assert_eq!(
            err,
            FamilyError::InvalidMember {
                element: 4,
                grnd_size: 4
            }
        );
    }

    #[test]
    fn add_set_rejects_duplicate_member() {
        let mut family = Family::new(4);
        let err = family.add_set(&[1, 2, 1]).unwrap_err();
        assert_eq!(err, FamilyError::DuplicateMember { element: 1 });
    }

    #[test]
    fn scratch_is_clean_after_rejected_set() {
        let mut family = Family::new(4);
        assert!(family.add_set(&[0, 1, 0]).is_err());
        // A later, valid set touching the same elements must succeed: if the scratch
        // buffer had been left dirty, this would spuriously look like a duplicate.
        assert!(family.add_set(&[0, 1]).is_ok());
    }

    #[test]
    fn sort_orders_by_non_increasing_size() {
        let mut family = Family::new(6);
        family.add_set(&[0]).unwrap();
        family.add_set(&[0, 1, 2]).unwrap();
        family.add_set(&[0, 1]).unwrap();
        assert!(!family.check_sort());

        family.sort();
        assert!(family.check_sort());
        let sizes: Vec<_> = family.iter().map(|(_, s)| s.size()).collect();
        assert_eq!(sizes, vec![3, 2, 1]);
    }

    #[test]
    fn clear_resets_derived_fields_but_keeps_members() {
        let mut family = Family::new(3);
        let id = family.add_set(&[0, 1]).unwrap();
        family.set_left_right(id, 0, 1, 0, 1);
        family.set_max(id, id);
        family.set_ampos(id, 0);

        family.clear();
        assert_eq!(family.left(id), None);
        assert_eq!(family.max(id), None);
        assert_eq!(family.members(id), &[0, 1]);
    }
}
