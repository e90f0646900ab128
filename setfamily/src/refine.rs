use std::collections::HashSet;

use overlap_utils::{Arena, ArenaIdx};

/// Callback invoked by [`Refine::refine`] whenever a refining set splits a class.
///
/// `class_start` and `class_end` are the (inclusive) bounds of the class *before* the
/// split, in the ordered-partition's position space; `split_at` is the last position
/// still belonging to the untouched remainder, i.e. the new class occupies
/// `(split_at+1)..=class_end` and the old class shrinks to `class_start..=split_at`.
pub trait RefineVisitor {
    fn on_split(&mut self, class_start: usize, split_at: usize, class_end: usize);
}

/// A visitor that does nothing: used for the first `compute_max` pass, which only
/// needs the ordering `Refine` maintains, not the split notifications.
pub struct NoopVisitor;

impl RefineVisitor for NoopVisitor {
    fn on_split(&mut self, _class_start: usize, _split_at: usize, _class_end: usize) {}
}

struct Class {
    start: usize,
    end: usize,
    mark: usize,
}

#[derive(Clone, Copy)]
struct Elem {
    member: usize,
    class: ArenaIdx,
}

/// An ordered partition of `0..size`, refined in place by successive calls to
/// [`refine`](Refine::refine).
///
/// Positions `0..size` hold the ground elements, grouped into contiguous classes;
/// `refine(X, _)` splits every class that `X` intersects without containing, moving the
/// members of `X` within each such class to its high end. Each call costs `O(|X|)` plus
/// the number of classes split, never `O(size)`.
pub struct Refine {
    t: Vec<Elem>,
    ind: Vec<usize>,
    classes: Arena<Class>,
}

impl Refine {
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "refine structure needs a non-empty ground set");
        let mut classes = Arena::with_capacity(size);
        let class0 = classes.alloc(Class {
            start: 0,
            end: size - 1,
            mark: 0,
        });
        let t = (0..size)
            .map(|member| Elem {
                member,
                class: class0,
            })
            .collect();
        let ind = (0..size).collect();
        Self { t, ind, classes }
    }

    /// The position of ground element `e` in the current ordering.
    pub fn position(&self, e: usize) -> usize {
        self.ind[e]
    }

    /// The ground element currently sitting at position `pos`.
    pub fn member_at(&self, pos: usize) -> usize {
        self.t[pos].member
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.t.swap(a, b);
        self.ind[self.t[a].member] = a;
        self.ind[self.t[b].member] = b;
    }

    /// Refines the partition by `x`, notifying `visitor` of every class split.
    ///
    /// `x` must not repeat an element; that precondition is checked in debug builds
    /// only, matching the style of the other ground-set-indexed structures here.
    pub fn refine(&mut self, x: &[usize], visitor: &mut dyn RefineVisitor) {
        debug_assert!(
            x.iter().copied().collect::<HashSet<usize>>().len() == x.len(),
            "refine's x must not repeat an element"
        );

        let mut hit: Vec<ArenaIdx> = Vec::with_capacity(x.len());
        let mut hit_seen: HashSet<ArenaIdx> = HashSet::with_capacity(x.len());

        for &e in x {
            let pos = self.ind[e];
            let class = self.t[pos].class;

            if hit_seen.insert(class) {
                hit.push(class);
            }

            let c_end = self.classes[class].end;
            let c_mark = self.classes[class].mark;
            self.swap(pos, c_end - c_mark);
            self.classes[class].mark += 1;
        }

        for class in hit {
            let (start, end, mark) = {
                let c = &self.classes[class];
                (c.start, c.end, c.mark)
            };
            let class_len = end - start + 1;

            if mark < class_len {
                let split_at = end - mark;
                visitor.on_split(start, split_at, end);

                let new_class = self.classes.alloc(Class {
                    start: split_at + 1,
                    end,
                    mark: 0,
                });
                for pos in (split_at + 1)..=end {
                    self.t[pos].class = new_class;
                }
                self.classes[class].end = split_at;
            }
            self.classes[class].mark = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingVisitor {
        splits: Vec<(usize, usize, usize)>,
    }

    impl RefineVisitor for RecordingVisitor {
        fn on_split(&mut self, class_start: usize, split_at: usize, class_end: usize) {
            self.splits.push((class_start, split_at, class_end));
        }
    }

    #[test]
    fn single_class_refine_splits_in_two() {
        let mut refine = Refine::new(5);
        let mut visitor = RecordingVisitor { splits: Vec::new() };
        refine.refine(&[1, 3], &mut visitor);
        assert_eq!(visitor.splits, vec![(0, 2, 4)]);

        // Elements 1 and 3 (in some order) now occupy positions 3 and 4.
        let tail: Vec<_> = (3..=4).map(|p| refine.member_at(p)).collect();
        assert!(tail.contains(&1) && tail.contains(&3));
    }

    #[test]
    fn refining_by_the_whole_ground_set_never_splits() {
        let mut refine = Refine::new(4);
        let mut visitor = RecordingVisitor { splits: Vec::new() };
        refine.refine(&[0, 1, 2, 3], &mut visitor);
        assert!(visitor.splits.is_empty());
    }

    #[test]
    fn repeated_refines_only_ever_shrink_classes() {
        let mut refine = Refine::new(6);
        let mut noop = NoopVisitor;
        refine.refine(&[0, 1, 2], &mut noop);
        refine.refine(&[0, 3], &mut noop);
        refine.refine(&[1], &mut noop);

        // Every element still maps back to the position holding it.
        for e in 0..6 {
            assert_eq!(refine.member_at(refine.position(e)), e);
        }
    }
}
