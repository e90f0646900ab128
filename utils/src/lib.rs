//! Small helpers shared across the `overlap-components` workspace: a bump-allocated
//! arena for intrusive, many-small-objects data structures (refine classes, SL cells,
//! quintuples), a borrowed scratch-buffer guard, and a generic two-pass bucket sort.
//!
//! None of this is specific to set families or graphs; it exists purely so that the
//! `setfamily` and `overlap-graph` crates don't each reinvent the same bump-pool and
//! counting-sort plumbing.

mod arena;
mod bucket_sort;
mod scratch;

pub use arena::{Arena, ArenaIdx};
pub use bucket_sort::bucket_sort_by_key;
pub use scratch::ScratchGuard;
