//! Linear-time partition refinement over a family of subsets of a finite ground set.
//!
//! This crate owns the data model (`Family`) and the two index structures the second
//! `compute_max` pass needs (`AmIndex`, `SlIndex`), plus the ordered-partition refiner
//! (`Refine`) both passes share. It has no notion of "graph": building the overlap
//! graph out of `max()` witnesses is `overlap-graph`'s job, one layer up.

#![deny(clippy::all)]

mod am;
mod error;
mod family;
mod refine;
mod sl;

pub use am::AmIndex;
pub use error::FamilyError;
pub use family::{Family, Set, SetId};
pub use refine::{NoopVisitor, Refine, RefineVisitor};
pub use sl::SlIndex;
