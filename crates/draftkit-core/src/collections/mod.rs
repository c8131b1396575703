//! Copy-on-write collections with the no-change identity contract.
//!
//! All four containers share one rule: an operation that leaves the
//! observable content unchanged returns a handle to the *same* allocation,
//! and [`ptr_eq`](ImmutableList::ptr_eq) reports that sharing. The editing
//! layer leans on this to decide whether an action did anything at all,
//! so the rule is part of the API, not an optimization.

mod immutable_id_map;
mod immutable_list;
mod immutable_map;
mod immutable_set;

pub use immutable_id_map::{ImmutableIdMap, WithId};
pub use immutable_list::ImmutableList;
pub use immutable_map::ImmutableMap;
pub use immutable_set::ImmutableSet;
