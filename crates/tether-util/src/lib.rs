//! Small collection and option helpers.
//!
//! - [`diff`]: match two sequences with a comparator
//! - [`separate`]: split by a predicate, keeping order
//! - [`safe_get`]: bounds-checked indexing that never panics
//! - [`OrThrow`]: turn a missing value into an error

mod collections;
mod option;

pub use collections::{diff, safe_get, separate, Diff};
pub use option::OrThrow;
