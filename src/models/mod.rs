//! Domain model types for geographic tours.
//!
//! Provides named points, tours as permutations of point indices, and the
//! solution handed back to callers.

mod point;
mod solution;
mod tour;

pub use point::Point;
pub use solution::Solution;
pub use tour::{path_length, Tour};
