//! Local search for improving tours.
//!
//! - [`two_opt`] — Segment-reversal (2-opt) improvement seeded from the
//!   nearest-neighbor tour

mod two_opt;

pub use two_opt::{two_opt, two_opt_improve, two_opt_improve_with_cancel, two_opt_with_cancel};
