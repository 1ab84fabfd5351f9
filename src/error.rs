//! Error types.

use thiserror::Error;

/// Failure of a tour construction or improvement call.
///
/// A failed call never returns a partial tour.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// The start index is outside `[0, size)`, or there are no points at all.
    #[error("start index {start} is out of range for {size} points")]
    InvalidStart {
        /// Requested start index.
        start: usize,
        /// Number of points in the distance matrix.
        size: usize,
    },

    /// Too few points for an operation that needs movable positions.
    #[error("{size} points are too few for this operation")]
    DegenerateInput {
        /// Number of points in the distance matrix.
        size: usize,
    },

    /// Solver parameters that would never run or never terminate.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl TourError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result alias for tour operations.
pub type Result<T> = std::result::Result<T, TourError>;
