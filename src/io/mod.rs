//! Input and output around the solvers.
//!
//! - [`load_points`] — read named coordinates from CSV
//! - [`find_start`] — resolve a start point by name
//! - [`route_geojson`] / [`write_geojson`] — export a route as GeoJSON

mod geojson;
mod points;

pub use geojson::{route_geojson, write_geojson};
pub use points::{find_start, load_points, read_points};

use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading points or writing a route.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A file could not be opened, read or written.
    #[error("{}: {source}", path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV input.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A GeoJSON document could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
