//! Distance model.
//!
//! Great-circle (haversine) distances and the dense matrix built from them.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
