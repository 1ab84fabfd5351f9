//! # u-tour
//!
//! Approximate shortest tours through a fixed set of geographic points,
//! starting from a designated point, as an open path or a round trip.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour, Solution)
//! - [`distance`] — Haversine distance and the dense distance matrix
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt segment-reversal improvement
//! - [`annealing`] — Simulated annealing on the `u-metaheur` SA runner
//! - [`solver`] — Algorithm selection and the [`solve`](solver::solve) entry point
//! - [`io`] — CSV loading and GeoJSON export
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use u_tour::models::Point;
//! use u_tour::distance::DistanceMatrix;
//! use u_tour::solver::{solve, Algorithm, SolveOptions};
//!
//! let points = vec![
//!     Point::new("Berlin", 52.5200, 13.4050),
//!     Point::new("Munich", 48.1351, 11.5820),
//!     Point::new("Hamburg", 53.5511, 9.9937),
//!     Point::new("Cologne", 50.9375, 6.9603),
//! ];
//! let dm = DistanceMatrix::from_points(&points);
//! let options = SolveOptions::default().with_close_loop(true);
//!
//! let solution = solve(&dm, 0, Algorithm::TwoOpt, &options).unwrap();
//! assert_eq!(solution.order().first(), Some(&0));
//! assert_eq!(solution.order().last(), Some(&0));
//! ```

pub mod annealing;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod io;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{Result, TourError};
