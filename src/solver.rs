//! Algorithm selection and the top-level solve entry point.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::annealing::{simulated_annealing_with_cancel, AnnealingConfig};
use crate::constructive::nearest_neighbor_tour;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::local_search::two_opt_with_cancel;
use crate::models::Solution;

/// Tour algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Nearest-neighbor construction only.
    #[default]
    Greedy,
    /// Nearest-neighbor followed by 2-opt.
    #[serde(rename = "2opt")]
    TwoOpt,
    /// Nearest-neighbor followed by simulated annealing.
    SimulatedAnnealing,
}

impl Algorithm {
    /// All algorithms, in the order they are listed to users.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Greedy,
        Algorithm::TwoOpt,
        Algorithm::SimulatedAnnealing,
    ];

    /// Command-line name of the algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::TwoOpt => "2opt",
            Algorithm::SimulatedAnnealing => "simulated-annealing",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                format!("unknown algorithm '{s}', expected one of: greedy, 2opt, simulated-annealing")
            })
    }
}

/// Options shared by all algorithms.
///
/// # Examples
///
/// ```
/// use u_tour::solver::SolveOptions;
/// use u_tour::annealing::AnnealingConfig;
///
/// let options = SolveOptions::default()
///     .with_close_loop(true)
///     .with_annealing(AnnealingConfig::default().with_seed(9));
/// assert!(options.close_loop);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Return to the start point at the end of the route.
    pub close_loop: bool,

    /// Parameters for [`Algorithm::SimulatedAnnealing`].
    pub annealing: AnnealingConfig,

    /// Cooperative cancellation flag checked between passes.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SolveOptions {
    pub fn with_close_loop(mut self, close_loop: bool) -> Self {
        self.close_loop = close_loop;
        self
    }

    pub fn with_annealing(mut self, annealing: AnnealingConfig) -> Self {
        self.annealing = annealing;
        self
    }

    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Runs `algorithm` from `start` and measures the result.
///
/// The tour is always computed as an open path; when
/// [`SolveOptions::close_loop`] is set the return edge is added afterwards.
///
/// # Errors
///
/// Any [`TourError`](crate::error::TourError) raised by the chosen
/// algorithm.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::solver::{solve, Algorithm, SolveOptions};
///
/// let points = vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("B", 0.0, 1.0),
///     Point::new("C", 1.0, 1.0),
///     Point::new("D", 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let open = solve(&dm, 0, Algorithm::Greedy, &SolveOptions::default()).unwrap();
/// assert_eq!(open.order(), &[0, 1, 2, 3]);
///
/// let closed = solve(&dm, 0, Algorithm::Greedy, &SolveOptions::default().with_close_loop(true)).unwrap();
/// assert_eq!(closed.order(), &[0, 1, 2, 3, 0]);
/// assert!(closed.total_distance() > open.total_distance());
/// ```
pub fn solve(
    distances: &DistanceMatrix,
    start: usize,
    algorithm: Algorithm,
    options: &SolveOptions,
) -> Result<Solution> {
    let tour = match algorithm {
        Algorithm::Greedy => nearest_neighbor_tour(distances, start)?,
        Algorithm::TwoOpt => two_opt_with_cancel(distances, start, options.cancel.clone())?,
        Algorithm::SimulatedAnnealing => simulated_annealing_with_cancel(
            distances,
            start,
            &options.annealing,
            options.cancel.clone(),
        )?,
    };

    let mut solution = Solution::from_tour(tour, distances);
    if options.close_loop {
        solution.close_loop(distances);
    }

    info!(
        "{algorithm}: {} points, {} route, {:.2} km",
        solution.num_points(),
        if solution.is_closed() { "closed" } else { "open" },
        solution.total_distance()
    );
    Ok(solution)
}
