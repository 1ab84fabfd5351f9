//! Simulated annealing improver.
//!
//! Starts from the nearest-neighbor tour and runs the
//! [`SaRunner`](u_metaheur::sa::SaRunner) with random segment reversals,
//! geometric cooling and one move per temperature step. A worse candidate
//! is accepted with probability `exp((current - candidate) / T)`. The best
//! tour seen over the whole run is returned.
//!
//! Runs are reproducible when [`AnnealingConfig::seed`] is set.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod problem;

pub use config::AnnealingConfig;
pub use problem::TourAnnealingProblem;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::debug;
use u_metaheur::sa::SaRunner;

use crate::constructive::nearest_neighbor_tour;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};
use crate::models::Tour;

/// Builds a nearest-neighbor tour from `start` and anneals it.
///
/// Tours with fewer than three points cannot form a move and are returned
/// as built. So is every tour when the schedule has no steps, that is when
/// the initial temperature does not exceed the minimum.
///
/// # Errors
///
/// - [`TourError::InvalidStart`] from the nearest-neighbor seed, checked
///   first.
/// - [`TourError::Configuration`] if `config` fails
///   [`validate`](AnnealingConfig::validate).
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::nearest_neighbor_tour;
/// use u_tour::annealing::{simulated_annealing, AnnealingConfig};
///
/// let points = vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("B", 0.5, 2.0),
///     Point::new("C", 2.0, 0.3),
///     Point::new("D", 1.8, 2.2),
///     Point::new("E", 1.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let config = AnnealingConfig::default().with_seed(42);
///
/// let greedy = nearest_neighbor_tour(&dm, 0).unwrap();
/// let annealed = simulated_annealing(&dm, 0, &config).unwrap();
/// assert_eq!(annealed.start(), Some(0));
/// assert!(annealed.length(&dm) <= greedy.length(&dm));
/// ```
pub fn simulated_annealing(
    distances: &DistanceMatrix,
    start: usize,
    config: &AnnealingConfig,
) -> Result<Tour> {
    simulated_annealing_with_cancel(distances, start, config, None)
}

/// Like [`simulated_annealing`], checking `cancel` at each temperature step.
///
/// When the flag is raised the best tour found so far is returned.
pub fn simulated_annealing_with_cancel(
    distances: &DistanceMatrix,
    start: usize,
    config: &AnnealingConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<Tour> {
    let seed = nearest_neighbor_tour(distances, start)?;
    config.validate()?;
    if !config.has_steps() {
        debug!(
            "annealing skipped: initial temperature {} not above minimum {}",
            config.initial_temperature, config.min_temperature
        );
        return Ok(seed);
    }

    let problem = match TourAnnealingProblem::new(distances, &seed) {
        Ok(problem) => problem,
        Err(TourError::DegenerateInput { size }) => {
            debug!("annealing skipped: {size} points leave nothing to move");
            return Ok(seed);
        }
        Err(e) => return Err(e),
    };

    let result = SaRunner::run_with_cancel(&problem, &config.to_sa_config(), cancel);
    debug!(
        "annealing: {} iterations, {} accepted, {} improving, final T {:.3e}, best {:.3}{}",
        result.iterations,
        result.accepted_moves,
        result.improving_moves,
        result.final_temperature,
        result.best_cost,
        if result.cancelled { " (cancelled)" } else { "" }
    );

    Ok(Tour::new_unchecked(result.best))
}
