//! Simulated annealing parameters.

use u_metaheur::sa::{CoolingSchedule, SaConfig};

use crate::error::{Result, TourError};

/// Configuration for the simulated annealing improver.
///
/// Temperature starts at `initial_temperature`, is multiplied by
/// `cooling_rate` after every iteration, and the run stops once it is no
/// longer above `min_temperature`.
///
/// # Examples
///
/// ```
/// use u_tour::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.99)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingConfig {
    /// Starting temperature.
    pub initial_temperature: f64,

    /// Multiplicative cooling factor per iteration, in (0, 1).
    pub cooling_rate: f64,

    /// The run stops when the temperature drops to this value.
    pub min_temperature: f64,

    /// Random seed. `None` draws a fresh seed for every run.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            cooling_rate: 0.995,
            min_temperature: 1e-8,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling_rate = alpha;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// An initial temperature at or below the minimum is valid: the schedule
    /// has no steps and the annealer returns its seed tour unchanged (see
    /// [`has_steps`](Self::has_steps)). A minimum of `0` is allowed; the
    /// run then ends once the temperature underflows.
    ///
    /// # Errors
    ///
    /// [`TourError::Configuration`] if a temperature is not finite, the
    /// minimum temperature is negative, or the cooling rate is outside
    /// (0, 1). Each of these would keep the temperature above the minimum
    /// forever or stop it from cooling.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() {
            return Err(TourError::configuration(format!(
                "initial_temperature must be finite, got {}",
                self.initial_temperature
            )));
        }
        if !self.min_temperature.is_finite() || self.min_temperature < 0.0 {
            return Err(TourError::configuration(format!(
                "min_temperature must be finite and non-negative, got {}",
                self.min_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(TourError::configuration(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }

    /// Returns `true` if the temperature starts above the stopping point,
    /// so at least one move is tried.
    pub fn has_steps(&self) -> bool {
        self.initial_temperature > self.stop_temperature()
    }

    /// Stopping temperature handed to the runner, which needs it positive.
    fn stop_temperature(&self) -> f64 {
        self.min_temperature.max(f64::MIN_POSITIVE)
    }

    /// Runner settings: geometric cooling with one move per temperature.
    ///
    /// Only meaningful for a validated config with [`has_steps`](Self::has_steps).
    pub(crate) fn to_sa_config(&self) -> SaConfig {
        let config = SaConfig::default()
            .with_initial_temperature(self.initial_temperature)
            .with_min_temperature(self.stop_temperature())
            .with_cooling(CoolingSchedule::Geometric {
                alpha: self.cooling_rate,
            })
            .with_iterations_per_temperature(1)
            .with_max_iterations(0);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
