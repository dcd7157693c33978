//! Monte Carlo simulation configuration.
//!
//! A [`SimulationConfig`] is validated once by its builder and then priced
//! on a fresh [`NormalStream`] seeded from it, so one config always
//! reproduces the same estimate.

use op_core::{ensure, errors::Result, Error, Settings};
use op_math::NormalStream;

/// Validated Monte Carlo run settings.
///
/// # Examples
///
/// ```rust
/// use op_methods::monte_carlo::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .paths(10_000)
///     .steps(12)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.paths(), 10_000);
/// assert_eq!(config.steps(), Some(12));
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    paths: usize,
    steps: Option<usize>,
    seed: u64,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Number of simulated paths `N`.
    #[inline]
    pub fn paths(&self) -> usize {
        self.paths
    }

    /// Averaging steps per path `M`; `None` prices the terminal payoff.
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.steps
    }

    /// Seed of the stream the run draws from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// `true` when a step count selects the arithmetic-average payoff.
    #[inline]
    pub fn is_path_dependent(&self) -> bool {
        self.steps.is_some()
    }

    /// A fresh stream positioned at the start of this run.
    pub fn stream(&self) -> NormalStream {
        NormalStream::new(self.seed)
    }
}

/// Builder for [`SimulationConfig`].
///
/// The seed falls back to [`Settings::default_seed`] as read at
/// [`build`](Self::build) time.
#[derive(Debug, Clone, Default)]
pub struct SimulationConfigBuilder {
    paths: Option<usize>,
    steps: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of paths. Terminal-payoff runs pair paths
    /// antithetically and need at least 2.
    #[inline]
    pub fn paths(mut self, paths: usize) -> Self {
        self.paths = Some(paths);
        self
    }

    /// Sets the number of averaging steps and selects the Asian payoff.
    #[inline]
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the path count is missing, a terminal-payoff
    /// run has fewer than 2 paths, or a step count of 0 was given.
    pub fn build(self) -> Result<SimulationConfig> {
        let paths = self
            .paths
            .ok_or_else(|| Error::InvalidParameter("path count not set".into()))?;
        match self.steps {
            Some(steps) => {
                ensure!(paths >= 1, "paths must be at least 1, got {paths}");
                ensure!(steps >= 1, "steps must be at least 1, got {steps}");
            }
            None => {
                ensure!(
                    paths >= 2,
                    "paths must be at least 2 for antithetic pairing, got {paths}"
                );
            }
        }
        Ok(SimulationConfig {
            paths,
            steps: self.steps,
            seed: self.seed.unwrap_or_else(|| Settings::instance().default_seed()),
        })
    }
}
