//! Monte Carlo engine for European and arithmetic-average Asian options.

use op_core::{errors::Result, OptionParameters, Real, Settings, ValidationMode};
use op_math::NormalStream;
use op_methods::monte_carlo::{
    asian_arithmetic, european_antithetic, SimulationConfig, SimulationResult,
};
use tracing::debug;

use crate::validation::{check_count, check_finite, check_parameters};

const ENGINE: &str = "monte_carlo";

/// Monte Carlo simulator owning one normal stream.
///
/// Every priced call advances the stream, so two identical calls on the
/// same simulator give different estimates while two simulators built with
/// the same seed give bit-identical sequences. Clone the simulator (or its
/// [`stream`](Self::stream)) to checkpoint a position.
///
/// Pricing takes `&mut self`; concurrent callers own one simulator each,
/// typically seeded from [`NormalStream::split`].
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator {
    stream: NormalStream,
    validation: ValidationMode,
}

impl MonteCarloSimulator {
    /// Simulator drawing from a fresh stream seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::from_stream(NormalStream::new(seed))
    }

    /// Simulator continuing from an existing stream.
    pub fn from_stream(stream: NormalStream) -> Self {
        Self {
            stream,
            validation: Settings::instance().validation_mode(),
        }
    }

    /// Replace the validation mode.
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Current validation mode.
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// The stream the next call draws from.
    pub fn stream(&self) -> &NormalStream {
        &self.stream
    }

    /// Give up the simulator and keep its stream.
    pub fn into_stream(self) -> NormalStream {
        self.stream
    }

    /// European price from `paths` antithetic draws (`⌊paths/2⌋` pairs).
    pub fn european_option(&mut self, params: &OptionParameters, paths: usize) -> Result<Real> {
        self.european_option_with_error(params, paths)
            .map(|result| result.price)
    }

    /// [`european_option`](Self::european_option) with its standard error.
    ///
    /// Strict mode needs `paths >= 2` so at least one pair is drawn.
    pub fn european_option_with_error(
        &mut self,
        params: &OptionParameters,
        paths: usize,
    ) -> Result<SimulationResult> {
        check_parameters(self.validation, ENGINE, params)?;
        check_count(self.validation, ENGINE, "paths", paths, 2)?;

        let result = european_antithetic(params, paths, &mut self.stream);
        debug!(
            engine = ENGINE,
            ?params,
            paths,
            price = result.price,
            std_error = result.std_error,
            position = self.stream.position(),
            "european"
        );
        self.checked(result)
    }

    /// Arithmetic-average Asian price over `paths` paths of `steps` steps.
    pub fn asian_option(
        &mut self,
        params: &OptionParameters,
        paths: usize,
        steps: usize,
    ) -> Result<Real> {
        self.asian_option_with_error(params, paths, steps)
            .map(|result| result.price)
    }

    /// [`asian_option`](Self::asian_option) with its standard error.
    pub fn asian_option_with_error(
        &mut self,
        params: &OptionParameters,
        paths: usize,
        steps: usize,
    ) -> Result<SimulationResult> {
        check_parameters(self.validation, ENGINE, params)?;
        check_count(self.validation, ENGINE, "paths", paths, 1)?;
        check_count(self.validation, ENGINE, "steps", steps, 1)?;

        let result = asian_arithmetic(params, paths, steps, &mut self.stream);
        debug!(
            engine = ENGINE,
            ?params,
            paths,
            steps,
            price = result.price,
            std_error = result.std_error,
            position = self.stream.position(),
            "asian"
        );
        self.checked(result)
    }

    /// Run `config` on a fresh stream seeded from it.
    ///
    /// The simulator's own stream is not touched, so the same config always
    /// reproduces the same result. A configured step count selects the
    /// Asian estimator.
    pub fn price_with_config(
        &self,
        params: &OptionParameters,
        config: &SimulationConfig,
    ) -> Result<SimulationResult> {
        let mut simulator = Self::from_stream(config.stream()).with_validation(self.validation);
        match config.steps() {
            Some(steps) => simulator.asian_option_with_error(params, config.paths(), steps),
            None => simulator.european_option_with_error(params, config.paths()),
        }
    }

    fn checked(&self, result: SimulationResult) -> Result<SimulationResult> {
        check_finite(self.validation, ENGINE, "price", result.price)?;
        Ok(result)
    }
}

impl Default for MonteCarloSimulator {
    /// Simulator seeded with [`Settings::default_seed`].
    fn default() -> Self {
        Self::new(Settings::instance().default_seed())
    }
}
