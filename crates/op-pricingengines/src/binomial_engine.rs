//! American option engine on a Cox-Ross-Rubinstein binomial tree.

use op_core::{ensure_stable, errors::Result, OptionParameters, Real, Settings, ValidationMode};
use op_methods::lattice::{price_american, BinomialTree};
use tracing::{debug, warn};

use crate::validation::{check_count, check_finite, check_parameters};
use crate::PricingEngine;

const ENGINE: &str = "binomial_american";

/// Binomial pricing engine for American vanilla options.
///
/// Early exercise is tested at every node, including the root. The tree's
/// risk-neutral probability is checked before the rollback: outside
/// `[0, 1]` it is reported as numeric instability in strict mode and
/// logged in permissive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialAmericanEngine {
    steps: usize,
    validation: ValidationMode,
}

impl BinomialAmericanEngine {
    /// Engine with `steps` time steps and the process-wide default
    /// validation mode.
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            validation: Settings::instance().validation_mode(),
        }
    }

    /// Replace the validation mode.
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Number of time steps `n`.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Current validation mode.
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Price an American option.
    ///
    /// In permissive mode a zero-step tree returns the intrinsic value at
    /// the spot.
    pub fn price(&self, params: &OptionParameters) -> Result<Real> {
        check_parameters(self.validation, ENGINE, params)?;
        check_count(self.validation, ENGINE, "steps", self.steps, 1)?;

        let tree = BinomialTree::cox_ross_rubinstein(params, self.steps);
        let in_range = tree.probability_in_range();
        if self.validation.is_strict() {
            ensure_stable!(
                in_range,
                "risk-neutral probability {} outside [0, 1] (u = {}, d = {}, dt = {})",
                tree.probability(),
                tree.up(),
                tree.down(),
                tree.dt()
            );
        } else if !in_range {
            warn!(
                engine = ENGINE,
                probability = tree.probability(),
                steps = self.steps,
                "risk-neutral probability outside [0, 1]"
            );
        }

        let value = price_american(&tree, |s| params.payoff(s));
        debug!(engine = ENGINE, ?params, steps = self.steps, value, "priced");
        check_finite(self.validation, ENGINE, "price", value)
    }
}

impl PricingEngine for BinomialAmericanEngine {
    fn calculate(&self, params: &OptionParameters) -> Result<Real> {
        self.price(params)
    }
}
