//! Flat function-call interface over plain `f64` arguments.
//!
//! Each function takes `(S, K, T, r, σ, ...)` positionally, `is_call`
//! selects the payoff, and results come back as bare `f64`. Nothing is
//! validated: out-of-domain inputs propagate IEEE NaN / ±∞, and the
//! engines behind [`american_option`] and [`MonteCarlo`] log them at
//! `warn`. Use the engines in [`crate::pricingengines`] for strict
//! validation and `Result` errors.

use op_core::{OptionParameters, OptionType, Real, ValidationMode, DEFAULT_SEED};
use op_pricingengines::{analytic_european_engine, BinomialAmericanEngine, MonteCarloSimulator};

pub use op_pricingengines::Greeks;

fn params(s: Real, k: Real, t: Real, r: Real, sigma: Real, is_call: bool) -> OptionParameters {
    OptionParameters::new(s, k, t, r, sigma, OptionType::from_is_call(is_call))
}

/// Black-Scholes European call price.
pub fn call_price(s: Real, k: Real, t: Real, r: Real, sigma: Real) -> Real {
    analytic_european_engine::call_price(s, k, t, r, sigma)
}

/// Black-Scholes European put price.
pub fn put_price(s: Real, k: Real, t: Real, r: Real, sigma: Real) -> Real {
    analytic_european_engine::put_price(s, k, t, r, sigma)
}

/// `d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)`.
pub fn calculate_d1(s: Real, k: Real, t: Real, r: Real, sigma: Real) -> Real {
    analytic_european_engine::d1(s, k, t, r, sigma)
}

/// `d2 = d1 − σ√T`, from a precomputed `d1`.
pub fn calculate_d2(d1: Real, sigma: Real, t: Real) -> Real {
    analytic_european_engine::d2_from_d1(d1, sigma, t)
}

/// Delta, gamma, vega, theta and rho in one pass.
pub fn calculate_greeks(s: Real, k: Real, t: Real, r: Real, sigma: Real, is_call: bool) -> Greeks {
    analytic_european_engine::calculate_greeks(s, k, t, r, sigma, OptionType::from_is_call(is_call))
}

/// American option price on a CRR tree with `n_steps` steps.
///
/// `n_steps = 0` returns the intrinsic value at `s0`.
pub fn american_option(
    s0: Real,
    k: Real,
    t: Real,
    r: Real,
    sigma: Real,
    n_steps: usize,
    is_call: bool,
) -> Real {
    BinomialAmericanEngine::new(n_steps)
        .with_validation(ValidationMode::Permissive)
        .price(&params(s0, k, t, r, sigma, is_call))
        // A permissive engine reports problems through the value itself.
        .unwrap_or(Real::NAN)
}

/// Monte Carlo pricer owning one reproducible stream.
///
/// Consecutive calls continue the same stream; two instances with the same
/// seed produce identical sequences of results.
#[derive(Debug, Clone)]
pub struct MonteCarlo {
    simulator: MonteCarloSimulator,
}

impl MonteCarlo {
    /// Pricer seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            simulator: MonteCarloSimulator::new(seed).with_validation(ValidationMode::Permissive),
        }
    }

    /// European price from `n_simulations` antithetic draws.
    ///
    /// Fewer than 2 simulations give NaN.
    #[allow(clippy::too_many_arguments)]
    pub fn european_option(
        &mut self,
        s0: Real,
        k: Real,
        t: Real,
        r: Real,
        sigma: Real,
        n_simulations: usize,
        is_call: bool,
    ) -> Real {
        self.simulator
            .european_option(&params(s0, k, t, r, sigma, is_call), n_simulations)
            .unwrap_or(Real::NAN)
    }

    /// Arithmetic-average Asian price over `n_simulations` paths of
    /// `n_steps` steps.
    #[allow(clippy::too_many_arguments)]
    pub fn asian_option(
        &mut self,
        s0: Real,
        k: Real,
        t: Real,
        r: Real,
        sigma: Real,
        n_simulations: usize,
        n_steps: usize,
        is_call: bool,
    ) -> Real {
        self.simulator
            .asian_option(&params(s0, k, t, r, sigma, is_call), n_simulations, n_steps)
            .unwrap_or(Real::NAN)
    }
}

impl Default for MonteCarlo {
    /// Pricer seeded with 42.
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
