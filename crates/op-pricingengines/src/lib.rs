//! # op-pricingengines
//!
//! Pricing engines for vanilla and Asian options under Black-Scholes
//! dynamics.
//!
//! ## Engines
//!
//! - [`AnalyticEuropeanEngine`] — Black-Scholes closed form and Greeks for European options
//! - [`MonteCarloSimulator`] — antithetic European and arithmetic-average Asian estimators
//! - [`BinomialAmericanEngine`] — Cox-Ross-Rubinstein tree for American options
//!
//! Every engine carries a [`ValidationMode`](op_core::ValidationMode).
//! Strict engines reject out-of-domain inputs with
//! [`Error::InvalidParameter`](op_core::Error::InvalidParameter) before any
//! arithmetic and non-finite results with
//! [`Error::NumericInstability`](op_core::Error::NumericInstability).
//! Permissive engines compute anyway and log what they skipped at `warn`
//! through `tracing`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use op_core::{errors::Result, OptionParameters, Real};

pub mod analytic_european_engine;
pub mod binomial_engine;
pub mod monte_carlo_engine;

mod validation;

pub use analytic_european_engine::{
    calculate_greeks, call_price, d1, d2, d2_from_d1, put_price, AnalyticEuropeanEngine, Greeks,
};
pub use binomial_engine::BinomialAmericanEngine;
pub use monte_carlo_engine::MonteCarloSimulator;
pub use op_methods::monte_carlo::{SimulationConfig, SimulationResult};

/// A deterministic engine pricing one option per call.
///
/// The Monte Carlo simulator is not a `PricingEngine`: it advances its
/// stream and so needs `&mut self`.
pub trait PricingEngine: std::fmt::Debug + Send + Sync {
    /// Price the option described by `params`.
    fn calculate(&self, params: &OptionParameters) -> Result<Real>;
}
