//! # op-methods
//!
//! Numerical kernels behind the pricing engines: the Cox-Ross-Rubinstein
//! lattice with in-place backward induction, and Monte Carlo estimators
//! driven by an explicit [`NormalStream`](op_math::NormalStream).
//!
//! The kernels perform no input validation; the engines in
//! `op-pricingengines` decide how degenerate inputs are treated.
//!
//! # Modules
//!
//! * [`lattice`] — binomial tree and backward-induction pricing
//! * [`monte_carlo`] — antithetic European and arithmetic Asian estimators

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: binomial tree, backward induction.
pub mod lattice;

/// Monte Carlo simulation: GBM paths, estimators, run configuration.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{price_american, price_european, BinomialTree, LatticeState};
pub use monte_carlo::{
    asian_arithmetic, european_antithetic, GbmStep, SimulationConfig, SimulationConfigBuilder,
    SimulationResult,
};
