//! # op-math
//!
//! Mathematical utilities for the pricing engines: the standard normal
//! distribution (via statrs), reproducible Mersenne-Twister random streams
//! (via rand_mt), and a sample statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{normal_cdf, normal_cdf_inverse, normal_pdf};
pub use random_numbers::{MersenneTwisterUniformRng, NormalStream};
pub use statistics::Statistics;
