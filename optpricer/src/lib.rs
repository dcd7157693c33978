//! # optpricer
//!
//! Option pricing under Black-Scholes dynamics: closed-form European
//! prices and Greeks, Monte Carlo European and Asian prices, and
//! Cox-Ross-Rubinstein American prices.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `op-*` crates. The [`contract`] module offers the same engines as flat
//! functions over plain `f64` arguments.
//!
//! ## Quick start
//!
//! ```rust
//! use optpricer::core::{OptionParameters, OptionType, ValidationMode};
//! use optpricer::pricingengines::{AnalyticEuropeanEngine, BinomialAmericanEngine};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put);
//! let european = AnalyticEuropeanEngine::new()
//!     .with_validation(ValidationMode::Strict)
//!     .price(&params)
//!     .unwrap();
//! let american = BinomialAmericanEngine::new(200).price(&params).unwrap();
//! assert!(american > european);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, option parameters, settings, and error definitions.
pub use op_core as core;

/// Normal distribution, random streams, statistics.
pub use op_math as math;

/// Numerical kernels (binomial lattice, Monte Carlo).
pub use op_methods as methods;

/// Pricing engines.
pub use op_pricingengines as pricingengines;

pub mod contract;
