//! # op-core
//!
//! Core types, traits, and error definitions for optpricer.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – type aliases, the error enum and its
//! early-return macros, the [`OptionParameters`] bundle every engine
//! consumes, and the process-wide [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_stable!` macros.
pub mod errors;

/// Option type and option parameters.
pub mod option;

/// Global library settings (default seed, validation mode).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use option::{OptionParameters, OptionType};
pub use settings::{Settings, ValidationMode, DEFAULT_SEED};
