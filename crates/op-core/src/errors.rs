//! Error types for optpricer.
//!
//! Every engine reports failures through the single [`Error`] enum below.
//! The `ensure!` and `ensure_stable!` macros are early-return helpers for
//! the two kinds of check the engines perform: input validation before any
//! arithmetic, and stability checks on intermediate or final values.

use thiserror::Error;

/// The top-level error type used throughout optpricer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An input violates its domain (non-positive spot, zero paths, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The computation left the region where its result is meaningful,
    /// e.g. a lattice probability outside `[0, 1]` or a non-finite price.
    #[error("numeric instability: {0}")]
    NumericInstability(String),
}

impl Error {
    /// `true` for [`Error::InvalidParameter`].
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::InvalidParameter(_))
    }

    /// `true` for [`Error::NumericInstability`].
    pub fn is_numeric_instability(&self) -> bool {
        matches!(self, Error::NumericInstability(_))
    }
}

/// Shorthand `Result` type used throughout optpricer.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidParameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use op_core::{ensure, errors::Error};
/// fn positive(x: f64) -> op_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidParameter(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::NumericInstability(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use op_core::{ensure_stable, errors::Error};
/// fn finite(x: f64) -> op_core::errors::Result<f64> {
///     ensure_stable!(x.is_finite(), "result is not finite: {x}");
///     Ok(x)
/// }
/// assert!(finite(1.0).is_ok());
/// assert!(matches!(finite(f64::NAN), Err(Error::NumericInstability(_))));
/// ```
#[macro_export]
macro_rules! ensure_stable {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::NumericInstability(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = Error::InvalidParameter("spot must be positive".into());
        assert_eq!(e.to_string(), "invalid parameter: spot must be positive");
        let e = Error::NumericInstability("p = 1.2".into());
        assert_eq!(e.to_string(), "numeric instability: p = 1.2");
    }

    #[test]
    fn classification() {
        assert!(Error::InvalidParameter(String::new()).is_invalid_parameter());
        assert!(!Error::InvalidParameter(String::new()).is_numeric_instability());
        assert!(Error::NumericInstability(String::new()).is_numeric_instability());
    }
}
