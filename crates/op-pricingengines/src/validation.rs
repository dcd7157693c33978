//! Input and output checks shared by the engines.
//!
//! Strict mode turns every failed check into an error. Permissive mode
//! logs the failure at `warn` and lets the computation continue.

use op_core::{ensure, ensure_stable, errors::Result, OptionParameters, Real, ValidationMode};
use tracing::warn;

/// Check the parameter domain before any arithmetic.
pub(crate) fn check_parameters(
    mode: ValidationMode,
    engine: &'static str,
    params: &OptionParameters,
) -> Result<()> {
    match params.validate() {
        Err(err) if mode.is_strict() => Err(err),
        Err(err) => {
            warn!(engine, %err, "pricing out-of-domain parameters");
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}

/// Check a count against its lower bound (`paths`, `steps`, ...).
pub(crate) fn check_count(
    mode: ValidationMode,
    engine: &'static str,
    name: &'static str,
    value: usize,
    min: usize,
) -> Result<()> {
    if mode.is_strict() {
        ensure!(value >= min, "{name} must be at least {min}, got {value}");
    } else if value < min {
        warn!(engine, name, value, min, "count below minimum, result will be NaN or intrinsic");
    }
    Ok(())
}

/// Reject (strict) or report (permissive) a non-finite result.
pub(crate) fn check_finite(
    mode: ValidationMode,
    engine: &'static str,
    what: &'static str,
    value: Real,
) -> Result<Real> {
    if mode.is_strict() {
        ensure_stable!(value.is_finite(), "{what} is not finite: {value}");
    } else if !value.is_finite() {
        warn!(engine, what, value, "non-finite result");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use op_core::OptionType;

    fn bad() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call)
    }

    #[test]
    fn strict_rejects_and_permissive_passes() {
        let err = check_parameters(ValidationMode::Strict, "test", &bad()).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(check_parameters(ValidationMode::Permissive, "test", &bad()).is_ok());
    }

    #[test]
    fn counts() {
        assert!(check_count(ValidationMode::Strict, "test", "paths", 2, 2).is_ok());
        let err = check_count(ValidationMode::Strict, "test", "paths", 1, 2).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(check_count(ValidationMode::Permissive, "test", "paths", 0, 2).is_ok());
    }

    #[test]
    fn non_finite_results() {
        let err = check_finite(ValidationMode::Strict, "test", "price", f64::NAN).unwrap_err();
        assert!(err.is_numeric_instability());
        let value = check_finite(ValidationMode::Permissive, "test", "price", f64::INFINITY);
        assert_eq!(value, Ok(f64::INFINITY));
    }
}
