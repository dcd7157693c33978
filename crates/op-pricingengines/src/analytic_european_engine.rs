//! Analytic European option engine (Black-Scholes).
//!
//! Prices European vanilla options on a non-dividend-paying underlying with
//! the closed-form Black-Scholes formula and computes the first-order
//! Greeks plus gamma.
//!
//! The free functions are the raw formulas: they never validate, so
//! degenerate inputs (`T = 0`, `σ = 0`) propagate IEEE NaN / ±∞.
//! [`AnalyticEuropeanEngine`] wraps them with the engine's
//! [`ValidationMode`].

use op_core::{
    ensure_stable, errors::Result, OptionParameters, OptionType, Rate, Real, Settings, Time,
    ValidationMode, Volatility,
};
use op_math::distributions::{normal_cdf, normal_pdf};
use tracing::{debug, warn};

use crate::validation::{check_finite, check_parameters};
use crate::PricingEngine;

const ENGINE: &str = "analytic_european";

// ─── Formulas ─────────────────────────────────────────────────────────────────

/// `d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)`.
pub fn d1(spot: Real, strike: Real, maturity: Time, rate: Rate, volatility: Volatility) -> Real {
    ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * maturity)
        / (volatility * maturity.sqrt())
}

/// `d2 = d1 − σ√T`.
pub fn d2(spot: Real, strike: Real, maturity: Time, rate: Rate, volatility: Volatility) -> Real {
    d2_from_d1(d1(spot, strike, maturity, rate, volatility), volatility, maturity)
}

/// `d2` from an already computed `d1`.
pub fn d2_from_d1(d1: Real, volatility: Volatility, maturity: Time) -> Real {
    d1 - volatility * maturity.sqrt()
}

/// Black-Scholes call price `S·Φ(d1) − K·e^(−rT)·Φ(d2)`.
pub fn call_price(
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
) -> Real {
    let d1 = d1(spot, strike, maturity, rate, volatility);
    let d2 = d2_from_d1(d1, volatility, maturity);
    spot * normal_cdf(d1) - strike * (-rate * maturity).exp() * normal_cdf(d2)
}

/// Black-Scholes put price `K·e^(−rT)·Φ(−d2) − S·Φ(−d1)`.
pub fn put_price(
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
) -> Real {
    let d1 = d1(spot, strike, maturity, rate, volatility);
    let d2 = d2_from_d1(d1, volatility, maturity);
    strike * (-rate * maturity).exp() * normal_cdf(-d2) - spot * normal_cdf(-d1)
}

/// Price of `params`, dispatching on its option type.
pub fn price(params: &OptionParameters) -> Real {
    let OptionParameters {
        spot,
        strike,
        maturity,
        rate,
        volatility,
        option_type,
    } = *params;
    match option_type {
        OptionType::Call => call_price(spot, strike, maturity, rate, volatility),
        OptionType::Put => put_price(spot, strike, maturity, rate, volatility),
    }
}

/// Black-Scholes sensitivities of one option.
///
/// Vega and rho are per unit (1.0 = 100 %) change; theta is per year.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂σ.
    pub vega: Real,
    /// ∂V/∂t (calendar time, so usually negative).
    pub theta: Real,
    /// ∂V/∂r.
    pub rho: Real,
}

impl Greeks {
    /// `true` when all five sensitivities are finite.
    pub fn is_finite(&self) -> bool {
        [self.delta, self.gamma, self.vega, self.theta, self.rho]
            .iter()
            .all(|g| g.is_finite())
    }
}

/// All five Greeks in one pass, sharing `d1`, `d2`, `Φ` and `φ(d1)`.
pub fn calculate_greeks(
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
    option_type: OptionType,
) -> Greeks {
    let sqrt_t = maturity.sqrt();
    let d1 = d1(spot, strike, maturity, rate, volatility);
    let d2 = d2_from_d1(d1, volatility, maturity);
    let df = (-rate * maturity).exp();
    let pdf_d1 = normal_pdf(d1);

    let gamma = pdf_d1 / (spot * volatility * sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t;
    let decay = -(spot * pdf_d1 * volatility) / (2.0 * sqrt_t);

    match option_type {
        OptionType::Call => {
            let nd2 = normal_cdf(d2);
            Greeks {
                delta: normal_cdf(d1),
                gamma,
                vega,
                theta: decay - rate * strike * df * nd2,
                rho: strike * maturity * df * nd2,
            }
        }
        OptionType::Put => {
            let nmd2 = normal_cdf(-d2);
            Greeks {
                delta: normal_cdf(d1) - 1.0,
                gamma,
                vega,
                theta: decay + rate * strike * df * nmd2,
                rho: -strike * maturity * df * nmd2,
            }
        }
    }
}

// ─── Engine ───────────────────────────────────────────────────────────────────

/// Analytic pricing engine for European vanilla options.
///
/// $$C = S N(d_1) - K e^{-rT} N(d_2)$$
/// $$P = K e^{-rT} N(-d_2) - S N(-d_1)$$
///
/// Stateless apart from its validation mode, so one engine can be shared
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticEuropeanEngine {
    validation: ValidationMode,
}

impl AnalyticEuropeanEngine {
    /// Engine using the process-wide default validation mode.
    pub fn new() -> Self {
        Self {
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

    /// Price a European option.
    pub fn price(&self, params: &OptionParameters) -> Result<Real> {
        check_parameters(self.validation, ENGINE, params)?;
        let value = price(params);
        debug!(engine = ENGINE, ?params, value, "priced");
        check_finite(self.validation, ENGINE, "price", value)
    }

    /// Greeks of a European option.
    pub fn greeks(&self, params: &OptionParameters) -> Result<Greeks> {
        check_parameters(self.validation, ENGINE, params)?;
        let greeks = calculate_greeks(
            params.spot,
            params.strike,
            params.maturity,
            params.rate,
            params.volatility,
            params.option_type,
        );
        debug!(engine = ENGINE, ?params, ?greeks, "greeks");
        if self.validation.is_strict() {
            ensure_stable!(greeks.is_finite(), "greeks are not finite: {greeks:?}");
        } else if !greeks.is_finite() {
            warn!(engine = ENGINE, ?greeks, "non-finite greeks");
        }
        Ok(greeks)
    }
}

impl Default for AnalyticEuropeanEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PricingEngine for AnalyticEuropeanEngine {
    fn calculate(&self, params: &OptionParameters) -> Result<Real> {
        self.price(params)
    }
}
