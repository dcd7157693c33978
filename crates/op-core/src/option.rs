//! Option type and the parameter bundle shared by every engine.

use std::fmt;

use crate::{ensure, errors::Result, Rate, Real, Time, Volatility};

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// Map the binding-layer `is_call` flag to an option type.
    pub fn from_is_call(is_call: bool) -> Self {
        if is_call {
            OptionType::Call
        } else {
            OptionType::Put
        }
    }

    /// `true` for [`OptionType::Call`].
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value `max(φ(S − K), 0)`.
    ///
    /// A NaN input yields NaN rather than being floored to zero, so
    /// degenerate inputs stay visible in permissive pricing.
    #[inline]
    pub fn payoff(self, price: Real, strike: Real) -> Real {
        let intrinsic = match self {
            OptionType::Call => price - strike,
            OptionType::Put => strike - price,
        };
        if intrinsic < 0.0 {
            0.0
        } else {
            intrinsic
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Market and contract inputs for one pricing call.
///
/// Construction never validates, so the permissive engines can reproduce
/// IEEE propagation for degenerate inputs. Call [`validate`](Self::validate)
/// (or use a strict engine) to reject them up front.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Spot price of the underlying, `S`.
    pub spot: Real,
    /// Strike price, `K`.
    pub strike: Real,
    /// Time to maturity in years, `T`.
    pub maturity: Time,
    /// Continuously compounded risk-free rate, `r`.
    pub rate: Rate,
    /// Black-Scholes volatility, `σ`.
    pub volatility: Volatility,
    /// Call or put.
    pub option_type: OptionType,
}

impl OptionParameters {
    /// Bundle the inputs of a pricing call.
    pub fn new(
        spot: Real,
        strike: Real,
        maturity: Time,
        rate: Rate,
        volatility: Volatility,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            option_type,
        }
    }

    /// Same contract with the payoff kind replaced.
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Check the domain invariants: `S`, `K`, `T`, `σ` strictly positive
    /// and finite, `r` finite.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.spot.is_finite() && self.spot > 0.0,
            "spot must be positive and finite, got {}",
            self.spot
        );
        ensure!(
            self.strike.is_finite() && self.strike > 0.0,
            "strike must be positive and finite, got {}",
            self.strike
        );
        ensure!(
            self.maturity.is_finite() && self.maturity > 0.0,
            "maturity must be positive and finite, got {}",
            self.maturity
        );
        ensure!(
            self.volatility.is_finite() && self.volatility > 0.0,
            "volatility must be positive and finite, got {}",
            self.volatility
        );
        ensure!(
            self.rate.is_finite(),
            "rate must be finite, got {}",
            self.rate
        );
        Ok(())
    }

    /// Discount factor to maturity, `e^(−rT)`.
    pub fn discount(&self) -> Real {
        (-self.rate * self.maturity).exp()
    }

    /// Intrinsic value at `price` for this contract.
    #[inline]
    pub fn payoff(&self, price: Real) -> Real {
        self.option_type.payoff(price, self.strike)
    }
}
