//! Monte Carlo simulation under geometric Brownian motion.
//!
//! The kernels take the random stream by `&mut` instead of owning it, so a
//! caller decides whether consecutive runs continue one stream, replay a
//! checkpoint (a clone), or use independent [`NormalStream::split`] streams.
//!
//! * [`european_antithetic`] — terminal-price estimator with antithetic pairs
//! * [`asian_arithmetic`] — arithmetic-average estimator on discretised paths
//! * [`SimulationResult`] — discounted estimate with its standard error
//! * [`SimulationConfig`] — validated path / step / seed settings

pub mod config;

pub use config::{SimulationConfig, SimulationConfigBuilder};

use op_core::{OptionParameters, Real, Time};
use op_math::{NormalStream, Statistics};

// ─── GbmStep ──────────────────────────────────────────────────────────────────

/// Exact log-normal GBM increment over a fixed interval `Δt`.
///
/// `S(t + Δt) = S(t) · exp((r − σ²/2)Δt + σ√Δt · Z)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmStep {
    drift: Real,
    vol: Real,
}

impl GbmStep {
    /// Increment of the risk-neutral GBM for `params` over `dt`.
    pub fn new(params: &OptionParameters, dt: Time) -> Self {
        let sigma = params.volatility;
        Self {
            drift: (params.rate - 0.5 * sigma * sigma) * dt,
            vol: sigma * dt.sqrt(),
        }
    }

    /// Log drift `(r − σ²/2)Δt`.
    pub fn drift(&self) -> Real {
        self.drift
    }

    /// Log volatility `σ√Δt`.
    pub fn vol(&self) -> Real {
        self.vol
    }

    /// Advance `spot` by one increment driven by the normal draw `z`.
    #[inline]
    pub fn evolve(&self, spot: Real, z: Real) -> Real {
        spot * (self.drift + self.vol * z).exp()
    }
}

// ─── SimulationResult ─────────────────────────────────────────────────────────

/// Outcome of a Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Discounted mean payoff.
    pub price: Real,
    /// Discounted standard error of the mean (NaN with fewer than two
    /// samples).
    pub std_error: Real,
    /// Number of samples averaged (antithetic pairs count once).
    pub samples: usize,
}

impl SimulationResult {
    /// Discount the undiscounted sample statistics by `discount`.
    ///
    /// With no samples the price is NaN, matching a `0 / 0` average.
    pub fn from_statistics(stats: &Statistics, discount: Real) -> Self {
        Self {
            price: discount * stats.mean().unwrap_or(Real::NAN),
            std_error: discount * stats.error_estimate().unwrap_or(Real::NAN),
            samples: stats.samples(),
        }
    }
}

// ─── Kernels ──────────────────────────────────────────────────────────────────

/// European price from `paths` terminal draws, paired antithetically.
///
/// Each of the `⌊paths / 2⌋` pairs consumes one normal `Z` and averages the
/// payoffs at `S·exp(drift ± vol·Z)`; an odd last slot is dropped, so the
/// divisor is the number of pairs. Payoffs are floored per sample before
/// averaging, and the mean is discounted by `e^(−rT)`.
pub fn european_antithetic(
    params: &OptionParameters,
    paths: usize,
    stream: &mut NormalStream,
) -> SimulationResult {
    let step = GbmStep::new(params, params.maturity);
    let pairs = paths / 2;
    let mut stats = Statistics::new();

    for _ in 0..pairs {
        let z = stream.next_normal();
        let payoff = params.payoff(step.evolve(params.spot, z));
        let mirrored = params.payoff(step.evolve(params.spot, -z));
        stats.add(0.5 * (payoff + mirrored));
    }

    SimulationResult::from_statistics(&stats, params.discount())
}

/// Arithmetic-average Asian price from `paths` independent paths of
/// `steps` increments each.
///
/// The average runs over the `steps` simulated prices and excludes the
/// spot. No antithetic pairing is applied.
pub fn asian_arithmetic(
    params: &OptionParameters,
    paths: usize,
    steps: usize,
    stream: &mut NormalStream,
) -> SimulationResult {
    let step = GbmStep::new(params, params.maturity / steps as Real);
    let mut stats = Statistics::new();

    for _ in 0..paths {
        let mut spot = params.spot;
        let mut sum = 0.0;
        for _ in 0..steps {
            spot = step.evolve(spot, stream.next_normal());
            sum += spot;
        }
        stats.add(params.payoff(sum / steps as Real));
    }

    SimulationResult::from_statistics(&stats, params.discount())
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use op_core::OptionType;

    /// Black-Scholes call, S=100, K=100, r=5%, σ=20%, T=1.
    const BS_CALL: Real = 10.450_583_572_185_565;

    fn params(option_type: OptionType) -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type)
    }

    #[test]
    fn gbm_step_terms() {
        let step = GbmStep::new(&params(OptionType::Call), 0.25);
        assert_abs_diff_eq!(step.drift(), (0.05 - 0.02) * 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(step.vol(), 0.1, epsilon = 1e-15);
        assert_abs_diff_eq!(step.evolve(100.0, 0.0), 100.0 * step.drift().exp(), epsilon = 1e-12);
    }

    #[test]
    fn single_pair_uses_one_draw() {
        let p = params(OptionType::Call);
        let mut stream = NormalStream::new(42);
        let mut replay = stream.clone();
        let result = european_antithetic(&p, 2, &mut stream);
        assert_eq!(stream.position(), 1);
        assert_eq!(result.samples, 1);

        let z = replay.next_normal();
        let step = GbmStep::new(&p, 1.0);
        let expected = p.discount()
            * 0.5
            * (p.payoff(step.evolve(100.0, z)) + p.payoff(step.evolve(100.0, -z)));
        assert_eq!(result.price, expected);
        assert!(result.std_error.is_nan());
    }

    #[test]
    fn odd_path_count_drops_last_slot() {
        let p = params(OptionType::Put);
        let mut a = NormalStream::new(5);
        let mut b = NormalStream::new(5);
        let odd = european_antithetic(&p, 1_001, &mut a);
        let even = european_antithetic(&p, 1_000, &mut b);
        assert_eq!(odd, even);
        assert_eq!(a.position(), 500);
    }

    #[test]
    fn no_pairs_is_nan() {
        let mut stream = NormalStream::new(1);
        let result = european_antithetic(&params(OptionType::Call), 1, &mut stream);
        assert!(result.price.is_nan());
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn european_call_converges_to_bs() {
        let mut stream = NormalStream::new(42);
        let result = european_antithetic(&params(OptionType::Call), 200_000, &mut stream);
        assert!(
            (result.price - BS_CALL).abs() < 3.0 * result.std_error,
            "MC call = {:.4} ± {:.4}, expected {BS_CALL:.4}",
            result.price,
            result.std_error
        );
    }

    #[test]
    fn asian_draw_count_and_bounds() {
        let p = params(OptionType::Call);
        let mut stream = NormalStream::new(42);
        let result = asian_arithmetic(&p, 20_000, 12, &mut stream);
        assert_eq!(stream.position(), 20_000 * 12);
        assert_eq!(result.samples, 20_000);
        // Averaging lowers the effective volatility: cheaper than the vanilla.
        assert!(result.price > 4.0 && result.price < BS_CALL, "Asian call = {:.4}", result.price);
    }

    #[test]
    fn asian_single_step_is_european_terminal() {
        // One step: the average is the terminal price itself.
        let p = params(OptionType::Put);
        let mut a = NormalStream::new(9);
        let mut b = NormalStream::new(9);
        let asian = asian_arithmetic(&p, 1, 1, &mut a);
        let z = b.next_normal();
        let expected = p.discount() * p.payoff(GbmStep::new(&p, 1.0).evolve(100.0, z));
        assert_abs_diff_eq!(asian.price, expected, epsilon = 1e-12);
    }

    #[test]
    fn asian_zero_steps_is_nan() {
        let mut stream = NormalStream::new(1);
        let result = asian_arithmetic(&params(OptionType::Call), 10, 0, &mut stream);
        assert!(result.price.is_nan());
    }

    #[test]
    fn continuing_a_stream_changes_the_estimate() {
        let p = params(OptionType::Call);
        let mut stream = NormalStream::new(42);
        let first = european_antithetic(&p, 1_000, &mut stream);
        let second = european_antithetic(&p, 1_000, &mut stream);
        assert_ne!(first.price, second.price);
        assert_eq!(stream.position(), 1_000);
    }
}
