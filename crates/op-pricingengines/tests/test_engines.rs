//! Reference values and cross-engine checks for the three pricing engines.
//!
//! Every engine here is built with an explicit validation mode so the
//! process-wide settings never influence the outcome.

use approx::assert_abs_diff_eq;
use op_core::{OptionParameters, OptionType, ValidationMode};
use op_pricingengines::{
    AnalyticEuropeanEngine, BinomialAmericanEngine, MonteCarloSimulator, PricingEngine,
    SimulationConfig,
};

const BS_CALL: f64 = 10.450_583_572_185_565;
const BS_PUT: f64 = 5.573_526_022_256_965;

fn atm(option_type: OptionType) -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type)
}

fn analytic() -> AnalyticEuropeanEngine {
    AnalyticEuropeanEngine::new().with_validation(ValidationMode::Strict)
}

#[test]
fn analytic_reference_values() {
    let engine = analytic();
    assert_abs_diff_eq!(engine.price(&atm(OptionType::Call)).unwrap(), 10.4506, epsilon = 1e-3);
    assert_abs_diff_eq!(engine.price(&atm(OptionType::Put)).unwrap(), 5.5735, epsilon = 1e-3);
}

#[test]
fn monte_carlo_million_paths_within_three_standard_errors() {
    let mut sim = MonteCarloSimulator::new(42).with_validation(ValidationMode::Strict);
    let result = sim
        .european_option_with_error(&atm(OptionType::Call), 1_000_000)
        .unwrap();
    assert_eq!(result.samples, 500_000);
    assert!(
        (result.price - BS_CALL).abs() < 3.0 * result.std_error,
        "MC call = {:.5} ± {:.5}",
        result.price,
        result.std_error
    );
    // Antithetic pairing keeps the error bar small at this size.
    assert!(result.std_error < 0.02, "std_error = {}", result.std_error);
}

#[test]
fn monte_carlo_put_converges() {
    let mut sim = MonteCarloSimulator::new(7).with_validation(ValidationMode::Strict);
    let result = sim
        .european_option_with_error(&atm(OptionType::Put), 200_000)
        .unwrap();
    assert!(
        (result.price - BS_PUT).abs() < 3.0 * result.std_error,
        "MC put = {:.5} ± {:.5}",
        result.price,
        result.std_error
    );
}

#[test]
fn asian_call_is_cheaper_than_european() {
    let mut sim = MonteCarloSimulator::new(42).with_validation(ValidationMode::Strict);
    let asian = sim.asian_option(&atm(OptionType::Call), 50_000, 12).unwrap();
    assert!(asian > 0.0 && asian < BS_CALL, "Asian call = {asian}");
}

#[test]
fn lattice_american_call_matches_black_scholes() {
    let engine = BinomialAmericanEngine::new(500).with_validation(ValidationMode::Strict);
    let price = engine.price(&atm(OptionType::Call)).unwrap();
    assert!((price - BS_CALL).abs() < 0.01, "CRR(500) call = {price}");
}

#[test]
fn american_put_at_least_european_put() {
    let engine = BinomialAmericanEngine::new(300).with_validation(ValidationMode::Strict);
    for spot in [80.0, 90.0, 100.0, 110.0, 120.0] {
        let params = OptionParameters::new(spot, 100.0, 1.0, 0.05, 0.2, OptionType::Put);
        let american = engine.price(&params).unwrap();
        let european = analytic().price(&params).unwrap();
        assert!(american >= european - 1e-2, "S={spot}: {american} < {european}");
        assert!(american >= params.payoff(spot) - 1e-9, "S={spot}: below intrinsic");
    }
}

#[test]
fn identical_seeds_give_bit_identical_sequences() {
    let call = atm(OptionType::Call);
    let put = atm(OptionType::Put);
    let run = || {
        let mut sim = MonteCarloSimulator::new(2024).with_validation(ValidationMode::Strict);
        [
            sim.european_option(&call, 10_000).unwrap(),
            sim.asian_option(&put, 1_000, 24).unwrap(),
            sim.european_option(&put, 5_001).unwrap(),
        ]
    };
    assert_eq!(run(), run());
}

#[test]
fn split_streams_are_independent_workers() {
    let params = atm(OptionType::Call);
    let root = MonteCarloSimulator::new(42).into_stream();
    let mut prices = Vec::new();
    for worker in 0..4 {
        let mut sim = MonteCarloSimulator::from_stream(root.split(worker))
            .with_validation(ValidationMode::Strict);
        prices.push(sim.european_option(&params, 20_000).unwrap());
    }
    for (i, a) in prices.iter().enumerate() {
        for b in &prices[i + 1..] {
            assert_ne!(a, b);
        }
    }
    let mean = prices.iter().sum::<f64>() / prices.len() as f64;
    assert!((mean - BS_CALL).abs() < 0.2, "pooled mean = {mean}");
}

#[test]
fn config_runs_are_reproducible() {
    let params = atm(OptionType::Put);
    let sim = MonteCarloSimulator::new(1).with_validation(ValidationMode::Strict);
    let config = SimulationConfig::builder().paths(10_000).seed(5).build().unwrap();
    assert_eq!(
        sim.price_with_config(&params, &config).unwrap(),
        sim.price_with_config(&params, &config).unwrap()
    );
}

#[test]
fn deterministic_engines_behind_the_trait() {
    let engines: Vec<Box<dyn PricingEngine>> = vec![
        Box::new(analytic()),
        Box::new(BinomialAmericanEngine::new(500).with_validation(ValidationMode::Strict)),
    ];
    // Without dividends the American call is never exercised early.
    for engine in &engines {
        let price = engine.calculate(&atm(OptionType::Call)).unwrap();
        assert!((price - BS_CALL).abs() < 0.01, "{engine:?}: {price}");
    }
}

#[test]
fn strict_mode_rejects_every_invalid_input() {
    let base = atm(OptionType::Call);
    let invalid = [
        OptionParameters { spot: 0.0, ..base },
        OptionParameters { strike: -5.0, ..base },
        OptionParameters { maturity: 0.0, ..base },
        OptionParameters { volatility: -0.2, ..base },
        OptionParameters { rate: f64::INFINITY, ..base },
    ];
    let lattice = BinomialAmericanEngine::new(50).with_validation(ValidationMode::Strict);
    let mut sim = MonteCarloSimulator::new(42).with_validation(ValidationMode::Strict);
    for params in &invalid {
        assert!(analytic().price(params).unwrap_err().is_invalid_parameter());
        assert!(analytic().greeks(params).unwrap_err().is_invalid_parameter());
        assert!(lattice.price(params).unwrap_err().is_invalid_parameter());
        assert!(sim.european_option(params, 100).unwrap_err().is_invalid_parameter());
        assert!(sim.asian_option(params, 100, 4).unwrap_err().is_invalid_parameter());
    }
    assert_eq!(sim.stream().position(), 0);
}

#[test]
fn permissive_mode_propagates_nan() {
    let params = OptionParameters::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call);
    let engine = AnalyticEuropeanEngine::new().with_validation(ValidationMode::Permissive);
    assert!(engine.price(&params).unwrap().is_nan());
}

#[test]
fn lattice_probability_out_of_range() {
    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.5, 0.01, OptionType::Put);
    let strict = BinomialAmericanEngine::new(10).with_validation(ValidationMode::Strict);
    assert!(strict.price(&params).unwrap_err().is_numeric_instability());
    let permissive = BinomialAmericanEngine::new(10).with_validation(ValidationMode::Permissive);
    assert!(permissive.price(&params).unwrap().is_finite());
}
