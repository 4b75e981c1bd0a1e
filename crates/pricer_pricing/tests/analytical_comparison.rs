//! Monte Carlo prices against the closed-form Black-Scholes-Merton values.

use pricer_core::types::{ContractSpec, OptionType};
use pricer_models::analytical::black_scholes;
use pricer_pricing::mc::{simulate, MonteCarloConfig, MonteCarloSimulator};

fn atm_call() -> ContractSpec {
    ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
}

// ========================================
// Convergence
// ========================================

#[test]
fn test_million_paths_within_one_percent() {
    let contract = atm_call();
    for option_type in [OptionType::Call, OptionType::Put] {
        let analytic = black_scholes::price(&contract, option_type);
        let mc = simulate(&contract, option_type, 1_000_000, 1, 42).unwrap();

        let rel = (mc.price - analytic).abs() / analytic;
        assert!(
            rel < 0.01,
            "{}: mc {} vs analytic {} ({:.3}%)",
            option_type,
            mc.price,
            analytic,
            rel * 100.0
        );
    }
}

#[test]
fn test_hundred_thousand_paths_near_reference_call() {
    let result = simulate(&atm_call(), OptionType::Call, 100_000, 1, 42).unwrap();
    let error = (result.price - 10.4506).abs();
    assert!(
        error < 0.10_f64.max(3.0 * result.std_error),
        "price {} std_error {}",
        result.price,
        result.std_error
    );
    assert_eq!(result.n_paths, 100_000);
    assert_eq!(result.n_steps, 1);
}

#[test]
fn test_stepped_paths_match_analytic_with_dividends() {
    let contract = ContractSpec::new(100.0, 110.0, 0.75, 0.04, 0.3, OptionType::Put)
        .with_dividend_yield(0.02);
    let analytic = black_scholes::price(&contract, OptionType::Put);

    let config = MonteCarloConfig::builder()
        .n_paths(200_000)
        .n_steps(24)
        .seed(2024)
        .build()
        .unwrap();
    let mc = MonteCarloSimulator::new(config)
        .unwrap()
        .simulate_contract(&contract);

    assert!(
        (mc.price - analytic).abs() < 4.0 * mc.std_error,
        "mc {} +/- {} vs analytic {}",
        mc.price,
        mc.std_error,
        analytic
    );
}

#[test]
fn test_deep_otm_call_is_small_and_non_negative() {
    let contract = ContractSpec::new(50.0, 200.0, 0.25, 0.01, 0.2, OptionType::Call);
    let mc = simulate(&contract, OptionType::Call, 50_000, 1, 42).unwrap();
    assert!(mc.price >= 0.0);
    assert!(mc.price < 1e-6);
}

// ========================================
// Determinism
// ========================================

#[test]
fn test_same_seed_identical() {
    let contract = atm_call();
    let a = simulate(&contract, OptionType::Call, 100_000, 5, 7).unwrap();
    let b = simulate(&contract, OptionType::Call, 100_000, 5, 7).unwrap();
    assert_eq!(a.price.to_bits(), b.price.to_bits());
    assert_eq!(a.std_error.to_bits(), b.std_error.to_bits());
}

#[test]
fn test_different_seeds_differ() {
    let contract = atm_call();
    let a = simulate(&contract, OptionType::Call, 10_000, 1, 1).unwrap();
    let b = simulate(&contract, OptionType::Call, 10_000, 1, 2).unwrap();
    assert_ne!(a.price, b.price);
}

#[test]
fn test_expired_contract_ignores_seed() {
    let contract = ContractSpec::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call);
    for seed in [0, 1, 42, u64::MAX] {
        let result = simulate(&contract, OptionType::Call, 1_000, 1, seed).unwrap();
        assert_eq!(result.price, 0.0);
        assert_eq!(result.std_error, 0.0);
    }
}

#[test]
fn test_batch_size_regroups_draws() {
    let build = |batch_size| {
        let config = MonteCarloConfig::builder()
            .n_paths(20_000)
            .n_steps(1)
            .seed(42)
            .batch_size(batch_size)
            .build()
            .unwrap();
        MonteCarloSimulator::new(config)
            .unwrap()
            .simulate(&atm_call(), OptionType::Call)
    };

    let coarse = build(20_000);
    let fine = build(1_000);
    assert_ne!(coarse.price, fine.price);
    // Both remain estimates of the same price
    assert!((coarse.price - fine.price).abs() < 5.0 * (coarse.std_error + fine.std_error));
}
