//! End-to-end pricing of vanilla contracts through the method dispatcher.
//!
//! Every Monte Carlo run here uses a fixed seed.

use approx::assert_abs_diff_eq;
use op_instruments::{ContractTerms, ExerciseType, OptionType};
use op_pricingengines::{
    price, price_with, ContractPricing, PricingConfig, PricingMethod, DEFAULT_MC_SAMPLES,
};
use op_time::Date;
use proptest::prelude::*;

#[allow(clippy::too_many_arguments)]
fn terms(
    exercise: ExerciseType,
    kind: OptionType,
    s: f64,
    k: f64,
    sigma: f64,
    r: f64,
    q: f64,
    t: f64,
) -> ContractTerms {
    ContractTerms::new(exercise, kind, s, k, sigma, r, q, t).unwrap()
}

fn atm(exercise: ExerciseType, kind: OptionType) -> ContractTerms {
    terms(exercise, kind, 100.0, 100.0, 0.20, 0.05, 0.0, 1.0)
}

fn reference_put(exercise: ExerciseType) -> ContractTerms {
    ContractTerms::builder()
        .exercise(exercise)
        .option_type(OptionType::Put)
        .spot(100.0)
        .strike(120.0)
        .volatility(0.01)
        .risk_free_rate(0.05)
        .start(Date::from_ymd(2008, 2, 14).unwrap())
        .days(45)
        .build()
        .unwrap()
}

fn seeded(iterations: usize, seed: u64) -> PricingConfig {
    PricingConfig::default().with_iterations(iterations).with_seed(seed)
}

// ─── Put-call parity ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn analytic_put_call_parity(
        s in 20.0f64..200.0,
        k in 20.0f64..200.0,
        sigma in 0.05f64..0.8,
        r in -0.02f64..0.12,
        q in 0.0f64..0.08,
        t in 0.02f64..3.0,
    ) {
        let call = price(&terms(ExerciseType::European, OptionType::Call, s, k, sigma, r, q, t), PricingMethod::Analytic, None).unwrap();
        let put = price(&terms(ExerciseType::European, OptionType::Put, s, k, sigma, r, q, t), PricingMethod::Analytic, None).unwrap();
        let parity = s * (-q * t).exp() - k * (-r * t).exp();
        prop_assert!(call >= -1e-12 && put >= -1e-12);
        prop_assert!((call - put - parity).abs() < 1e-9 * s.max(k), "C - P = {}, parity = {}", call - put, parity);
    }

    #[test]
    fn american_lattice_dominates_european(
        s in 60.0f64..140.0,
        sigma in 0.1f64..0.5,
        r in 0.0f64..0.1,
        q in 0.0f64..0.06,
        kind in prop_oneof![Just(OptionType::Call), Just(OptionType::Put)],
    ) {
        let european = price(&terms(ExerciseType::European, kind, s, 100.0, sigma, r, q, 1.0), PricingMethod::Lattice, Some(200)).unwrap();
        let american = price(&terms(ExerciseType::American, kind, s, 100.0, sigma, r, q, 1.0), PricingMethod::Lattice, Some(200)).unwrap();
        prop_assert!(american >= european - 1e-12, "american {american} < european {european}");
    }
}

// ─── Convergence ──────────────────────────────────────────────────────────────

#[test]
fn lattice_converges_to_analytic() {
    for kind in [OptionType::Call, OptionType::Put] {
        let t = atm(ExerciseType::European, kind);
        let analytic = t.price(PricingMethod::Analytic, None).unwrap();
        let lattice = t.price(PricingMethod::Lattice, Some(1000)).unwrap();
        assert!(
            (lattice - analytic).abs() < 0.01 * analytic,
            "{kind}: lattice {lattice}, analytic {analytic}"
        );
    }
}

#[test]
fn lattice_error_shrinks_with_steps() {
    let t = atm(ExerciseType::European, OptionType::Put);
    let analytic = price(&t, PricingMethod::Analytic, None).unwrap();
    let coarse = (price(&t, PricingMethod::Lattice, Some(50)).unwrap() - analytic).abs();
    let fine = (price(&t, PricingMethod::Lattice, Some(2000)).unwrap() - analytic).abs();
    assert!(fine < coarse, "fine {fine}, coarse {coarse}");
}

#[test]
fn monte_carlo_is_unbiased() {
    let t = atm(ExerciseType::European, OptionType::Call);
    let analytic = price(&t, PricingMethod::Analytic, None).unwrap();

    let runs = 40;
    let mut sum = 0.0;
    let mut sum_err2 = 0.0;
    for seed in 0..runs {
        let r = price_with(&t, PricingMethod::MonteCarlo, &seeded(25_000, 1_000 + seed)).unwrap();
        sum += r.npv;
        sum_err2 += r.error_estimate.unwrap().powi(2);
    }
    let mean = sum / runs as f64;
    let stderr = sum_err2.sqrt() / runs as f64;
    assert!(
        (mean - analytic).abs() < 4.0 * stderr,
        "mean {mean}, analytic {analytic}, stderr {stderr}"
    );
}

#[test]
fn monte_carlo_error_shrinks_like_inverse_sqrt() {
    let t = atm(ExerciseType::European, OptionType::Put);
    let small = price_with(&t, PricingMethod::MonteCarlo, &seeded(10_000, 5)).unwrap();
    let large = price_with(&t, PricingMethod::MonteCarlo, &seeded(160_000, 5)).unwrap();
    let ratio = small.error_estimate.unwrap() / large.error_estimate.unwrap();
    assert!((ratio - 4.0).abs() < 0.4, "ratio = {ratio}");
}

#[test]
fn monte_carlo_uses_default_sample_count() {
    let t = atm(ExerciseType::European, OptionType::Call);
    let default = price_with(&t, PricingMethod::MonteCarlo, &PricingConfig::default().with_seed(9)).unwrap();
    let explicit =
        price_with(&t, PricingMethod::MonteCarlo, &seeded(DEFAULT_MC_SAMPLES, 9)).unwrap();
    assert_eq!(default, explicit);
}

// ─── Reference scenario ───────────────────────────────────────────────────────

#[test]
fn reference_put_agrees_across_methods() {
    let t = reference_put(ExerciseType::European);
    assert_abs_diff_eq!(t.time_to_expiry(), 45.0 / 365.0, epsilon = 1e-15);

    let analytic = price(&t, PricingMethod::Analytic, None).unwrap();
    let lattice = price(&t, PricingMethod::Lattice, Some(1000)).unwrap();
    let mc = price_with(&t, PricingMethod::MonteCarlo, &seeded(500_000, 2008)).unwrap();

    assert_abs_diff_eq!(analytic, 19.2625, epsilon = 1e-3);
    assert_abs_diff_eq!(lattice, analytic, epsilon = 1e-2);
    assert_abs_diff_eq!(mc.npv, analytic, epsilon = 1e-1);
}

#[test]
fn reference_american_put_is_rejected_by_analytic_and_monte_carlo() {
    let t = reference_put(ExerciseType::American);
    for method in [PricingMethod::Analytic, PricingMethod::MonteCarlo] {
        let err = price(&t, method, Some(1000)).unwrap_err();
        assert!(err.is_unsupported_contract(), "{method}: {err}");
    }
    // Deep in the money: immediate exercise is optimal.
    let lattice = price(&t, PricingMethod::Lattice, Some(1000)).unwrap();
    assert_abs_diff_eq!(lattice, 20.0, epsilon = 1e-9);
}

// ─── Rejections ───────────────────────────────────────────────────────────────

#[test]
fn american_call_with_dividends_is_rejected() {
    let t = terms(ExerciseType::American, OptionType::Call, 100.0, 100.0, 0.2, 0.05, 0.04, 1.0);
    for method in [PricingMethod::Analytic, PricingMethod::MonteCarlo] {
        assert!(price(&t, method, None).unwrap_err().is_unsupported_contract());
    }
    let lattice = price(&t, PricingMethod::Lattice, Some(300)).unwrap();
    assert!(lattice > 0.0);
}

#[test]
fn american_call_without_dividends_matches_european() {
    let american = atm(ExerciseType::American, OptionType::Call);
    let european = atm(ExerciseType::European, OptionType::Call);
    assert_eq!(
        price(&american, PricingMethod::Analytic, None).unwrap(),
        price(&european, PricingMethod::Analytic, None).unwrap()
    );
    let lattice_american = price(&american, PricingMethod::Lattice, Some(400)).unwrap();
    let lattice_european = price(&european, PricingMethod::Lattice, Some(400)).unwrap();
    assert_abs_diff_eq!(lattice_american, lattice_european, epsilon = 1e-10);
}

#[test]
fn zero_volatility() {
    let t = terms(ExerciseType::European, OptionType::Call, 100.0, 95.0, 0.0, 0.05, 0.0, 1.0);
    assert!(price(&t, PricingMethod::Analytic, None).unwrap_err().is_numeric_domain_error());
    assert!(price(&t, PricingMethod::Lattice, None).unwrap_err().is_numeric_domain_error());

    let mc = price_with(&t, PricingMethod::MonteCarlo, &seeded(1_000, 3)).unwrap();
    assert_abs_diff_eq!(mc.npv, 100.0 - 95.0 * (-0.05_f64).exp(), epsilon = 1e-9);
}

#[test]
fn zero_iterations_is_invalid_parameter() {
    let t = atm(ExerciseType::European, OptionType::Put);
    for method in [PricingMethod::MonteCarlo, PricingMethod::Lattice] {
        let err = price(&t, method, Some(0)).unwrap_err();
        assert!(err.is_invalid_parameter(), "{method}: {err}");
    }
    assert!(price(&t, PricingMethod::Analytic, Some(0)).is_ok());
}

#[test]
fn unknown_method_name_is_invalid_parameter() {
    let err = "Crank-Nicolson".parse::<PricingMethod>().unwrap_err();
    assert!(err.is_invalid_parameter(), "{err}");
    let method: PricingMethod = "Binomial Tree".parse().unwrap();
    assert!(price(&atm(ExerciseType::American, OptionType::Put), method, Some(100)).is_ok());
}

// ─── Concurrency ──────────────────────────────────────────────────────────────

#[test]
fn shared_terms_price_identically_across_threads() {
    let t = atm(ExerciseType::American, OptionType::Put);
    let expected = price(&t, PricingMethod::Lattice, Some(300)).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| price(&t, PricingMethod::Lattice, Some(300)).unwrap()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
