//! Analytic European option engine (Black-Scholes-Merton).
//!
//! Prices vanilla options with no early-exercise premium using the
//! closed-form Black-Scholes-Merton formula.

use op_core::{domain_error, errors::Result, unsupported, Price, Rate, Real, Time, Volatility};
use op_instruments::{ContractTerms, ExerciseType, OptionType, PricingEngine, PricingResults};
use op_math::distributions::normal_cdf;

/// Analytic pricing engine for European vanilla options.
///
/// Implements the Black-Scholes-Merton closed-form solution:
///
/// $$C = S e^{-qT} N(d_1) - K e^{-rT} N(d_2)$$
/// $$P = K e^{-rT} N(-d_2) - S e^{-qT} N(-d_1)$$
///
/// where $d_{1,2} = \frac{\ln(S/K) + (r - q \pm \sigma^2/2)T}{\sigma\sqrt{T}}$
///
/// American calls are accepted when early exercise is never optimal
/// (`q <= 0` and `r >= 0`); any other American contract is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEuropeanEngine;

impl AnalyticEuropeanEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }
}

/// Black-Scholes-Merton price of a European option.
///
/// # Errors
/// [`NumericDomainError`](op_core::Error::NumericDomainError) when
/// `σ·√T` is zero or not finite, since `d1` and `d2` are then undefined.
pub fn black_scholes_merton(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
    time_to_expiry: Time,
) -> Result<Price> {
    let phi = option_type.sign();
    let t = time_to_expiry;
    let std_dev = volatility * t.sqrt();
    domain_error!(
        std_dev.is_finite() && std_dev > 0.0,
        "Black-Scholes-Merton is undefined for σ√T = {std_dev} (σ = {volatility}, T = {t})"
    );

    let r = risk_free_rate;
    let q = dividend_yield;
    let d1 = ((spot / strike).ln() + (r - q + 0.5 * volatility * volatility) * t) / std_dev;
    let d2 = d1 - std_dev;

    let df_r = (-r * t).exp();
    let df_q = (-q * t).exp();
    let price =
        phi * spot * df_q * normal_cdf(phi * d1) - phi * strike * df_r * normal_cdf(phi * d2);

    domain_error!(price.is_finite(), "Black-Scholes-Merton price is not finite: {price}");
    Ok(price)
}

/// Whether an American contract can carry an early-exercise premium under
/// flat rates.  Calls on an asset with no dividend yield and a non-negative
/// rate are never exercised early.
pub(crate) fn has_early_exercise_premium(terms: &ContractTerms) -> bool {
    match (terms.exercise(), terms.option_type()) {
        (ExerciseType::European, _) => false,
        (ExerciseType::American, OptionType::Put) => true,
        (ExerciseType::American, OptionType::Call) => {
            terms.dividend_yield() > 0.0 || terms.risk_free_rate() < 0.0
        }
    }
}

/// Reject contracts whose value depends on early exercise.
pub(crate) fn ensure_no_early_exercise(terms: &ContractTerms, method: &str) -> Result<()> {
    if has_early_exercise_premium(terms) {
        tracing::warn!(
            method,
            exercise = %terms.exercise(),
            kind = %terms.option_type(),
            "contract shape rejected"
        );
        unsupported!(
            "{method} cannot value an {} {} with an early-exercise premium; use the binomial tree",
            terms.exercise(),
            terms.option_type()
        );
    }
    Ok(())
}

impl PricingEngine for AnalyticEuropeanEngine {
    fn calculate(&self, terms: &ContractTerms) -> Result<PricingResults> {
        ensure_no_early_exercise(terms, "Black-Scholes-Merton")?;
        let price = black_scholes_merton(
            terms.option_type(),
            terms.spot(),
            terms.strike(),
            terms.risk_free_rate(),
            terms.dividend_yield(),
            terms.volatility(),
            terms.time_to_expiry(),
        )?;
        Ok(PricingResults::from_npv(price))
    }
}
