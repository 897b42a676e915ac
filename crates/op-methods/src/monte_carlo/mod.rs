//! Monte Carlo simulation of terminal underlying values.
//!
//! Under geometric Brownian motion the terminal value has the closed form
//!
//! ```text
//! S_T = S_0 · exp((r − q − σ²/2)·T + σ·√T·Z),   Z ~ N(0, 1)
//! ```
//!
//! so a European contract needs one normal draw per sample and no time
//! stepping.
//!
//! # Overview
//!
//! * [`TerminalValueGenerator`]: maps a standard-normal deviate to `S_T`
//! * [`MonteCarloModel`]: discounted-payoff sampler collecting [`Statistics`]
//! * [`mc_european_price`]: convenience wrapper returning `(mean, std_error)`

use op_core::{DiscountFactor, Rate, Real, Time, Volatility};
use op_math::random_numbers::GaussianRng;
use op_math::statistics::Statistics;

// ─── TerminalValueGenerator ───────────────────────────────────────────────────

/// Exact sampler of the terminal value of a geometric Brownian motion.
#[derive(Debug, Clone, Copy)]
pub struct TerminalValueGenerator {
    spot: Real,
    drift: Real,
    diffusion: Real,
}

impl TerminalValueGenerator {
    /// Generator for `S_T` given the spot, volatility, risk-free rate,
    /// dividend yield and horizon in years.
    pub fn new(
        spot: Real,
        volatility: Volatility,
        risk_free_rate: Rate,
        dividend_yield: Rate,
        maturity: Time,
    ) -> Self {
        Self {
            spot,
            drift: (risk_free_rate - dividend_yield - 0.5 * volatility * volatility) * maturity,
            diffusion: volatility * maturity.sqrt(),
        }
    }

    /// Terminal value for the deviate `z`.
    pub fn value(&self, z: Real) -> Real {
        self.spot * (self.drift + self.diffusion * z).exp()
    }

    /// Draw a deviate from `rng` and return the terminal value.
    pub fn next_value(&self, rng: &mut dyn GaussianRng) -> Real {
        self.value(rng.next_gaussian())
    }
}

// ─── MonteCarloModel ──────────────────────────────────────────────────────────

/// Samples discounted payoffs `discount · payoff(S_T)` and gathers their
/// statistics.
pub struct MonteCarloModel<F> {
    generator: TerminalValueGenerator,
    payoff: F,
    discount: DiscountFactor,
}

impl<F: Fn(Real) -> Real> MonteCarloModel<F> {
    /// Create a new Monte Carlo model.
    pub fn new(generator: TerminalValueGenerator, payoff: F, discount: DiscountFactor) -> Self {
        Self {
            generator,
            payoff,
            discount,
        }
    }

    /// Run `samples` independent draws and return the gathered statistics.
    pub fn simulate(&self, rng: &mut dyn GaussianRng, samples: usize) -> Statistics {
        (0..samples)
            .map(|_| self.discount * (self.payoff)(self.generator.next_value(rng)))
            .collect()
    }
}

/// Convenience function: Monte Carlo price of a European option.
///
/// Returns `(mean, std_error)`. The standard error is `0` with fewer than
/// two samples; the mean is `0` with none.
#[allow(clippy::too_many_arguments)]
pub fn mc_european_price(
    spot: Real,
    volatility: Volatility,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    maturity: Time,
    payoff: impl Fn(Real) -> Real,
    samples: usize,
    rng: &mut dyn GaussianRng,
) -> (Real, Real) {
    let generator =
        TerminalValueGenerator::new(spot, volatility, risk_free_rate, dividend_yield, maturity);
    let discount = (-risk_free_rate * maturity).exp();
    let stats = MonteCarloModel::new(generator, payoff, discount).simulate(rng, samples);
    (
        stats.mean().unwrap_or(0.0),
        stats.error_estimate().unwrap_or(0.0),
    )
}

// ─── Tests ────────────────────────────────────────────────────────────────────
