//! Monte Carlo European option engine.
//!
//! Samples the terminal underlying value exactly under geometric Brownian
//! motion and averages the discounted payoff.  The standard error of the
//! mean is reported alongside the price.

use crate::analytic_european_engine::ensure_no_early_exercise;
use op_core::{ensure_param, errors::Result, Size};
use op_instruments::{ContractTerms, Payoff, PricingEngine, PricingResults};
use op_math::random_numbers::{GaussianRng, InverseCumulativeNormalRng, StandardNormalRng};
use op_methods::mc_european_price;

/// Monte Carlo pricing engine for European vanilla options.
///
/// With a seed every call draws the same Mersenne Twister stream and
/// returns the same estimate.  Without one each call owns a fresh
/// entropy-seeded generator, so concurrent calls stay independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonteCarloEuropeanEngine {
    samples: Size,
    seed: Option<u64>,
}

impl MonteCarloEuropeanEngine {
    /// Engine drawing `samples` terminal values per call.
    ///
    /// # Errors
    /// [`InvalidParameter`](op_core::Error::InvalidParameter) if
    /// `samples == 0`.
    pub fn new(samples: Size) -> Result<Self> {
        ensure_param!(samples > 0, "number of Monte Carlo samples must be positive, got {samples}");
        Ok(Self {
            samples,
            seed: None,
        })
    }

    /// Fix the random stream for reproducible estimates.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Samples per call.
    pub fn samples(&self) -> Size {
        self.samples
    }

    /// Seed, if the stream is fixed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn simulate(&self, terms: &ContractTerms, rng: &mut dyn GaussianRng) -> PricingResults {
        let payoff = terms.payoff();
        let (npv, error) = mc_european_price(
            terms.spot(),
            terms.volatility(),
            terms.risk_free_rate(),
            terms.dividend_yield(),
            terms.time_to_expiry(),
            |s| payoff.value(s),
            self.samples,
            rng,
        );
        PricingResults::from_npv(npv).with_error_estimate(error)
    }
}

impl PricingEngine for MonteCarloEuropeanEngine {
    fn calculate(&self, terms: &ContractTerms) -> Result<PricingResults> {
        ensure_no_early_exercise(terms, "Monte Carlo")?;
        let results = match self.seed {
            Some(seed) => self.simulate(terms, &mut InverseCumulativeNormalRng::new(seed)),
            None => self.simulate(terms, &mut StandardNormalRng::from_entropy()),
        };
        Ok(results)
    }
}
