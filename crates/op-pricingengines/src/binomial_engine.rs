//! Binomial-tree engine for European and American vanilla options.
//!
//! Builds a Cox-Ross-Rubinstein lattice over `steps` equal intervals and
//! rolls the payoff back to the root, taking the larger of the hold and
//! exercise values at every node when the contract is American.

use op_core::{ensure_param, errors::Result, Size};
use op_instruments::{ContractTerms, Payoff, PricingEngine, PricingResults};
use op_methods::{roll_back, BinomialTree};

/// Cox-Ross-Rubinstein binomial engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialEngine {
    steps: Size,
}

impl BinomialEngine {
    /// Engine with `steps` time steps.
    ///
    /// # Errors
    /// [`InvalidParameter`](op_core::Error::InvalidParameter) if
    /// `steps == 0`.
    pub fn new(steps: Size) -> Result<Self> {
        ensure_param!(steps > 0, "number of lattice steps must be positive, got {steps}");
        Ok(Self { steps })
    }

    /// Number of time steps.
    pub fn steps(&self) -> Size {
        self.steps
    }
}

impl PricingEngine for BinomialEngine {
    fn calculate(&self, terms: &ContractTerms) -> Result<PricingResults> {
        let tree = BinomialTree::cox_ross_rubinstein(
            terms.spot(),
            terms.volatility(),
            terms.risk_free_rate(),
            terms.dividend_yield(),
            terms.time_to_expiry(),
            self.steps,
        )?;
        let discount = (-terms.risk_free_rate() * tree.dt()).exp();
        let payoff = terms.payoff();
        let npv = roll_back(
            &tree,
            &|s| payoff.value(s),
            discount,
            terms.exercise().allows_early_exercise(),
        );
        Ok(PricingResults::from_npv(npv))
    }
}
