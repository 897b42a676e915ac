//! The pricing-engine interface.
//!
//! A pricing engine turns [`ContractTerms`] into [`PricingResults`] or a
//! structured rejection.  Engines hold only their method parameters, never
//! the results of a previous call, so one engine and one set of terms can be
//! shared across threads.

use crate::terms::ContractTerms;
use op_core::{errors::Result, Price, Real};

/// Results of pricing a contract.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PricingResults {
    /// Option value.
    pub npv: Price,
    /// Standard error of `npv` (Monte Carlo only).
    pub error_estimate: Option<Real>,
}

impl PricingResults {
    /// Create pricing results with just an NPV.
    pub fn from_npv(npv: Price) -> Self {
        Self {
            npv,
            error_estimate: None,
        }
    }

    /// Attach a sampling error estimate.
    pub fn with_error_estimate(mut self, error: Real) -> Self {
        self.error_estimate = Some(error);
        self
    }
}

/// Base trait for all pricing engines.
pub trait PricingEngine: std::fmt::Debug + Send + Sync {
    /// Price the contract described by `terms`.
    fn calculate(&self, terms: &ContractTerms) -> Result<PricingResults>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_results_builder() {
        let r = PricingResults::from_npv(42.0).with_error_estimate(0.1);
        assert!((r.npv - 42.0).abs() < 1e-15);
        assert_eq!(r.error_estimate, Some(0.1));
        assert_eq!(PricingResults::from_npv(1.0).error_estimate, None);
    }
}
