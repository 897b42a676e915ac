//! Method selection and the `price` entry points.
//!
//! [`PricingMethod`] is the closed set of valuation methods.  Each variant
//! maps to exactly one engine; textual names from user input are parsed
//! once, up front, so a misspelt method is an error rather than a no-op.

use crate::analytic_european_engine::AnalyticEuropeanEngine;
use crate::binomial_engine::BinomialEngine;
use crate::mc_european_engine::MonteCarloEuropeanEngine;
use op_core::errors::{Error, Result};
use op_core::{Price, Size};
use op_instruments::{ContractTerms, PricingEngine, PricingResults};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Monte Carlo samples used when no iteration count is given.
pub const DEFAULT_MC_SAMPLES: Size = 5_000;

/// Lattice steps used when no iteration count is given.
pub const DEFAULT_LATTICE_STEPS: Size = 1_000;

// ─── PricingMethod ────────────────────────────────────────────────────────────

/// Valuation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PricingMethod {
    /// Closed-form Black-Scholes-Merton.
    #[default]
    Analytic,
    /// Monte Carlo simulation of the terminal price.
    MonteCarlo,
    /// Cox-Ross-Rubinstein binomial tree.
    Lattice,
}

impl PricingMethod {
    /// Short code: `BSM`, `MC` or `BT`.
    pub fn code(self) -> &'static str {
        match self {
            PricingMethod::Analytic => "BSM",
            PricingMethod::MonteCarlo => "MC",
            PricingMethod::Lattice => "BT",
        }
    }

    /// Iteration count used when the caller gives none (`0` for analytic).
    pub fn default_iterations(self) -> Size {
        match self {
            PricingMethod::Analytic => 0,
            PricingMethod::MonteCarlo => DEFAULT_MC_SAMPLES,
            PricingMethod::Lattice => DEFAULT_LATTICE_STEPS,
        }
    }

    /// The engine for this method, configured by `config`.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] for a zero iteration count.  The analytic
    /// method ignores the count and the seed.
    pub fn engine(self, config: &PricingConfig) -> Result<Box<dyn PricingEngine>> {
        let iterations = config.iterations.unwrap_or(self.default_iterations());
        let engine: Box<dyn PricingEngine> = match self {
            PricingMethod::Analytic => Box::new(AnalyticEuropeanEngine::new()),
            PricingMethod::MonteCarlo => {
                let mut engine = MonteCarloEuropeanEngine::new(iterations)?;
                if let Some(seed) = config.seed {
                    engine = engine.with_seed(seed);
                }
                Box::new(engine)
            }
            PricingMethod::Lattice => Box::new(BinomialEngine::new(iterations)?),
        };
        Ok(engine)
    }
}

impl FromStr for PricingMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bsm" | "b-s-m" | "analytic" | "black-scholes" => Ok(PricingMethod::Analytic),
            "mc" | "monte carlo" | "montecarlo" | "monte-carlo" => Ok(PricingMethod::MonteCarlo),
            "bt" | "binomial tree" | "binomial" | "lattice" | "tree" => Ok(PricingMethod::Lattice),
            _ => Err(Error::InvalidParameter(format!(
                "unknown pricing method '{s}', expected BSM, MC or BT"
            ))),
        }
    }
}

impl fmt::Display for PricingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ─── PricingConfig ────────────────────────────────────────────────────────────

/// Per-call method parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingConfig {
    /// Monte Carlo samples or lattice steps; the method default when `None`.
    pub iterations: Option<Size>,
    /// Fixed Monte Carlo seed; fresh entropy when `None`.
    pub seed: Option<u64>,
}

impl PricingConfig {
    /// Set the iteration count.
    pub fn with_iterations(mut self, iterations: Size) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Fix the Monte Carlo seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

// ─── Entry points ─────────────────────────────────────────────────────────────

/// Price `terms` with `method`.
///
/// `iterations` is the Monte Carlo sample count or the number of lattice
/// steps; `None` selects [`DEFAULT_MC_SAMPLES`] / [`DEFAULT_LATTICE_STEPS`].
///
/// # Example
/// ```
/// use op_instruments::{ContractTerms, ExerciseType, OptionType};
/// use op_pricingengines::{price, PricingMethod};
///
/// let terms = ContractTerms::new(
///     ExerciseType::American, OptionType::Put, 100.0, 100.0, 0.2, 0.05, 0.0, 1.0,
/// ).unwrap();
/// assert!(price(&terms, PricingMethod::Analytic, None).unwrap_err().is_unsupported_contract());
/// let npv = price(&terms, PricingMethod::Lattice, Some(500)).unwrap();
/// assert!((npv - 6.09).abs() < 0.02);
/// ```
///
/// # Errors
/// See [`price_with`].
pub fn price(terms: &ContractTerms, method: PricingMethod, iterations: Option<Size>) -> Result<Price> {
    let config = PricingConfig {
        iterations,
        seed: None,
    };
    price_with(terms, method, &config).map(|r| r.npv)
}

/// Price `terms` with `method` and return the full results, including the
/// Monte Carlo error estimate.
///
/// # Errors
/// * [`Error::InvalidParameter`] for a zero iteration count.
/// * [`Error::UnsupportedContract`] when the method cannot value the
///   contract's exercise style.
/// * [`Error::NumericDomainError`] when the inputs fall outside the
///   method's numerical domain.
pub fn price_with(
    terms: &ContractTerms,
    method: PricingMethod,
    config: &PricingConfig,
) -> Result<PricingResults> {
    let engine = method.engine(config)?;
    let results = terms.price_with(engine.as_ref())?;
    debug!(
        %method,
        iterations = ?config.iterations,
        seeded = config.seed.is_some(),
        npv = results.npv,
        error_estimate = ?results.error_estimate,
        "priced contract"
    );
    Ok(results)
}

/// Method-call form of [`price`] on [`ContractTerms`].
pub trait ContractPricing {
    /// Price with `method` and an optional iteration count.
    fn price(&self, method: PricingMethod, iterations: Option<Size>) -> Result<Price>;
}

impl ContractPricing for ContractTerms {
    fn price(&self, method: PricingMethod, iterations: Option<Size>) -> Result<Price> {
        price(self, method, iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use op_instruments::{ExerciseType, OptionType};

    #[test]
    fn parses_every_alias() {
        let cases = [
            ("BSM", PricingMethod::Analytic),
            ("b-s-m", PricingMethod::Analytic),
            ("Analytic", PricingMethod::Analytic),
            ("black-scholes", PricingMethod::Analytic),
            ("MC", PricingMethod::MonteCarlo),
            ("Monte Carlo", PricingMethod::MonteCarlo),
            ("montecarlo", PricingMethod::MonteCarlo),
            ("monte-carlo", PricingMethod::MonteCarlo),
            ("BT", PricingMethod::Lattice),
            ("Binomial Tree", PricingMethod::Lattice),
            ("binomial", PricingMethod::Lattice),
            (" lattice ", PricingMethod::Lattice),
            ("TREE", PricingMethod::Lattice),
        ];
        for (text, method) in cases {
            assert_eq!(text.parse::<PricingMethod>().unwrap(), method, "{text}");
        }
    }

    #[test]
    fn unknown_method_is_invalid_parameter() {
        for text in ["", "BS", "finite-difference"] {
            let err = text.parse::<PricingMethod>().unwrap_err();
            assert!(err.is_invalid_parameter(), "{text}: {err}");
        }
    }

    #[test]
    fn display_is_the_short_code() {
        assert_eq!(PricingMethod::Analytic.to_string(), "BSM");
        assert_eq!(PricingMethod::MonteCarlo.to_string(), "MC");
        assert_eq!(PricingMethod::Lattice.to_string(), "BT");
        assert_eq!(PricingMethod::default(), PricingMethod::Analytic);
        for m in [PricingMethod::Analytic, PricingMethod::MonteCarlo, PricingMethod::Lattice] {
            assert_eq!(m.to_string().parse::<PricingMethod>().unwrap(), m);
        }
    }

    #[test]
    fn zero_iterations_is_invalid_parameter() {
        let config = PricingConfig::default().with_iterations(0);
        assert!(PricingMethod::MonteCarlo.engine(&config).unwrap_err().is_invalid_parameter());
        assert!(PricingMethod::Lattice.engine(&config).unwrap_err().is_invalid_parameter());
        assert!(PricingMethod::Analytic.engine(&config).is_ok());
    }

    #[test]
    fn extension_trait_matches_free_function() {
        let terms =
            ContractTerms::new(ExerciseType::European, OptionType::Call, 100.0, 100.0, 0.2, 0.05, 0.0, 1.0)
                .unwrap();
        assert_eq!(
            terms.price(PricingMethod::Lattice, Some(50)).unwrap(),
            price(&terms, PricingMethod::Lattice, Some(50)).unwrap()
        );
    }
}
