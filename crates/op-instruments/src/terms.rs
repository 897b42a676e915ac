//! Contract terms: the immutable inputs shared by every pricing method.
//!
//! Terms are validated once, when they are built; every pricer can then
//! rely on `spot > 0`, `strike > 0`, `volatility >= 0`, finite rates, and
//! `time_to_expiry > 0`.  Nothing in a `ContractTerms` changes after
//! construction, so one instance can be priced from many threads at once.

use crate::exercise::ExerciseType;
use crate::instrument::{PricingEngine, PricingResults};
use crate::payoff::{OptionType, PlainVanillaPayoff};
use op_core::errors::{Error, Result};
use op_core::{ensure_terms, Rate, Real, Time, Volatility};
use op_time::{Date, Expiry};
use std::fmt;

/// Validated inputs for valuing a vanilla option.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContractTerms {
    exercise: ExerciseType,
    option_type: OptionType,
    spot: Real,
    strike: Real,
    volatility: Volatility,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    time_to_expiry: Time,
    start: Option<Date>,
    end: Option<Date>,
}

impl ContractTerms {
    /// Build terms from a year fraction.
    ///
    /// # Errors
    /// [`Error::InvalidTerms`] when a price is not strictly positive, the
    /// volatility is negative, any input is not finite, or
    /// `time_to_expiry <= 0`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        exercise: ExerciseType,
        option_type: OptionType,
        spot: Real,
        strike: Real,
        volatility: Volatility,
        risk_free_rate: Rate,
        dividend_yield: Rate,
        time_to_expiry: Time,
    ) -> Result<Self> {
        let terms = Self {
            exercise,
            option_type,
            spot,
            strike,
            volatility,
            risk_free_rate,
            dividend_yield,
            time_to_expiry,
            start: None,
            end: None,
        };
        terms.validate()?;
        Ok(terms)
    }

    /// Start a [`ContractTermsBuilder`].
    pub fn builder() -> ContractTermsBuilder {
        ContractTermsBuilder::default()
    }

    fn validate(&self) -> Result<()> {
        ensure_terms!(
            self.spot.is_finite() && self.spot > 0.0,
            "spot must be a positive finite number, got {}",
            self.spot
        );
        ensure_terms!(
            self.strike.is_finite() && self.strike > 0.0,
            "strike must be a positive finite number, got {}",
            self.strike
        );
        ensure_terms!(
            self.volatility.is_finite() && self.volatility >= 0.0,
            "volatility must be a non-negative finite number, got {}",
            self.volatility
        );
        ensure_terms!(
            self.risk_free_rate.is_finite(),
            "risk-free rate must be finite, got {}",
            self.risk_free_rate
        );
        ensure_terms!(
            self.dividend_yield.is_finite(),
            "dividend yield must be finite, got {}",
            self.dividend_yield
        );
        ensure_terms!(
            self.time_to_expiry.is_finite() && self.time_to_expiry > 0.0,
            "time to expiry must be positive, got {} years",
            self.time_to_expiry
        );
        Ok(())
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// European or American exercise.
    pub fn exercise(&self) -> ExerciseType {
        self.exercise
    }

    /// Call or put.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Current price of the underlying.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Strike price.
    pub fn strike(&self) -> Real {
        self.strike
    }

    /// Annualised volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Continuously-compounded risk-free rate.
    pub fn risk_free_rate(&self) -> Rate {
        self.risk_free_rate
    }

    /// Continuously-compounded dividend yield.
    pub fn dividend_yield(&self) -> Rate {
        self.dividend_yield
    }

    /// Time to expiry in years.
    pub fn time_to_expiry(&self) -> Time {
        self.time_to_expiry
    }

    /// Start date, when the terms were built from dates or a day count.
    pub fn start_date(&self) -> Option<Date> {
        self.start
    }

    /// Expiry date, when the terms were built from dates or a day count.
    pub fn expiry_date(&self) -> Option<Date> {
        self.end
    }

    /// The exercise payoff `max(φ(S − K), 0)`.
    pub fn payoff(&self) -> PlainVanillaPayoff {
        PlainVanillaPayoff::new(self.option_type, self.strike)
    }

    /// Price these terms with the given engine.
    pub fn price_with(&self, engine: &dyn PricingEngine) -> Result<PricingResults> {
        engine.calculate(self)
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Builder for [`ContractTerms`], mirroring how contracts are usually
/// quoted: a day count or a pair of calendar dates instead of a year
/// fraction, and an optional dividend yield (default `0`).
///
/// The life of the contract is taken from, in order of precedence: a
/// start/end date pair, a day count (from `start` or the evaluation date),
/// an explicit year fraction.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ContractTermsBuilder {
    exercise: Option<ExerciseType>,
    option_type: Option<OptionType>,
    spot: Option<Real>,
    strike: Option<Real>,
    volatility: Option<Volatility>,
    risk_free_rate: Option<Rate>,
    dividend_yield: Option<Rate>,
    days: Option<i64>,
    start: Option<Date>,
    end: Option<Date>,
    years: Option<Time>,
}

impl ContractTermsBuilder {
    /// Exercise style.
    pub fn exercise(mut self, exercise: ExerciseType) -> Self {
        self.exercise = Some(exercise);
        self
    }

    /// Call or put.
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    /// Current price of the underlying.
    pub fn spot(mut self, spot: Real) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Strike price.
    pub fn strike(mut self, strike: Real) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Annualised volatility.
    pub fn volatility(mut self, volatility: Volatility) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Continuously-compounded risk-free rate.
    pub fn risk_free_rate(mut self, rate: Rate) -> Self {
        self.risk_free_rate = Some(rate);
        self
    }

    /// Continuously-compounded dividend yield (default `0`).
    pub fn dividend_yield(mut self, dividend_yield: Rate) -> Self {
        self.dividend_yield = Some(dividend_yield);
        self
    }

    /// Life of the contract in calendar days.
    pub fn days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }

    /// Start date (default: the evaluation date).
    pub fn start(mut self, start: Date) -> Self {
        self.start = Some(start);
        self
    }

    /// Expiry date.
    pub fn end(mut self, end: Date) -> Self {
        self.end = Some(end);
        self
    }

    /// Life of the contract as a year fraction, bypassing dates.
    pub fn time_to_expiry(mut self, years: Time) -> Self {
        self.years = Some(years);
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    /// [`Error::InvalidTerms`] for any missing or malformed input, including
    /// an unresolvable expiry or out-of-range dates.
    pub fn build(self) -> Result<ContractTerms> {
        let exercise = required(self.exercise, "exercise style")?;
        let option_type = required(self.option_type, "option kind")?;
        let spot = required(self.spot, "spot")?;
        let strike = required(self.strike, "strike")?;
        let volatility = required(self.volatility, "volatility")?;
        let risk_free_rate = required(self.risk_free_rate, "risk-free rate")?;
        let dividend_yield = self.dividend_yield.unwrap_or(0.0);

        let has_date_pair = self.start.is_some() && self.end.is_some();
        let (time_to_expiry, start, end) = match self.years {
            // Dates on their own cannot fix the life of the contract here.
            Some(years) if !has_date_pair && self.days.is_none() => (years, None, None),
            _ => {
                let expiry =
                    Expiry::from_parts(self.days, self.start, self.end).map_err(into_terms_error)?;
                let (start, end) = expiry.resolve().map_err(into_terms_error)?;
                let t = expiry.year_fraction().map_err(into_terms_error)?;
                (t, Some(start), Some(end))
            }
        };

        let mut terms = ContractTerms::new(
            exercise,
            option_type,
            spot,
            strike,
            volatility,
            risk_free_rate,
            dividend_yield,
            time_to_expiry,
        )?;
        terms.start = start;
        terms.end = end;
        Ok(terms)
    }
}

fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| Error::InvalidTerms(format!("{name} must be given")))
}

fn into_terms_error(e: Error) -> Error {
    match e {
        Error::Date(msg) => Error::InvalidTerms(msg),
        other => other,
    }
}

// ── Display ──────────────────────────────────────────────────────────────────

/// Render a rate as a percentage without binary-rounding noise
/// (`0.07` → `7%`, not `7.000000000000001%`).
fn percent(x: Real) -> String {
    let p = (x * 100.0 * 1e10).round() / 1e10;
    format!("{p}%")
}

impl fmt::Display for ContractTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<16}{}", "Type:", self.exercise)?;
        writeln!(f, "{:<16}{}", "Kind:", self.option_type)?;
        writeln!(f, "{:<16}{}", "Price initial:", self.spot)?;
        writeln!(f, "{:<16}{}", "Price strike:", self.strike)?;
        writeln!(f, "{:<16}{}", "Volatility:", percent(self.volatility))?;
        write!(f, "{:<16}{}", "Risk free rate:", percent(self.risk_free_rate))?;
        if self.dividend_yield != 0.0 {
            write!(f, "\n{:<16}{}", "Dividend rate:", percent(self.dividend_yield))?;
        }
        let days = match (self.start, self.end) {
            (Some(start), Some(end)) => {
                write!(f, "\n{:<16}{}", "Start Date:", start)?;
                write!(f, "\n{:<16}{}", "Expire Date:", end)?;
                end - start
            }
            // whole days, absorbing the rounding in days / 365 * 365
            _ => (self.time_to_expiry * 365.0 + 1e-9).floor() as i64,
        };
        write!(f, "\n{:<16}{} days", "Time span:", days)
    }
}
