//! Contract expiry: either a number of days or a pair of calendar dates.
//!
//! A contract's life can be given as a plain day count, as a start date plus
//! a day count, or as explicit start and end dates.  A missing start date
//! means the evaluation date (see [`op_core::Settings`]).  When both a day
//! count and an end date are known, the dates win.

use crate::date::Date;
use crate::day_counter::{Actual365Fixed, DayCounter};
use op_core::errors::{Error, Result};
use op_core::Time;

/// How the life of a contract is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// `days` calendar days after `start` (or after the evaluation date).
    Days {
        /// Start date; `None` means the evaluation date.
        start: Option<Date>,
        /// Number of calendar days to expiry.
        days: i64,
    },
    /// Explicit expiry date.
    Dates {
        /// Start date; `None` means the evaluation date.
        start: Option<Date>,
        /// Expiry date.
        end: Date,
    },
}

impl Expiry {
    /// `days` calendar days from the evaluation date.
    pub fn days(days: i64) -> Self {
        Expiry::Days { start: None, days }
    }

    /// Explicit start and end dates.
    pub fn between(start: Date, end: Date) -> Self {
        Expiry::Dates {
            start: Some(start),
            end,
        }
    }

    /// Build from the optional pieces a caller may supply.
    ///
    /// An end date combined with either a start date or a day count resolves
    /// to [`Expiry::Dates`]; the day count is then ignored.  A day count alone
    /// (with or without a start date) resolves to [`Expiry::Days`].
    ///
    /// # Errors
    /// [`Error::InvalidTerms`] when neither a day count nor a start/end pair
    /// is present.
    pub fn from_parts(days: Option<i64>, start: Option<Date>, end: Option<Date>) -> Result<Self> {
        match (days, start, end) {
            (_, Some(start), Some(end)) => Ok(Expiry::Dates {
                start: Some(start),
                end,
            }),
            (Some(_), None, Some(end)) => Ok(Expiry::Dates { start: None, end }),
            (Some(days), start, None) => Ok(Expiry::Days { start, days }),
            _ => Err(Error::InvalidTerms(
                "either a day count or both start and end dates must be given".into(),
            )),
        }
    }

    /// Resolve to concrete `(start, end)` dates.
    ///
    /// # Errors
    /// [`Error::Date`] if the evaluation date or the end date is out of the
    /// supported calendar range.
    pub fn resolve(&self) -> Result<(Date, Date)> {
        match *self {
            Expiry::Days { start, days } => {
                let start = start.map_or_else(Date::evaluation_date, Ok)?;
                Ok((start, start.add_days(days)?))
            }
            Expiry::Dates { start, end } => {
                let start = start.map_or_else(Date::evaluation_date, Ok)?;
                Ok((start, end))
            }
        }
    }

    /// Time to expiry in years under Actual/365 (Fixed).
    pub fn year_fraction(&self) -> Result<Time> {
        if let Expiry::Days { days, .. } = *self {
            return Ok(Actual365Fixed::year_fraction_of_days(days));
        }
        let (start, end) = self.resolve()?;
        Ok(Actual365Fixed.year_fraction(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn dates_take_precedence_over_days() {
        let e = Expiry::from_parts(Some(10), Some(date(2008, 2, 14)), Some(date(2008, 3, 30))).unwrap();
        assert_eq!(e, Expiry::between(date(2008, 2, 14), date(2008, 3, 30)));
        assert!((e.year_fraction().unwrap() - 45.0 / 365.0).abs() < 1e-15);
    }

    #[test]
    fn days_from_explicit_start() {
        let e = Expiry::from_parts(Some(45), Some(date(2008, 2, 14)), None).unwrap();
        let (start, end) = e.resolve().unwrap();
        assert_eq!(start, date(2008, 2, 14));
        assert_eq!(end, date(2008, 3, 30));
        assert!((e.year_fraction().unwrap() - 45.0 / 365.0).abs() < 1e-15);
    }

    #[test]
    fn missing_duration_is_rejected() {
        for (start, end) in [
            (None, None),
            (Some(date(2008, 2, 14)), None),
            (None, Some(date(2008, 3, 30))),
        ] {
            let err = Expiry::from_parts(None, start, end).unwrap_err();
            assert!(err.is_invalid_terms(), "{err}");
        }
    }

    #[test]
    fn plain_day_count_needs_no_calendar() {
        let e = Expiry::days(45);
        assert!((e.year_fraction().unwrap() - 45.0 / 365.0).abs() < 1e-15);
    }
}
