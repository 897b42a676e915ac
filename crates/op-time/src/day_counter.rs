//! `DayCounter` trait and the Actual/365 (Fixed) convention.
//!
//! A day counter turns the calendar life of a contract into the year
//! fraction (`time_to_expiry`) consumed by the pricers.

use crate::date::Date;
use op_core::{Real, Time};

/// Year-fraction convention.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Market name, e.g. `"Actual/365 (Fixed)"`.
    fn name(&self) -> &str;

    /// Days from `start` to `end` under this convention; negative when
    /// `end` precedes `start`.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Years from `start` to `end`.
    fn year_fraction(&self, start: Date, end: Date) -> Time;
}

/// Calendar days over a fixed 365-day year.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl Actual365Fixed {
    /// `days / 365`.
    pub fn year_fraction_of_days(days: i64) -> Time {
        days as Real / 365.0
    }
}

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> Time {
        Self::year_fraction_of_days(self.day_count(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_day_counts_without_changing_the_denominator() {
        let dc = Actual365Fixed;
        let cases = [
            ("2023-01-01", "2024-01-01", 365),
            ("2024-01-01", "2025-01-01", 366),
            ("2008-02-14", "2008-03-30", 45),
        ];
        for (a, b, days) in cases {
            let (start, end): (Date, Date) = (a.parse().unwrap(), b.parse().unwrap());
            assert_eq!(dc.day_count(start, end), days);
            assert_eq!(dc.year_fraction(start, end), days as f64 / 365.0);
            assert_eq!(dc.year_fraction(end, start), -(days as f64) / 365.0);
        }
        assert_eq!(dc.name(), "Actual/365 (Fixed)");
    }
}
