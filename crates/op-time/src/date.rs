//! `Date` type.
//!
//! A date is a serial day number counted from **December 31, 1899**
//! (serial 1 = January 1, 1900), limited to 1900-01-01 ..= 2199-12-31.
//! Pricing only ever needs the difference between two serials; calendar
//! conversion is delegated to `chrono`.

use chrono::{Datelike, Local, NaiveDate};
use op_core::errors::{Error, Result};
use op_core::Settings;
use std::fmt;
use std::str::FromStr;

/// `NaiveDate::num_days_from_ce` of the epoch, 1899-12-31.
const EPOCH_DAYS_FROM_CE: i32 = 693_595;

/// A calendar date stored as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// January 1, 1900.
    pub const MIN: Date = Date(1);

    /// December 31, 2199.
    pub const MAX: Date = Date(109_573);

    /// Date with the given serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Date from year, month (1–12) and day of month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        let naive = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .ok_or_else(|| {
                Error::Date(format!("{year:04}-{month:02}-{day:02} is not a calendar date"))
            })?;
        Self::from_naive(naive)
    }

    /// Convert from a `chrono` calendar date.
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        Self::from_serial(date.num_days_from_ce() - EPOCH_DAYS_FROM_CE)
            .map_err(|_| Error::Date(format!("{date} outside 1900-01-01 ..= 2199-12-31")))
    }

    /// The local calendar date.
    pub fn today() -> Result<Self> {
        Self::from_naive(Local::now().date_naive())
    }

    /// The evaluation date from [`Settings`], or [`Date::today`] when none
    /// has been set.
    pub fn evaluation_date() -> Result<Self> {
        match Settings::instance().evaluation_date_serial() {
            Some(serial) => Self::from_serial(serial),
            None => Self::today(),
        }
    }

    /// The `chrono` calendar date.
    pub fn to_naive(self) -> NaiveDate {
        // Every serial in [MIN, MAX] is representable.
        NaiveDate::from_num_days_from_ce_opt(self.0 + EPOCH_DAYS_FROM_CE).unwrap_or_default()
    }

    /// Serial day number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Year (1900–2199).
    pub fn year(&self) -> u16 {
        self.to_naive().year() as u16
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.to_naive().month() as u8
    }

    /// Day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.to_naive().day() as u8
    }

    /// The date `n` days later (earlier for negative `n`).
    ///
    /// # Errors
    /// [`Error::Date`] if the result leaves the supported range.
    pub fn add_days(self, n: i64) -> Result<Self> {
        let serial = i64::from(self.0) + n;
        i32::try_from(serial)
            .ok()
            .and_then(|s| Self::from_serial(s).ok())
            .ok_or_else(|| Error::Date(format!("{self} + {n} days leaves the supported range")))
    }

    /// Calendar days from `self` to `other`; positive if `other` is later.
    pub fn days_between(self, other: Date) -> i64 {
        i64::from(other.0) - i64::from(self.0)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> i64 {
        rhs.days_between(self)
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let parsed = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| Error::Date(format!("cannot parse '{s}' as YYYY-MM-DD: {e}")))?;
        Self::from_naive(parsed)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_naive().format("%Y-%m-%d"))
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
