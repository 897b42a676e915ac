//! # op-time
//!
//! Calendar dates, the Actual/365 (Fixed) day counter, and resolution of a
//! contract's expiry (a day count or a pair of dates) into a year fraction.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `DayCounter` trait and the Actual/365 (Fixed) convention.
pub mod day_counter;

/// `Expiry`: a day count or a start/end date pair.
pub mod expiry;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use day_counter::{Actual365Fixed, DayCounter};
pub use expiry::Expiry;
