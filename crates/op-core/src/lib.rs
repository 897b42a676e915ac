//! # op-core
//!
//! Numeric aliases, the error taxonomy returned by every pricing call, and
//! the evaluation-date `Settings` shared by the other optionprice crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// [`Error`], [`Result`] and the validation macros.
pub mod errors;

/// Process-wide evaluation date.
pub mod settings;

/// Floating-point scalar.
pub type Real = f64;

/// Step and sample counts.
pub type Size = usize;

/// Continuously compounded annual rate or yield, as a decimal.
pub type Rate = Real;

/// Present value of one unit paid later.
pub type DiscountFactor = Real;

/// Option value in currency units.
pub type Price = Real;

/// Annualised volatility, as a decimal.
pub type Volatility = Real;

/// Year fraction.
pub type Time = Real;

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
