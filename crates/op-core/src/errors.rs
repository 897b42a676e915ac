//! Error types for optionprice-rs.
//!
//! Every pricing call either returns a number or one of the variants below.
//! Rejections are values, never panics, so callers can branch on them.

use thiserror::Error;

/// The top-level error type used throughout optionprice-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Malformed or missing contract inputs, detected when the terms are
    /// built.
    #[error("invalid contract terms: {0}")]
    InvalidTerms(String),

    /// Malformed method-specific parameter (iteration count, method name).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The chosen method cannot value the requested contract shape.
    #[error("unsupported contract: {0}")]
    UnsupportedContract(String),

    /// The inputs put the numerical method outside its domain
    /// (zero denominator, non-probability weights, non-finite result).
    #[error("numeric domain error: {0}")]
    NumericDomainError(String),

    /// Date construction or parsing error.
    #[error("date error: {0}")]
    Date(String),
}

impl Error {
    /// `true` for [`Error::InvalidTerms`].
    pub fn is_invalid_terms(&self) -> bool {
        matches!(self, Error::InvalidTerms(_))
    }

    /// `true` for [`Error::InvalidParameter`].
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::InvalidParameter(_))
    }

    /// `true` for [`Error::UnsupportedContract`].
    pub fn is_unsupported_contract(&self) -> bool {
        matches!(self, Error::UnsupportedContract(_))
    }

    /// `true` for [`Error::NumericDomainError`].
    pub fn is_numeric_domain_error(&self) -> bool {
        matches!(self, Error::NumericDomainError(_))
    }
}

/// Shorthand `Result` type used throughout optionprice-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidTerms(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use op_core::{ensure_terms, errors::Error};
/// fn positive(x: f64) -> op_core::errors::Result<f64> {
///     ensure_terms!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).unwrap_err().is_invalid_terms());
/// ```
#[macro_export]
macro_rules! ensure_terms {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidTerms(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidParameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use op_core::{ensure_param, errors::Error};
/// fn steps(n: usize) -> op_core::errors::Result<usize> {
///     ensure_param!(n > 0, "steps must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(steps(10).is_ok());
/// assert!(steps(0).unwrap_err().is_invalid_parameter());
/// ```
#[macro_export]
macro_rules! ensure_param {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::UnsupportedContract(...))` immediately.
///
/// # Example
/// ```
/// use op_core::{unsupported, errors::Error};
/// fn american_put() -> op_core::errors::Result<f64> {
///     unsupported!("no early-exercise support");
/// }
/// assert!(american_put().unwrap_err().is_unsupported_contract());
/// ```
#[macro_export]
macro_rules! unsupported {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::UnsupportedContract(format!($($msg)*)))
    };
}

/// Returns `Err(Error::NumericDomainError(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use op_core::{domain_error, errors::Error};
/// fn inv(x: f64) -> op_core::errors::Result<f64> {
///     domain_error!(x != 0.0, "division by zero");
///     Ok(1.0 / x)
/// }
/// assert!(inv(2.0).is_ok());
/// assert!(inv(0.0).unwrap_err().is_numeric_domain_error());
/// ```
#[macro_export]
macro_rules! domain_error {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::NumericDomainError(
                format!($($msg)*)
            ));
        }
    };
}
