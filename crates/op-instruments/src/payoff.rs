//! Call/put flag and the vanilla exercise value.

use op_core::errors::{Error, Result};
use op_core::Real;
use std::fmt;
use std::str::FromStr;

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// `φ` in `max(φ(S − K), 0)`.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Inverse of [`sign`](Self::sign): `+1` is a call, `−1` a put.
    ///
    /// # Errors
    /// [`Error::InvalidTerms`] for any other value.
    pub fn from_sign(sign: i32) -> Result<Self> {
        match sign {
            1 => Ok(OptionType::Call),
            -1 => Ok(OptionType::Put),
            _ => Err(Error::InvalidTerms(format!(
                "option kind must be +1 (call) or -1 (put), got {sign}"
            ))),
        }
    }
}

impl FromStr for OptionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(Error::InvalidTerms(format!(
                "kind should be either put or call, got '{s}'"
            ))),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Exercise value as a function of the underlying price.
pub trait Payoff: fmt::Debug + Send + Sync {
    /// Value when the underlying trades at `price`.
    fn value(&self, price: Real) -> Real;
}

/// `max(φ(S − K), 0)` with `φ` from [`OptionType::sign`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainVanillaPayoff {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike price `K`.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// Payoff struck at `strike`.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for PlainVanillaPayoff {
    #[inline]
    fn value(&self, price: Real) -> Real {
        (self.option_type.sign() * (price - self.strike)).max(0.0)
    }
}
