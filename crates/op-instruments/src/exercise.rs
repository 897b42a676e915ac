//! Option exercise styles.
//!
//! An `ExerciseType` defines *when* an option can be exercised.

use op_core::errors::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Type of exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExerciseType {
    /// Can only be exercised at expiry.
    European,
    /// Can be exercised at any time up to expiry.
    American,
}

impl ExerciseType {
    /// `European` when `european` is true, `American` otherwise.
    pub fn from_european_flag(european: bool) -> Self {
        if european {
            ExerciseType::European
        } else {
            ExerciseType::American
        }
    }

    /// Whether the holder may exercise before expiry.
    pub fn allows_early_exercise(self) -> bool {
        matches!(self, ExerciseType::American)
    }
}

impl FromStr for ExerciseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "european" => Ok(ExerciseType::European),
            "american" => Ok(ExerciseType::American),
            _ => Err(Error::InvalidTerms(format!(
                "exercise style should be either European or American, got '{s}'"
            ))),
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseType::European => write!(f, "European"),
            ExerciseType::American => write!(f, "American"),
        }
    }
}
