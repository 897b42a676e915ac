//! # op-math
//!
//! Numerical primitives consumed by the pricers: the standard normal
//! distribution (via statrs), Gaussian random number generators, and a running
//! statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{normal_cdf, normal_cdf_inverse, normal_pdf};
pub use random_numbers::{
    GaussianRng, InverseCumulativeNormalRng, MersenneTwisterUniformRng, StandardNormalRng,
};
pub use statistics::Statistics;
