//! Standard normal (Gaussian) distribution.

use op_core::Real;
use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::{FRAC_1_SQRT_2, PI, SQRT_2};

/// The standard normal probability density function.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function Φ(x).
///
/// `Φ(x) = ½ · erfc(−x / √2)`, accurate to full double precision in both
/// tails, so `Φ(x) + Φ(−x) = 1` holds to rounding.
pub fn normal_cdf(x: Real) -> Real {
    if x.is_nan() {
        return Real::NAN;
    }
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// The probit function `Φ⁻¹(p) = −√2 · erfc⁻¹(2p)`.
///
/// # Panics
/// Panics if `p` is not in the open interval `(0, 1)`.
pub fn normal_cdf_inverse(p: Real) -> Real {
    assert!(p > 0.0 && p < 1.0, "p must be in (0, 1), got {p}");
    -SQRT_2 * erfc_inv(2.0 * p)
}
