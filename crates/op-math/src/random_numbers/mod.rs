//! Random number generators.
//!
//! The pricers draw standard-normal deviates through the [`GaussianRng`]
//! trait, so callers can plug in any source: the seeded Mersenne Twister
//! used for reproducible runs, or any `rand` generator.
//!
//! A generator is owned by one pricing call at a time (`&mut self`), which
//! keeps concurrent calls statistically independent without locking.

use op_core::Real;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_mt::Mt64;

/// A source of independent standard-normal deviates.
pub trait GaussianRng {
    /// Draw the next `N(0, 1)` deviate.
    fn next_gaussian(&mut self) -> Real;
}

impl<G: GaussianRng + ?Sized> GaussianRng for &mut G {
    fn next_gaussian(&mut self) -> Real {
        (**self).next_gaussian()
    }
}

impl<G: GaussianRng + ?Sized> GaussianRng for Box<G> {
    fn next_gaussian(&mut self) -> Real {
        (**self).next_gaussian()
    }
}

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt64::new(seed),
        }
    }

    /// Generate the next uniform deviate in `[0, 1)`.
    pub fn next_real(&mut self) -> Real {
        // 53 high bits → exactly representable doubles in [0, 1)
        (self.rng.next_u64() >> 11) as Real * (1.0 / (1u64 << 53) as Real)
    }
}

/// An inverse-cumulative normal random number generator.
///
/// Wraps a Mersenne Twister and maps its output through the inverse CDF of
/// the standard normal distribution.  Fully determined by its seed.
pub struct InverseCumulativeNormalRng {
    inner: MersenneTwisterUniformRng,
}

impl InverseCumulativeNormalRng {
    /// Create a new generator backed by a Mersenne Twister with the given
    /// seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: MersenneTwisterUniformRng::new(seed),
        }
    }

    /// Generate the next standard-normal deviate.
    pub fn next_real(&mut self) -> Real {
        // Exact 0 would map to -∞
        let u = loop {
            let u = self.inner.next_real();
            if u > 0.0 {
                break u;
            }
        };
        crate::distributions::normal_cdf_inverse(u)
    }
}

impl GaussianRng for InverseCumulativeNormalRng {
    fn next_gaussian(&mut self) -> Real {
        self.next_real()
    }
}

/// Standard-normal deviates from any `rand` generator via
/// `rand_distr::StandardNormal`.
#[derive(Debug, Clone)]
pub struct StandardNormalRng<R> {
    rng: R,
}

impl<R: Rng> StandardNormalRng<R> {
    /// Wrap an existing `rand` generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give back the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl StandardNormalRng<StdRng> {
    /// A generator seeded from operating-system entropy.  Every instance
    /// produces an independent stream.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GaussianRng for StandardNormalRng<R> {
    fn next_gaussian(&mut self) -> Real {
        self.rng.sample(StandardNormal)
    }
}
