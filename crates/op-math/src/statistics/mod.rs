//! Sample statistics for Monte Carlo estimates.

use op_core::Real;

/// Running sums of a sample stream.
///
/// Holds only the count, Σx and Σx², so memory does not grow with the
/// number of paths.  The Monte Carlo engine reports [`mean`](Self::mean)
/// as the price and [`error_estimate`](Self::error_estimate) beside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    count: usize,
    sum: Real,
    sum_sq: Real,
}

impl Statistics {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        self.sum += x;
        self.sum_sq += x * x;
    }

    /// Samples recorded so far.
    pub fn samples(&self) -> usize {
        self.count
    }

    /// Sample mean; `None` when empty.
    pub fn mean(&self) -> Option<Real> {
        (self.count > 0).then(|| self.sum / self.count as Real)
    }

    /// Bessel-corrected sample variance; `None` below two samples.
    pub fn variance(&self) -> Option<Real> {
        if self.count < 2 {
            return None;
        }
        let n = self.count as Real;
        let mean = self.sum / n;
        // may round below zero for identical samples
        let biased = (self.sum_sq / n - mean * mean).max(0.0);
        Some(biased * n / (n - 1.0))
    }

    /// Sample standard deviation.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(Real::sqrt)
    }

    /// Standard error of the mean, `s / √n`.
    pub fn error_estimate(&self) -> Option<Real> {
        self.std_dev().map(|s| s / (self.count as Real).sqrt())
    }
}

impl Extend<Real> for Statistics {
    fn extend<I: IntoIterator<Item = Real>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<Real> for Statistics {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn moments_of_small_sample() {
        let s: Statistics = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
        assert_eq!(s.samples(), 8);
        assert_abs_diff_eq!(s.mean().unwrap(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.variance().unwrap(), 32.0 / 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            s.error_estimate().unwrap(),
            (32.0_f64 / 7.0 / 8.0).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn identical_samples_have_no_spread() {
        let s: Statistics = std::iter::repeat(0.5).take(10).collect();
        assert_eq!(s.std_dev(), Some(0.0));
        assert_eq!(s.error_estimate(), Some(0.0));
    }

    #[test]
    fn too_few_samples() {
        let mut s = Statistics::new();
        assert_eq!(s.mean(), None);
        s.add(3.0);
        assert_eq!(s.mean(), Some(3.0));
        assert_eq!(s.variance(), None);
        assert_eq!(s.error_estimate(), None);
    }
}
