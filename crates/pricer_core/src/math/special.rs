//! The Gaussian error integral (standard normal CDF) defined by quadrature.
//!
//! ```text
//! Φ(x) = (1/√(2π)) ∫_{-L}^{x} exp(-t²/2) dt
//! ```
//!
//! `L` is the integrator's tail cutoff standing in for infinity. With `L = 10`
//! the neglected tail mass is about `7.6e-24`, and 4096 Simpson panels keep the
//! quadrature error far below `1e-10` on the working range.
//!
//! Only the lower half is integrated directly; for `x > 0` the evaluator uses
//! `Φ(x) = 1 - Φ(-x)`. Near 1 the true increments of Φ are a few ULPs, and a
//! direct integral over `[-L, x]` loses monotonicity to rounding there.
//!
//! ## Differentiating through the integral
//!
//! Φ is defined procedurally, so a dual number cannot push its tangent through
//! the quadrature loop. [`norm_cdf_dual`] instead applies the Leibniz rule for a
//! variable upper bound:
//!
//! ```text
//! d/ds Φ(x(s)) = φ(x(s)) · x'(s),    φ(x) = exp(-x²/2)/√(2π)
//! ```
//!
//! This is the one differentiation rule in the crate that is stated by hand
//! rather than obtained by composing the dual arithmetic.

use super::quadrature::CompositeQuadrature;
use crate::types::DualNumber;

/// 1 / sqrt(2π)
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Unnormalised Gaussian kernel `exp(-t²/2)`.
#[inline]
pub fn gauss_kernel(t: f64) -> f64 {
    (-0.5 * t * t).exp()
}

/// Standard normal density `φ(x)`.
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * gauss_kernel(x)
}

/// Quadrature-backed evaluator of Φ.
///
/// # Examples
/// ```
/// use pricer_core::math::special::GaussianIntegral;
///
/// let phi = GaussianIntegral::standard();
/// assert!((phi.eval(0.0) - 0.5).abs() < 1e-12);
/// assert_eq!(phi.eval(-phi.cutoff()), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianIntegral {
    quadrature: CompositeQuadrature,
}

impl GaussianIntegral {
    /// Evaluator on [`CompositeQuadrature::standard`].
    pub const fn standard() -> Self {
        Self {
            quadrature: CompositeQuadrature::standard(),
        }
    }

    /// Evaluator on a custom integrator; its tail cutoff is `L`.
    pub fn new(quadrature: CompositeQuadrature) -> Self {
        Self { quadrature }
    }

    /// Returns the truncation bound `L`.
    #[inline]
    pub fn cutoff(&self) -> f64 {
        self.quadrature.tail_cutoff()
    }

    /// Evaluates Φ(x).
    ///
    /// Returns exactly 0 for `x <= -L` and exactly 1 for `x >= L`; NaN maps
    /// to NaN. Positive arguments are evaluated as `1 - Φ(-x)`, so only the
    /// lower tail is ever integrated and the result is non-decreasing in x.
    pub fn eval(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x > 0.0 {
            1.0 - self.lower_tail(-x)
        } else {
            self.lower_tail(x)
        }
    }

    /// ∫ from -L to x of φ, for x <= 0, capped at one half.
    fn lower_tail(&self, x: f64) -> f64 {
        let cutoff = self.cutoff();
        if x <= -cutoff {
            return 0.0;
        }
        self.quadrature
            .integrate(gauss_kernel, -cutoff, x)
            .map(|area| (FRAC_1_SQRT_2PI * area).min(0.5))
            .unwrap_or(f64::NAN)
    }

    /// Evaluates Φ on a dual number using the Leibniz rule.
    ///
    /// The value is `Φ(x.value)`; the derivative is
    /// `φ(x.value) · x.derivative`.
    pub fn eval_dual(&self, x: DualNumber) -> DualNumber {
        DualNumber::new(self.eval(x.value()), norm_pdf(x.value()) * x.derivative())
    }
}

impl Default for GaussianIntegral {
    fn default() -> Self {
        Self::standard()
    }
}

const STANDARD: GaussianIntegral = GaussianIntegral::standard();

/// Standard normal CDF Φ(x) on the standard integrator.
///
/// # Examples
/// ```
/// use pricer_core::math::special::norm_cdf;
///
/// assert!((norm_cdf(1.0) - 0.841_344_746_068_543).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    STANDARD.eval(x)
}

/// Φ on a dual number: value `Φ(x)`, derivative `φ(x)·x'`.
///
/// # Examples
/// ```
/// use pricer_core::math::special::{norm_cdf_dual, norm_pdf};
/// use pricer_core::types::DualNumber;
///
/// let y = norm_cdf_dual(DualNumber::new(0.3, 2.0));
/// assert_eq!(y.derivative(), 2.0 * norm_pdf(0.3));
/// ```
#[inline]
pub fn norm_cdf_dual(x: DualNumber) -> DualNumber {
    STANDARD.eval_dual(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::quadrature::QuadratureRule;
    use approx::assert_relative_eq;

    #[test]
    fn test_frac_constant() {
        assert_relative_eq!(
            FRAC_1_SQRT_2PI,
            1.0 / (2.0 * std::f64::consts::PI).sqrt(),
            epsilon = 1e-16
        );
    }

    #[test]
    fn test_known_values() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(1.0), 0.841_344_746_068_542_9, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(-1.96), 0.024_997_895_148_220_4, epsilon = 1e-10);
    }

    #[test]
    fn test_truncation_limits() {
        let phi = GaussianIntegral::standard();
        let l = phi.cutoff();
        assert_eq!(phi.eval(-l), 0.0);
        assert_eq!(phi.eval(-2.0 * l), 0.0);
        assert_eq!(phi.eval(l), 1.0);
        assert_eq!(phi.eval(5.0 * l), 1.0);
        assert_eq!(phi.eval(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_symmetry() {
        for &x in &[0.1, 0.5, 1.3, 2.7, 4.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_monotone_non_decreasing() {
        // 1e-3 grid across the whole truncated range and past both ends
        let mut previous = norm_cdf(-12.0);
        for i in 1..=24_000 {
            let x = -12.0 + i as f64 * 1e-3;
            let current = norm_cdf(x);
            assert!(current >= previous, "Φ decreased at x = {}", x);
            previous = current;
        }
    }

    #[test]
    fn test_upper_tail_near_one_is_monotone() {
        // Increments of Φ here are a few ULPs of 1.0
        assert!(norm_cdf(7.181) >= norm_cdf(7.18));
        assert!(norm_cdf(7.8) >= norm_cdf(7.75));
        assert!(norm_cdf(9.999) <= 1.0);
    }

    #[test]
    fn test_reflection_about_zero() {
        assert!(norm_cdf(0.0) <= 0.5);
        assert!(norm_cdf(1e-12) >= 0.5);
        for &x in &[0.25, 3.0, 6.5, 8.2] {
            assert_eq!(norm_cdf(x), 1.0 - norm_cdf(-x));
        }
    }

    #[test]
    fn test_nan_input() {
        assert!(norm_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_leibniz_rule_matches_central_difference() {
        for &x in &[-2.5, -0.7, 0.0, 0.4, 1.9] {
            let h = 1e-4;
            let fd = (norm_cdf(x + 0.5 * h) - norm_cdf(x - 0.5 * h)) / h;
            let ad = norm_cdf_dual(DualNumber::variable(x));
            assert_eq!(ad.value(), norm_cdf(x));
            assert_relative_eq!(ad.derivative(), fd, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_leibniz_rule_scales_by_inner_tangent() {
        // Φ(2s) has derivative 2·φ(2s)
        let s = DualNumber::variable(0.35);
        let y = norm_cdf_dual(s * 2.0);
        assert_relative_eq!(y.derivative(), 2.0 * norm_pdf(0.7), epsilon = 1e-15);

        let c = norm_cdf_dual(DualNumber::constant(0.7));
        assert_eq!(c.derivative(), 0.0);
    }

    #[test]
    fn test_coarse_trapezoid_is_less_accurate() {
        let coarse = GaussianIntegral::new(
            CompositeQuadrature::new(QuadratureRule::Trapezoidal, 16).unwrap(),
        );
        let fine = GaussianIntegral::standard();
        let exact = 0.841_344_746_068_542_9;
        assert!((coarse.eval(1.0) - exact).abs() > (fine.eval(1.0) - exact).abs());
    }
}
