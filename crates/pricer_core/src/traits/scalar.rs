//! The numeric capability set shared by plain and dual evaluation.
//!
//! Pricing formulas are written once against [`Scalar`] and instantiated with
//! either `f64` (a price) or [`DualNumber`] (a price plus one sensitivity).
//! Dispatch is static; there is no trait object on the numeric path.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::math::special::{norm_cdf, norm_cdf_dual};
use crate::types::{DomainError, DualNumber};

/// Arithmetic and elementary functions needed by the closed-form pricer.
///
/// Operations that can leave their domain return `Result` so callers decide
/// between failing and substituting a sentinel.
///
/// # Examples
/// ```
/// use pricer_core::traits::Scalar;
/// use pricer_core::types::DualNumber;
///
/// fn log_ratio<S: Scalar>(a: S, b: S) -> Result<S, pricer_core::types::DomainError> {
///     a.checked_div(b)?.ln()
/// }
///
/// assert!((log_ratio(4.0_f64, 2.0).unwrap() - 2.0_f64.ln()).abs() < 1e-15);
///
/// // d/da ln(a/b) = 1/a
/// let d = log_ratio(DualNumber::variable(4.0), DualNumber::constant(2.0)).unwrap();
/// assert!((d.derivative() - 0.25).abs() < 1e-15);
/// ```
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + From<f64>
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Add<f64, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<f64, Output = Self>
{
    /// The plain value, dropping any tangent.
    fn value(self) -> f64;

    /// Division rejecting a zero-valued denominator.
    fn checked_div(self, rhs: Self) -> Result<Self, DomainError>;

    /// Natural logarithm, defined for values `> 0`.
    fn ln(self) -> Result<Self, DomainError>;

    /// Square root, defined for values `>= 0`.
    fn sqrt(self) -> Result<Self, DomainError>;

    /// Exponential.
    fn exp(self) -> Self;

    /// The Gaussian error integral Φ.
    fn norm_cdf(self) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn value(self) -> f64 {
        self
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> Result<Self, DomainError> {
        if rhs == 0.0 {
            return Err(DomainError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    #[inline]
    fn ln(self) -> Result<Self, DomainError> {
        if self <= 0.0 || self.is_nan() {
            return Err(DomainError::LogOfNonPositive { value: self });
        }
        Ok(f64::ln(self))
    }

    #[inline]
    fn sqrt(self) -> Result<Self, DomainError> {
        if self < 0.0 || self.is_nan() {
            return Err(DomainError::SqrtOfNegative { value: self });
        }
        Ok(f64::sqrt(self))
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn norm_cdf(self) -> Self {
        norm_cdf(self)
    }
}

impl Scalar for DualNumber {
    #[inline]
    fn value(self) -> f64 {
        DualNumber::value(self)
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> Result<Self, DomainError> {
        DualNumber::checked_div(self, rhs)
    }

    #[inline]
    fn ln(self) -> Result<Self, DomainError> {
        DualNumber::ln(self)
    }

    #[inline]
    fn sqrt(self) -> Result<Self, DomainError> {
        DualNumber::sqrt(self)
    }

    #[inline]
    fn exp(self) -> Self {
        DualNumber::exp(self)
    }

    #[inline]
    fn norm_cdf(self) -> Self {
        norm_cdf_dual(self)
    }
}
