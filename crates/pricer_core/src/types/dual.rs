//! Dual numbers for forward-mode automatic differentiation.
//!
//! A [`DualNumber`] carries a value and its derivative with respect to one
//! seeded input. Every operation returns a fresh pair whose derivative follows
//! the corresponding differentiation rule, so composing operations applies the
//! chain rule without retaining any expression:
//!
//! - `(u ± v)' = u' ± v'`
//! - `(u·v)' = u'·v + u·v'`
//! - `(u/v)' = (u'·v − u·v') / v²`
//! - `ln(u)' = u' / u`
//! - `sqrt(u)' = u' / (2·sqrt(u))`
//! - `exp(u)' = exp(u)·u'`
//!
//! Mixed operations with `f64` treat the plain number as a constant.
//!
//! ## Usage
//!
//! ```
//! use pricer_core::types::dual::DualNumber;
//!
//! // f(x) = x·ln(x) at x = 2, f'(x) = ln(x) + 1
//! let x = DualNumber::variable(2.0);
//! let f = x * x.ln().unwrap();
//!
//! assert!((f.value() - 2.0 * 2.0_f64.ln()).abs() < 1e-15);
//! assert!((f.derivative() - (2.0_f64.ln() + 1.0)).abs() < 1e-15);
//! ```
//!
//! The Gaussian error integral has its own rule, see
//! [`crate::math::special::norm_cdf_dual`].

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use super::error::DomainError;

/// A value paired with its derivative with respect to a single seeded input.
///
/// Inputs that are not being differentiated are built with
/// [`DualNumber::constant`] (derivative 0); the one input of interest is built
/// with [`DualNumber::variable`] (derivative 1).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DualNumber {
    value: f64,
    derivative: f64,
}

impl DualNumber {
    /// Creates a dual number with an explicit derivative.
    #[inline]
    pub const fn new(value: f64, derivative: f64) -> Self {
        Self { value, derivative }
    }

    /// Creates a constant (derivative = 0).
    #[inline]
    pub const fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Creates the seeded input (derivative = 1).
    #[inline]
    pub const fn variable(value: f64) -> Self {
        Self::new(value, 1.0)
    }

    /// Returns the value part.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Returns the derivative part.
    #[inline]
    pub const fn derivative(self) -> f64 {
        self.derivative
    }

    /// Division that rejects a zero-valued denominator.
    ///
    /// # Errors
    /// `DomainError::DivisionByZero` if `rhs.value() == 0`.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> Result<Self, DomainError> {
        if rhs.value == 0.0 {
            return Err(DomainError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    /// Natural logarithm.
    ///
    /// # Errors
    /// `DomainError::LogOfNonPositive` if `self.value() <= 0`.
    #[inline]
    pub fn ln(self) -> Result<Self, DomainError> {
        if self.value <= 0.0 || self.value.is_nan() {
            return Err(DomainError::LogOfNonPositive { value: self.value });
        }
        Ok(Self::new(self.value.ln(), self.derivative / self.value))
    }

    /// Square root.
    ///
    /// # Errors
    /// - `DomainError::SqrtOfNegative` if `self.value() < 0`
    /// - `DomainError::SqrtNotDifferentiable` at zero with a non-zero tangent
    #[inline]
    pub fn sqrt(self) -> Result<Self, DomainError> {
        if self.value < 0.0 || self.value.is_nan() {
            return Err(DomainError::SqrtOfNegative { value: self.value });
        }
        if self.value == 0.0 {
            if self.derivative != 0.0 {
                return Err(DomainError::SqrtNotDifferentiable);
            }
            return Ok(Self::constant(0.0));
        }
        let root = self.value.sqrt();
        Ok(Self::new(root, self.derivative / (2.0 * root)))
    }

    /// Exponential.
    #[inline]
    pub fn exp(self) -> Self {
        let e = self.value.exp();
        Self::new(e, e * self.derivative)
    }
}

impl From<f64> for DualNumber {
    #[inline]
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl fmt::Display for DualNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.value, self.derivative)
    }
}

impl Add for DualNumber {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value, self.derivative + rhs.derivative)
    }
}

impl Sub for DualNumber {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value, self.derivative - rhs.derivative)
    }
}

impl Mul for DualNumber {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.value * rhs.value,
            self.derivative * rhs.value + self.value * rhs.derivative,
        )
    }
}

/// IEEE division; a zero denominator yields infinities or NaN.
/// Use [`DualNumber::checked_div`] where the fault must be signalled.
impl Div for DualNumber {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(
            self.value / rhs.value,
            (self.derivative * rhs.value - self.value * rhs.derivative) / (rhs.value * rhs.value),
        )
    }
}

impl Neg for DualNumber {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, -self.derivative)
    }
}

impl Add<f64> for DualNumber {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self::new(self.value + rhs, self.derivative)
    }
}

impl Sub<f64> for DualNumber {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.value - rhs, self.derivative)
    }
}

impl Mul<f64> for DualNumber {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.derivative * rhs)
    }
}

impl Div<f64> for DualNumber {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.derivative / rhs)
    }
}

impl Add<DualNumber> for f64 {
    type Output = DualNumber;

    #[inline]
    fn add(self, rhs: DualNumber) -> DualNumber {
        rhs + self
    }
}

impl Sub<DualNumber> for f64 {
    type Output = DualNumber;

    #[inline]
    fn sub(self, rhs: DualNumber) -> DualNumber {
        DualNumber::new(self - rhs.value, -rhs.derivative)
    }
}

impl Mul<DualNumber> for f64 {
    type Output = DualNumber;

    #[inline]
    fn mul(self, rhs: DualNumber) -> DualNumber {
        rhs * self
    }
}

impl Div<DualNumber> for f64 {
    type Output = DualNumber;

    #[inline]
    fn div(self, rhs: DualNumber) -> DualNumber {
        DualNumber::constant(self) / rhs
    }
}

impl Zero for DualNumber {
    #[inline]
    fn zero() -> Self {
        Self::constant(0.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.value == 0.0 && self.derivative == 0.0
    }
}

impl One for DualNumber {
    #[inline]
    fn one() -> Self {
        Self::constant(1.0)
    }
}

#[cfg(feature = "num-dual-mode")]
impl From<num_dual::Dual64> for DualNumber {
    #[inline]
    fn from(d: num_dual::Dual64) -> Self {
        Self::new(d.re, d.eps)
    }
}

#[cfg(feature = "num-dual-mode")]
impl From<DualNumber> for num_dual::Dual64 {
    #[inline]
    fn from(d: DualNumber) -> Self {
        num_dual::Dual64::new(d.value, d.derivative)
    }
}
