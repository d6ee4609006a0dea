//! Error types for structured error handling.
//!
//! This module provides:
//! - `DomainError`: Faults of the dual-number algebra (log, sqrt, division)
//! - `QuadratureError`: Misconfigured integrator or unusable bounds
//! - `PricingError`: Categorised errors surfaced by pricing operations

use thiserror::Error;

/// Numerical domain faults raised by the elementary operations.
///
/// These are local faults: the operation that raised one produced no value.
/// Callers decide whether to propagate a NaN sentinel or fail the computation.
///
/// # Examples
/// ```
/// use pricer_core::types::DomainError;
///
/// let err = DomainError::LogOfNonPositive { value: -1.0 };
/// assert_eq!(format!("{}", err), "Logarithm of non-positive value: -1");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// Natural logarithm of a value `<= 0`.
    #[error("Logarithm of non-positive value: {value}")]
    LogOfNonPositive {
        /// The offending argument
        value: f64,
    },

    /// Square root of a value `< 0`.
    #[error("Square root of negative value: {value}")]
    SqrtOfNegative {
        /// The offending argument
        value: f64,
    },

    /// Square root at zero with a non-zero tangent; the derivative is unbounded.
    #[error("Square root is not differentiable at zero")]
    SqrtNotDifferentiable,

    /// Division by a zero-valued denominator.
    #[error("Division by zero")]
    DivisionByZero,
}

/// Quadrature configuration and bound errors.
///
/// A degenerate interval (`lower == upper`) is not an error: it integrates to 0.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum QuadratureError {
    /// Composite rules need at least one panel.
    #[error("Invalid panel count: {panels}")]
    InvalidPanelCount {
        /// Requested number of panels
        panels: usize,
    },

    /// A bound was NaN.
    #[error("Non-finite integration bound: [{lower}, {upper}]")]
    NonFiniteBound {
        /// Lower bound as supplied
        lower: f64,
        /// Upper bound as supplied
        upper: f64,
    },
}

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `Domain`: A numerical domain fault inside the formula
/// - `Quadrature`: The integrator rejected its input
///
/// # Examples
/// ```
/// use pricer_core::types::{DomainError, PricingError};
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
///
/// let err: PricingError = DomainError::DivisionByZero.into();
/// assert!(matches!(err, PricingError::Domain(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical domain fault
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Integration failure
    #[error("Quadrature error: {0}")]
    Quadrature(#[from] QuadratureError),
}
