//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors from parameter validation, the pricing formula
//!   and the sensitivity estimators

use pricer_core::types::{DomainError, PricingError};
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidSpot` / `InvalidStrike` / `InvalidVolatility`: Non-positive inputs
/// - `NonFiniteParameter`: NaN or infinite market input
/// - `InvalidStep`: Finite-difference step that is not a positive finite number
/// - `InvalidStepRange`: Geometric step range that is not `0 < min < max`
/// - `Domain`: Numerical domain fault raised inside the formula
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// A market input is NaN or infinite.
    #[error("Non-finite parameter {name}: {value}")]
    NonFiniteParameter {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Finite-difference step must be positive and finite.
    #[error("Invalid finite-difference step: h = {step}")]
    InvalidStep {
        /// The rejected step
        step: f64,
    },

    /// Geometric step range must satisfy 0 < min < max, both finite.
    #[error("Invalid step range: [{min}, {max}]")]
    InvalidStepRange {
        /// Smallest step
        min: f64,
        /// Largest step
        max: f64,
    },

    /// Numerical domain fault inside the pricing formula.
    #[error("Numerical domain error: {0}")]
    Domain(#[from] DomainError),
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::Domain(domain) => PricingError::Domain(domain),
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}
