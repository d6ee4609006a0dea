//! Core numeric and error types.
//!
//! This module provides:
//! - `dual`: The forward-mode automatic differentiation number [`DualNumber`]
//! - `error`: Structured error types for the algebra, the integrator and pricing
//!
//! # Re-exports
//!
//! - [`DualNumber`] from `dual`
//! - [`DomainError`], [`QuadratureError`], [`PricingError`] from `error`

pub mod dual;
pub mod error;

pub use dual::DualNumber;
pub use error::{DomainError, PricingError, QuadratureError};
