//! Analytical pricing of the European call.
//!
//! This module provides:
//! - [`BlackScholes`]: the pricing formula, generic over
//!   [`pricer_core::traits::Scalar`]
//! - [`closed_form_greeks`]: textbook Delta, Vega and Rho
//! - [`AnalyticalError`]: validation and domain errors
//!
//! ## Design Principles
//!
//! - **Generic over `S: Scalar`**: the same formula prices on `f64` and
//!   differentiates on `DualNumber`
//! - **No silent NaN**: logarithm, square root and division faults are
//!   returned as `DomainError`

pub mod black_scholes;
pub mod error;
pub mod greeks;

pub use black_scholes::BlackScholes;
pub use error::AnalyticalError;
pub use greeks::closed_form_greeks;
