//! # pricer_core: Numerical Foundation for Dual-number Greeks
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Forward-mode automatic differentiation: [`types::DualNumber`] (`types::dual`)
//! - Fixed-panel quadrature (`math::quadrature`)
//! - The Gaussian error integral Φ and its Leibniz-rule derivative (`math::special`)
//! - The numeric capability set [`traits::Scalar`] for formulas that run on both
//!   `f64` and dual numbers (`traits`)
//! - Error types: `DomainError`, `QuadratureError`, `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: `Zero`/`One` for generic numerical computation
//! - num-dual: Reference dual numbers used to cross-check [`types::DualNumber`] (optional)
//! - thiserror: Error derives
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::special::norm_cdf;
//! use pricer_core::traits::Scalar;
//! use pricer_core::types::DualNumber;
//!
//! // Φ on plain numbers
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
//!
//! // The same generic expression carries a derivative on dual numbers
//! fn f<S: Scalar>(x: S) -> S {
//!     (x * x).norm_cdf()
//! }
//! let y = f(DualNumber::variable(0.5));
//! assert_eq!(y.value(), f(0.5_f64));
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): conversions between [`types::DualNumber`] and
//!   `num_dual::Dual64`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
