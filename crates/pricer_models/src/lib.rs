//! # Pricer Models (L2: Business Logic)
//!
//! The Black-Scholes European call and the three ways of obtaining its Greeks.
//!
//! This crate provides:
//! - Market parameters with the fixed maturity (`market`)
//! - The generic Black-Scholes formula and closed-form Greeks (`analytical`)
//! - Central-difference and dual-number sensitivities (`sensitivity`)
//!
//! ## Design Principles
//!
//! - **One formula, two number types**: [`analytical::BlackScholes`] is generic
//!   over [`pricer_core::traits::Scalar`]; seeding one input with a dual number
//!   yields that input's Greek from the same expression that yields the price
//! - **Explicit domain faults**: formulas return `Result` instead of NaN
//!
//! ## Example
//!
//! ```
//! use pricer_models::market::MarketParams;
//! use pricer_models::sensitivity::{central_difference, dual_sensitivity, Greek};
//!
//! let params = MarketParams::reference();
//! let ad = dual_sensitivity(&params, Greek::Delta).unwrap();
//! let fd = central_difference(&params, Greek::Delta, 1e-3).unwrap();
//! assert!((ad.derivative() - fd).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod market;
pub mod sensitivity;
