//! # Pricer Risk (L3: Application)
//!
//! Drives the step-size experiment and exports its results.
//!
//! This crate provides:
//! - The comparison sweep of finite-difference vs dual-number Greeks
//!   (`comparison`)
//! - Table export and the plotting collaborator (`export`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L3)             │
//! ├─────────────────────────────────────────┤
//! │  comparison/ - StepSweep, Harness,      │
//! │                Record, Report           │
//! │  export/     - TableWriter, PlotScript, │
//! │                PythonRenderer           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Black-Scholes, closed form, FD, AD     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_models::market::MarketParams;
//! use pricer_models::sensitivity::Greek;
//! use pricer_risk::comparison::{ComparisonHarness, StepSweep};
//!
//! let report = ComparisonHarness::new(MarketParams::reference())
//!     .run(&StepSweep::Logarithmic { min: 1e-8, max: 1e-2, count: 13 })
//!     .unwrap();
//!
//! let best = report.min_fd_error(Greek::Delta).unwrap();
//! assert!(best.fd_error(Greek::Delta) < 1e-8);
//! assert!(best.ad_error(Greek::Delta) < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod comparison;
pub mod export;
