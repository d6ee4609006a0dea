//! Core traits for generic numerical computation.
//!
//! - [`Scalar`]: the capability set a pricing formula is written against,
//!   implemented for `f64` and [`crate::types::DualNumber`]
//!
//! ## Important
//! These traits are meant for static dispatch. Generic functions take
//! `S: Scalar`; do NOT box them behind `dyn` on the numeric path.

pub mod scalar;

pub use scalar::Scalar;
