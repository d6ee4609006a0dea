//! Numerical building blocks.
//!
//! - [`quadrature`]: Fixed-panel composite integration
//! - [`special`]: The Gaussian error integral Φ and its Leibniz-rule derivative

pub mod quadrature;
pub mod special;

pub use quadrature::{CompositeQuadrature, QuadratureRule};
pub use special::{gauss_kernel, norm_cdf, norm_cdf_dual, norm_pdf, GaussianIntegral};
