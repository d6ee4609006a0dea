//! Sensitivity estimators for the European call.
//!
//! Two numerical routes to the same Greeks:
//! - [`central_difference`]: bump-and-reprice on the plain `f64` formula
//! - [`dual_sensitivity`]: one forward pass of the formula on dual numbers
//!
//! Both are compared against [`crate::analytical::closed_form_greeks`].

pub mod finite_difference;
pub mod forward_ad;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use finite_difference::{central_difference, central_difference_greeks};
pub use forward_ad::{dual_greeks, dual_sensitivity};

/// The market input a sensitivity is taken against.
///
/// # Examples
/// ```
/// use pricer_models::sensitivity::Greek;
///
/// let greek: Greek = "vega".parse().unwrap();
/// assert_eq!(greek, Greek::Vega);
/// assert_eq!(greek.label(), "Vega");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Greek {
    /// ∂C/∂S
    Delta,
    /// ∂C/∂σ
    Vega,
    /// ∂C/∂r
    Rho,
}

impl Greek {
    /// All Greeks, in output column order.
    pub const ALL: [Greek; 3] = [Greek::Delta, Greek::Vega, Greek::Rho];

    /// Capitalised display name.
    pub fn label(self) -> &'static str {
        match self {
            Greek::Delta => "Delta",
            Greek::Vega => "Vega",
            Greek::Rho => "Rho",
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error parsing a [`Greek`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown greek '{0}': expected delta, vega or rho")]
pub struct ParseGreekError(pub String);

impl FromStr for Greek {
    type Err = ParseGreekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delta" => Ok(Greek::Delta),
            "vega" => Ok(Greek::Vega),
            "rho" => Ok(Greek::Rho),
            _ => Err(ParseGreekError(s.to_string())),
        }
    }
}

/// Delta, Vega and Rho of one call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Greeks {
    /// ∂C/∂S
    pub delta: f64,
    /// ∂C/∂σ
    pub vega: f64,
    /// ∂C/∂r
    pub rho: f64,
}

impl Greeks {
    /// Returns the value for one Greek.
    pub fn get(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Delta => self.delta,
            Greek::Vega => self.vega,
            Greek::Rho => self.rho,
        }
    }

    /// Builds a set by evaluating `f` once per Greek.
    pub fn try_from_fn<E>(mut f: impl FnMut(Greek) -> Result<f64, E>) -> Result<Self, E> {
        Ok(Self {
            delta: f(Greek::Delta)?,
            vega: f(Greek::Vega)?,
            rho: f(Greek::Rho)?,
        })
    }
}
