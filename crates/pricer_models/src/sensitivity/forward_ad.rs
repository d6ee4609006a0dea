//! Forward-mode sensitivities from the dual-number pricer.
//!
//! One input is seeded with derivative 1; a single evaluation of
//! [`BlackScholes::price_call`] then returns the price in the value field and
//! the Greek in the derivative field. No step size is involved.

use pricer_core::types::DualNumber;

use super::{Greek, Greeks};
use crate::analytical::{AnalyticalError, BlackScholes};
use crate::market::MarketParams;

/// Prices the call with the Greek's input seeded.
///
/// # Errors
/// Returns `AnalyticalError::Domain` if the formula leaves its domain.
///
/// # Examples
/// ```
/// use pricer_models::market::MarketParams;
/// use pricer_models::sensitivity::{dual_sensitivity, Greek};
///
/// let vega = dual_sensitivity(&MarketParams::reference(), Greek::Vega).unwrap();
/// assert!(vega.value() > 0.0);
/// assert!(vega.derivative() > 0.0);
/// ```
pub fn dual_sensitivity(params: &MarketParams, greek: Greek) -> Result<DualNumber, AnalyticalError> {
    Ok(BlackScholes::seeded(params, greek).price_call()?)
}

/// Delta, Vega and Rho, one seeded pass each.
///
/// # Errors
/// Same conditions as [`dual_sensitivity`].
pub fn dual_greeks(params: &MarketParams) -> Result<Greeks, AnalyticalError> {
    Greeks::try_from_fn(|greek| Ok(dual_sensitivity(params, greek)?.derivative()))
}
