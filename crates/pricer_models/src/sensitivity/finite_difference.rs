//! Central finite-difference sensitivities.
//!
//! The Greek is estimated as `(C(p + h/2) - C(p - h/2)) / h` with every other
//! input held fixed. Truncation error shrinks like h² while cancellation error
//! grows like 1/h, so the error curve in h has an interior minimum.

use super::{Greek, Greeks};
use crate::analytical::{AnalyticalError, BlackScholes};
use crate::market::MarketParams;

/// Prices the call on plain `f64` inputs.
fn price(params: &MarketParams) -> Result<f64, AnalyticalError> {
    Ok(BlackScholes::<f64>::from_params(params).price_call()?)
}

/// Estimates one Greek by a central difference with full width `step`.
///
/// # Errors
/// - `AnalyticalError::InvalidStep` unless `step` is finite and positive
/// - `AnalyticalError::Domain` if either bumped evaluation leaves the domain
///
/// # Examples
/// ```
/// use pricer_models::market::MarketParams;
/// use pricer_models::sensitivity::{central_difference, Greek};
///
/// let params = MarketParams::reference();
/// let delta = central_difference(&params, Greek::Delta, 1e-4).unwrap();
/// assert!(delta > 0.0 && delta < 1.0);
///
/// assert!(central_difference(&params, Greek::Delta, 0.0).is_err());
/// ```
pub fn central_difference(
    params: &MarketParams,
    greek: Greek,
    step: f64,
) -> Result<f64, AnalyticalError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(AnalyticalError::InvalidStep { step });
    }

    let half = 0.5 * step;
    let up = price(&params.bumped(greek, half))?;
    let down = price(&params.bumped(greek, -half))?;

    Ok((up - down) / step)
}

/// Estimates Delta, Vega and Rho with the same step.
///
/// # Errors
/// Same conditions as [`central_difference`]; the first failing Greek wins.
pub fn central_difference_greeks(
    params: &MarketParams,
    step: f64,
) -> Result<Greeks, AnalyticalError> {
    Greeks::try_from_fn(|greek| central_difference(params, greek, step))
}
