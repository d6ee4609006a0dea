//! Closed-form Black-Scholes Greeks for the European call.
//!
//! - Delta = Φ(d₁)
//! - Vega = S·√T·φ(d₁)
//! - Rho = K·T·e^(-rT)·Φ(d₂)
//!
//! These are the reference values both numerical estimators are measured
//! against.

use pricer_core::math::special::{norm_cdf, norm_pdf};

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;
use crate::market::MarketParams;
use crate::sensitivity::Greeks;

/// Computes Delta, Vega and Rho from their closed forms.
///
/// # Errors
/// Returns `AnalyticalError::Domain` if d₁ or d₂ cannot be evaluated.
///
/// # Examples
/// ```
/// use pricer_models::analytical::closed_form_greeks;
/// use pricer_models::market::MarketParams;
///
/// let greeks = closed_form_greeks(&MarketParams::reference()).unwrap();
/// assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
/// assert!(greeks.vega > 0.0);
/// assert!(greeks.rho > 0.0);
/// ```
pub fn closed_form_greeks(params: &MarketParams) -> Result<Greeks, AnalyticalError> {
    let bs = BlackScholes::<f64>::from_params(params);
    let d1 = bs.d1()?;
    let d2 = bs.d2()?;

    let expiry = bs.expiry();
    let discount = (-params.rate() * expiry).exp();

    Ok(Greeks {
        delta: norm_cdf(d1),
        vega: params.spot() * expiry.sqrt() * norm_pdf(d1),
        rho: params.strike() * expiry * discount * norm_cdf(d2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_greeks() {
        let g = closed_form_greeks(&MarketParams::reference()).unwrap();

        assert_relative_eq!(g.delta, 0.08136372083461521, max_relative = 1e-10);
        assert_relative_eq!(g.vega, 6.023044941942471, max_relative = 1e-10);
        assert_relative_eq!(g.rho, 1.5226255605367014, max_relative = 1e-10);
    }

    #[test]
    fn test_atm_delta_above_half() {
        // Positive drift pushes ATM delta above 0.5
        let params = MarketParams::new(100.0, 100.0, 0.01, 0.3).unwrap();
        let g = closed_form_greeks(&params).unwrap();
        assert!(g.delta > 0.5 && g.delta < 0.6);
    }

    #[test]
    fn test_deep_itm_limits() {
        let params = MarketParams::new(1000.0, 100.0, 0.01, 0.3).unwrap();
        let g = closed_form_greeks(&params).unwrap();
        assert_relative_eq!(g.delta, 1.0, epsilon = 1e-10);
        assert!(g.vega.abs() < 1e-12);
    }
}
