//! Market parameters of the European call.
//!
//! Spot, strike, rate and volatility are the inputs sensitivities are taken
//! against. Time to maturity is fixed at [`MATURITY`].

use crate::analytical::AnalyticalError;
use crate::sensitivity::Greek;

/// Time to maturity in years.
pub const MATURITY: f64 = 0.25;

/// Validated market inputs `(S, K, r, σ)`.
///
/// # Examples
/// ```
/// use pricer_models::market::MarketParams;
///
/// let params = MarketParams::new(80.0, 100.0, 0.01, 0.3).unwrap();
/// assert_eq!(params, MarketParams::reference());
///
/// assert!(MarketParams::new(80.0, 100.0, 0.01, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketParams {
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
}

impl MarketParams {
    /// Creates market parameters.
    ///
    /// # Errors
    /// - `AnalyticalError::NonFiniteParameter` for NaN or infinite inputs
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// Negative rates are allowed.
    pub fn new(spot: f64, strike: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        for (name, value) in [
            ("spot", spot),
            ("strike", strike),
            ("rate", rate),
            ("volatility", volatility),
        ] {
            if !value.is_finite() {
                return Err(AnalyticalError::NonFiniteParameter { name, value });
            }
        }
        if spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if strike <= 0.0 {
            return Err(AnalyticalError::InvalidStrike { strike });
        }
        if volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            volatility,
        })
    }

    /// The reference experiment: S = 80, K = 100, r = 0.01, σ = 0.3.
    pub const fn reference() -> Self {
        Self {
            spot: 80.0,
            strike: 100.0,
            rate: 0.01,
            volatility: 0.3,
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the input a Greek differentiates against.
    pub fn get(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Delta => self.spot,
            Greek::Vega => self.volatility,
            Greek::Rho => self.rate,
        }
    }

    /// Copy with the Greek's input shifted by `shift`, others held fixed.
    ///
    /// The result is not re-validated; a bump may leave the valid region and
    /// surface later as a domain error.
    pub fn bumped(&self, greek: Greek, shift: f64) -> Self {
        let mut bumped = *self;
        match greek {
            Greek::Delta => bumped.spot += shift,
            Greek::Vega => bumped.volatility += shift,
            Greek::Rho => bumped.rate += shift,
        }
        bumped
    }
}

impl Default for MarketParams {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        let p = MarketParams::reference();
        assert_eq!(
            (p.spot(), p.strike(), p.rate(), p.volatility()),
            (80.0, 100.0, 0.01, 0.3)
        );
        assert_eq!(MarketParams::default(), p);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            MarketParams::new(0.0, 100.0, 0.01, 0.3),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
        assert!(matches!(
            MarketParams::new(80.0, -1.0, 0.01, 0.3),
            Err(AnalyticalError::InvalidStrike { .. })
        ));
        assert!(matches!(
            MarketParams::new(80.0, 100.0, 0.01, -0.3),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
        assert!(matches!(
            MarketParams::new(80.0, 100.0, f64::NAN, 0.3),
            Err(AnalyticalError::NonFiniteParameter { name: "rate", .. })
        ));
        assert!(MarketParams::new(80.0, 100.0, -0.02, 0.3).is_ok());
    }

    #[test]
    fn test_bumped_moves_one_input() {
        let p = MarketParams::reference();

        let up = p.bumped(Greek::Vega, 0.01);
        assert_eq!(up.volatility(), 0.3 + 0.01);
        assert_eq!((up.spot(), up.strike(), up.rate()), (80.0, 100.0, 0.01));

        let down = p.bumped(Greek::Delta, -0.5);
        assert_eq!(down.spot(), 79.5);

        assert_eq!(p.bumped(Greek::Rho, 0.0), p);
    }

    #[test]
    fn test_get_matches_greek_input() {
        let p = MarketParams::reference();
        assert_eq!(p.get(Greek::Delta), 80.0);
        assert_eq!(p.get(Greek::Vega), 0.3);
        assert_eq!(p.get(Greek::Rho), 0.01);
    }
}
