//! Black-Scholes pricing of a European call, generic over the number type.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = (ln(S/K) + (r - σ²/2)T) / (σ√T)
//!
//! The same code runs on `f64` (a price) and on [`DualNumber`] (a price plus
//! the derivative with respect to whichever input was seeded).

use pricer_core::traits::Scalar;
use pricer_core::types::{DomainError, DualNumber};

use crate::market::{MarketParams, MATURITY};
use crate::sensitivity::Greek;

/// Black-Scholes model for a European call with fixed maturity.
///
/// # Type Parameters
/// * `S` - Numeric type implementing [`Scalar`] (`f64` or [`DualNumber`])
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::market::MarketParams;
/// use pricer_models::sensitivity::Greek;
///
/// let params = MarketParams::reference();
///
/// let plain = BlackScholes::<f64>::from_params(&params);
/// let price = plain.price_call().unwrap();
/// assert!(price > 0.0 && price < 80.0);
///
/// // Seeding spot gives the price and Delta in one pass
/// let seeded = BlackScholes::seeded(&params, Greek::Delta);
/// let dual = seeded.price_call().unwrap();
/// assert_eq!(dual.value(), price);
/// assert!(dual.derivative() > 0.0 && dual.derivative() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<S: Scalar> {
    /// Spot price (S)
    spot: S,
    /// Strike (K)
    strike: S,
    /// Risk-free interest rate (r)
    rate: S,
    /// Volatility (σ)
    volatility: S,
    /// Time to maturity in years (T)
    expiry: f64,
}

impl<S: Scalar> BlackScholes<S> {
    /// Creates a model from raw inputs.
    ///
    /// No validation happens here; out-of-domain inputs surface as a
    /// [`DomainError`] when the formula is evaluated.
    pub fn new(spot: S, strike: S, rate: S, volatility: S, expiry: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            volatility,
            expiry,
        }
    }

    /// Creates a model with every input a constant, at [`MATURITY`].
    pub fn from_params(params: &MarketParams) -> Self {
        Self::new(
            S::from(params.spot()),
            S::from(params.strike()),
            S::from(params.rate()),
            S::from(params.volatility()),
            MATURITY,
        )
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> S {
        self.spot
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> S {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> S {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> S {
        self.volatility
    }

    /// Returns the time to maturity.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// σ√T
    fn vol_sqrt_t(&self) -> Result<S, DomainError> {
        Ok(self.volatility * S::from(self.expiry).sqrt()?)
    }

    /// Shared body of d₁ and d₂: (ln(S/K) + (r + sign·σ²/2)T) / (σ√T).
    fn d_term(&self, sign: f64) -> Result<S, DomainError> {
        let log_moneyness = self.spot.checked_div(self.strike)?.ln()?;
        let half_variance = self.volatility * self.volatility * (0.5 * sign);
        let drift = (self.rate + half_variance) * self.expiry;

        (log_moneyness + drift).checked_div(self.vol_sqrt_t()?)
    }

    /// Computes d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T).
    ///
    /// # Errors
    /// - `DomainError::LogOfNonPositive` if S/K <= 0
    /// - `DomainError::DivisionByZero` if K = 0 or σ√T = 0
    /// - `DomainError::SqrtOfNegative` if T < 0
    #[inline]
    pub fn d1(&self) -> Result<S, DomainError> {
        self.d_term(1.0)
    }

    /// Computes d₂ = (ln(S/K) + (r - σ²/2)T) / (σ√T).
    ///
    /// Evaluated from the drift directly rather than as d₁ - σ√T.
    ///
    /// # Errors
    /// Same conditions as [`BlackScholes::d1`].
    #[inline]
    pub fn d2(&self) -> Result<S, DomainError> {
        self.d_term(-1.0)
    }

    /// Computes the call price C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂).
    ///
    /// # Errors
    /// Propagates any [`DomainError`] raised by d₁ or d₂.
    pub fn price_call(&self) -> Result<S, DomainError> {
        let d1 = self.d1()?;
        let d2 = self.d2()?;
        let discount = (-self.rate * self.expiry).exp();

        Ok(self.spot * d1.norm_cdf() - self.strike * discount * d2.norm_cdf())
    }
}

impl BlackScholes<DualNumber> {
    /// Creates a dual model with the Greek's input seeded (derivative 1) and
    /// every other input constant.
    ///
    /// The derivative of [`BlackScholes::price_call`] is then that Greek.
    pub fn seeded(params: &MarketParams, greek: Greek) -> Self {
        let seed = |g: Greek| {
            let value = params.get(g);
            if g == greek {
                DualNumber::variable(value)
            } else {
                DualNumber::constant(value)
            }
        };

        Self::new(
            seed(Greek::Delta),
            DualNumber::constant(params.strike()),
            seed(Greek::Rho),
            seed(Greek::Vega),
            MATURITY,
        )
    }
}
