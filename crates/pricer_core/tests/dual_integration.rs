//! Cross-checks of `DualNumber` against num-dual's `Dual64`.
//!
//! Both implementations must produce the same value and derivative for the
//! same expression; num-dual serves as the reference.

#![cfg(feature = "num-dual-mode")]

use approx::assert_relative_eq;
use num_dual::{Dual64, DualNum};
use pricer_core::math::special::{norm_cdf_dual, norm_pdf};
use pricer_core::types::DualNumber;

fn assert_matches(ours: DualNumber, reference: Dual64) {
    assert_relative_eq!(ours.value(), reference.re, epsilon = 1e-14, max_relative = 1e-14);
    assert_relative_eq!(
        ours.derivative(),
        reference.eps,
        epsilon = 1e-14,
        max_relative = 1e-12
    );
}

#[test]
fn test_arithmetic_matches_reference() {
    let a = DualNumber::new(2.0, 1.0);
    let b = DualNumber::new(3.0, 0.25);
    let ra: Dual64 = a.into();
    let rb: Dual64 = b.into();

    assert_matches(a + b, ra + rb);
    assert_matches(a - b, ra - rb);
    assert_matches(a * b, ra * rb);
    assert_matches(a / b, ra / rb);
    assert_matches(-a, -ra);
}

#[test]
fn test_elementary_functions_match_reference() {
    let x = DualNumber::new(1.7, 0.8);
    let rx: Dual64 = x.into();

    assert_matches(x.exp(), rx.exp());
    assert_matches(x.ln().unwrap(), rx.ln());
    assert_matches(x.sqrt().unwrap(), rx.sqrt());
}

#[test]
fn test_black_scholes_d1_matches_reference() {
    // d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T), differentiated w.r.t. σ
    let t = 0.25;
    let (s, k, r) = (80.0, 100.0, 0.01);

    let sigma = DualNumber::variable(0.3);
    let d1 = ((DualNumber::constant(s) / k).ln().unwrap() + (sigma * sigma * 0.5 + r) * t)
        .checked_div(sigma * t.sqrt())
        .unwrap();

    let rsigma = Dual64::from(0.3).derivative();
    let rd1 = ((Dual64::from(s) / k).ln() + (rsigma * rsigma * 0.5 + r) * t) / (rsigma * t.sqrt());

    assert_matches(d1, rd1);
}

#[test]
fn test_leibniz_rule_matches_reference_pdf() {
    // num-dual differentiates the closed-form density; the Leibniz rule must
    // reproduce that density as the derivative of Φ.
    let x = 0.42;
    let rx = Dual64::from(x).derivative();
    let reference_pdf =
        (-(rx * rx) * 0.5).exp() * (1.0 / (2.0 * std::f64::consts::PI).sqrt());

    let ours = norm_cdf_dual(DualNumber::variable(x));
    assert_relative_eq!(ours.derivative(), reference_pdf.re, epsilon = 1e-15);
    assert_relative_eq!(ours.derivative(), norm_pdf(x), epsilon = 1e-15);
}

#[test]
fn test_round_trip_conversion() {
    let x = DualNumber::new(-3.5, 0.125);
    let back: DualNumber = Dual64::from(x).into();
    assert_eq!(back, x);
}
