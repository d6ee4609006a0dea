//! Property tests for the dual-number differentiation rules.
//!
//! Each rule is checked against a central difference of the same operation
//! along the line `u(s) = x + u'·s`, `v(s) = y + v'·s` at `s = 0`.

use pricer_core::math::special::{norm_cdf, norm_cdf_dual};
use pricer_core::types::DualNumber;
use proptest::prelude::*;

const STEP: f64 = 1e-6;

fn close(ad: f64, fd: f64) -> bool {
    (ad - fd).abs() <= 1e-6 * (1.0 + fd.abs())
}

/// Central difference of a plain binary operation along the tangent direction.
fn fd_binary(op: impl Fn(f64, f64) -> f64, x: f64, dx: f64, y: f64, dy: f64) -> f64 {
    let up = op(x + 0.5 * STEP * dx, y + 0.5 * STEP * dy);
    let down = op(x - 0.5 * STEP * dx, y - 0.5 * STEP * dy);
    (up - down) / STEP
}

fn fd_unary(op: impl Fn(f64) -> f64, x: f64, dx: f64) -> f64 {
    (op(x + 0.5 * STEP * dx) - op(x - 0.5 * STEP * dx)) / STEP
}

fn positive() -> impl Strategy<Value = f64> {
    0.5..5.0
}

fn tangent() -> impl Strategy<Value = f64> {
    -2.0..2.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_sum_and_difference_rules(
        x in -5.0..5.0, dx in tangent(), y in -5.0..5.0, dy in tangent()
    ) {
        let u = DualNumber::new(x, dx);
        let v = DualNumber::new(y, dy);

        prop_assert!(close((u + v).derivative(), fd_binary(|a, b| a + b, x, dx, y, dy)));
        prop_assert!(close((u - v).derivative(), fd_binary(|a, b| a - b, x, dx, y, dy)));
        prop_assert_eq!((u + v).derivative(), dx + dy);
        prop_assert_eq!((u - v).derivative(), dx - dy);
    }

    #[test]
    fn test_product_rule(x in -5.0..5.0, dx in tangent(), y in -5.0..5.0, dy in tangent()) {
        let w = DualNumber::new(x, dx) * DualNumber::new(y, dy);
        prop_assert!(close(w.derivative(), fd_binary(|a, b| a * b, x, dx, y, dy)));
    }

    #[test]
    fn test_quotient_rule(x in -5.0..5.0, dx in tangent(), y in positive(), dy in tangent()) {
        let w = DualNumber::new(x, dx)
            .checked_div(DualNumber::new(y, dy))
            .unwrap();
        prop_assert!(close(w.derivative(), fd_binary(|a, b| a / b, x, dx, y, dy)));
    }

    #[test]
    fn test_mixed_operand_is_a_constant(x in -5.0..5.0, dx in tangent(), c in -5.0..5.0) {
        let u = DualNumber::new(x, dx);
        let k = DualNumber::constant(c);
        prop_assert_eq!(u + c, u + k);
        prop_assert_eq!(c - u, k - u);
        prop_assert_eq!(u * c, u * k);
        prop_assert_eq!(c * u, k * u);
    }

    #[test]
    fn test_ln_rule(x in positive(), dx in tangent()) {
        let w = DualNumber::new(x, dx).ln().unwrap();
        prop_assert!(close(w.derivative(), fd_unary(f64::ln, x, dx)));
    }

    #[test]
    fn test_sqrt_rule(x in positive(), dx in tangent()) {
        let w = DualNumber::new(x, dx).sqrt().unwrap();
        prop_assert!(close(w.derivative(), fd_unary(f64::sqrt, x, dx)));
    }

    #[test]
    fn test_exp_rule(x in -3.0..3.0, dx in tangent()) {
        let w = DualNumber::new(x, dx).exp();
        prop_assert!(close(w.derivative(), fd_unary(f64::exp, x, dx)));
    }

    #[test]
    fn test_norm_cdf_leibniz_rule(x in -4.0..4.0, dx in tangent()) {
        let w = norm_cdf_dual(DualNumber::new(x, dx));
        prop_assert!((w.derivative() - fd_unary(norm_cdf, x, dx)).abs() < 1e-6);
    }

    #[test]
    fn test_composition(x in positive(), dx in tangent(), y in positive(), dy in tangent()) {
        // f(a, b) = exp(ln(a)·b) / sqrt(a + b)
        let f_plain = |a: f64, b: f64| (a.ln() * b).exp() / (a + b).sqrt();

        let u = DualNumber::new(x, dx);
        let v = DualNumber::new(y, dy);
        let w = (u.ln().unwrap() * v)
            .exp()
            .checked_div((u + v).sqrt().unwrap())
            .unwrap();

        prop_assert_eq!(w.value(), f_plain(x, y));
        prop_assert!(close(w.derivative(), fd_binary(f_plain, x, dx, y, dy)));
    }
}
