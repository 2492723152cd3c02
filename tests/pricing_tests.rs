use approx::{assert_abs_diff_eq, assert_relative_eq};
use bs_heatmap::{
    price, price_by_name, BlackScholes, OptionParameters, OptionSide, PricingError,
    StatrsNormalCdf,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn call(s: f64, k: f64, t: f64, r: f64, v: f64) -> f64 {
    price(s, k, t, r, v, OptionSide::Call).expect("call pricing failed")
}

fn put(s: f64, k: f64, t: f64, r: f64, v: f64) -> f64 {
    price(s, k, t, r, v, OptionSide::Put).expect("put pricing failed")
}

/// ATM, zero rate: call and put coincide at 100·(2Φ(0.1) − 1).
#[test]
fn test_atm_zero_rate_reference() {
    let c = call(100.0, 100.0, 1.0, 0.0, 0.2);
    let p = put(100.0, 100.0, 1.0, 0.0, 0.2);
    assert_abs_diff_eq!(c, 7.9656, epsilon = 1e-3);
    assert_abs_diff_eq!(p, 7.9656, epsilon = 1e-3);
    assert_abs_diff_eq!(c, p, epsilon = 1e-12);
}

/// The default form inputs of the interactive page.
#[test]
fn test_default_inputs_reference() {
    assert_abs_diff_eq!(call(100.0, 100.0, 1.0, 0.05, 0.2), 10.450_583_572_185_565, epsilon = 1e-9);
    assert_abs_diff_eq!(put(100.0, 100.0, 1.0, 0.05, 0.2), 5.573_526_022_256_971, epsilon = 1e-9);
}

/// C − P = S − K·e^(−rT) across randomly sampled valid inputs.
#[test]
fn test_put_call_parity_random() {
    let mut rng = StdRng::seed_from_u64(20_240_601);
    for _ in 0..2000 {
        let s = rng.gen_range(10.0..500.0);
        let k = rng.gen_range(10.0..500.0);
        let t = rng.gen_range(0.01..5.0);
        let r = rng.gen_range(-0.05..0.15);
        let v = rng.gen_range(0.01..1.5);

        let lhs = call(s, k, t, r, v) - put(s, k, t, r, v);
        let rhs = s - k * (-r * t).exp();
        let scale = s.max(k);
        assert!(
            (lhs - rhs).abs() <= 1e-9 * scale,
            "parity violated for S={} K={} T={} r={} σ={}: {} vs {}",
            s,
            k,
            t,
            r,
            v,
            lhs,
            rhs
        );
    }
}

/// Vega is positive: both prices strictly increase with σ.
#[test]
fn test_monotone_in_volatility() {
    for &strike in &[90.0, 100.0, 110.0] {
        let mut prev_call = f64::NEG_INFINITY;
        let mut prev_put = f64::NEG_INFINITY;
        for i in 1..=20 {
            let v = 0.05 * i as f64;
            let c = call(100.0, strike, 1.0, 0.05, v);
            let p = put(100.0, strike, 1.0, 0.05, v);
            assert!(c > prev_call, "call not increasing at K={} σ={}", strike, v);
            assert!(p > prev_put, "put not increasing at K={} σ={}", strike, v);
            prev_call = c;
            prev_put = p;
        }
    }
}

#[test]
fn test_deep_in_the_money_call_limit() {
    let (k, t, r, v) = (100.0, 1.0, 0.05, 0.2);
    let s = 1e7;
    assert_relative_eq!(call(s, k, t, r, v), s - k * (-r * t).exp(), max_relative = 1e-12);
    assert_abs_diff_eq!(put(s, k, t, r, v), 0.0, epsilon = 1e-9);
}

#[test]
fn test_vanishing_spot_limit() {
    let (k, t, r, v) = (100.0, 1.0, 0.05, 0.2);
    let s = 1e-8;
    assert_abs_diff_eq!(call(s, k, t, r, v), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(put(s, k, t, r, v), k * (-r * t).exp(), epsilon = 1e-7);
}

#[test]
fn test_negative_rate_allowed() {
    let c = call(100.0, 100.0, 2.0, -0.01, 0.25);
    let p = put(100.0, 100.0, 2.0, -0.01, 0.25);
    assert!(c > 0.0 && p > 0.0);
    assert_abs_diff_eq!(c - p, 100.0 - 100.0 * (0.02_f64).exp(), epsilon = 1e-9);
}

#[test]
fn test_unknown_side_rejected() {
    let err = price_by_name(100.0, 100.0, 1.0, 0.05, 0.2, "straddle").unwrap_err();
    assert!(matches!(err, PricingError::InvalidParameter(_)));
    assert!(err.to_string().contains("straddle"));
}

#[test]
fn test_side_by_name_matches_enum() {
    assert_eq!(
        price_by_name(100.0, 95.0, 0.5, 0.03, 0.3, "Put").unwrap(),
        put(100.0, 95.0, 0.5, 0.03, 0.3)
    );
}

/// Strict policy: zero maturity or volatility is an error, never NaN/∞.
#[test]
fn test_zero_maturity_and_volatility_rejected() {
    for result in [
        price(100.0, 100.0, 0.0, 0.05, 0.2, OptionSide::Call),
        price(100.0, 100.0, 1.0, 0.05, 0.0, OptionSide::Put),
        price(-1.0, 100.0, 1.0, 0.05, 0.2, OptionSide::Call),
        price(100.0, 0.0, 1.0, 0.05, 0.2, OptionSide::Call),
        price(100.0, 100.0, f64::INFINITY, 0.05, 0.2, OptionSide::Call),
    ] {
        assert!(matches!(result, Err(PricingError::InvalidParameter(_))));
    }
}

#[test]
fn test_alternative_cdf_pricer() {
    let pricer = BlackScholes::with_cdf(StatrsNormalCdf);
    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionSide::Call).unwrap();
    assert_abs_diff_eq!(pricer.price(&params).unwrap(), 10.450_583_572_185_565, epsilon = 1e-9);
}
