use gbs_lib::{delta, price, GbsInputs, OptionType, PricingError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Helper function to create GbsInputs more concisely
fn create_inputs(spot: f64, strike: f64, tte: f64, rate: f64, carry: f64, vol: f64) -> GbsInputs {
    GbsInputs::new(spot, strike, tte, rate, carry, vol).expect("inputs should be valid")
}

// Forward-minus-bond parity right-hand side: S*e^((b-r)T) - X*e^(-rT)
fn parity_rhs(inputs: &GbsInputs) -> f64 {
    inputs.spot * ((inputs.carry - inputs.rate) * inputs.years_to_exp).exp()
        - inputs.strike * (-inputs.rate * inputs.years_to_exp).exp()
}

/// The textbook worked example: put, S=75, X=70, T=0.5, r=0.1, b=0.05, v=0.35.
/// Expected value 4.0870 is the natural-log evaluation of the closed form.
#[test]
fn test_worked_example_put_price() {
    let inputs = create_inputs(75.0, 70.0, 0.5, 0.10, 0.05, 0.35);
    let put = price(OptionType::Put, &inputs).expect("pricing failed");

    assert!(
        (put - 4.0870).abs() < 1e-3,
        "put price should be ~4.0870, got {:.6}",
        put
    );
}

/// Delta of an ITM-forward call with strong positive carry: must lie strictly
/// inside (0, e^((b-r)T)), here (0, e^0.25).
#[test]
fn test_delta_scenario_positive_carry() {
    let inputs = create_inputs(100.0, 100.0, 1.0, 0.05, 0.3, 0.25);
    let d = delta(OptionType::Call, &inputs).expect("delta failed");

    let upper = (0.25_f64).exp();
    assert!(d > 0.0 && d < upper, "call delta {} not in (0, {})", d, upper);
}

/// Put-call parity on a fixed parameter set, to 1e-6.
#[test]
fn test_put_call_parity_fixed() {
    let inputs = create_inputs(75.0, 70.0, 0.5, 0.10, 0.05, 0.35);

    let call = price(OptionType::Call, &inputs).unwrap();
    let put = price(OptionType::Put, &inputs).unwrap();

    assert!(
        (call - put - parity_rhs(&inputs)).abs() < 1e-6,
        "parity violated: C-P={:.8}, rhs={:.8}",
        call - put,
        parity_rhs(&inputs)
    );
}

/// Put-call parity and delta bounds over randomized parameter draws covering
/// the cost-of-carry model variants (negative rates and carries included).
#[test]
fn test_parity_and_delta_bounds_randomized() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let inputs = create_inputs(
            rng.gen_range(10.0..200.0),
            rng.gen_range(10.0..200.0),
            rng.gen_range(0.05..2.0),
            rng.gen_range(-0.05..0.15),
            rng.gen_range(-0.10..0.30),
            rng.gen_range(0.05..1.0),
        );

        let call = price(OptionType::Call, &inputs).unwrap();
        let put = price(OptionType::Put, &inputs).unwrap();
        assert!(
            (call - put - parity_rhs(&inputs)).abs() < 1e-6,
            "parity violated for {:?}",
            inputs
        );

        // Prices are present values of non-negative payoffs
        assert!(call >= 0.0 && put >= 0.0, "negative price for {:?}", inputs);

        let carry_df = ((inputs.carry - inputs.rate) * inputs.years_to_exp).exp();
        let call_delta = delta(OptionType::Call, &inputs).unwrap();
        let put_delta = delta(OptionType::Put, &inputs).unwrap();

        assert!(
            (0.0..=carry_df).contains(&call_delta),
            "call delta {} outside [0, {}] for {:?}",
            call_delta,
            carry_df,
            inputs
        );
        assert!(
            (-carry_df..=0.0).contains(&put_delta),
            "put delta {} outside [{}, 0] for {:?}",
            put_delta,
            -carry_df,
            inputs
        );

        // Call delta minus put delta is the carry discount factor exactly
        assert!(
            (call_delta - put_delta - carry_df).abs() < 1e-9,
            "delta parity violated for {:?}",
            inputs
        );
    }
}

/// Call price must be non-decreasing in spot with all else fixed.
#[test]
fn test_call_price_monotone_in_spot() {
    let mut prev = f64::NEG_INFINITY;
    for i in 1..=100 {
        let spot = 2.0 * i as f64;
        let inputs = create_inputs(spot, 100.0, 0.75, 0.05, 0.02, 0.3);
        let call = price(OptionType::Call, &inputs).unwrap();
        assert!(
            call >= prev - 1e-12,
            "call price decreased at spot {}: {} < {}",
            spot,
            call,
            prev
        );
        prev = call;
    }
}

/// Zero volatility and zero time make the d1 denominator vanish and must be
/// rejected as numeric errors, never returned as NaN.
#[test]
fn test_zero_vol_and_zero_time_rejected() {
    let zero_vol = GbsInputs::new(75.0, 70.0, 0.5, 0.10, 0.05, 0.0);
    assert!(matches!(zero_vol, Err(PricingError::Numeric(_))));

    let zero_time = GbsInputs::new(75.0, 70.0, 0.0, 0.10, 0.05, 0.35);
    assert!(matches!(zero_time, Err(PricingError::Numeric(_))));
}

/// Out-of-range inputs are domain errors.
#[test]
fn test_domain_errors() {
    for bad in [
        GbsInputs::new(-75.0, 70.0, 0.5, 0.10, 0.05, 0.35), // negative spot
        GbsInputs::new(75.0, 0.0, 0.5, 0.10, 0.05, 0.35),   // zero strike
        GbsInputs::new(75.0, 70.0, -0.5, 0.10, 0.05, 0.35), // negative time
        GbsInputs::new(75.0, 70.0, 0.5, 0.10, 0.05, -0.35), // negative vol
        GbsInputs::new(f64::NAN, 70.0, 0.5, 0.10, 0.05, 0.35), // non-finite spot
    ] {
        assert!(matches!(bad, Err(PricingError::Domain(_))), "got {:?}", bad);
    }
}

/// Pricing through a mutated (invalid) struct fails at the formula boundary
/// even when the struct was constructed valid.
#[test]
fn test_formula_revalidates_inputs() {
    let mut inputs = create_inputs(75.0, 70.0, 0.5, 0.10, 0.05, 0.35);
    inputs.vol = 0.0;

    assert!(price(OptionType::Call, &inputs).is_err());
    assert!(delta(OptionType::Put, &inputs).is_err());
}

/// The carry convention constructors reduce to the documented special cases.
#[test]
fn test_carry_conventions() {
    let bs = GbsInputs::black_scholes_1973(100.0, 95.0, 1.0, 0.05, 0.2).unwrap();
    assert_eq!(bs.carry, bs.rate);

    let merton = GbsInputs::merton_1973(100.0, 95.0, 1.0, 0.05, 0.02, 0.2).unwrap();
    assert!((merton.carry - 0.03).abs() < 1e-15);

    let black = GbsInputs::black_1976(100.0, 95.0, 1.0, 0.05, 0.2).unwrap();
    assert_eq!(black.carry, 0.0);

    let asay = GbsInputs::asay_1982(100.0, 95.0, 1.0, 0.2).unwrap();
    assert_eq!(asay.rate, 0.0);
    assert_eq!(asay.carry, 0.0);

    let gk = GbsInputs::garman_kohlhagen_1983(1.25, 1.20, 0.5, 0.05, 0.03, 0.1).unwrap();
    assert!((gk.carry - 0.02).abs() < 1e-15);

    // Under Black-Scholes 1973 (b = r) the carry discount factor is 1, so
    // call delta is Phi(d1) and stays below 1.
    let d = delta(OptionType::Call, &bs).unwrap();
    assert!(d > 0.0 && d < 1.0);
}

/// Option type parsing accepts the single-letter feed flags and full names.
#[test]
fn test_option_type_parsing() {
    assert_eq!("c".parse::<OptionType>().unwrap(), OptionType::Call);
    assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
    assert_eq!("p".parse::<OptionType>().unwrap(), OptionType::Put);
    assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
    assert!("straddle".parse::<OptionType>().is_err());
}

/// An injected CDF is actually used by the *_with_cdf entry points.
#[test]
fn test_cdf_injection() {
    use std::cell::Cell;

    let inputs = create_inputs(75.0, 70.0, 0.5, 0.10, 0.05, 0.35);
    let calls = Cell::new(0usize);
    let counting_cdf = |x: f64| {
        calls.set(calls.get() + 1);
        gbs_lib::norm_cdf(x)
    };

    let injected = gbs_lib::price_with_cdf(OptionType::Call, &inputs, counting_cdf).unwrap();
    let default = price(OptionType::Call, &inputs).unwrap();

    assert_eq!(calls.get(), 2, "call price evaluates the CDF at d1 and d2");
    assert!((injected - default).abs() < 1e-15);
}

/// Deep ITM/OTM extremes stay finite and approach their analytic limits.
#[test]
fn test_extreme_moneyness() {
    let deep_itm = create_inputs(1000.0, 10.0, 0.5, 0.05, 0.05, 0.2);
    let call = price(OptionType::Call, &deep_itm).unwrap();
    // Essentially forward minus discounted strike, and never below intrinsic
    // when carry equals rate
    assert!((call - parity_rhs(&deep_itm)).abs() < 1e-6);
    assert!(call >= OptionType::Call.intrinsic(deep_itm.spot, deep_itm.strike));

    let deep_otm = create_inputs(10.0, 1000.0, 0.5, 0.05, 0.05, 0.2);
    let call = price(OptionType::Call, &deep_otm).unwrap();
    assert!(call.is_finite() && call.abs() < 1e-9);

    let call_delta = delta(OptionType::Call, &deep_otm).unwrap();
    assert!(call_delta >= 0.0 && call_delta < 1e-9);
}
