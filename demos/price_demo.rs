// demos/price_demo.rs

//! Demonstration of GBSM option pricing and Delta
//!
//! This example shows how to:
//! 1. Build a validated parameter set
//! 2. Price a European put (the textbook worked example)
//! 3. Compute the Delta hedge ratio
//! 4. Scan prices and deltas across strikes

use anyhow::Result;
use gbs_lib::{delta, price, GbsInputs, OptionType};

fn main() -> Result<()> {
    println!("GBSM Pricing and Delta Demo");
    println!("===========================");

    // Worked example: put on a dividend-paying stock.
    // S=75, X=70, T=0.5 years, r=10%, b=5%, v=35%
    let inputs = GbsInputs::new(75.0, 70.0, 0.5, 0.10, 0.05, 0.35)?;

    println!("\nStep 1: Pricing the worked example...");
    let put_price = price(OptionType::Put, &inputs)?;
    let call_price = price(OptionType::Call, &inputs)?;
    println!("  Put price:  {:.4}", put_price);
    println!("  Call price: {:.4}", call_price);

    println!("\nStep 2: Delta hedge ratios...");
    let put_delta = delta(OptionType::Put, &inputs)?;
    let call_delta = delta(OptionType::Call, &inputs)?;
    println!("  Put delta:  {:.4}", put_delta);
    println!("  Call delta: {:.4}", call_delta);

    // Put-call parity check: C - P = S*e^((b-r)T) - X*e^(-rT)
    let parity = inputs.spot * ((inputs.carry - inputs.rate) * inputs.years_to_exp).exp()
        - inputs.strike * (-inputs.rate * inputs.years_to_exp).exp();
    println!("\n  Parity residual: {:.2e}", call_price - put_price - parity);

    println!("\nStep 3: Scanning strikes...");
    println!(
        "{:<8} {:<12} {:<12} {:<12} {:<12}",
        "Strike", "Call Price", "Call Delta", "Put Price", "Put Delta"
    );
    println!("{}", "-".repeat(58));

    for strike in (50..=100).step_by(5) {
        let scan = GbsInputs::new(75.0, strike as f64, 0.5, 0.10, 0.05, 0.35)?;
        println!(
            "{:<8} {:<12.4} {:<12.4} {:<12.4} {:<12.4}",
            strike,
            price(OptionType::Call, &scan)?,
            delta(OptionType::Call, &scan)?,
            price(OptionType::Put, &scan)?,
            delta(OptionType::Put, &scan)?,
        );
    }

    Ok(())
}
