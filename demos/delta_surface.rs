// Example: delta_surface.rs
// Renders the call Delta of the GBSM model as a 3-D surface over underlying
// price and time to expiration, for a fixed strike, rate, carry and vol.
//
// Usage:
//     cargo run --example delta_surface
//
// The output image will be written to delta_surface.svg in the working
// directory.

use std::error::Error;

use gbs_lib::{delta, GbsInputs, OptionType};
use plotters::prelude::*;

// Fixed parameters matching the strike scan in price_demo
const STRIKE: f64 = 100.0;
const RATE: f64 = 0.05;
const CARRY: f64 = 0.3;
const VOL: f64 = 0.25;

fn call_delta(spot: f64, years_to_exp: f64) -> f64 {
    GbsInputs::new(spot, STRIKE, years_to_exp, RATE, CARRY, VOL)
        .and_then(|inputs| delta(OptionType::Call, &inputs))
        .unwrap_or(0.0)
}

fn main() -> Result<(), Box<dyn Error>> {
    // Spot from 5 to 200 in steps of 5; time from 0.1 to 1.0 years in steps
    // of 0.1. Zero time is excluded: the closed form rejects it.
    let spots: Vec<f64> = (1..=40).map(|i| 5.0 * i as f64).collect();
    let times: Vec<f64> = (1..=10).map(|j| 0.1 * j as f64).collect();

    // Call delta is bounded above by e^((b-r)T), here at most e^0.25.
    let max_delta = ((CARRY - RATE) * 1.0_f64).exp();

    let root = SVGBackend::new("delta_surface.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "GBSM Call Delta Surface | X={:.0}, r={:.2}, b={:.2}, v={:.2}",
                STRIKE, RATE, CARRY, VOL
            ),
            ("sans-serif", 30),
        )
        .build_cartesian_3d(5.0..200.0_f64, 0.0..(max_delta * 1.05), 0.1..1.0_f64)?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.3;
        pb.yaw = 0.8;
        pb.scale = 0.9;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    chart.draw_series(
        SurfaceSeries::xoz(
            spots.iter().copied(),
            times.iter().copied(),
            |spot, years_to_exp| call_delta(spot, years_to_exp),
        )
        .style(BLUE.mix(0.4).filled()),
    )?;

    // Print a coarse slice of the grid as a sanity check
    println!("Call delta at selected (spot, years) points:");
    for &spot in &[50.0, 100.0, 150.0] {
        for &t in &[0.1, 0.5, 1.0] {
            println!("  S={:<6.0} T={:<4.1} delta={:.4}", spot, t, call_delta(spot, t));
        }
    }

    println!("Chart saved to delta_surface.svg");
    Ok(())
}
