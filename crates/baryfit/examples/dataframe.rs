//! Example: Fitting columns of a DataFrame
//!
//! Builds a small polars DataFrame with integer timestamps and float
//! readings (one missing), extracts it as samples, and interpolates the
//! readings between timestamps.

use baryfit::{
    model::{RegressionKind, build_regression},
    primitives::Samples,
    traits::Interpolant,
    utils::{frame_samples, to_vector},
};
use polars::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Samples from a DataFrame ===\n");

    let df = df! {
        "minute" => &[0_i32, 5, 10, 15, 20, 25, 30],
        "reading" => &[
            Some(12.1), Some(13.4), Some(15.2), None, Some(16.0), Some(15.1), Some(13.9),
        ],
    }?;
    println!("{df}\n");

    let samples = frame_samples(&df, "minute", "reading")?;

    // drop the missing reading before fitting
    let (x, y): (Vec<f64>, Vec<f64>) = samples
        .x()
        .iter()
        .zip(samples.y())
        .filter(|(_, y)| !y.is_nan())
        .map(|(&x, &y)| (x, y))
        .unzip();

    let clean = Samples::new(x.into(), y.into())?;
    let f = build_regression(RegressionKind::default()).fit_samples(&clean)?;

    for minute in to_vector(0_u8..=30).iter().step_by(3) {
        println!("  t = {minute:>4.1}: {:.3}", f.eval(*minute));
    }

    Ok(())
}
