//! Example: Regression on noisy samples
//!
//! Fits linear and interpolation regressions to samples of several curves
//! perturbed by ±3% uniform noise, then reports the relative error of each
//! at a held-out point.

use baryfit::{
    model::{InterpolationConfig, RegressionKind, build_regression},
    primitives::Vector,
    traits::{Interpolant, Regression},
};
use rand::Rng;

const HELD_OUT: f64 = 6.666;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Linear vs interpolation regression (±3% noise) ===\n");

    let targets: [(&str, fn(f64) -> f64); 4] = [
        ("3x + 2", |x| 3.0 * x + 2.0),
        ("x² - 2x + 3", |x| x * x - 2.0 * x + 3.0),
        ("x³ - 2x² + 3x - 4", |x| x * x * x - 2.0 * x * x + 3.0 * x - 4.0),
        ("1 / (1 + x²)", |x| 1.0 / (1.0 + x * x)),
    ];

    let kinds = [
        RegressionKind::Linear,
        RegressionKind::Interpolation(InterpolationConfig::default()),
        RegressionKind::Interpolation(InterpolationConfig { size: 20, degree: 3 }),
    ];

    let mut rng = rand::thread_rng();
    let x = Vector::range(0.0, 10.0, 100);

    for (name, f) in targets {
        let y: Vector = x.iter().map(|&v| f(v) * (1.0 + rng.gen_range(-0.03..0.03))).collect();
        println!("{name}");

        for kind in kinds {
            let regression = build_regression(kind);
            let fitted = regression.fit(x.as_slice(), y.as_slice())?;
            let err = (fitted.eval(HELD_OUT) / f(HELD_OUT) - 1.0).abs();
            println!("  {:<14} {:?}: relative error {:.4}", regression.name(), kind, err);
        }
        println!();
    }

    Ok(())
}
