//! Example: Interpolating the Runge function
//!
//! Compares Floater–Hormann interpolants of increasing blend degree on
//! `f(x) = 1 / (1 + 25x²)`, the classic failure case for high-degree
//! polynomial interpolation on equispaced nodes.

use baryfit::{
    math::{FloaterHormann, default_degree},
    primitives::Vector,
};

fn runge(x: f64) -> f64 {
    1.0 / (1.0 + 25.0 * x * x)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Floater-Hormann interpolation of the Runge function ===\n");

    let probes = Vector::range(-1.0, 1.0, 1001);

    for n in [11, 21, 41, 81] {
        let x = Vector::range(-1.0, 1.0, n);
        let y = x.map(runge);

        println!("n = {n} (default degree {})", default_degree(n));
        for degree in [1, 3, default_degree(n), n - 1] {
            let f = FloaterHormann::new(Some(x.as_slice()), y.as_slice(), degree)?;
            let max_err =
                probes.iter().map(|&p| (f.eval(p) - runge(p)).abs()).fold(0.0, f64::max);
            println!("  d = {degree:>2}: max error {max_err:.3e}");
        }
        println!();
    }

    Ok(())
}
