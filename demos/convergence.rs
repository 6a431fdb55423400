//! # Example: Convergence
//!
//! Compare the final error of Euler, RK2 and RK4 on
//!
//! dx/dt = x cos(t), x(0) = 1, exact x(t) = exp(sin(t))
//!
//! while the number of points doubles. The error ratio between rows
//! approaches 2^order for each method.

use ode::prelude::*;

fn main() {
    let f = |x: Float, t: Float| x * t.cos();
    let (ti, tf, xi): (Float, Float, Float) = (0.0, 10.0, 1.0);
    let exact = tf.sin().exp();

    println!("{:>6}  {:>12}  {:>12}  {:>12}", "n", "Euler", "RK2", "RK4");
    let mut previous: Option<[Float; 3]> = None;
    for k in 4..=12 {
        let n = (1 << k) + 1;
        let mut errors = [0.0; 3];
        for (j, method) in [Method::Euler, Method::RK2, Method::RK4].into_iter().enumerate() {
            let options = Options::builder().method(method).build();
            errors[j] = match solve(&f, xi, ti, tf, n, options) {
                Ok(sol) => (sol.last().1 - exact).abs(),
                Err(e) => {
                    eprintln!("{method} failed: {e}");
                    return;
                }
            };
        }
        print!("{:>6}  {:>12.4e}  {:>12.4e}  {:>12.4e}", n, errors[0], errors[1], errors[2]);
        if let Some(prev) = previous {
            print!("   ratios: {:.2} {:.2} {:.2}", prev[0] / errors[0], prev[1] / errors[1], prev[2] / errors[2]);
        }
        println!();
        previous = Some(errors);
    }
}
