//! # Example: Exponential Decay
//!
//! Solve the exponential decay equation with each fixed-step method.
//!
//! Equation:
//! dx/dt = -x
//!
//! Initial condition: x(0) = 1.0
//!

use ode::prelude::*;

struct SimpleODE;

impl ODE for SimpleODE {
    fn ode(&self, x: Float, _t: Float) -> Result<Float, Fault> {
        // Example: dx/dt = -x (exponential decay)
        Ok(-x)
    }
}

fn main() {
    let f = SimpleODE;
    let ti = 0.0;
    let tf = 5.0;
    let xi = 1.0;
    let n = 51;

    for method in [Method::Euler, Method::RK2, Method::RK4] {
        let options = Options::builder().method(method).build();
        match solve(&f, xi, ti, tf, n, options) {
            Ok(sol) => {
                let (t_last, x_last) = sol.last();
                println!("Method: {}", sol.method());
                println!("Final state: t = {:.5}, x = {:.8}", t_last, x_last);
                println!("Exact:                  x = {:.8}", (-t_last).exp());
                println!("Number of function evaluations: {}", sol.nfev());
                println!("Number of steps taken: {}", sol.nstep());
                println!();
            }
            Err(e) => eprintln!("Integration failed: {}", e),
        }
    }

    // Print sampled values of the default method
    if let Ok(sol) = rk4(&f, xi, ti, tf, 11) {
        for (ti, xi) in sol.iter() {
            println!("t = {:.4}, x = {:.6}", ti, xi);
        }
    }
}
