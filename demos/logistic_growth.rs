//! # Example: Logistic Growth
//!
//! A parameterised ODE with an observer printing each computed point.
//!
//! Equation:
//! dx/dt = r x (1 - x / k)
//!
//! Initial condition: x(0) = 0.5

use ode::prelude::*;

struct Logistic {
    r: Float,
    k: Float,
}

impl ODE for Logistic {
    fn ode(&self, x: Float, _t: Float) -> Result<Float, Fault> {
        Ok(self.r * x * (1.0 - x / self.k))
    }
}

// Prints every point as the integrator produces it
struct Printer {
    every: usize,
}

impl SolOut for Printer {
    fn solout(&mut self, step: usize, t: Float, x: Float) {
        if step % self.every == 0 {
            println!("{:>5}  t = {:>6.3}  x = {:.6}", step, t, x);
        }
    }
}

fn main() {
    let logistic = Logistic { r: 0.8, k: 10.0 };
    let mut printer = Printer { every: 10 };

    let options = Options::builder()
        .method(Method::RK4)
        .solout(&mut printer)
        .build();

    match solve(&logistic, 0.5, 0.0, 15.0, 151, options) {
        Ok(sol) => {
            let (t, x) = sol.last();
            let exact = logistic.k / (1.0 + (logistic.k / 0.5 - 1.0) * (-logistic.r * t).exp());
            println!("Final state: t = {:.3}, x = {:.8} (exact {:.8})", t, x, exact);
            println!("Number of function evaluations: {}", sol.nfev());
        }
        Err(e) => eprintln!("Integration failed: {}", e),
    }
}
