#![allow(dead_code)]

use ode::prelude::*;

/// Tolerance for results that are exact up to rounding.
#[cfg(feature = "f64")]
pub const TIGHT: Float = 1e-12;
#[cfg(feature = "f32")]
pub const TIGHT: Float = 1e-5;

/// Tolerance for approximations of a smooth exact solution.
#[cfg(feature = "f64")]
pub const LOOSE: Float = 1e-5;
#[cfg(feature = "f32")]
pub const LOOSE: Float = 1e-3;

pub const METHODS: [Method; 3] = [Method::Euler, Method::RK2, Method::RK4];

/// dx/dt = -x, x(t) = x0 * exp(-(t - t0))
pub fn decay(x: Float, _t: Float) -> Float {
    -x
}

/// Logistic growth dx/dt = r x (1 - x / k).
pub struct Logistic {
    pub r: Float,
    pub k: Float,
}

impl Logistic {
    pub fn exact(&self, x0: Float, t: Float) -> Float {
        self.k / (1.0 + (self.k / x0 - 1.0) * (-self.r * t).exp())
    }
}

impl ODE for Logistic {
    fn ode(&self, x: Float, _t: Float) -> Result<Float, Fault> {
        Ok(self.r * x * (1.0 - x / self.k))
    }
}

/// Call the stepper for `method` through its own entry point.
pub fn step_with<F: ODE + ?Sized>(
    method: Method,
    f: &F,
    xi: Float,
    ti: Float,
    tf: Float,
    n: usize,
) -> Result<Trajectory, Error> {
    match method {
        Method::Euler => euler(f, xi, ti, tf, n),
        Method::RK2 => rk2(f, xi, ti, tf, n),
        Method::RK4 => rk4(f, xi, ti, tf, n),
    }
}

/// |x[n-1] - exp(-1)| for dx/dt = -x on [0, 1] with x(0) = 1.
pub fn decay_error(method: Method, n: usize) -> Float {
    let sol = step_with(method, &decay, 1.0, 0.0, 1.0, n).unwrap();
    (sol.last().1 - (-1.0 as Float).exp()).abs()
}
