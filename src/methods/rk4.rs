//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use crate::{
    Float,
    error::Error,
    ode::ODE,
    solout::SolOut,
    solve::Method,
    trajectory::Trajectory,
};

use super::{accept, eval, prepare};

/// Classical explicit Runge-Kutta 4 (RK4) fixed-step integrator.
///
/// ```text
/// k1 = h*f(x, t)
/// k2 = h*f(x + k1/2, t + h/2)
/// k3 = h*f(x + k2/2, t + h/2)
/// k4 = h*f(x + k3, t + h)
/// x(t+h) = x(t) + (k1 + 2*k2 + 2*k3 + k4)/6
/// ```
///
/// Four derivative evaluations per step, local truncation error O(h^5).
/// The best accuracy for the cost of the three, and the default of
/// [`crate::solve`].
pub fn rk4<F>(f: &F, xi: Float, ti: Float, tf: Float, n: usize) -> Result<Trajectory, Error>
where
    F: ODE + ?Sized,
{
    rk4_with(f, xi, ti, tf, n, None)
}

pub(crate) fn rk4_with<F>(
    f: &F,
    xi: Float,
    ti: Float,
    tf: Float,
    n: usize,
    mut solout: Option<&mut dyn SolOut>,
) -> Result<Trajectory, Error>
where
    F: ODE + ?Sized,
{
    // --- Input Validation & Declarations ---
    let (t, mut x, h) = prepare(xi, ti, tf, n)?;
    let mut nfev = 0;

    if let Some(s) = solout.as_deref_mut() {
        s.solout(0, t[0], x[0]);
    }

    // --- Main integration loop ---
    for i in 0..n - 1 {
        let (xn, tn) = (x[i], t[i]);

        // Stage computations
        let k1 = h * eval(f, i, xn, tn)?;

        let (xt, tt) = (xn + A21 * k1, tn + C2 * h);
        let k2 = h * eval(f, i, xt, tt)?;

        let (xt, tt) = (xn + A32 * k2, tn + C3 * h);
        let k3 = h * eval(f, i, xt, tt)?;

        let (xt, tt) = (xn + A43 * k3, tn + C4 * h);
        let k4 = h * eval(f, i, xt, tt)?;

        nfev += 4;

        // Update state
        let next = xn + B1 * k1 + B2 * k2 + B3 * k3 + B4 * k4;
        x[i + 1] = accept(i, xn, tn, next)?;

        if let Some(s) = solout.as_deref_mut() {
            s.solout(i + 1, t[i + 1], x[i + 1]);
        }
    }

    Ok(Trajectory::new(t, x, h, nfev, Method::RK4))
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
