//! Second-order Runge-Kutta (explicit midpoint) fixed-step integrator.

use crate::{
    Float,
    error::Error,
    ode::ODE,
    solout::SolOut,
    solve::Method,
    trajectory::Trajectory,
};

use super::{accept, eval, prepare};

/// Explicit midpoint RK2.
///
/// An Euler half step predicts the midpoint state, whose slope then carries
/// the full step:
///
/// ```text
/// k1 = h*f(x, t)
/// k2 = h*f(x + k1/2, t + h/2)
/// x(t+h) = x(t) + k2
/// ```
///
/// Two derivative evaluations per step, local truncation error O(h^3).
pub fn rk2<F>(f: &F, xi: Float, ti: Float, tf: Float, n: usize) -> Result<Trajectory, Error>
where
    F: ODE + ?Sized,
{
    rk2_with(f, xi, ti, tf, n, None)
}

pub(crate) fn rk2_with<F>(
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
        // Stage computations
        let k1 = h * eval(f, i, x[i], t[i])?;

        let (xm, tm) = (x[i] + A21 * k1, t[i] + C2 * h);
        let k2 = h * eval(f, i, xm, tm)?;

        nfev += 2;

        // Update state
        x[i + 1] = accept(i, x[i], t[i], x[i] + k2)?;

        if let Some(s) = solout.as_deref_mut() {
            s.solout(i + 1, t[i + 1], x[i + 1]);
        }
    }

    Ok(Trajectory::new(t, x, h, nfev, Method::RK2))
}

// Midpoint coefficients
const C2: Float = 0.5;
const A21: Float = 0.5;
