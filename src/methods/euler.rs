//! Explicit (forward) Euler fixed-step integrator.

use crate::{
    Float,
    error::Error,
    ode::ODE,
    solout::SolOut,
    solve::Method,
    trajectory::Trajectory,
};

use super::{accept, eval, prepare};

/// Forward Euler: `x[i+1] = x[i] + h*f(x[i], t[i])`.
///
/// One derivative evaluation per step, local truncation error O(h^2).
pub fn euler<F>(f: &F, xi: Float, ti: Float, tf: Float, n: usize) -> Result<Trajectory, Error>
where
    F: ODE + ?Sized,
{
    euler_with(f, xi, ti, tf, n, None)
}

pub(crate) fn euler_with<F>(
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
        let dx = eval(f, i, x[i], t[i])?;
        nfev += 1;

        x[i + 1] = accept(i, x[i], t[i], x[i] + h * dx)?;

        if let Some(s) = solout.as_deref_mut() {
            s.solout(i + 1, t[i + 1], x[i + 1]);
        }
    }

    Ok(Trajectory::new(t, x, h, nfev, Method::Euler))
}
