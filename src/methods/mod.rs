//! Fixed-step explicit integrators (Euler, RK2, RK4)
//!
//! All three share the same contract: validate `(xi, ti, tf, n)`, lay out `n`
//! evenly spaced points, then advance `x[i] -> x[i+1]` with a method-specific
//! update rule. The first failing derivative evaluation aborts the call.

mod euler;
mod rk2;
mod rk4;

pub use euler::euler;
pub use rk2::rk2;
pub use rk4::rk4;

pub(crate) use euler::euler_with;
pub(crate) use rk2::rk2_with;
pub(crate) use rk4::rk4_with;

use crate::{
    Float,
    error::{Error, Fault, InvalidArgument},
    interval::Interval,
    ode::ODE,
};

/// Grid, state buffer with `x[0] = xi`, and step size.
pub(crate) fn prepare(
    xi: Float,
    ti: Float,
    tf: Float,
    n: usize,
) -> Result<(Vec<Float>, Vec<Float>, Float), Error> {
    let interval = Interval::new(ti, tf, n)?;
    if !xi.is_finite() {
        return Err(InvalidArgument::NonFinite { name: "xi", value: xi }.into());
    }

    let t = interval.points();
    let mut x = vec![0.0; n];
    x[0] = xi;
    Ok((t, x, interval.step()))
}

/// Evaluate `f(x, t)` while advancing from point `step`, rejecting failures
/// and non-finite slopes.
#[inline]
pub(crate) fn eval<F>(f: &F, step: usize, x: Float, t: Float) -> Result<Float, Error>
where
    F: ODE + ?Sized,
{
    let fault = match f.ode(x, t) {
        Ok(v) if v.is_finite() => return Ok(v),
        Ok(v) => Fault::NonFinite(v),
        Err(fault) => fault,
    };
    Err(Error::DerivativeEvaluation { step, x, t, fault })
}

/// Accept `next` as `x[step + 1]` unless the update overflowed.
#[inline]
pub(crate) fn accept(step: usize, x: Float, t: Float, next: Float) -> Result<Float, Error> {
    if next.is_finite() {
        Ok(next)
    } else {
        Err(Error::DerivativeEvaluation {
            step,
            x,
            t,
            fault: Fault::Overflow(next),
        })
    }
}
