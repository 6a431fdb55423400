//! User-supplied derivative function.

use std::fmt::Display;

use crate::{Float, error::Fault};

/// User-supplied derivative function dx/dt = f(x, t).
///
/// The steppers call `ode` with the current state `x` first and the
/// independent variable `t` second. Any `Fn(Float, Float) -> Float` closure
/// already implements this trait; implement it by hand for parameterised
/// systems or for derivatives that can fail.
///
/// # Example
///
/// ```ignore
/// struct Logistic { r: Float, k: Float }
/// impl ODE for Logistic {
///     fn ode(&self, x: Float, _t: Float) -> Result<Float, Fault> {
///         Ok(self.r * x * (1.0 - x / self.k))
///     }
/// }
/// ```
pub trait ODE {
    fn ode(&self, x: Float, t: Float) -> Result<Float, Fault>;
}

impl<F> ODE for F
where
    F: Fn(Float, Float) -> Float,
{
    #[inline]
    fn ode(&self, x: Float, t: Float) -> Result<Float, Fault> {
        Ok(self(x, t))
    }
}

/// Adapter for closures that report their own failures.
///
/// An `Err(e)` from the wrapped closure becomes [`Fault::Failed`] carrying
/// `e.to_string()`.
///
/// ```rust
/// use ode::prelude::*;
///
/// let f = Fallible(|x: Float, _t: Float| {
///     if x > 0.0 { Ok(x.sqrt()) } else { Err("sqrt of non-positive state") }
/// });
/// let err = euler(&f, -1.0, 0.0, 1.0, 3).unwrap_err();
/// assert!(err.is_derivative_failure());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> ODE for Fallible<F>
where
    F: Fn(Float, Float) -> Result<Float, E>,
    E: Display,
{
    #[inline]
    fn ode(&self, x: Float, t: Float) -> Result<Float, Fault> {
        (self.0)(x, t).map_err(|e| Fault::Failed(e.to_string()))
    }
}
