//! User defined callback hook executed after each computed point.

use crate::Float;

/// Callback hook executed as the trajectory is built.
///
/// `solout` is invoked once with `step == 0` for the initial condition
/// `(ti, xi)` and then once per computed point `(t[i+1], x[i+1])` with
/// `step == i + 1`. It only observes; the trajectory cannot be altered or
/// cut short from here. If the derivative fails at step `i`, the points up to
/// `i` have already been reported but the call still returns an error.
///
/// Any `FnMut(usize, Float, Float)` closure implements `SolOut`.
///
/// # Example
///
/// ```ignore
/// struct Printer;
/// impl SolOut for Printer {
///     fn solout(&mut self, step: usize, t: Float, x: Float) {
///         println!("{step:>4}  t = {t:.4}  x = {x:.6}");
///     }
/// }
/// ```
pub trait SolOut {
    fn solout(&mut self, step: usize, t: Float, x: Float);
}

impl<F> SolOut for F
where
    F: FnMut(usize, Float, Float),
{
    fn solout(&mut self, step: usize, t: Float, x: Float) {
        self(step, t, x)
    }
}
