//! The sampled result of a fixed-step integration.

use crate::{Float, solve::Method};

/// Index-aligned samples `t[i]`, `x[i]` produced by one stepper call.
///
/// Both sequences have the length `n` the call was made with, `t[0] = ti`,
/// `t[n-1] = tf` and `x[0] = xi`. The trajectory is read-only once returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    t: Vec<Float>,
    x: Vec<Float>,
    h: Float,
    nfev: usize,
    method: Method,
}

impl Trajectory {
    pub(crate) fn new(t: Vec<Float>, x: Vec<Float>, h: Float, nfev: usize, method: Method) -> Self {
        debug_assert_eq!(t.len(), x.len());
        Self { t, x, h, nfev, method }
    }

    /// Sampled independent-variable points.
    pub fn t(&self) -> &[Float] {
        &self.t
    }

    /// Approximated states, `x()[i]` taken at `t()[i]`.
    pub fn x(&self) -> &[Float] {
        &self.x
    }

    /// Number of samples. Always at least 2.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Always `false`: a trajectory holds at least the two grid end points.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Step size used between samples.
    pub fn step(&self) -> Float {
        self.h
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// The number of derivative evaluations
    pub fn nfev(&self) -> usize {
        self.nfev
    }

    /// The number of steps taken
    pub fn nstep(&self) -> usize {
        self.t.len() - 1
    }

    /// Final sample `(t[n-1], x[n-1])`.
    pub fn last(&self) -> (Float, Float) {
        let i = self.t.len() - 1;
        (self.t[i], self.x[i])
    }

    /// Iterate over `(t_i, x_i)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.t.iter().copied().zip(self.x.iter().copied())
    }

    /// Consume the trajectory, returning `(t, x)`.
    pub fn into_parts(self) -> (Vec<Float>, Vec<Float>) {
        (self.t, self.x)
    }
}
