//! Validated integration domain and its evenly spaced grid.

use crate::{Float, error::InvalidArgument};

/// The independent-variable domain `[ti, tf]` split into `n` points.
///
/// `tf` may lie below `ti`, in which case the grid runs backwards and the
/// step size is negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    ti: Float,
    tf: Float,
    n: usize,
}

impl Interval {
    /// Validate `(ti, tf, n)`.
    ///
    /// Checks, in order: `n >= 2`, both bounds finite, `tf != ti`, a finite
    /// step size, and a grid whose `n` points are all distinct.
    pub fn new(ti: Float, tf: Float, n: usize) -> Result<Self, InvalidArgument> {
        if n < 2 {
            return Err(InvalidArgument::TooFewPoints(n));
        }
        if !ti.is_finite() {
            return Err(InvalidArgument::NonFinite { name: "ti", value: ti });
        }
        if !tf.is_finite() {
            return Err(InvalidArgument::NonFinite { name: "tf", value: tf });
        }
        if tf == ti {
            return Err(InvalidArgument::EmptyInterval(ti));
        }

        let interval = Self { ti, tf, n };
        if !interval.step().is_finite() {
            return Err(InvalidArgument::StepOverflow { ti, tf });
        }

        // Adjacent points must not round onto each other.
        let direction = (tf - ti).signum();
        let resolved = (1..n).all(|k| (interval.point(k) - interval.point(k - 1)) * direction > 0.0);
        if !resolved {
            return Err(InvalidArgument::UnresolvableGrid { ti, tf, n });
        }

        Ok(interval)
    }

    pub fn ti(&self) -> Float {
        self.ti
    }

    pub fn tf(&self) -> Float {
        self.tf
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Step size h = (tf - ti) / (n - 1).
    pub fn step(&self) -> Float {
        (self.tf - self.ti) / (self.n - 1) as Float
    }

    /// The `n` grid points `ti + k*h`, with both ends pinned to `ti` and `tf`.
    pub fn points(&self) -> Vec<Float> {
        (0..self.n).map(|k| self.point(k)).collect()
    }

    fn point(&self, k: usize) -> Float {
        if k == 0 {
            self.ti
        } else if k == self.n - 1 {
            self.tf
        } else {
            self.ti + k as Float * self.step()
        }
    }
}
