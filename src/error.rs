//! Errors for integration methods

use thiserror::Error;

use crate::Float;

/// Errors returned by the steppers and by [`crate::solve`].
///
/// Either the call was malformed and rejected before any stepping
/// ([`Error::InvalidArgument`]), or the derivative failed part way through
/// ([`Error::DerivativeEvaluation`]). No partial trajectory is returned in
/// either case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("derivative evaluation failed while advancing step {step} at (x = {x}, t = {t})")]
    DerivativeEvaluation {
        /// Index `i` of the point being advanced from.
        step: usize,
        /// State presented to the derivative.
        x: Float,
        /// Independent variable presented to the derivative.
        t: Float,
        #[source]
        fault: Fault,
    },
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    pub fn is_derivative_failure(&self) -> bool {
        matches!(self, Error::DerivativeEvaluation { .. })
    }
}

/// Malformed input detected before the first derivative evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("number of points must be at least 2 (got {0})")]
    TooFewPoints(usize),
    #[error("interval bounds must differ (ti = tf = {0})")]
    EmptyInterval(Float),
    #[error("step size overflows for interval [{ti}, {tf}]")]
    StepOverflow { ti: Float, tf: Float },
    #[error("{n} points cannot be told apart on interval [{ti}, {tf}]")]
    UnresolvableGrid { ti: Float, tf: Float, n: usize },
    #[error("{name} must be finite (got {value})")]
    NonFinite { name: &'static str, value: Float },
    #[error("unknown method '{0}' (expected one of: euler, rk2, rk4)")]
    UnknownMethod(String),
}

/// Why a single derivative evaluation was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Fault {
    /// The derivative reported its own failure.
    #[error("{0}")]
    Failed(String),
    /// The derivative returned NaN or an infinity.
    #[error("derivative returned a non-finite value ({0})")]
    NonFinite(Float),
    /// The derivative was finite but the updated state was not.
    #[error("update overflowed to a non-finite state ({0})")]
    Overflow(Float),
}
