//! Method selection and the `solve` entry point.

use std::{fmt, str::FromStr};

use bon::Builder;

use crate::{
    Float,
    error::{Error, InvalidArgument},
    methods::{euler_with, rk2_with, rk4_with},
    ode::ODE,
    solout::SolOut,
    trajectory::Trajectory,
};

/// Stepper selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Forward Euler, first order
    Euler,
    /// Explicit midpoint, second order
    RK2,
    /// Classic fourth order Runge-Kutta
    #[default]
    RK4,
}

impl Method {
    /// Order of the global error.
    pub fn order(&self) -> usize {
        match self {
            Method::Euler => 1,
            Method::RK2 => 2,
            Method::RK4 => 4,
        }
    }

    /// Derivative evaluations per step.
    pub fn stages(&self) -> usize {
        match self {
            Method::Euler => 1,
            Method::RK2 => 2,
            Method::RK4 => 4,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Euler => write!(f, "Euler"),
            Method::RK2 => write!(f, "RK2"),
            Method::RK4 => write!(f, "RK4"),
        }
    }
}

impl FromStr for Method {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "rk2" | "midpoint" => Ok(Method::RK2),
            "rk4" => Ok(Method::RK4),
            _ => Err(InvalidArgument::UnknownMethod(s.to_string())),
        }
    }
}

#[derive(Builder)]
/// Options for [`solve`]
pub struct Options<'a> {
    /// Method to use. Default: RK4.
    #[builder(default)]
    pub method: Method,
    /// Optional observer invoked for the initial point and every computed point.
    pub solout: Option<&'a mut dyn SolOut>,
}

impl Default for Options<'_> {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Integrate dx/dt = f(x, t) from `(ti, xi)` to `tf` over `n` points with
/// the method chosen in `options`.
///
/// ```rust
/// use ode::prelude::*;
///
/// let mut seen = 0;
/// let mut count = |_step: usize, _t: Float, _x: Float| seen += 1;
/// let options = Options::builder()
///     .method(Method::RK2)
///     .solout(&mut count)
///     .build();
/// let sol = solve(&|x: Float, _t: Float| -x, 1.0, 0.0, 1.0, 5, options).unwrap();
/// assert_eq!(sol.method(), Method::RK2);
/// assert_eq!(seen, 5);
/// ```
pub fn solve<F>(
    f: &F,
    xi: Float,
    ti: Float,
    tf: Float,
    n: usize,
    options: Options<'_>,
) -> Result<Trajectory, Error>
where
    F: ODE + ?Sized,
{
    let Options { method, solout } = options;
    match method {
        Method::Euler => euler_with(f, xi, ti, tf, n, solout),
        Method::RK2 => rk2_with(f, xi, ti, tf, n, solout),
        Method::RK4 => rk4_with(f, xi, ti, tf, n, solout),
    }
}
