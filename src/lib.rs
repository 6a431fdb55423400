//! Fixed-step explicit integrators for scalar first-order ordinary differential
//! equations dx/dt = f(x, t).
//!
//! Three steppers share one calling convention: [`euler`], [`rk2`] (midpoint)
//! and [`rk4`]. Each samples `n` evenly spaced points over `[ti, tf]` and
//! returns a [`Trajectory`] holding the aligned `t` and `x` sequences.
//!
//! ```rust
//! use ode::prelude::*;
//!
//! let sol = rk4(&|x: Float, _t: Float| -x, 1.0, 0.0, 1.0, 11).unwrap();
//! let (t, x) = sol.last();
//! assert_eq!(t, 1.0);
//! assert!((x - (-1.0 as Float).exp()).abs() < 1e-5);
//! ```

mod error;
mod interval;
mod ode;
mod solout;
mod trajectory;

pub mod methods;
pub mod prelude;
pub mod solve;

#[cfg(feature = "python")]
mod python;

pub use error::{Error, Fault, InvalidArgument};
pub use interval::Interval;
pub use methods::{euler, rk2, rk4};
pub use ode::{Fallible, ODE};
pub use solout::SolOut;
pub use solve::{Method, Options, solve};
pub use trajectory::Trajectory;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f64, f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
