//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use ode::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `Float`, `ODE`, `Fallible`, `SolOut`, `Trajectory`, `Interval`.
//! - Steppers: `euler`, `rk2`, `rk4`.
//! - High-level API: `solve`, `Options`, and `Method`.
//! - Errors: `Error`, `Fault`, `InvalidArgument`.

pub use crate::{
    Float,
    error::{Error, Fault, InvalidArgument},
    interval::Interval,
    methods::{euler, rk2, rk4},
    ode::{Fallible, ODE},
    solout::SolOut,
    solve::{Method, Options, solve},
    trajectory::Trajectory,
};
