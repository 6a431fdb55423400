//! Python bindings: the three steppers and `solve` over Python callables.

use numpy::PyArray1;
use pyo3::{
    exceptions::{PyRuntimeError, PyTypeError, PyValueError},
    prelude::*,
};

use crate::{
    Float,
    error::{Error, Fault},
    methods,
    ode::ODE,
    solve::{self, Method, Options},
    trajectory::Trajectory,
};

/// Wraps a Python callable `f(x, t) -> float` as an [`ODE`].
///
/// A raised exception, or a return value that does not convert to float,
/// becomes [`Fault::Failed`] with the Python error text.
struct PyDerivative<'py> {
    fun: Bound<'py, PyAny>,
}

impl<'py> PyDerivative<'py> {
    fn new(fun: Bound<'py, PyAny>) -> PyResult<Self> {
        if !fun.is_callable() {
            return Err(PyTypeError::new_err("f must be callable as f(x, t)"));
        }
        Ok(Self { fun })
    }
}

impl ODE for PyDerivative<'_> {
    fn ode(&self, x: Float, t: Float) -> Result<Float, Fault> {
        let value = self
            .fun
            .call1((x, t))
            .map_err(|e| Fault::Failed(e.to_string()))?;
        value
            .extract::<Float>()
            .map_err(|e| Fault::Failed(e.to_string()))
    }
}

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        match &err {
            Error::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
            Error::DerivativeEvaluation { fault, .. } => {
                PyRuntimeError::new_err(format!("{}: {}", err, fault))
            }
        }
    }
}

type Samples<'py> = (Bound<'py, PyArray1<Float>>, Bound<'py, PyArray1<Float>>);

fn to_numpy<'py>(py: Python<'py>, sol: Trajectory) -> Samples<'py> {
    let (t, x) = sol.into_parts();
    (PyArray1::from_vec(py, t), PyArray1::from_vec(py, x))
}

/// Forward Euler. Returns ``(t, x)`` as numpy arrays of length ``n``.
#[pyfunction]
#[pyo3(name = "euler")]
fn euler_py<'py>(
    py: Python<'py>,
    f: Bound<'py, PyAny>,
    xi: Float,
    ti: Float,
    tf: Float,
    n: usize,
) -> PyResult<Samples<'py>> {
    let f = PyDerivative::new(f)?;
    let sol = methods::euler(&f, xi, ti, tf, n)?;
    Ok(to_numpy(py, sol))
}

/// Explicit midpoint RK2. Returns ``(t, x)`` as numpy arrays of length ``n``.
#[pyfunction]
#[pyo3(name = "rk2")]
fn rk2_py<'py>(
    py: Python<'py>,
    f: Bound<'py, PyAny>,
    xi: Float,
    ti: Float,
    tf: Float,
    n: usize,
) -> PyResult<Samples<'py>> {
    let f = PyDerivative::new(f)?;
    let sol = methods::rk2(&f, xi, ti, tf, n)?;
    Ok(to_numpy(py, sol))
}

/// Classic RK4. Returns ``(t, x)`` as numpy arrays of length ``n``.
#[pyfunction]
#[pyo3(name = "rk4")]
fn rk4_py<'py>(
    py: Python<'py>,
    f: Bound<'py, PyAny>,
    xi: Float,
    ti: Float,
    tf: Float,
    n: usize,
) -> PyResult<Samples<'py>> {
    let f = PyDerivative::new(f)?;
    let sol = methods::rk4(&f, xi, ti, tf, n)?;
    Ok(to_numpy(py, sol))
}

/// Integrate with the named method (``"euler"``, ``"rk2"`` or ``"rk4"``).
#[pyfunction]
#[pyo3(name = "solve", signature = (f, xi, ti, tf, n, method="RK4"))]
fn solve_py<'py>(
    py: Python<'py>,
    f: Bound<'py, PyAny>,
    xi: Float,
    ti: Float,
    tf: Float,
    n: usize,
    method: &str,
) -> PyResult<Samples<'py>> {
    let method: Method = method.parse().map_err(Error::from)?;
    let f = PyDerivative::new(f)?;
    let options = Options::builder().method(method).build();
    let sol = solve::solve(&f, xi, ti, tf, n, options)?;
    Ok(to_numpy(py, sol))
}

#[pymodule]
#[pyo3(name = "ode")]
fn ode_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(euler_py, m)?)?;
    m.add_function(wrap_pyfunction!(rk2_py, m)?)?;
    m.add_function(wrap_pyfunction!(rk4_py, m)?)?;
    m.add_function(wrap_pyfunction!(solve_py, m)?)?;

    let doc = "Fixed-step explicit integrators for dx/dt = f(x, t).\n\n\
               Every function takes ``f(x, t)``, the initial state ``xi``, the\n\
               bounds ``ti`` and ``tf`` and the number of points ``n``, and\n\
               returns ``(t, x)`` as numpy arrays.\n\n\
               Methods:\n\
               - euler (first order)\n\
               - rk2 (explicit midpoint, second order)\n\
               - rk4 (classic Runge-Kutta, fourth order)";
    m.setattr("__doc__", doc)?;

    Ok(())
}
