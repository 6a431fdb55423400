use ode::prelude::*;

mod common;
use common::{LOOSE, METHODS, Logistic, TIGHT, decay, decay_error, step_with};

#[test]
fn zero_derivative_keeps_initial_state() {
    for method in METHODS {
        let sol = step_with(method, &|_x: Float, _t: Float| 0.0, 2.5, 0.0, 3.0, 17).unwrap();
        assert!(sol.x().iter().all(|&x| x == 2.5), "{method} drifted");
    }
}

#[test]
fn grid_is_aligned_and_evenly_spaced() {
    for method in METHODS {
        let sol = step_with(method, &decay, 1.0, -2.0, 3.0, 7).unwrap();
        let h = 5.0 / 6.0;
        assert_eq!(sol.t().len(), 7);
        assert_eq!(sol.x().len(), 7);
        assert_eq!(sol.t()[0], -2.0);
        assert_eq!(sol.t()[6], 3.0);
        assert_eq!(sol.x()[0], 1.0);
        assert!((sol.step() - h).abs() < 32.0 * Float::EPSILON);
        for w in sol.t().windows(2) {
            assert!(w[1] > w[0]);
            assert!((w[1] - w[0] - h).abs() < 32.0 * Float::EPSILON);
        }
    }
}

#[test]
fn single_step_decay() {
    let e = euler(&decay, 1.0, 0.0, 1.0, 2).unwrap();
    assert_eq!(e.x(), &[1.0, 0.0]);

    let m = rk2(&decay, 1.0, 0.0, 1.0, 2).unwrap();
    assert!((m.x()[1] - 0.5).abs() < 8.0 * Float::EPSILON);

    let r = rk4(&decay, 1.0, 0.0, 1.0, 2).unwrap();
    assert!((r.x()[1] - 0.375).abs() < 8.0 * Float::EPSILON);

    let exact = (-1.0 as Float).exp();
    assert!((r.x()[1] - exact).abs() < (e.x()[1] - exact).abs());
}

#[test]
fn higher_order_methods_are_more_accurate() {
    for n in [11, 21, 41] {
        let euler_err = decay_error(Method::Euler, n);
        let rk2_err = decay_error(Method::RK2, n);
        let rk4_err = decay_error(Method::RK4, n);
        assert!(rk2_err < euler_err, "n = {n}");
        assert!(rk4_err < rk2_err, "n = {n}");
    }
}

// RK4 errors at h = 0.05 sit below single precision rounding.
#[cfg(feature = "f64")]
#[test]
fn halving_the_step_matches_the_method_order() {
    // Error ratio between h = 0.1 and h = 0.05 should be close to 2^order.
    let ranges = [(Method::Euler, 1.8, 2.2), (Method::RK2, 3.5, 4.5), (Method::RK4, 12.0, 20.0)];
    for (method, lo, hi) in ranges {
        let ratio = decay_error(method, 11) / decay_error(method, 21);
        assert!(ratio > lo && ratio < hi, "{method}: ratio {ratio}");
    }
}

#[test]
fn rk4_tracks_logistic_growth() {
    let logistic = Logistic { r: 1.0, k: 10.0 };
    let sol = rk4(&logistic, 1.0, 0.0, 10.0, 101).unwrap();
    for (t, x) in sol.iter() {
        assert!((x - logistic.exact(1.0, t)).abs() < LOOSE, "t = {t}");
    }
}

#[test]
fn time_dependent_derivative() {
    // dx/dt = 2t, x(t) = t^2. RK2 and RK4 are exact for a linear slope.
    let f = |_x: Float, t: Float| 2.0 * t;
    for sol in [rk2(&f, 0.0, 0.0, 2.0, 9).unwrap(), rk4(&f, 0.0, 0.0, 2.0, 9).unwrap()] {
        for (t, x) in sol.iter() {
            assert!((x - t * t).abs() < TIGHT);
        }
    }
}

#[test]
fn identical_calls_are_bit_identical() {
    let f = |x: Float, t: Float| (t * x).sin() - 0.3 * x;
    for method in METHODS {
        let a = step_with(method, &f, 0.7, 0.0, 4.0, 257).unwrap();
        let b = step_with(method, &f, 0.7, 0.0, 4.0, 257).unwrap();
        let bits = |v: &[Float]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(a.t()), bits(b.t()));
        assert_eq!(bits(a.x()), bits(b.x()));
    }
}

#[test]
fn counts_evaluations_per_method() {
    for method in METHODS {
        let sol = step_with(method, &decay, 1.0, 0.0, 1.0, 11).unwrap();
        assert_eq!(sol.nstep(), 10);
        assert_eq!(sol.nfev(), 10 * method.stages());
        assert_eq!(sol.method(), method);
    }
}

#[test]
fn trait_objects_are_accepted() {
    let f: &dyn ODE = &Logistic { r: 0.5, k: 2.0 };
    let sol = euler(f, 1.0, 0.0, 1.0, 5).unwrap();
    assert_eq!(sol.len(), 5);
}
