use ode::prelude::*;

mod common;
use common::{METHODS, decay};

#[test]
fn solve_matches_the_direct_steppers() {
    for method in METHODS {
        let options = Options::builder().method(method).build();
        let via_solve = solve(&decay, 1.0, 0.0, 2.0, 9, options).unwrap();
        let direct = common::step_with(method, &decay, 1.0, 0.0, 2.0, 9).unwrap();
        assert_eq!(via_solve, direct);
    }
}

#[test]
fn solve_defaults_to_rk4() {
    let sol = solve(&decay, 1.0, 0.0, 1.0, 3, Options::default()).unwrap();
    assert_eq!(sol.method(), Method::RK4);
}

#[test]
fn observer_sees_every_point_in_order() {
    let mut seen: Vec<(usize, Float, Float)> = Vec::new();
    let mut record = |step: usize, t: Float, x: Float| seen.push((step, t, x));
    let options = Options::builder()
        .method(Method::Euler)
        .solout(&mut record)
        .build();
    let sol = solve(&decay, 1.0, 0.0, 1.0, 6, options).unwrap();

    assert_eq!(seen.len(), sol.len());
    for (i, ((step, t, x), (ts, xs))) in seen.iter().zip(sol.iter()).enumerate() {
        assert_eq!(*step, i);
        assert_eq!((*t, *x), (ts, xs));
    }
}

struct Counter {
    last_step: Option<usize>,
}

impl SolOut for Counter {
    fn solout(&mut self, step: usize, _t: Float, _x: Float) {
        self.last_step = Some(step);
    }
}

#[test]
fn observer_stops_before_a_failing_step() {
    let f = Fallible(|x: Float, t: Float| if t > 0.25 { Err("stop") } else { Ok(x) });
    let mut counter = Counter { last_step: None };
    let options = Options::builder().solout(&mut counter).build();
    let err = solve(&f, 1.0, 0.0, 1.0, 5, options).unwrap_err();

    // Step 1 starts at t = 0.25 and its midpoint stage is past the wall.
    assert!(matches!(err, Error::DerivativeEvaluation { step: 1, .. }));
    assert_eq!(counter.last_step, Some(1));
}
