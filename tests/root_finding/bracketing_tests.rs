//! tests for the interval bracketer
use approx::assert_abs_diff_eq;
use roots1d::root_finding::bracketing::{bracket, bracket_observed, BracketError};
use roots1d::root_finding::config::BracketCfg;
use roots1d::root_finding::errors::{RootFindingError, ToleranceError};
use roots1d::root_finding::interval::BracketKind;
use roots1d::root_finding::observe::IterationStep;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn sign_change_is_returned_unchanged() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let res = bracket(f, -1.0, 3.0, BracketCfg::new())?;

    assert_eq!(res.kind, BracketKind::SignChange);
    assert_eq!(res.shrinks, 0);
    assert_eq!(res.interval.as_array(), [-1.0, 3.0]);
    assert_eq!(res.f_left, -3.0);
    assert_eq!(res.f_right, 5.0);
    Ok(())
}

#[test]
fn endpoint_root_is_classified() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let res = bracket(f, 1.0, 3.0, BracketCfg::new())?;

    assert_eq!(res.kind, BracketKind::EndpointRoot);
    assert_eq!(res.shrinks, 0);
    assert_eq!(res.endpoint_root(), Some(1.0));
    Ok(())
}

#[test]
fn narrows_until_sign_change() -> TestResult {
    // f(-2.5) and f(2.205) are both positive; b crosses 2 on the 21st shrink
    let f   = |x: f64| x * x - 4.0;
    let res = bracket(f, -2.5, 2.205, BracketCfg::new())?;

    assert_eq!(res.kind, BracketKind::SignChange);
    assert_eq!(res.shrinks, 21);
    assert_abs_diff_eq!(res.a(), -2.29, epsilon = 1e-9);
    assert_abs_diff_eq!(res.b(), 1.995, epsilon = 1e-9);
    assert!(res.a() < res.b());
    assert!(res.f_left > 0.0 && res.f_right < 0.0);
    Ok(())
}

#[test]
fn custom_delta_takes_larger_steps() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let cfg = BracketCfg::new().set_delta(0.1)?;
    let res = bracket(f, -2.5, 2.205, cfg)?;

    assert_eq!(res.kind, BracketKind::SignChange);
    assert_eq!(res.shrinks, 3);
    assert_abs_diff_eq!(res.b(), 1.905, epsilon = 1e-9);
    Ok(())
}

#[test]
fn narrowing_onto_exact_root() -> TestResult {
    // [-1, 1.5] shrinks by 0.25 until a lands on the root at 0
    let f   = |x: f64| x * x;
    let cfg = BracketCfg::new().set_delta(0.25)?;
    let res = bracket(f, -1.0, 1.5, cfg)?;

    assert_eq!(res.kind, BracketKind::EndpointRoot);
    assert_eq!(res.shrinks, 4);
    assert_eq!(res.interval.as_array(), [0.0, 0.5]);
    assert_eq!(res.f_left, 0.0);
    assert_eq!(res.endpoint_root(), Some(0.0));
    Ok(())
}

#[test]
fn no_root_exhausts_shrink_budget() {
    let f   = |x: f64| x * x + 1.0;
    let err = bracket(f, -1.0, 1.0, BracketCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BracketError::NoRootFound { a, b, shrinks } if a == -1.0 && b == 1.0 && shrinks == 100
    ));
}

#[test]
fn observer_sees_every_shrink() -> TestResult {
    let f = |x: f64| x * x - 4.0;
    let mut seen = Vec::new();
    let res = bracket_observed(f, -2.5, 2.205, BracketCfg::new(), &mut |step: &IterationStep| {
        assert!(matches!(step, IterationStep::Shrink(_)));
        seen.push(step.iter());
    })?;

    assert_eq!(seen.len(), res.shrinks);
    assert_eq!(seen.first(), Some(&1));
    assert_eq!(seen.last(), Some(&21));
    Ok(())
}

#[test]
fn observer_does_not_change_result() -> TestResult {
    let f = |x: f64| x * x - 4.0;
    let plain    = bracket(f, -2.5, 2.205, BracketCfg::new())?;
    let observed = bracket_observed(f, -2.5, 2.205, BracketCfg::new(), &mut |_: &IterationStep| {})?;

    assert_eq!(plain, observed);
    Ok(())
}

#[test]
fn identical_bounds_are_invalid() {
    let f   = |x: f64| x;
    let err = bracket(f, 1.0, 1.0, BracketCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BracketError::RootFinding(RootFindingError::InvalidInterval { a, b }) if a == 1.0 && b == 1.0
    ));
}

#[test]
fn reversed_bounds_are_invalid() {
    let f   = |x: f64| x;
    let err = bracket(f, 2.0, -2.0, BracketCfg::new()).unwrap_err();

    assert!(matches!(err, BracketError::RootFinding(RootFindingError::InvalidInterval { .. })));
}

#[test]
fn non_finite_eval() {
    let f   = |x: f64| 1.0 / x;
    let err = bracket(f, 0.0, 1.0, BracketCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BracketError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.0 && fx.is_infinite()
    ));
}

#[test]
fn invalid_delta() {
    let err = BracketCfg::new().set_delta(0.0).unwrap_err();
    assert_eq!(err, ToleranceError::InvalidDelta { got: 0.0 });

    let err = BracketCfg::new().set_delta(f64::INFINITY).unwrap_err();
    assert!(matches!(err, ToleranceError::InvalidDelta { .. }));
}
