//! tests for the derivative sign-constancy check
use roots1d::root_finding::derivative_sign::sign_is_constant;

#[test]
fn monotonic_single_signed_is_constant() {
    let g = |x: f64| x * x * x + 1.0;
    assert!(sign_is_constant(g, 0.0, 5.0));
}

#[test]
fn opposite_endpoint_signs_change() {
    let g = |x: f64| x;
    assert!(!sign_is_constant(g, -1.0, 1.0));

    let g = |x: f64| 2.0 - x * x;
    assert!(!sign_is_constant(g, 0.0, 3.0));
}

#[test]
fn zero_at_endpoint_is_a_critical_point() {
    let g = |x: f64| 2.0 * x;
    assert!(sign_is_constant(g, 0.0, 2.0));
    assert!(sign_is_constant(g, -2.0, 0.0));
}

#[test]
fn zeros_at_both_endpoints() {
    let g = |x: f64| x * (x - 1.0);
    assert!(sign_is_constant(g, 0.0, 1.0));
}

#[test]
fn constant_function() {
    assert!(sign_is_constant(|_x: f64| -3.0, -10.0, 10.0));
    assert!(sign_is_constant(|_x: f64| 0.0, -10.0, 10.0));
}

#[test]
fn misses_interior_sign_change_between_equal_signs() {
    // g changes sign twice inside, but both endpoints are positive
    let g = |x: f64| x * x - 1.0;
    assert!(sign_is_constant(g, -2.0, 2.0));
}
