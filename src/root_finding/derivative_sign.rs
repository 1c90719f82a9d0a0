//! Sign-constancy check used to gate the secant method.

use super::signs::opposite_sign;
use tracing::debug;


/// Returns `true` if no sign change of `g` is detected on `[a, b]`.
///
/// Endpoints where `g` is exactly zero are critical points. `[a, b]` is
/// split at the critical points (in order) and each piece `[p, q]` is tested
/// for g(p)·g(q) < 0.
///
/// # Warning
/// └ Only zeros that land exactly on a tested point become partition points.
///   An interior sign change that never passes through a literal zero at a
///   tested point goes unnoticed; this is a cheap sufficiency heuristic, not
///   a proof that the sign is constant.
pub fn sign_is_constant<G>(mut g: G, a: f64, b: f64) -> bool
where G: FnMut(f64) -> f64 {
    let ga = g(a);
    let gb = g(b);

    let mut breakpoints = [a; 4];
    let mut values      = [ga; 4];
    let mut len = 1;
    for (x, gx) in [(a, ga), (b, gb)] {
        if gx == 0.0 {
            breakpoints[len] = x;
            values[len]      = gx;
            len += 1;
        }
    }
    breakpoints[len] = b;
    values[len]      = gb;
    len += 1;

    if len > 2 {
        debug!(critical = ?&breakpoints[1..len - 1], "critical points found");
    }

    let changes = values[..len]
        .windows(2)
        .zip(breakpoints[..len].windows(2))
        .find(|(v, _)| opposite_sign(v[0], v[1]));

    match changes {
        Some((_, p)) => {
            debug!(p = p[0], q = p[1], "sign change detected");
            false
        },
        None => true,
    }
}
