//! Interval bracketing by symmetric narrowing.

use super::algorithms::Algorithm;
use super::config::BracketCfg;
use super::errors::RootFindingError;
use super::interval::{Bracket, BracketKind, Interval};
use super::observe::{IterationStep, Observer, ShrinkStep};
use thiserror::Error;
use tracing::{debug, trace};

const ALGORITHM: &str = Algorithm::Bracketing.algorithm_name();

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("no root found on [{a}, {b}]: f(a) * f(b) > 0 after {shrinks} shrinks")]
    NoRootFound { a: f64, b: f64, shrinks: usize },
}


/// Confirms that `[a, b]` brackets a root of `func`, narrowing it
/// symmetrically until it does.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be bracketed.
/// ├ `a`    - Lower bound. Must be finite and less than `b`.
/// ├ `b`    - Upper bound. Must be finite and greater than `a`.
/// └ `cfg`  - [`BracketCfg`] with the shrink step `delta` (default 0.01).
///
/// # Returns
///
/// A [`Bracket`] of kind
/// ├ [`BracketKind::SignChange`]   : f(a)·f(b) < 0
/// └ [`BracketKind::EndpointRoot`] : f(a)·f(b) = 0
///
/// If the input already brackets, it is returned unchanged with `shrinks = 0`.
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidInterval`]     - `a >= b` or non-finite endpoints.
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN/inf.
/// └ [`BracketError::NoRootFound`]             - width fell to `delta` (or stopped
///                                               shrinking) with f(a)·f(b) > 0 throughout.
///
/// # Warning
/// └ Narrowing is a best-effort heuristic, not a root count. Root pairs inside
///   the trimmed margins, or inside a still-positive-product interval, are
///   skipped. A function symmetric about the midpoint never changes sign
///   between the narrowed endpoints.
pub fn bracket<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: BracketCfg,
) -> Result<Bracket, BracketError>
where F: FnMut(f64) -> f64 {
    bracket_observed(func, a, b, cfg, &mut ())
}

/// [`bracket`], reporting every narrowing step to `observer` as
/// [`IterationStep::Shrink`].
pub fn bracket_observed<F, O>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: BracketCfg,
    observer: &mut O,
) -> Result<Bracket, BracketError>
where
    F: FnMut(f64) -> f64,
    O: Observer + ?Sized,
{
    let mut interval = Interval::new(a, b)?;

    let mut eval = |x: f64| -> Result<f64, BracketError> {
        let fx = func(x);
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    let fa = eval(a)?;
    let fb = eval(b)?;
    let kind = BracketKind::classify(fa, fb);
    debug!(algorithm = ALGORITHM, a, b, fa, fb, ?kind, "classified initial interval");

    if kind.is_bracketing() {
        return Ok(Bracket { interval, kind, f_left: fa, f_right: fb, shrinks: 0 });
    }

    let delta = cfg.delta();
    let mut shrinks = 0;
    while interval.width() > delta {
        if !interval.shrink_symmetric(delta) {
            break;
        }
        shrinks += 1;

        let fa = eval(interval.a())?;
        let fb = eval(interval.b())?;
        let step = ShrinkStep { iter: shrinks, a: interval.a(), b: interval.b(), fa, fb };
        observer.observe(&IterationStep::Shrink(step));
        trace!(algorithm = ALGORITHM, shrinks, a = step.a, b = step.b, product = step.product());

        let kind = BracketKind::classify(fa, fb);
        if kind.is_bracketing() {
            debug!(
                algorithm = ALGORITHM, shrinks, a = step.a, b = step.b, ?kind,
                "narrowed interval to a bracket"
            );
            return Ok(Bracket { interval, kind, f_left: fa, f_right: fb, shrinks });
        }
    }

    debug!(algorithm = ALGORITHM, a, b, shrinks, "no sign change found");
    Err(BracketError::NoRootFound { a, b, shrinks })
}
