use super::algorithms::Algorithm;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{RootFindingError, ToleranceError};
use super::interval::Interval;
use super::observe::{BisectionStep, IterationStep, Observer};
use super::report::{RootEstimate, Stencil, TerminationReason, ToleranceSatisfied};
use super::signs::opposite_sign;
use thiserror::Error;
use tracing::{debug, trace, warn};

const ALGORITHM: &str = Algorithm::Bisection.algorithm_name();

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid bracket [{a}, {b}]: f(a) * f(b) must be < 0. got f(a)={fa}, f(b)={fb}")]
    InvalidBracket { a: f64, b: f64, fa: f64, fb: f64 },
}

/// Bisection Configuration
///
/// # Defaults
///
/// └ DEFAULT_EPSILON - accuracy for both the residual and the interval width
///
/// # Validation:
/// └ [`BisectionCfg::set_epsilon`] rejects non-finite or non-positive values.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl_common_cfg!(BisectionCfg);


/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// The function `func` is assumed continuous on `[a, b]`, with `func(a)` and
/// `func(b)` of strictly opposite sign. Callers holding a
/// [`Bracket`](super::interval::Bracket) should pass one of kind
/// [`SignChange`](super::interval::BracketKind::SignChange).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the bracket. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the bracket. Must be finite and greater than `a`.
/// └ `cfg`  - [`BisectionCfg`] with accuracy `epsilon`.
///
/// # Returns
///
/// [`RootEstimate`] whose `converged` flag is authoritative:
/// ├ `converged = true`  : some midpoint had |f(x)| <= epsilon
/// │                        ([`ToleranceSatisfied::AbsFxReached`])
/// └ `converged = false` : |b - a| fell to epsilon first; `root` is the final
///                          midpoint ([`TerminationReason::IntervalExhausted`])
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidInterval`]     - `a >= b` or non-finite endpoints.
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN/inf.
/// └ [`BisectionError::InvalidBracket`]        - f(a)·f(b) >= 0.
///
/// # Notes
/// ├ The width halves every iteration; the residual bound may never be met
/// │   for pathological functions, hence the two exits.
/// └ If `epsilon` is below the float spacing of the bracket the loop stops
///   once the midpoint no longer moves, with the best-effort result.
pub fn bisection<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg,
) -> Result<RootEstimate, BisectionError>
where F: FnMut(f64) -> f64 {
    bisection_observed(func, a, b, cfg, &mut ())
}

/// Runs [`bisection`] with a bare `epsilon` instead of a config.
///
/// # Errors
///
/// As [`bisection`], plus [`ToleranceError::InvalidEpsilon`].
pub fn bisection_solve<F>(
    func: F,
    a: f64,
    b: f64,
    epsilon: f64,
) -> Result<RootEstimate, BisectionError>
where F: FnMut(f64) -> f64 {
    let cfg = BisectionCfg::new().set_epsilon(epsilon)?;
    bisection(func, a, b, cfg)
}

/// [`bisection`], reporting every midpoint evaluation to `observer` as
/// [`IterationStep::Bisection`].
pub fn bisection_observed<F, O>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg,
    observer: &mut O,
) -> Result<RootEstimate, BisectionError>
where
    F: FnMut(f64) -> f64,
    O: Observer + ?Sized,
{
    let interval = Interval::new(a, b)?;
    let epsilon  = cfg.epsilon();

    // number of function evaluations
    let mut evals = 0;

    // closure function, checks finiteness
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        } else {
            Ok(fx)
        }
    };

    let [mut a, mut b] = interval.as_array();
    let mut fa = eval(a)?;
    let mut fb = eval(b)?;
    if !opposite_sign(fa, fb) {
        return Err(BisectionError::InvalidBracket { a, b, fa, fb });
    }
    debug!(algorithm = ALGORITHM, a, b, epsilon, "starting bisection");

    let mut iter = 0;
    while (b - a).abs() > epsilon {
        let x = calculate_bisection(a, b);
        if x == a || x == b {
            // bracket is down to adjacent floats
            break;
        }
        iter += 1;

        let fx = eval(x)?;
        observer.observe(&IterationStep::Bisection(BisectionStep { iter, a, b, x, fa, fb, fx }));
        trace!(algorithm = ALGORITHM, iter, a, b, x, fx);

        // residual exit, independent of the width check
        if fx.abs() <= epsilon {
            debug!(algorithm = ALGORITHM, root = x, iterations = iter, "residual tolerance reached");
            return Ok(RootEstimate {
                root                : x,
                f_root              : fx,
                iterations          : iter,
                evaluations         : evals,
                converged           : true,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
                stencil             : Stencil::Bracket { bounds: [a, b] },
                algorithm_name      : ALGORITHM,
            });
        }

        // shrink interval
        if opposite_sign(fa, fx) {
            b  = x;
            fb = fx;
        } else {
            a  = x;
            fa = fx;
        }
    }

    let x  = calculate_bisection(a, b);
    let fx = eval(x)?;
    warn!(
        algorithm = ALGORITHM, root = x, f_root = fx, iterations = iter,
        "interval width exhausted before residual tolerance; returning midpoint"
    );

    Ok(RootEstimate {
        root                : x,
        f_root              : fx,
        iterations          : iter,
        evaluations         : evals,
        converged           : false,
        termination_reason  : TerminationReason::IntervalExhausted,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        stencil             : Stencil::Bracket { bounds: [a, b] },
        algorithm_name      : ALGORITHM,
    })
}
