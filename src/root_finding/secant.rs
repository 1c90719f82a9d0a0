use super::algorithms::Algorithm;
use super::config::{CommonCfg, impl_common_cfg};
use super::derivative_sign::sign_is_constant;
use super::errors::{RootFindingError, ToleranceError};
use super::interval::Interval;
use super::observe::{IterationStep, Observer, SecantStep};
use super::report::{RootEstimate, Stencil, TerminationReason, ToleranceSatisfied};
use super::signs::{product_sign, Sign};
use thiserror::Error;
use tracing::{debug, trace};

const ALGORITHM: &str = Algorithm::Secant.algorithm_name();

pub const DEFAULT_MAX_ITER: usize = 50;
pub const DEFAULT_STEP_SIZE: f64   = 0.005;


#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("unable to determine initial approximation on [{a}, {b}]: \
             f * f'' <= 0 at both endpoints")]
    InitialApproximation { a: f64, b: f64 },

    #[error("convergence precondition failed: {0}")]
    Precondition(Precondition),

    #[error("degenerate secant at x0={x0}, x1={x1}: f(x1) == f(x0) == {fx}")]
    DegenerateSecantStep { x0: f64, x1: f64, fx: f64 },

    #[error("could not find the root after {max_iter} iterations")]
    Convergence { max_iter: usize },
}


/// Analytic conditions checked before the secant iteration starts.
///
/// ┌ [`Precondition::Monotonic`]              (P1) : sign of f' constant on [a, b]
/// ├ [`Precondition::ConstantCurvature`]      (P2) : sign of f'' constant on [a, b]
/// └ [`Precondition::NonVanishingDerivative`] (P3) : f' != 0 at the sample points
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precondition {
    Monotonic,
    ConstantCurvature,
    NonVanishingDerivative { x: f64, dfx: f64 },
}

impl Precondition {
    pub const fn label(&self) -> &'static str {
        match self {
            Precondition::Monotonic                     => "P1",
            Precondition::ConstantCurvature             => "P2",
            Precondition::NonVanishingDerivative { .. } => "P3",
        }
    }
}

impl std::fmt::Display for Precondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Precondition::Monotonic =>
                write!(f, "{}: sign of f' changes on the interval", self.label()),
            Precondition::ConstantCurvature =>
                write!(f, "{}: sign of f'' changes on the interval", self.label()),
            Precondition::NonVanishingDerivative { x, dfx } =>
                write!(f, "{}: f'({x}) = {dfx} must be finite and nonzero", self.label()),
        }
    }
}


/// A function together with its first and second derivatives.
///
/// The bundle only borrows out its functions; it can be reused across
/// solves and never caches evaluations.
#[derive(Debug, Clone, Copy)]
pub struct FunctionBundle<F, D1, D2> {
    /// f
    pub value: F,
    /// f'
    pub first_derivative: D1,
    /// f''
    pub second_derivative: D2,
}

impl<F, D1, D2> FunctionBundle<F, D1, D2>
where
    F:  Fn(f64) -> f64,
    D1: Fn(f64) -> f64,
    D2: Fn(f64) -> f64,
{
    pub fn new(value: F, first_derivative: D1, second_derivative: D2) -> Self {
        Self { value, first_derivative, second_derivative }
    }
}


/// Secant configuration
///
/// # Fields
/// - `common`    : [`CommonCfg`] with accuracy `epsilon`.
/// - `max_iter`  : iteration budget (default [`DEFAULT_MAX_ITER`]).
/// - `step_size` : offset `h` from x0 to the second starting point
///                 (default [`DEFAULT_STEP_SIZE`]).
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantCfg {
    common: CommonCfg,
    max_iter: usize,
    step_size: f64,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            max_iter: DEFAULT_MAX_ITER,
            step_size: DEFAULT_STEP_SIZE,
        }
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }

    pub fn set_step_size(mut self, v: f64) -> Result<Self, ToleranceError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ToleranceError::InvalidStepSize { got: v });
        }
        self.step_size = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }

    #[inline] #[must_use] pub fn step_size(&self) -> f64 { self.step_size }
}
impl Default for SecantCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SecantCfg);


#[inline]
fn checked(x: f64, fx: f64) -> Result<f64, SecantError> {
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }
    Ok(fx)
}

/// Picks the endpoint where f and f'' share a sign.
///
/// Returns `Ok(a)` if f(a)·f''(a) > 0, else `Ok(b)` if f(b)·f''(b) > 0.
fn initial_approximation<F, D1, D2>(
    bundle: &FunctionBundle<F, D1, D2>,
    interval: &Interval,
) -> Result<f64, SecantError>
where
    F:  Fn(f64) -> f64,
    D1: Fn(f64) -> f64,
    D2: Fn(f64) -> f64,
{
    for x in interval.as_array() {
        let fx   = checked(x, (bundle.value)(x))?;
        let d2fx = checked(x, (bundle.second_derivative)(x))?;
        if product_sign(fx, d2fx) == Sign::Positive {
            return Ok(x);
        }
    }
    Err(SecantError::InitialApproximation { a: interval.a(), b: interval.b() })
}

/// Checks P1–P3, failing on the first one that does not hold.
///
/// f' and f'' must be finite at both endpoints before their signs are
/// compared. P3 samples f' at the starting point `x0` and at the interval
/// midpoint. An isolated zero of f' between samples is not detected.
fn verify_preconditions<F, D1, D2>(
    bundle: &FunctionBundle<F, D1, D2>,
    interval: &Interval,
    x0: f64,
) -> Result<(), SecantError>
where
    F:  Fn(f64) -> f64,
    D1: Fn(f64) -> f64,
    D2: Fn(f64) -> f64,
{
    let [a, b] = interval.as_array();

    for x in [a, b] {
        checked(x, (bundle.first_derivative)(x))?;
        checked(x, (bundle.second_derivative)(x))?;
    }

    if !sign_is_constant(&bundle.first_derivative, a, b) {
        return Err(SecantError::Precondition(Precondition::Monotonic));
    }
    if !sign_is_constant(&bundle.second_derivative, a, b) {
        return Err(SecantError::Precondition(Precondition::ConstantCurvature));
    }
    for x in [x0, interval.midpoint()] {
        let dfx = (bundle.first_derivative)(x);
        if !dfx.is_finite() || dfx == 0.0 {
            return Err(SecantError::Precondition(
                Precondition::NonVanishingDerivative { x, dfx }
            ));
        }
    }
    Ok(())
}


/// Finds a root of `bundle.value` on `[a, b]` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method), gated by
/// the classical convergence conditions.
///
/// # Arguments
/// - `bundle` : f with its analytic f' and f''
/// - `a`, `b` : interval; finite with `a < b`
/// - `cfg`    : [`SecantCfg`] (epsilon, max_iter, step size `h`)
///
/// # Behavior
/// - Start: x0 is the endpoint with f(x0)·f''(x0) > 0 (a first, then b).
/// - Preconditions, in order: P1 sign of f' constant, P2 sign of f'' constant,
///   P3 f'(x0) and f'((a+b)/2) finite and nonzero. See [`Precondition`].
/// - Second point: x1 = x0 + h if x0 = a, else x0 - h (inward).
/// - Each iteration first checks |x1 - x0| <= epsilon or |f(x1)| <= epsilon,
///   then applies x_next = x1 - (x1 - x0) / (f(x1) - f(x0)) * f(x1).
///
/// # Returns
/// [`RootEstimate`] with `converged = true`, `root = x1` and
/// `tolerance_satisfied` [`ToleranceSatisfied::AbsFxReached`] if the residual
/// test held, else [`ToleranceSatisfied::StepSizeReached`]. `evaluations`
/// counts evaluations of f only.
///
/// # Errors
/// - [`RootFindingError::InvalidInterval`]     : `a >= b` or non-finite endpoints
/// - [`RootFindingError::NonFiniteEvaluation`] : f, f' or f'' produced NaN/inf at a sampled point
/// - [`SecantError::InitialApproximation`]     : no endpoint satisfies f·f'' > 0
/// - [`SecantError::Precondition`]             : P1, P2 or P3 failed
/// - [`SecantError::DegenerateSecantStep`]     : f(x1) == f(x0)
/// - [`SecantError::Convergence`]              : `max_iter` updates without meeting epsilon
///
/// # Notes
/// - Under P1–P3 convergence is superlinear (order ~1.618) toward the root
///   nearest x0. Without them the solver refuses to iterate.
pub fn secant<F, D1, D2>(
    bundle: &FunctionBundle<F, D1, D2>,
    a: f64,
    b: f64,
    cfg: SecantCfg,
) -> Result<RootEstimate, SecantError>
where
    F:  Fn(f64) -> f64,
    D1: Fn(f64) -> f64,
    D2: Fn(f64) -> f64,
{
    secant_observed(bundle, a, b, cfg, &mut ())
}

/// Runs [`secant`] with bare parameters instead of a config.
///
/// # Errors
///
/// As [`secant`], plus invalid `epsilon`, `max_iter` or `step_size`.
pub fn secant_solve<F, D1, D2>(
    bundle: &FunctionBundle<F, D1, D2>,
    a: f64,
    b: f64,
    epsilon: f64,
    max_iter: usize,
    step_size: f64,
) -> Result<RootEstimate, SecantError>
where
    F:  Fn(f64) -> f64,
    D1: Fn(f64) -> f64,
    D2: Fn(f64) -> f64,
{
    let cfg = SecantCfg::new()
        .set_epsilon(epsilon)?
        .set_max_iter(max_iter)?
        .set_step_size(step_size)?;
    secant(bundle, a, b, cfg)
}

/// [`secant`], reporting every update to `observer` as
/// [`IterationStep::Secant`].
pub fn secant_observed<F, D1, D2, O>(
    bundle: &FunctionBundle<F, D1, D2>,
    a: f64,
    b: f64,
    cfg: SecantCfg,
    observer: &mut O,
) -> Result<RootEstimate, SecantError>
where
    F:  Fn(f64) -> f64,
    D1: Fn(f64) -> f64,
    D2: Fn(f64) -> f64,
    O:  Observer + ?Sized,
{
    let interval  = Interval::new(a, b)?;
    let epsilon   = cfg.epsilon();
    let max_iter  = cfg.max_iter();
    let h         = cfg.step_size();

    let mut x0 = initial_approximation(bundle, &interval)?;
    debug!(algorithm = ALGORITHM, a, b, x0, "selected initial approximation");

    verify_preconditions(bundle, &interval, x0)?;
    debug!(algorithm = ALGORITHM, "convergence preconditions hold");

    // track evaluations of f
    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, SecantError> {
        evals += 1;
        checked(x, (bundle.value)(x))
    };

    let mut x1 = if x0 == a { x0 + h } else { x0 - h };
    let mut f0 = eval(x0)?;
    let mut f1 = eval(x1)?;

    for iter in 0..max_iter {
        let residual_met = f1.abs() <= epsilon;
        if residual_met || (x1 - x0).abs() <= epsilon {
            let tolerance_satisfied = if residual_met {
                ToleranceSatisfied::AbsFxReached
            } else {
                ToleranceSatisfied::StepSizeReached
            };
            debug!(algorithm = ALGORITHM, root = x1, iterations = iter, ?tolerance_satisfied, "converged");
            return Ok(RootEstimate {
                root                : x1,
                f_root              : f1,
                iterations          : iter,
                evaluations         : evals,
                converged           : true,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied,
                stencil             : Stencil::Open { prev: x0 },
                algorithm_name      : ALGORITHM,
            });
        }

        if f1 == f0 {
            return Err(SecantError::DegenerateSecantStep { x0, x1, fx: f1 });
        }

        let x_next = x1 - ((x1 - x0) / (f1 - f0)) * f1;
        let f_next = eval(x_next)?;
        observer.observe(&IterationStep::Secant(SecantStep {
            iter: iter + 1,
            x_prev: x0,
            x_curr: x1,
            x_next,
            f_next,
        }));
        trace!(algorithm = ALGORITHM, iter = iter + 1, x_next, f_next);

        x0 = x1;
        f0 = f1;
        x1 = x_next;
        f1 = f_next;
    }

    debug!(algorithm = ALGORITHM, max_iter, "iteration budget exhausted");
    Err(SecantError::Convergence { max_iter })
}
