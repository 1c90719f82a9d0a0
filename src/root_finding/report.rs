//! Defines the [`RootEstimate`] struct returned by the bisection
//! and secant solvers.

/// Reasons a solver may terminate with an estimate.
/// - [`TerminationReason::ToleranceReached`]  : a stopping criterion was met
/// - [`TerminationReason::IntervalExhausted`] : bisection ran out of interval width
///   before any midpoint met the residual tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IntervalExhausted,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - All methods
///     - |f(x)| <= epsilon
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - secant
///     - |x_n - x_{n - 1}| <= epsilon
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - bisection best-effort midpoint, with [`TerminationReason::IntervalExhausted`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    StepSizeReached,
    ToleranceNotReached,
}


/// Method-specific data returned by a solver.
/// - [`Stencil::Bracket`] : bisection
///     - `bounds` of the final interval
/// - [`Stencil::Open`]    : secant
///     - `prev` = iterate preceding the root
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { prev: f64 },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { prev }      => std::slice::from_ref(prev),
        }
    }
}


/// Final estimate returned by the solvers.
///
/// [`RootEstimate`]
/// - `root`                : best root estimate
/// - `f_root`              : function value at `root`
/// - `iterations`          : iterations that produced `root`
/// - `evaluations`         : total function evaluations
/// - `converged`           : `true` iff a residual/step tolerance was met;
///                           authoritative over `root`
/// - `termination_reason`  : why the solver stopped ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `stencil`             : final bounds or previous iterate ([`Stencil`])
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootEstimate {
    pub root                : f64,
    pub f_root              : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub converged           : bool,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub stencil             : Stencil,
    pub algorithm_name      : &'static str,
}
