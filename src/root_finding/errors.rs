//! Root-finding error types shared by every solver.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ invalid interval (a >= b or non-finite endpoints)
//! │   ├ non-finite function evaluation
//! │   └ invalid global parameters (e.g. max_iter)
//! │
//! └ [`ToleranceError`]   : configuration errors
//!     ├ invalid `epsilon`
//!     ├ invalid bracketing shrink step `delta`
//!     └ invalid secant step size `h`
//!
//! Solver-specific failures live next to each solver
//! (e.g. [`BisectionError`](super::bisection::BisectionError)) and wrap
//! these via `#[from]`.


use thiserror::Error;


/// Root-finding runtime errors.
///
/// ┌ Invalid interval: `a >= b`, or an endpoint is NaN/inf
/// ├ Non-finite function evaluation
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootFindingError {
    #[error("invalid interval: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidInterval { a: f64, b: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },
}


/// Configuration errors for tolerances and step parameters.
///
/// ┌ `epsilon`   must be finite and > 0
/// ├ `delta`     must be finite and > 0
/// └ `step_size` must be finite and > 0
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ToleranceError {
    #[error("invalid `epsilon` tolerance: must be finite and > 0. got {got}")]
    InvalidEpsilon  { got: f64 },

    #[error("invalid `delta` shrink step: must be finite and > 0. got {got}")]
    InvalidDelta    { got: f64 },

    #[error("invalid `step_size`: must be finite and > 0. got {got}")]
    InvalidStepSize { got: f64 },
}
