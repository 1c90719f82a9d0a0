//! Scalar root finding on a bounded interval.
//!
//! ┌ [`bracket`]          : confirm or narrow an interval until f changes sign
//! ├ [`bisection_solve`]  : binary search on sign over a verified bracket
//! ├ [`secant_solve`]     : secant iteration gated by f' / f'' sign conditions
//! └ [`sign_is_constant`] : the sign-constancy check behind those conditions
//!
//! Every solver also has an `*_observed` variant that reports each iteration
//! to an [`Observer`]; [`TraceTable`] renders them as a table.

pub mod root_finding;

pub use root_finding::bisection::{bisection, bisection_observed, bisection_solve, BisectionCfg, BisectionError};
pub use root_finding::bracketing::{bracket, bracket_observed, BracketError};
pub use root_finding::config::BracketCfg;
pub use root_finding::derivative_sign::sign_is_constant;
pub use root_finding::errors::{RootFindingError, ToleranceError};
pub use root_finding::interval::{Bracket, BracketKind, Interval};
pub use root_finding::observe::{IterationStep, Observer};
pub use root_finding::report::{RootEstimate, Stencil, TerminationReason, ToleranceSatisfied};
pub use root_finding::secant::{
    secant, secant_observed, secant_solve, FunctionBundle, Precondition, SecantCfg, SecantError,
};
pub use root_finding::trace::TraceTable;
