//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported procedures,
//! along with the names used in reports and log fields.


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracketing`] : symmetric interval narrowing until a sign change
/// - [`Algorithm::Bisection`]  : binary search on sign over a verified bracket
/// - [`Algorithm::Secant`]     : precondition-gated secant recurrence
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracketing,
    Bisection,
    Secant,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracketing => "bracketing",
            Algorithm::Bisection  => "bisection",
            Algorithm::Secant     => "secant",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
