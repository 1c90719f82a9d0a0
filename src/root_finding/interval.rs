//! Search intervals and the brackets classified from them.
//!
//! [`Interval`]    : ordered finite endpoints, `a < b` at construction
//! [`BracketKind`] : what the endpoint evaluations say about roots inside
//! [`Bracket`]     : an interval annotated with its [`BracketKind`]

use super::errors::RootFindingError;
use super::signs::{product_sign, Sign};


/// Ordered finite bounds `[a, b]`.
///
/// Constructed with `a < b`. Narrowing never widens the interval; the
/// terminal shrink of the bracketer may collapse it to `a == b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    /// Validates the endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`RootFindingError::InvalidInterval`] if either endpoint is
    /// non-finite or `a >= b`.
    pub fn new(a: f64, b: f64) -> Result<Self, RootFindingError> {
        if !(a.is_finite() && b.is_finite()) || a >= b {
            return Err(RootFindingError::InvalidInterval { a, b });
        }
        Ok(Self { a, b })
    }

    #[inline] #[must_use] pub fn a(&self) -> f64 { self.a }
    #[inline] #[must_use] pub fn b(&self) -> f64 { self.b }

    /// Returns the bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.a + (self.b - self.a) * 0.5
    }

    /// Moves both endpoints inward by `delta`.
    ///
    /// If the step would cross the endpoints, both collapse onto the
    /// current midpoint so that `a <= b` still holds.
    ///
    /// Returns `false` if neither endpoint moved (`delta` below the
    /// endpoints' resolution).
    pub(crate) fn shrink_symmetric(&mut self, delta: f64) -> bool {
        let before = *self;
        let a = self.a + delta;
        let b = self.b - delta;
        if a > b {
            let mid = self.midpoint();
            self.a = mid;
            self.b = mid;
        } else {
            self.a = a;
            self.b = b;
        }
        *self != before
    }
}


/// Classification of `f(a) * f(b)` for a candidate interval.
///
/// ┌ [`BracketKind::SignChange`]   : f(a)·f(b) < 0, an odd number of roots inside
/// ├ [`BracketKind::EndpointRoot`] : f(a)·f(b) = 0, a root sits on an endpoint
/// └ [`BracketKind::NoSignChange`] : f(a)·f(b) > 0, zero or an even number of roots
///
/// The bracketer only ever returns the first two kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    SignChange,
    EndpointRoot,
    NoSignChange,
}

impl BracketKind {
    /// Classifies a pair of endpoint values.
    #[must_use]
    pub fn classify(fa: f64, fb: f64) -> Self {
        match product_sign(fa, fb) {
            Sign::Negative => BracketKind::SignChange,
            Sign::Zero     => BracketKind::EndpointRoot,
            Sign::Positive => BracketKind::NoSignChange,
        }
    }

    /// Returns `true` for the kinds a solver may be handed.
    #[must_use]
    pub fn is_bracketing(&self) -> bool {
        !matches!(self, BracketKind::NoSignChange)
    }
}


/// An interval annotated with its endpoint evaluations.
///
/// - `interval` : final (possibly narrowed) bounds
/// - `kind`     : [`BracketKind`] of the final bounds
/// - `f_left`   : f(a) at the final bounds
/// - `f_right`  : f(b) at the final bounds
/// - `shrinks`  : number of narrowing steps taken, 0 if the input already bracketed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub interval : Interval,
    pub kind     : BracketKind,
    pub f_left   : f64,
    pub f_right  : f64,
    pub shrinks  : usize,
}

impl Bracket {
    #[inline] #[must_use] pub fn a(&self) -> f64 { self.interval.a() }
    #[inline] #[must_use] pub fn b(&self) -> f64 { self.interval.b() }

    /// Returns the endpoint that is an exact root, if any. Prefers `a`.
    #[must_use]
    pub fn endpoint_root(&self) -> Option<f64> {
        if self.f_left == 0.0 {
            Some(self.a())
        } else if self.f_right == 0.0 {
            Some(self.b())
        } else {
            None
        }
    }
}
