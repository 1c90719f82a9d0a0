//! Per-iteration observation for the root-finding solvers.
//!
//! Every solver has an `*_observed` entry point that hands each iteration's
//! [`IterationStep`] to an [`Observer`]. Observers only watch: the solvers
//! return identical results with or without one attached.


/// Receives one [`IterationStep`] per solver iteration.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer.
pub trait Observer {
    /// Observes a single iteration.
    fn observe(&mut self, step: &IterationStep);
}

/// Blanket implementation for observer closures.
impl<F> Observer for F
where
    F: FnMut(&IterationStep),
{
    fn observe(&mut self, step: &IterationStep) {
        self(step)
    }
}

/// A no-op observer.
impl Observer for () {
    fn observe(&mut self, _step: &IterationStep) {}
}


/// One narrowing step of the interval bracketer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShrinkStep {
    /// 1-based narrowing counter.
    pub iter: usize,
    pub a: f64,
    pub b: f64,
    pub fa: f64,
    pub fb: f64,
}

impl ShrinkStep {
    /// f(a) · f(b) at the narrowed bounds.
    #[must_use]
    pub fn product(&self) -> f64 {
        self.fa * self.fb
    }
}


/// One midpoint evaluation of the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionStep {
    /// 1-based iteration counter.
    pub iter: usize,
    pub a: f64,
    pub b: f64,
    /// Midpoint of `[a, b]`.
    pub x: f64,
    pub fa: f64,
    pub fb: f64,
    pub fx: f64,
}

impl BisectionStep {
    /// |a − b| of the bracket the midpoint was taken from.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.a - self.b).abs()
    }
}


/// One secant update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantStep {
    /// 1-based iteration counter.
    pub iter: usize,
    /// x_(i-1)
    pub x_prev: f64,
    /// x_(i)
    pub x_curr: f64,
    /// x_(i+1)
    pub x_next: f64,
    /// f(x_(i+1))
    pub f_next: f64,
}

impl SecantStep {
    /// |x_(i+1) − x_(i)|
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.x_next - self.x_curr).abs()
    }
}


/// Iteration record handed to an [`Observer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationStep {
    Shrink(ShrinkStep),
    Bisection(BisectionStep),
    Secant(SecantStep),
}

impl IterationStep {
    /// Iteration counter of the wrapped step.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            IterationStep::Shrink(s)    => s.iter,
            IterationStep::Bisection(s) => s.iter,
            IterationStep::Secant(s)    => s.iter,
        }
    }
}
