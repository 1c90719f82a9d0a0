//! Tabular trace of solver iterations.
//!
//! [`TraceTable`] is an [`Observer`] that records every [`IterationStep`]
//! and renders them through `Display` as boxed grid tables, one table per
//! contiguous run of steps from the same solver.
//!
//! Columns
//! ├ bracketing : a, b, f(a), f(b), f(a)*f(b)
//! ├ bisection  : a, b, x, f(a), f(b), f(x), |a-b|
//! └ secant     : x_(i-1), x_(i), x_(i+1), f(x_(i+1)), |x_(i+1) - x_(i)|

use std::fmt;

use super::observe::{IterationStep, Observer};

const SHRINK_HEADERS: [&str; 5] = ["a", "b", "f(a)", "f(b)", "f(a)*f(b)"];
const BISECTION_HEADERS: [&str; 7] = ["a", "b", "x", "f(a)", "f(b)", "f(x)", "|a-b|"];
const SECANT_HEADERS: [&str; 5] =
    ["x_(i-1)", "x_(i)", "x_(i+1)", "f(x_(i+1))", "|x_(i+1) - x_(i)|"];


/// Records solver iterations for later rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceTable {
    steps: Vec<IterationStep>,
}

impl TraceTable {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Recorded steps, in arrival order.
    #[must_use]
    pub fn steps(&self) -> &[IterationStep] { &self.steps }

    #[must_use]
    pub fn len(&self) -> usize { self.steps.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }

    pub fn clear(&mut self) { self.steps.clear(); }
}

impl Observer for TraceTable {
    fn observe(&mut self, step: &IterationStep) {
        self.steps.push(*step);
    }
}


fn headers(step: &IterationStep) -> &'static [&'static str] {
    match step {
        IterationStep::Shrink(_)    => &SHRINK_HEADERS,
        IterationStep::Bisection(_) => &BISECTION_HEADERS,
        IterationStep::Secant(_)    => &SECANT_HEADERS,
    }
}

fn cells(step: &IterationStep) -> Vec<String> {
    let values: Vec<f64> = match step {
        IterationStep::Shrink(s)    => vec![s.a, s.b, s.fa, s.fb, s.product()],
        IterationStep::Bisection(s) => vec![s.a, s.b, s.x, s.fa, s.fb, s.fx, s.width()],
        IterationStep::Secant(s)    => vec![s.x_prev, s.x_curr, s.x_next, s.f_next, s.step()],
    };
    values.into_iter().map(|v| v.to_string()).collect()
}

fn same_kind(lhs: &IterationStep, rhs: &IterationStep) -> bool {
    std::mem::discriminant(lhs) == std::mem::discriminant(rhs)
}

fn rule(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    (left, fill, mid, right): (char, char, char, char),
) -> fmt::Result {
    write!(f, "{left}")?;
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            write!(f, "{mid}")?;
        }
        for _ in 0..w + 2 {
            write!(f, "{fill}")?;
        }
    }
    writeln!(f, "{right}")
}

fn row<S: AsRef<str>>(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[S]) -> fmt::Result {
    write!(f, "│")?;
    for (cell, w) in cells.iter().zip(widths) {
        write!(f, " {:<w$} │", cell.as_ref(), w = *w)?;
    }
    writeln!(f)
}

fn grid(f: &mut fmt::Formatter<'_>, steps: &[IterationStep]) -> fmt::Result {
    let Some(first) = steps.first() else { return Ok(()) };
    let head = headers(first);
    let body: Vec<Vec<String>> = steps.iter().map(cells).collect();

    let mut widths: Vec<usize> = head.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    rule(f, &widths, ('╒', '═', '╤', '╕'))?;
    row(f, &widths, head)?;
    rule(f, &widths, ('╞', '═', '╪', '╡'))?;
    for (i, cells) in body.iter().enumerate() {
        if i > 0 {
            rule(f, &widths, ('├', '─', '┼', '┤'))?;
        }
        row(f, &widths, cells.as_slice())?;
    }
    rule(f, &widths, ('╘', '═', '╧', '╛'))
}

impl fmt::Display for TraceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut start = 0;
        while start < self.steps.len() {
            let first = &self.steps[start];
            let run = self.steps[start..]
                .iter()
                .take_while(|s| same_kind(first, s))
                .count();
            if start > 0 {
                writeln!(f)?;
            }
            grid(f, &self.steps[start..start + run])?;
            start += run;
        }
        Ok(())
    }
}
