//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the default accuracy `epsilon` used by the
//! solvers, and [`BracketCfg`] for the interval bracketer.
//!
//! [`CommonCfg`] : universal fields
//! └ `epsilon` : residual / width / step tolerance
//!
//! [`BracketCfg`] : bracketer fields
//! └ `delta`   : symmetric shrink step per narrowing iteration
//!
//! Solver configs embed [`CommonCfg`] and gain the validated
//! `set_epsilon` setter through [`impl_common_cfg`]. Solver-specific
//! fields (e.g. the secant step size) live on the solver config itself.


use super::errors::ToleranceError;

pub const DEFAULT_EPSILON : f64 = 1e-6;
pub const DEFAULT_DELTA   : f64 = 0.01;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    epsilon: f64,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self { epsilon: DEFAULT_EPSILON }
    }

    // getters
    pub fn epsilon(&self) -> f64 { self.epsilon }

    // setters (internal)
    pub(crate) fn with_epsilon(&mut self, v: f64) { self.epsilon = v; }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}


/// Validates a strictly positive, finite tolerance.
#[inline]
pub(crate) fn validate_epsilon(v: f64) -> Result<f64, ToleranceError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ToleranceError::InvalidEpsilon { got: v });
    }
    Ok(v)
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_epsilon(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                let v = $crate::root_finding::config::validate_epsilon(v)?;
                self.common.with_epsilon(v);
                Ok(self)
            }

            #[inline]
            #[must_use]
            pub fn epsilon(&self) -> f64 { self.common.epsilon() }
        }
    };
}
pub(crate) use impl_common_cfg;


/// Interval bracketer configuration.
///
/// # Defaults
/// └ `delta` = [`DEFAULT_DELTA`] (0.01)
///
/// # Validation
/// └ [`BracketCfg::set_delta`] rejects non-finite or non-positive steps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BracketCfg {
    delta: f64,
}

impl BracketCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_delta(mut self, v: f64) -> Result<Self, ToleranceError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ToleranceError::InvalidDelta { got: v });
        }
        self.delta = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn delta(&self) -> f64 { self.delta }
}

impl Default for BracketCfg {
    fn default() -> Self {
        Self { delta: DEFAULT_DELTA }
    }
}
