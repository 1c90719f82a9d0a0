// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod interval;
pub mod observe;
pub mod report;
pub mod signs;
pub mod trace;

// algorithms
pub mod bracketing;
pub mod bisection;
pub mod derivative_sign;
pub mod secant;
