//! Numerical constants

/// Default probability mass for highest-density credible regions
pub const DEFAULT_CREDIBLE_MASS: f64 = 0.95;

/// Absolute tolerance within which a mass function must sum to one
pub const MASS_SUM_TOLERANCE: f64 = 1e-9;
