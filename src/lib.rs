//! Grid-discretized Bayesian inference for a Bernoulli success rate.
//!
//! Replaces a continuous prior on the rate θ with a probability *mass*
//! function over a finite grid of candidate values in [0, 1]. Observing
//! binary data updates the grid masses by Bayes' rule; the marginal
//! probability of the data (the evidence) is the normalizing constant, and a
//! highest-density credible region is found by flooding the posterior from
//! the top until the requested mass is covered.
//!
//! # Design
//!
//! - Construction validates. A [`grid::ParameterGrid`] or a
//!   [`prior::GridPrior`] that exists is well formed, so the update itself
//!   can only fail one way: data that every supported rate assigns zero
//!   probability.
//! - The update is a pure function of the prior and a
//!   [`data::BernoulliSuffStat`]. Nothing is cached or mutated, so values may
//!   be shared freely across threads.
//! - Rendering ([`report`]) only consumes computed results. It never feeds
//!   back into the math.
//!
//! # Example
//!
//! ```
//! use berngrid::prelude::*;
//!
//! // A 100-tooth comb over [0, 1] with a triangular prior on the rate.
//! let grid = ParameterGrid::comb(100).unwrap();
//! let prior = GridPrior::triangular(grid).unwrap();
//!
//! // Three heads, one tail.
//! let mut stat = BernoulliSuffStat::new();
//! stat.observe_many(&[1_u8, 1, 1, 0]);
//!
//! let posterior = prior.posterior(&stat).unwrap();
//! let hdi = posterior.hdi(DEFAULT_CREDIBLE_MASS).unwrap();
//!
//! let total: f64 = posterior.masses().iter().sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! assert!(hdi.mass() >= 0.95);
//! assert!(posterior.mean().unwrap() > 0.5);
//! ```

#[macro_export]
macro_rules! impl_display {
    ($kind: ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}

pub mod consts;
pub mod data;
pub mod grid;
pub mod hdi;
pub mod misc;
pub mod posterior;
pub mod prelude;
pub mod prior;
pub mod report;
pub mod traits;


#[cfg(doctest)]
doc_comment::doctest!("../README.md");
