//! Prior mass functions over a rate grid
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use std::fmt;

use crate::consts::MASS_SUM_TOLERANCE;
use crate::data::BernoulliSuffStat;
use crate::grid::ParameterGrid;
use crate::impl_display;
use crate::misc::{argmax, pflip, vec_to_string};
use crate::posterior::{GridPosterior, PosteriorError};
use crate::traits::{Entropy, Mean, Mode, Sampleable, Variance};

/// A prior probability mass function over a [`ParameterGrid`].
///
/// Pairs each grid tooth with a non-negative mass; the masses sum to one.
/// Updating the prior with Bernoulli data produces a [`GridPosterior`] over
/// the same grid.
///
/// # Example
///
/// ```
/// use berngrid::prelude::*;
///
/// let grid = ParameterGrid::comb(1000).unwrap();
/// let prior = GridPrior::triangular(grid).unwrap();
///
/// // 3 heads, 1 tail
/// let mut stat = BernoulliSuffStat::new();
/// stat.observe_many(&[true, true, true, false]);
///
/// let posterior = prior.posterior(&stat).unwrap();
/// assert!(posterior.mean().unwrap() > prior.mean().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct GridPrior {
    grid: ParameterGrid,
    masses: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum GridPriorError {
    /// The number of masses does not match the number of grid teeth
    LengthMismatch { n_thetas: usize, n_masses: usize },
    /// One or more of the masses is less than zero
    NegativeMass { ix: usize, mass: f64 },
    /// One or more of the masses is infinite or NaN
    NonFiniteMass { ix: usize, mass: f64 },
    /// The masses do not sum to 1
    MassesDoNotSumToOne { sum: f64 },
    /// Every proportional weight is zero, so there is nothing to normalize
    ZeroTotalWeight,
}

impl GridPrior {
    /// Create a prior from already-normalized masses.
    ///
    /// The masses must sum to one; this constructor never renormalizes. Use
    /// [`GridPrior::from_weights`] for proportional weights.
    pub fn new(
        grid: ParameterGrid,
        masses: Vec<f64>,
    ) -> Result<Self, GridPriorError> {
        validate_weights(&grid, &masses)?;

        let sum: f64 = masses.iter().sum();
        if (sum - 1.0).abs() > MASS_SUM_TOLERANCE {
            return Err(GridPriorError::MassesDoNotSumToOne { sum });
        }

        Ok(GridPrior { grid, masses })
    }

    /// Create a prior from proportional weights, normalizing them to sum to
    /// one.
    ///
    /// # Example
    ///
    /// ```
    /// use berngrid::grid::ParameterGrid;
    /// use berngrid::prior::GridPrior;
    ///
    /// let grid = ParameterGrid::comb(4).unwrap();
    /// let prior = GridPrior::from_weights(grid, &[1.0, 3.0, 3.0, 1.0]).unwrap();
    ///
    /// assert!((prior.masses()[1] - 0.375).abs() < 1e-12);
    /// ```
    pub fn from_weights(
        grid: ParameterGrid,
        weights: &[f64],
    ) -> Result<Self, GridPriorError> {
        validate_weights(&grid, weights)?;

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(GridPriorError::ZeroTotalWeight);
        }

        let masses = weights.iter().map(|&w| w / total).collect();
        Ok(GridPrior { grid, masses })
    }

    /// A flat prior: every tooth carries mass 1/n
    pub fn uniform(grid: ParameterGrid) -> Self {
        let mass = 1.0 / grid.len() as f64;
        let masses = vec![mass; grid.len()];
        GridPrior { grid, masses }
    }

    /// A triangular prior peaked at θ = 1/2.
    ///
    /// Proportional weight `min(θ, 1-θ)` at each tooth. Fails with
    /// [`GridPriorError::ZeroTotalWeight`] when every tooth sits on an
    /// endpoint.
    pub fn triangular(grid: ParameterGrid) -> Result<Self, GridPriorError> {
        let weights: Vec<f64> = grid
            .thetas()
            .iter()
            .map(|&theta| theta.min(1.0 - theta))
            .collect();
        GridPrior::from_weights(grid, &weights)
    }

    /// Creates a prior without checking whether the masses are valid
    #[inline]
    pub fn new_unchecked(grid: ParameterGrid, masses: Vec<f64>) -> Self {
        GridPrior { grid, masses }
    }

    /// Get the number of grid teeth
    #[inline]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Returns `true` if the grid has no teeth
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Get a reference to the grid
    #[inline]
    pub fn grid(&self) -> &ParameterGrid {
        &self.grid
    }

    /// Get a reference to the rates
    #[inline]
    pub fn thetas(&self) -> &[f64] {
        self.grid.thetas()
    }

    /// Get a reference to the masses
    #[inline]
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// The binomial likelihood of `stat` at each tooth
    #[inline]
    pub fn likelihood(&self, stat: &BernoulliSuffStat) -> Vec<f64> {
        self.grid.likelihood(stat)
    }

    /// The marginal probability of the data: `Σ L(θᵢ)·priorᵢ`.
    ///
    /// This is the constant that normalizes the posterior.
    pub fn evidence(&self, stat: &BernoulliSuffStat) -> f64 {
        self.grid
            .likelihood(stat)
            .iter()
            .zip(self.masses.iter())
            .fold(0.0, |acc, (&like, &mass)| like.mul_add(mass, acc))
    }

    /// Update the prior with observed data.
    ///
    /// Computes the likelihood at each tooth, the evidence, and the
    /// normalized posterior masses. Fails with
    /// [`PosteriorError::ZeroEvidence`] when every supported rate assigns the
    /// data probability zero; the posterior is undefined there, and no NaN is
    /// ever produced.
    pub fn posterior(
        &self,
        stat: &BernoulliSuffStat,
    ) -> Result<GridPosterior, PosteriorError> {
        let likelihood = self.grid.likelihood(stat);

        let evidence = likelihood
            .iter()
            .zip(self.masses.iter())
            .fold(0.0, |acc, (&like, &mass)| like.mul_add(mass, acc));

        if evidence <= 0.0 {
            return Err(PosteriorError::ZeroEvidence {
                n: stat.n(),
                k: stat.k(),
            });
        }

        let masses: Vec<f64> = likelihood
            .iter()
            .zip(self.masses.iter())
            .map(|(&like, &mass)| like * mass / evidence)
            .collect();

        Ok(GridPosterior::from_parts_unchecked(
            self.grid.clone(),
            masses,
            likelihood,
            evidence,
        ))
    }
}

impl From<&GridPrior> for String {
    fn from(prior: &GridPrior) -> String {
        let masses = vec_to_string(&prior.masses, 5);
        format!("GridPrior({}; {})", prior.len(), masses)
    }
}

impl_display!(GridPrior);

impl Mean<f64> for GridPrior {
    fn mean(&self) -> Option<f64> {
        let mean = self
            .thetas()
            .iter()
            .zip(self.masses.iter())
            .fold(0.0, |acc, (&theta, &mass)| theta.mul_add(mass, acc));
        Some(mean)
    }
}

impl Mode<f64> for GridPrior {
    fn mode(&self) -> Option<f64> {
        let max_ixs = argmax(&self.masses);
        if max_ixs.len() > 1 {
            None
        } else {
            Some(self.thetas()[max_ixs[0]])
        }
    }
}

impl Variance<f64> for GridPrior {
    fn variance(&self) -> Option<f64> {
        self.mean().map(|mean| {
            self.thetas()
                .iter()
                .zip(self.masses.iter())
                .fold(0.0, |acc, (&theta, &mass)| {
                    (theta - mean).powi(2).mul_add(mass, acc)
                })
        })
    }
}

impl Entropy for GridPrior {
    fn entropy(&self) -> f64 {
        self.masses
            .iter()
            .filter(|&&mass| mass > 0.0)
            .fold(0.0, |acc, &mass| acc - mass * mass.ln())
    }
}

impl Sampleable<f64> for GridPrior {
    fn draw<R: Rng>(&self, mut rng: &mut R) -> f64 {
        let ix = pflip(&self.masses, 1, &mut rng)[0];
        self.thetas()[ix]
    }

    fn sample<R: Rng>(&self, n: usize, mut rng: &mut R) -> Vec<f64> {
        pflip(&self.masses, n, &mut rng)
            .iter()
            .map(|&ix| self.thetas()[ix])
            .collect()
    }
}

impl fmt::Display for GridPriorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { n_thetas, n_masses } => {
                write!(
                    f,
                    "{} grid teeth but {} masses",
                    n_thetas, n_masses
                )
            }
            Self::NegativeMass { ix, mass } => {
                write!(f, "negative mass at index {}: {}", ix, mass)
            }
            Self::NonFiniteMass { ix, mass } => {
                write!(f, "non-finite mass at index {}: {}", ix, mass)
            }
            Self::MassesDoNotSumToOne { sum } => {
                write!(f, "masses sum to {}, should sum to one", sum)
            }
            Self::ZeroTotalWeight => {
                write!(f, "all weights are zero, cannot normalize")
            }
        }
    }
}

impl std::error::Error for GridPriorError {}

// Shape checks shared by `new` and `from_weights`. Length is checked before
// anything touches the values.
fn validate_weights(
    grid: &ParameterGrid,
    weights: &[f64],
) -> Result<(), GridPriorError> {
    if grid.len() != weights.len() {
        return Err(GridPriorError::LengthMismatch {
            n_thetas: grid.len(),
            n_masses: weights.len(),
        });
    }

    weights.iter().enumerate().try_for_each(|(ix, &mass)| {
        if !mass.is_finite() {
            Err(GridPriorError::NonFiniteMass { ix, mass })
        } else if mass < 0.0 {
            Err(GridPriorError::NegativeMass { ix, mass })
        } else {
            Ok(())
        }
    })
}
