//! Posterior mass functions produced by a grid update
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use std::fmt;

use crate::grid::ParameterGrid;
use crate::hdi::{hdi_of_masses, HdiError, HdiInfo};
use crate::impl_display;
use crate::misc::{argmax, cumsum, pflip, vec_to_string};
use crate::traits::{Entropy, Mean, Mode, Sampleable, Variance};

/// The posterior mass function over a rate grid.
///
/// Produced by [`GridPrior::posterior`](crate::prior::GridPrior::posterior).
/// Besides the normalized masses it keeps the likelihood vector and the
/// evidence that produced them, since diagnostics want all three.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct GridPosterior {
    grid: ParameterGrid,
    masses: Vec<f64>,
    likelihood: Vec<f64>,
    evidence: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum PosteriorError {
    /// The data has probability zero under every rate on the grid, so the
    /// posterior is undefined
    ZeroEvidence { n: usize, k: usize },
}

impl GridPosterior {
    /// Assemble a posterior from parts without checking that the masses are
    /// normalized or that the lengths agree
    pub fn from_parts_unchecked(
        grid: ParameterGrid,
        masses: Vec<f64>,
        likelihood: Vec<f64>,
        evidence: f64,
    ) -> Self {
        GridPosterior {
            grid,
            masses,
            likelihood,
            evidence,
        }
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

    /// Get a reference to the posterior masses
    #[inline]
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Get a reference to the likelihood vector the update used
    #[inline]
    pub fn likelihood(&self) -> &[f64] {
        &self.likelihood
    }

    /// The marginal probability of the data under the prior
    #[inline]
    pub fn evidence(&self) -> f64 {
        self.evidence
    }

    /// Natural log of the evidence
    #[inline]
    pub fn ln_evidence(&self) -> f64 {
        self.evidence.ln()
    }

    /// Cumulative posterior mass at each tooth
    pub fn cdf(&self) -> Vec<f64> {
        cumsum(&self.masses)
    }

    /// Highest-density region covering `credible_mass` of the posterior.
    ///
    /// # Example
    ///
    /// ```
    /// use berngrid::prelude::*;
    ///
    /// let grid = ParameterGrid::comb(100).unwrap();
    /// let prior = GridPrior::uniform(grid);
    /// let stat = BernoulliSuffStat::from_parts_unchecked(10, 7);
    ///
    /// let posterior = prior.posterior(&stat).unwrap();
    /// let hdi = posterior.hdi(0.9).unwrap();
    ///
    /// assert!(hdi.mass() >= 0.9);
    /// assert!(hdi.is_contiguous());
    /// ```
    pub fn hdi(&self, credible_mass: f64) -> Result<HdiInfo, HdiError> {
        hdi_of_masses(&self.masses, credible_mass)
    }
}

impl From<&GridPosterior> for String {
    fn from(posterior: &GridPosterior) -> String {
        let masses = vec_to_string(&posterior.masses, 5);
        format!("GridPosterior({}; {})", posterior.len(), masses)
    }
}

impl_display!(GridPosterior);

impl Mean<f64> for GridPosterior {
    fn mean(&self) -> Option<f64> {
        let mean = self
            .thetas()
            .iter()
            .zip(self.masses.iter())
            .fold(0.0, |acc, (&theta, &mass)| theta.mul_add(mass, acc));
        Some(mean)
    }
}

impl Mode<f64> for GridPosterior {
    fn mode(&self) -> Option<f64> {
        let max_ixs = argmax(&self.masses);
        if max_ixs.len() > 1 {
            None
        } else {
            Some(self.thetas()[max_ixs[0]])
        }
    }
}

impl Variance<f64> for GridPosterior {
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

impl Entropy for GridPosterior {
    fn entropy(&self) -> f64 {
        self.masses
            .iter()
            .filter(|&&mass| mass > 0.0)
            .fold(0.0, |acc, &mass| acc - mass * mass.ln())
    }
}

impl Sampleable<f64> for GridPosterior {
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

impl fmt::Display for PosteriorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroEvidence { n, k } => {
                write!(
                    f,
                    "data ({} successes in {} trials) has probability zero \
                     at every rate on the grid",
                    k, n
                )
            }
        }
    }
}

impl std::error::Error for PosteriorError {}
