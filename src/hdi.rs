//! Highest-density credible regions over grid masses
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum HdiError {
    /// The requested credible mass is NaN or outside the open interval (0, 1)
    CredibleMassOutOfBounds { credible_mass: f64 },
    /// The mass vector has no entries
    EmptyMasses,
}

/// A highest-density region of a grid mass function.
///
/// The region is the smallest set of grid indices whose total mass reaches
/// the requested credible mass. Because mass comes in discrete lumps, the
/// achieved mass may overshoot the request, and for multimodal mass functions
/// the region may fall into several separate runs of indices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct HdiInfo {
    indices: Vec<usize>,
    mass: f64,
    height: f64,
}

impl HdiInfo {
    /// The included grid indices, in ascending order
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The cumulative mass actually covered by the region
    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// The waterline: the smallest mass among the included indices.
    ///
    /// Every excluded index carries mass at or below this height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The region as maximal runs of consecutive indices.
    ///
    /// A unimodal mass function yields a single run; one run per mode
    /// otherwise.
    pub fn runs(&self) -> Vec<RangeInclusive<usize>> {
        let mut runs = Vec::new();
        let mut iter = self.indices.iter().copied();
        if let Some(first) = iter.next() {
            let mut start = first;
            let mut prev = first;
            for ix in iter {
                if ix != prev + 1 {
                    runs.push(start..=prev);
                    start = ix;
                }
                prev = ix;
            }
            runs.push(start..=prev);
        }
        runs
    }

    /// Returns `true` if the region is a single run of consecutive indices
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.runs().len() == 1
    }

    /// Map each run to the grid values at its ends
    pub fn bounds(&self, thetas: &[f64]) -> Vec<(f64, f64)> {
        self.runs()
            .iter()
            .map(|run| (thetas[*run.start()], thetas[*run.end()]))
            .collect()
    }
}

/// Highest-density region of a normalized mass vector.
///
/// Floods the mass function from the top down: indices are taken in order of
/// descending mass (ties keep their original order) until the running total
/// reaches `credible_mass`. The waterline height is the mass of the last
/// index taken.
///
/// If the vector totals less than `credible_mass` every index is included
/// and the achieved mass is the total.
///
/// # Example
///
/// ```
/// use berngrid::hdi::hdi_of_masses;
///
/// let masses = [0.1, 0.2, 0.4, 0.2, 0.1];
/// let hdi = hdi_of_masses(&masses, 0.75).unwrap();
///
/// assert_eq!(hdi.indices(), &[1, 2, 3]);
/// assert!((hdi.mass() - 0.8).abs() < 1e-12);
/// assert!((hdi.height() - 0.2).abs() < 1e-12);
/// ```
pub fn hdi_of_masses(
    masses: &[f64],
    credible_mass: f64,
) -> Result<HdiInfo, HdiError> {
    if !(credible_mass > 0.0 && credible_mass < 1.0) {
        return Err(HdiError::CredibleMassOutOfBounds { credible_mass });
    }
    if masses.is_empty() {
        return Err(HdiError::EmptyMasses);
    }

    let mut order: Vec<usize> = (0..masses.len()).collect();
    // stable sort so that tied masses keep grid order
    order.sort_by(|&a, &b| {
        masses[b].partial_cmp(&masses[a]).unwrap_or(Ordering::Equal)
    });

    let mut indices = Vec::new();
    let mut mass = 0.0;
    let mut height = 0.0;
    for ix in order {
        mass += masses[ix];
        height = masses[ix];
        indices.push(ix);
        if mass >= credible_mass {
            break;
        }
    }
    indices.sort_unstable();

    Ok(HdiInfo {
        indices,
        mass,
        height,
    })
}

impl fmt::Display for HdiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CredibleMassOutOfBounds { credible_mass } => {
                write!(
                    f,
                    "credible mass must be in (0, 1), got {}",
                    credible_mass
                )
            }
            Self::EmptyMasses => write!(f, "empty mass vector"),
        }
    }
}

impl std::error::Error for HdiError {}
