//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::consts::DEFAULT_CREDIBLE_MASS;
#[doc(no_inline)]
pub use crate::data::{BernoulliSuffStat, Booleable};
#[doc(no_inline)]
pub use crate::grid::ParameterGrid;
#[doc(no_inline)]
pub use crate::hdi::{hdi_of_masses, HdiInfo};
#[doc(no_inline)]
pub use crate::posterior::GridPosterior;
#[doc(no_inline)]
pub use crate::prior::GridPrior;
#[doc(no_inline)]
pub use crate::report::{three_panel, ReportOptions};
#[doc(no_inline)]
pub use crate::traits::*;
