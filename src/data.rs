//! Observation data for Bernoulli trials
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::traits::SuffStat;

/// A datum that converts to a binary outcome.
///
/// Implemented for `bool` and for the primitive integer types, where `0` is
/// failure and `1` is success. Any other integer value is not a Bernoulli
/// observation.
pub trait Booleable: Sized + Copy {
    /// Convert into a bool if possible
    fn try_into_bool(self) -> Option<bool>;

    /// Convert into a bool. Panics if the conversion fails.
    fn into_bool(self) -> bool {
        self.try_into_bool()
            .expect("cannot convert datum into bool")
    }
}

impl Booleable for bool {
    #[inline]
    fn try_into_bool(self) -> Option<bool> {
        Some(self)
    }
}

macro_rules! impl_int_booleable {
    ($($kind: ty),+) => {
        $(impl Booleable for $kind {
            #[inline]
            fn try_into_bool(self) -> Option<bool> {
                match self {
                    0 => Some(false),
                    1 => Some(true),
                    _ => None,
                }
            }
        })+
    };
}

impl_int_booleable!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Sufficient statistic for a sequence of Bernoulli trials.
///
/// Carries the number of trials, n, and the number of successes, k. These two
/// counts fully determine the binomial likelihood over a rate grid.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct BernoulliSuffStat {
    n: usize,
    k: usize,
}

impl BernoulliSuffStat {
    /// Create an empty statistic
    #[inline]
    pub fn new() -> Self {
        BernoulliSuffStat { n: 0, k: 0 }
    }

    /// Create a statistic from counts without checking that `k <= n`
    #[inline]
    pub fn from_parts_unchecked(n: usize, k: usize) -> Self {
        BernoulliSuffStat { n, k }
    }

    /// Get the total number of trials, n.
    ///
    /// # Example
    ///
    /// ```
    /// # use berngrid::data::BernoulliSuffStat;
    /// # use berngrid::traits::SuffStat;
    /// let mut stat = BernoulliSuffStat::new();
    ///
    /// stat.observe(&true);
    /// stat.observe(&false);
    ///
    /// assert_eq!(stat.n(), 2);
    /// ```
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Get the number of successful trials, k.
    ///
    /// # Example
    ///
    /// ```
    /// # use berngrid::data::BernoulliSuffStat;
    /// # use berngrid::traits::SuffStat;
    /// let mut stat = BernoulliSuffStat::new();
    ///
    /// stat.observe(&true);
    /// stat.observe(&false);
    ///
    /// assert_eq!(stat.k(), 1);
    /// ```
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Get the number of failed trials, n - k
    #[inline]
    pub fn failures(&self) -> usize {
        self.n - self.k
    }
}

impl Default for BernoulliSuffStat {
    fn default() -> Self {
        BernoulliSuffStat::new()
    }
}

impl<X: Booleable> SuffStat<X> for BernoulliSuffStat {
    fn n(&self) -> usize {
        self.n
    }

    fn observe(&mut self, x: &X) {
        self.n += 1;
        if x.into_bool() {
            self.k += 1
        }
    }

    fn forget(&mut self, x: &X) {
        self.n -= 1;
        if x.into_bool() {
            self.k -= 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_should_be_empty() {
        let stat = BernoulliSuffStat::new();
        assert_eq!(stat.n, 0);
        assert_eq!(stat.k, 0);
    }

    #[test]
    fn from_parts_unchecked() {
        let stat = BernoulliSuffStat::from_parts_unchecked(10, 3);
        assert_eq!(stat.n(), 10);
        assert_eq!(stat.k(), 3);
        assert_eq!(stat.failures(), 7);
    }

    #[test]
    fn observe_1() {
        let mut stat = BernoulliSuffStat::new();
        stat.observe(&1_u8);
        assert_eq!(stat.n, 1);
        assert_eq!(stat.k, 1);
    }

    #[test]
    fn observe_true() {
        let mut stat = BernoulliSuffStat::new();
        stat.observe(&true);
        assert_eq!(stat.n, 1);
        assert_eq!(stat.k, 1);
    }

    #[test]
    fn observe_0() {
        let mut stat = BernoulliSuffStat::new();
        stat.observe(&0_i8);
        assert_eq!(stat.n, 1);
        assert_eq!(stat.k, 0);
    }

    #[test]
    fn observe_false() {
        let mut stat = BernoulliSuffStat::new();
        stat.observe(&false);
        assert_eq!(stat.n, 1);
        assert_eq!(stat.k, 0);
    }

    #[test]
    fn observe_then_forget_is_identity() {
        let mut stat = BernoulliSuffStat::new();
        stat.observe_many(&[1_u8, 1, 0]);
        stat.forget_many(&[1_u8, 0]);
        assert_eq!(stat.n(), 1);
        assert_eq!(stat.k(), 1);
    }

    #[test]
    fn try_into_bool_rejects_out_of_range_ints() {
        assert_eq!(2_u8.try_into_bool(), None);
        assert_eq!((-1_i32).try_into_bool(), None);
        assert_eq!(1_u64.try_into_bool(), Some(true));
        assert_eq!(0_usize.try_into_bool(), Some(false));
    }
}
