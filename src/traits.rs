//! Trait seams for grid mass functions and observation data

use rand::Rng;

/// Summarizes observations without retaining them.
///
/// A sufficient statistic carries everything the likelihood needs to know
/// about the data, so observation order never matters.
pub trait SuffStat<X> {
    /// Returns the number of observations
    fn n(&self) -> usize;

    /// Assimilate the datum `x` into the statistic
    fn observe(&mut self, x: &X);

    /// Remove the datum `x` from the statistic
    fn forget(&mut self, x: &X);

    /// Assimilate several observations
    fn observe_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.observe(x));
    }

    /// Forget several observations
    fn forget_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.forget(x));
    }
}

/// Random draws in proportion to probability mass
pub trait Sampleable<X> {
    /// Single draw
    fn draw<R: Rng>(&self, rng: &mut R) -> X;

    /// Multiple draws
    fn sample<R: Rng>(&self, n: usize, mut rng: &mut R) -> Vec<X> {
        (0..n).map(|_| self.draw(&mut rng)).collect()
    }
}

/// The first moment of the mass function
pub trait Mean<M> {
    fn mean(&self) -> Option<M>;
}

/// The grid value carrying the most mass.
///
/// `None` when the maximum is not unique.
pub trait Mode<M> {
    fn mode(&self) -> Option<M>;
}

/// The second central moment of the mass function
pub trait Variance<V> {
    fn variance(&self) -> Option<V>;
}

/// Shannon entropy in nats
pub trait Entropy {
    fn entropy(&self) -> f64;
}
