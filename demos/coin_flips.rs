use berngrid::prelude::*;
use rand::Rng;

fn main() {
    let mut rng = rand::thread_rng();

    // Generate 1000 coin flips from a coin that will come up heads 70% of
    // the time.
    let flips: Vec<bool> = (0..1000)
        .map(|_| {
            let x: f64 = rng.gen();
            x < 0.7
        })
        .collect();

    // Reduce the flips to their sufficient statistic.
    let mut stat = BernoulliSuffStat::new();
    stat.observe_many(&flips);

    // A 101-tooth comb over [0, 1] with a triangular prior on the rate.
    let grid = ParameterGrid::comb(101).expect("n > 0");
    let prior = GridPrior::triangular(grid).expect("comb avoids endpoints");

    // Update and locate the 95% highest-density region.
    let posterior = prior.posterior(&stat).expect("evidence > 0 off the endpoints");
    let hdi = posterior
        .hdi(DEFAULT_CREDIBLE_MASS)
        .expect("0 < credible mass < 1");

    let opts = ReportOptions {
        max_points: Some(25),
        ..Default::default()
    };
    println!("{}", three_panel(&prior, &stat, &posterior, &hdi, &opts));

    let mean = posterior.mean().expect("non-empty grid");
    println!("Posterior mean: {:.3} (should be close to 0.7)", mean);

    // Propagate grid uncertainty by drawing rates from the posterior.
    let draws: Vec<f64> = posterior.sample(10, &mut rng);
    println!("Posterior draws: {:?}", draws);
}
