use approx::assert_relative_eq;
use berngrid::posterior::PosteriorError;
use berngrid::prelude::*;
use berngrid::prior::GridPriorError;
use berngrid::report::{three_panel, ReportOptions};

const TOL: f64 = 1E-12;

fn five_tooth_prior() -> GridPrior {
    let grid = ParameterGrid::new(vec![0.1, 0.3, 0.5, 0.7, 0.9]).unwrap();
    GridPrior::new(grid, vec![0.1, 0.2, 0.4, 0.2, 0.1]).unwrap()
}

#[test]
fn three_heads_one_tail_end_to_end() {
    let prior = five_tooth_prior();

    let mut stat = BernoulliSuffStat::new();
    stat.observe_many(&[1_u8, 1, 1, 0]);

    let posterior = prior.posterior(&stat).unwrap();

    // likelihood at each tooth is θ³(1-θ)
    posterior
        .thetas()
        .iter()
        .zip(posterior.likelihood().iter())
        .for_each(|(&theta, &like)| {
            assert::close(like, theta.powi(3) * (1.0 - theta), TOL);
        });

    // evidence normalizes the posterior
    let sum: f64 = posterior.masses().iter().sum();
    assert_relative_eq!(sum, 1.0, max_relative = 1e-9);

    // mass moves toward high rates relative to the prior
    assert!(posterior.mean().unwrap() > prior.mean().unwrap());

    // hand-computed: posterior_i ∝ θ_i³(1-θ_i)·prior_i
    let evidence: f64 = posterior
        .thetas()
        .iter()
        .zip(prior.masses().iter())
        .map(|(&t, &m)| t.powi(3) * (1.0 - t) * m)
        .sum();
    assert::close(posterior.evidence(), evidence, TOL);
    assert::close(
        posterior.masses()[2],
        0.5_f64.powi(3) * 0.5 * 0.4 / evidence,
        TOL,
    );
}

#[test]
fn no_data_leaves_the_prior_untouched() {
    let prior = five_tooth_prior();
    let posterior = prior.posterior(&BernoulliSuffStat::new()).unwrap();

    prior
        .masses()
        .iter()
        .zip(posterior.masses().iter())
        .for_each(|(&a, &b)| assert::close(a, b, TOL));
    posterior
        .likelihood()
        .iter()
        .for_each(|&l| assert::close(l, 1.0, TOL));
}

#[test]
fn all_heads_on_a_uniform_prior_shifts_mass_up() {
    let prior = GridPrior::uniform(ParameterGrid::comb(50).unwrap());
    let mut stat = BernoulliSuffStat::new();
    stat.observe_many(&[true, true, true, true, true]);

    let posterior = prior.posterior(&stat).unwrap();
    assert!(posterior.mean().unwrap() > prior.mean().unwrap());
}

#[test]
fn impossible_data_is_a_zero_evidence_error() {
    let grid = ParameterGrid::new(vec![0.0]).unwrap();
    let prior = GridPrior::new(grid, vec![1.0]).unwrap();

    let mut stat = BernoulliSuffStat::new();
    stat.observe(&1_u8);

    let res = prior.posterior(&stat);
    assert_eq!(res, Err(PosteriorError::ZeroEvidence { n: 1, k: 1 }));
}

#[test]
fn mismatched_lengths_are_rejected_up_front() {
    let grid = ParameterGrid::new(vec![0.1, 0.3, 0.5, 0.7, 0.9]).unwrap();
    let res = GridPrior::new(grid, vec![0.25, 0.25, 0.25, 0.25]);
    assert_eq!(
        res,
        Err(GridPriorError::LengthMismatch {
            n_thetas: 5,
            n_masses: 4
        })
    );
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let run = || {
        let prior = GridPrior::triangular(ParameterGrid::comb(500).unwrap())
            .unwrap();
        let stat = BernoulliSuffStat::from_parts_unchecked(23, 17);
        let posterior = prior.posterior(&stat).unwrap();
        let hdi = posterior.hdi(0.9).unwrap();
        (posterior, hdi)
    };

    let (post_a, hdi_a) = run();
    let (post_b, hdi_b) = run();
    assert_eq!(post_a, post_b);
    assert_eq!(hdi_a, hdi_b);
}

#[test]
fn hdi_on_a_dense_comb_brackets_the_rate() {
    let prior = GridPrior::triangular(ParameterGrid::comb(1000).unwrap())
        .unwrap();
    let stat = BernoulliSuffStat::from_parts_unchecked(100, 70);

    let posterior = prior.posterior(&stat).unwrap();
    let hdi = posterior.hdi(0.95).unwrap();

    assert!(hdi.mass() >= 0.95);
    assert!(hdi.is_contiguous());

    let bounds = hdi.bounds(posterior.thetas());
    let (lo, hi) = bounds[0];
    assert!(lo < 0.7 && 0.7 < hi);
    // a dense posterior over 100 observations is tight
    assert!(hi - lo < 0.25);
}

#[test]
fn report_renders_the_whole_story() {
    let prior = five_tooth_prior();
    let mut stat = BernoulliSuffStat::new();
    stat.observe_many(&[1_u8, 1, 1, 0]);

    let posterior = prior.posterior(&stat).unwrap();
    let hdi = posterior.hdi(0.95).unwrap();

    let text = three_panel(
        &prior,
        &stat,
        &posterior,
        &hdi,
        &ReportOptions::default(),
    );

    assert!(text.contains("Prior"));
    assert!(text.contains("Likelihood"));
    assert!(text.contains("Posterior"));
    assert!(text.contains("data: z=3, N=4"));
    assert!(text.contains("% HDI:"));
}
