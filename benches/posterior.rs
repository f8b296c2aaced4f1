use criterion::BatchSize;
use criterion::Criterion;
use criterion::{black_box, criterion_group, criterion_main};

use berngrid::prelude::*;

fn bench_posterior_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid posterior update");
    for n in [10, 100, 1000, 10_000] {
        let prior = GridPrior::uniform(ParameterGrid::comb(n).unwrap());
        let stat = BernoulliSuffStat::from_parts_unchecked(40, 30);
        group.bench_function(&format!("n = {}", n), |b| {
            b.iter(|| black_box(prior.posterior(&stat).unwrap()))
        });
    }
}

fn bench_hdi(c: &mut Criterion) {
    let mut group = c.benchmark_group("hdi");
    for n in [10, 100, 1000, 10_000] {
        let prior = GridPrior::uniform(ParameterGrid::comb(n).unwrap());
        let stat = BernoulliSuffStat::from_parts_unchecked(40, 30);
        let posterior = prior.posterior(&stat).unwrap();
        group.bench_function(&format!("n = {}", n), |b| {
            b.iter(|| black_box(posterior.hdi(0.95).unwrap()))
        });
    }
}

fn bench_posterior_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("posterior draw");
    for n in [10, 1000] {
        let prior = GridPrior::uniform(ParameterGrid::comb(n).unwrap());
        let stat = BernoulliSuffStat::from_parts_unchecked(40, 30);
        let posterior = prior.posterior(&stat).unwrap();
        group.bench_function(&format!("n = {}", n), move |b| {
            b.iter_batched_ref(
                rand::thread_rng,
                |mut rng| {
                    let _x: f64 = posterior.draw(&mut rng);
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_posterior_update, bench_hdi, bench_posterior_draw);
criterion_main!(benches);
