use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mesim_core::factory::ZERO_CASE_ELL_WEIGHTS;
use mesim_core::sampler::{sample, DiscreteDistribution};

fn bench_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("discrete_distribution");

    let uniform =
        DiscreteDistribution::uniform((-9..=9).filter(|&i| i != 0).collect::<Vec<i32>>())
            .unwrap();
    let skewed = DiscreteDistribution::new((1..=9).collect::<Vec<i32>>(), &ZERO_CASE_ELL_WEIGHTS)
        .unwrap();

    group.bench_function("uniform_18", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| uniform.sample(black_box(&mut rng)))
    });

    group.bench_function("skewed_9", |b| {
        let mut rng = StdRng::seed_from_u64(2);
        b.iter(|| skewed.sample(black_box(&mut rng)))
    });

    group.bench_function("pick_worst_case", |b| {
        b.iter(|| uniform.pick(black_box(0.999_999)))
    });

    group.finish();
}

fn bench_one_shot(c: &mut Criterion) {
    let values = [1, 2, 3];
    let weights = [0.2, 0.4, 0.4];

    c.bench_function("sample_one_shot", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        b.iter(|| sample(black_box(&values), black_box(&weights), &mut rng).unwrap())
    });
}

criterion_group!(benches, bench_distribution, bench_one_shot);
criterion_main!(benches);
