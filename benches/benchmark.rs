// Performance benchmarks for SimSal scoring
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use rand::prelude::*;
use simsal::{cdist, FeatureVector, PerturbationMaskSet, SimilarityScorer};

fn generate_random_vector(rng: &mut StdRng, dim: usize) -> FeatureVector {
    let data: Vec<f64> = (0..dim).map(|_| rng.random_range(-1.0..1.0)).collect();
    FeatureVector::new(data)
}

fn generate_random_masks(rng: &mut StdRng, n: usize, side: usize) -> PerturbationMaskSet {
    let grids: Vec<Array2<f64>> = (0..n)
        .map(|_| Array2::from_shape_fn((side, side), |_| if rng.random_bool(0.5) { 1.0 } else { 0.0 }))
        .collect();
    PerturbationMaskSet::from_grids(&grids).unwrap()
}

fn benchmark_cdist(c: &mut Criterion) {
    let mut group = c.benchmark_group("cdist");
    let mut rng = StdRng::seed_from_u64(1);
    let query = generate_random_vector(&mut rng, 512);

    for size in [16, 256, 4096].iter() {
        let batch: Vec<FeatureVector> = (0..*size)
            .map(|_| generate_random_vector(&mut rng, 512))
            .collect();

        for metric in ["euclidean", "cosine"] {
            group.bench_with_input(BenchmarkId::new(metric, size), size, |b, _| {
                b.iter(|| black_box(cdist(metric, black_box(&query), black_box(&batch)).unwrap()));
            });
        }
    }

    group.finish();
}

fn benchmark_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let mut rng = StdRng::seed_from_u64(2);
    let scorer = SimilarityScorer::new("euclidean");

    let ref_1 = generate_random_vector(&mut rng, 512);
    let ref_2 = generate_random_vector(&mut rng, 512);

    for n in [50, 500].iter() {
        let perturbed: Vec<FeatureVector> = (0..*n)
            .map(|_| generate_random_vector(&mut rng, 512))
            .collect();
        let masks = generate_random_masks(&mut rng, *n, 64);

        group.bench_with_input(BenchmarkId::new("simsal_64x64", n), n, |b, _| {
            b.iter(|| {
                let map = scorer
                    .score(black_box(&ref_1), &ref_2, &perturbed, &masks)
                    .unwrap();
                black_box(map);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_cdist, benchmark_score);
criterion_main!(benches);
