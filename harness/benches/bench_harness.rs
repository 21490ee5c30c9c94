use criterion::{criterion_group, criterion_main, Criterion};
use kzg_blob_vectors::{
    ckzg::{CKzgBackend, CKzgSettings},
    harness::VectorHarness,
    kzg::Kzg,
    mock::{MockBackend, MockSettings},
};
use kzg_blob_vectors_primitives::domain::EvaluationDomain;
use rand::Rng;
use std::time::Duration;

fn bench_harness(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let ckzg: VectorHarness<CKzgBackend> = VectorHarness::new(
        Kzg::new(CKzgSettings::ethereum()),
        EvaluationDomain::mainnet().unwrap(),
    );
    let mock: VectorHarness<MockBackend> = VectorHarness::new(
        Kzg::new(MockSettings::mainnet().unwrap()),
        EvaluationDomain::mainnet().unwrap(),
    );

    c.bench_function("bench_ckzg_commit_fixture", |b| {
        b.iter(|| ckzg.commit_fixture().unwrap());
    });

    c.bench_function("bench_ckzg_open_index", |b| {
        let fixture = ckzg.commit_fixture().unwrap();
        let index = rng.gen_range(0..4096);
        b.iter(|| ckzg.open_index(&fixture, index).unwrap());
    });

    c.bench_function("bench_mock_open_index", |b| {
        let fixture = mock.commit_fixture().unwrap();
        let index = rng.gen_range(0..4096);
        b.iter(|| mock.open_index(&fixture, index).unwrap());
    });
}

fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(5)) // Warm-up time
        .measurement_time(Duration::from_secs(10)) // Measurement time
        .sample_size(10) // Number of samples to take
}

criterion_group!(
    name = benches;
    config = criterion_config();
    targets = bench_harness
);
criterion_main!(benches);
