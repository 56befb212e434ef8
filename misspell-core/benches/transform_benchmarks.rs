//! Benchmarks for the misspelling pipeline

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use misspell_core::{Misspeller, Mode};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(size_kb: usize) -> String {
    let base_text = "The weather was cheerful though the thick clouds gathered. ";
    let base_len = base_text.len();
    let target_size = size_kb * 1024;
    let repeat_count = target_size / base_len + 1;
    base_text.repeat(repeat_count)[..target_size].to_string()
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");
    let misspeller = Misspeller::new().unwrap();

    for size_kb in [1, 10, 100] {
        let text = generate_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));

        for mode in Mode::ALL {
            group.bench_with_input(
                BenchmarkId::new(mode.as_str(), format!("{}KB", size_kb)),
                &text,
                |b, text| {
                    let mut rng = StdRng::seed_from_u64(42);
                    b.iter(|| misspeller.misspell(black_box(text), mode, &mut rng));
                },
            );
        }
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let misspeller = Misspeller::new().unwrap();
    let texts: Vec<String> = (0..64).map(|_| generate_text(16)).collect();
    group.throughput(Throughput::Bytes(
        texts.iter().map(|t| t.len() as u64).sum(),
    ));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            texts
                .iter()
                .enumerate()
                .map(|(k, text)| {
                    let mut rng = StdRng::seed_from_u64(k as u64);
                    misspeller.misspell(black_box(text), Mode::All, &mut rng)
                })
                .collect::<Vec<_>>()
        });
    });

    group.bench_function("parallel", |b| {
        b.iter(|| misspeller.misspell_batch(black_box(&texts), Mode::All, 0));
    });

    group.finish();
}

criterion_group!(benches, bench_modes, bench_batch);
criterion_main!(benches);
