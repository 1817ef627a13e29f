use blockforge::graph::InteractionGraph;
use blockforge::scorer::{contributions, fitness};
use blockforge::{Instance, Layout};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn setup_instance(n: usize) -> Instance {
    // Deterministic sparse call pattern: each block calls its next two
    // neighbours and one far block.
    let mut calls = vec![vec![0.0; n]; n];
    for i in 0..n {
        calls[i][(i + 1) % n] = 100.0 + i as f64;
        calls[i][(i + 2) % n] = 10.0;
        calls[i][(i * 7 + 3) % n] += 1.0;
    }
    let sizes = (0..n).map(|i| 1.0 + (i % 13) as f64).collect();
    Instance::new(calls, sizes).expect("Failed to build instance")
}

fn criterion_benchmark(c: &mut Criterion) {
    let inst = setup_instance(200);
    let layout = Layout::new((0..200).rev().collect(), 200).unwrap();

    c.bench_function("fitness (n=200)", |b| {
        b.iter(|| fitness(black_box(&inst), black_box(&layout)))
    });

    c.bench_function("contributions (n=200)", |b| {
        b.iter(|| contributions(black_box(&inst), black_box(&layout)))
    });

    c.bench_function("graph (n=200)", |b| {
        b.iter(|| InteractionGraph::build(black_box(&inst), black_box(&layout)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
