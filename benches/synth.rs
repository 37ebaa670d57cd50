//! Synthesis benchmarks.
//!
//! These benchmarks measure the two hot paths of the library: ANF reduction
//! and the exhaustive flip-mask search.
//!
//! Run with:
//! ```bash
//! cargo bench --bench synth
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qrom_rs::anf::Anf;
use qrom_rs::circuit::GateList;
use qrom_rs::search::optimize_flips;
use qrom_rs::synth::{synthesize, Flips};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Helper: Random Pattern Sets
// ============================================================================

/// Generate a random set of n-bit patterns with the given density.
fn random_patterns(n: u32, density: f64, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..(1u64 << n)).filter(|_| rng.gen_bool(density)).collect()
}

// ============================================================================
// Benchmark: ANF reduction
// ============================================================================

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("qrom/reduce");

    for n in [4u32, 6, 8, 10] {
        let patterns = random_patterns(n, 0.5, 42);
        group.throughput(Throughput::Elements(patterns.len() as u64));
        group.bench_with_input(BenchmarkId::new("random", n), &patterns, |b, patterns| {
            b.iter(|| Anf::reduce(patterns.iter().copied(), n));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Exhaustive flip search
// ============================================================================

fn bench_optimize_flips(c: &mut Criterion) {
    let mut group = c.benchmark_group("qrom/optimize_flips");
    group.sample_size(20); // The scan reduces under every mask, so keep samples modest

    for n in [3u32, 4, 5, 6] {
        let patterns = random_patterns(n, 0.5, 42);
        group.throughput(Throughput::Elements(1u64 << n));
        group.bench_with_input(BenchmarkId::new("random", n), &patterns, |b, patterns| {
            b.iter(|| optimize_flips(patterns, n));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Search cost across pattern densities
// ============================================================================

fn bench_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("qrom/density");
    group.sample_size(20);

    let n = 5;
    for density in [0.1, 0.3, 0.5, 0.7, 0.9] {
        let patterns = random_patterns(n, density, 42);
        group.bench_with_input(
            BenchmarkId::new("optimize_flips", format!("{:.0}%", density * 100.0)),
            &patterns,
            |b, patterns| {
                b.iter(|| optimize_flips(patterns, n));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Benchmark: End-to-end synthesis
// ============================================================================

fn bench_synthesize(c: &mut Criterion) {
    let mut group = c.benchmark_group("qrom/synthesize");
    group.sample_size(20);

    for n in [3u32, 4, 5] {
        let patterns = random_patterns(n, 0.5, 42);
        group.bench_with_input(BenchmarkId::new("best", n), &patterns, |b, patterns| {
            b.iter(|| {
                let mut gates = GateList::new();
                synthesize(patterns, n, Flips::Best, &mut gates);
                gates
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduce, bench_optimize_flips, bench_density, bench_synthesize);

criterion_main!(benches);
