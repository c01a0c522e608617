//! Criterion benchmarks for the Metaphone 3 encoder.
//!
//! Measures:
//! - Per-word latency across the four flag combinations
//! - Throughput over a name list with a reused encoder
//! - Overhead of the C boundary against the direct encoder

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use libmetaphone3::ffi::metaphone3;
use libmetaphone3::phonetic::{EncoderOptions, Metaphone3};

// ============================================================================
// Benchmark Fixtures
// ============================================================================

fn sample_names() -> Vec<&'static str> {
    vec![
        "Smith", "Schmidt", "Johnson", "Williams", "Brown", "Jones", "Garcia",
        "Miller", "Davis", "Rodriguez", "Martinez", "Hernandez", "Lopez",
        "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson",
        "Wojciechowski", "Knight", "Aaberg", "Thompson", "Michelangelo",
        "Schwarzenegger", "Tchaikovsky", "Xavier", "Ghislaine", "Beaumont",
    ]
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_single_word(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_word");
    let modes = [
        ("default", EncoderOptions::new(false, false)),
        ("vowels", EncoderOptions::new(true, false)),
        ("exact", EncoderOptions::new(false, true)),
        ("vowels_exact", EncoderOptions::new(true, true)),
    ];

    for word in ["Smith", "Schwarzenegger", "Wojciechowski"] {
        for (name, options) in modes {
            let mut encoder = Metaphone3::from_options(options);
            group.bench_with_input(BenchmarkId::new(name, word), &word, |b, word| {
                b.iter(|| encoder.encode_keys(black_box(word)));
            });
        }
    }
    group.finish();
}

fn bench_name_list(c: &mut Criterion) {
    let names = sample_names();
    let mut group = c.benchmark_group("name_list");
    group.throughput(Throughput::Elements(names.len() as u64));

    group.bench_function("reused_encoder", |b| {
        let mut encoder = Metaphone3::new();
        b.iter(|| {
            for name in &names {
                black_box(encoder.encode_keys(black_box(name)));
            }
        });
    });

    group.bench_function("fresh_encoder", |b| {
        b.iter(|| {
            for name in &names {
                black_box(Metaphone3::new().encode_keys(black_box(name)));
            }
        });
    });
    group.finish();
}

fn bench_c_boundary(c: &mut Criterion) {
    let mut group = c.benchmark_group("c_boundary");

    group.bench_function("direct", |b| {
        let mut encoder = Metaphone3::new();
        b.iter(|| encoder.encode(black_box("Schmidt")));
    });

    group.bench_function("encode_and_free", |b| {
        b.iter(|| metaphone3(black_box("Schmidt"), false, false));
    });
    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(benches, bench_single_word, bench_name_list, bench_c_boundary);

criterion_main!(benches);
