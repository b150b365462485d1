//! Performance benchmarks for the field maskers.
//!
//! Every keystroke runs one masker over the full proposed value, so the
//! cost per call bounds input latency in the form.
//!
//! # Run Benchmarks
//!
//! ```sh
//! # Run all masking benchmarks
//! cargo bench --bench masking_bench
//!
//! # Run a specific benchmark group
//! cargo bench --bench masking_bench -- card_number
//!
//! # Compare against a saved baseline
//! cargo bench --bench masking_bench -- --save-baseline before
//! cargo bench --bench masking_bench -- --baseline before
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use paymask_core::Field;
use paymask_input::{Masker, masker_for};
use std::hint::black_box;

/// Benchmark single masker calls across the interesting card lengths.
fn bench_card_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_number");
    group.throughput(Throughput::Elements(1));

    let masker = masker_for(Field::CardNumber);
    let cases = vec![
        ("short", "4111"),
        ("grouping", "4111111111111111"),
        ("collapse", "4111 1111 1111 111"),
        ("rejected_letter", "4111a"),
        ("rejected_length", "4111 1111 1111 11111"),
    ];

    for (name, proposed) in cases {
        group.bench_with_input(BenchmarkId::new("mask", name), &proposed, |b, &proposed| {
            b.iter(|| black_box(masker.mask(black_box(proposed))));
        });
    }

    group.finish();
}

/// Benchmark amount parsing and re-formatting.
fn bench_amount(c: &mut Criterion) {
    let mut group = c.benchmark_group("amount");
    group.throughput(Throughput::Elements(1));

    let masker = masker_for(Field::Amount);
    let cases = vec![
        ("integer", "50"),
        ("leading_zeros", "0000050"),
        ("fraction", "1234.56"),
        ("trailing_point", "1234."),
        ("too_large", "1000000000001"),
    ];

    for (name, proposed) in cases {
        group.bench_with_input(BenchmarkId::new("mask", name), &proposed, |b, &proposed| {
            b.iter(|| black_box(masker.mask(black_box(proposed))));
        });
    }

    group.finish();
}

/// Benchmark a complete form fill, one keystroke at a time.
fn bench_typing_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing_sequence");

    let inputs = [
        (Field::CardNumber, "4111111111111111"),
        (Field::ExpirationDate, "122099"),
        (Field::Cvv, "123"),
        (Field::Amount, "1234.56"),
    ];
    let keystrokes: usize = inputs.iter().map(|(_, keys)| keys.len()).sum();
    group.throughput(Throughput::Elements(keystrokes as u64));

    group.bench_function("full_form", |b| {
        b.iter(|| {
            for (field, keys) in inputs {
                let masker = masker_for(field);
                let mut value = String::new();
                for key in keys.chars() {
                    let proposed = format!("{value}{key}");
                    value = masker.apply(&proposed, &value);
                }
                black_box(value);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_card_number, bench_amount, bench_typing_sequence);
criterion_main!(benches);
