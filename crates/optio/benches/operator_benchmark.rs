// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use optio::num::CheckedOption;
use optio::{Option, and_then, filter, flat, map, or, unwrap_or, xor, zip};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Generates `n` options, roughly half of them `None`, from a fixed seed.
fn random_options(n: usize, seed: u64) -> Vec<Option<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            if rng.random_bool(0.5) {
                Option::Some(rng.random_range(-1_000_000..1_000_000))
            } else {
                Option::None
            }
        })
        .collect()
}

fn bench_transform_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_pipeline");

    for n in SIZES {
        let options = random_options(n, 0xB011);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(
            BenchmarkId::new("map_filter_unwrap_or", n),
            &options,
            |b, options| {
                b.iter(|| {
                    options
                        .iter()
                        .map(|&option| {
                            let doubled = map(black_box(option), |v| v * 2);
                            unwrap_or(filter(doubled, |v| v % 3 != 0), 0)
                        })
                        .sum::<i64>()
                })
            },
        );
    }
    group.finish();
}

fn bench_logical_combinators(c: &mut Criterion) {
    let mut group = c.benchmark_group("logical_combinators");

    for n in SIZES {
        let left = random_options(n, 0xA);
        let right = random_options(n, 0xB);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(
            BenchmarkId::new("or_xor_zip", n),
            &(left, right),
            |b, (left, right)| {
                b.iter(|| {
                    left.iter()
                        .zip(right.iter())
                        .filter(|&(&x, &y)| {
                            let either = or(black_box(x), y);
                            let exactly_one = xor(x, y);
                            let both = zip(x, y);
                            matches!(either, Option::Some(_))
                                && (matches!(exactly_one, Option::Some(_))
                                    || matches!(both, Option::Some(_)))
                        })
                        .count()
                })
            },
        );
    }
    group.finish();
}

fn bench_checked_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_chain");

    for n in SIZES {
        let options = random_options(n, 0xC);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(
            BenchmarkId::new("and_then_flat", n),
            &options,
            |b, options| {
                b.iter(|| {
                    options
                        .iter()
                        .map(|&option| {
                            let scaled =
                                flat(and_then(black_box(option), |v| v.checked_mul_opt(4_096)));
                            let shifted =
                                flat(and_then(scaled, |v| v.checked_sub_opt(i64::MAX)));
                            unwrap_or(shifted, 0)
                        })
                        .fold(0_i64, i64::wrapping_add)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_transform_pipeline,
    bench_logical_combinators,
    bench_checked_chain
);
criterion_main!(benches);
