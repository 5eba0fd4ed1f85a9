//! Criterion benchmarks for the bounded heap
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_ops
//!
//! # Only the top-k workloads
//! cargo bench --bench heap_ops -- 'top_k/'
//! ```
//!
//! `fill_drain` pushes `n` values into a heap of capacity `n` and pops them
//! all back out. `top_k` streams 2^16 values through a `TopK` selector and is
//! compared against sorting the whole input.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_bounded_heaps::bounded_binary::BoundedMinHeap;
use rust_bounded_heaps::top_k::top_k;

const STREAM_LEN: u64 = 1 << 16;

/// Cheap deterministic scrambling so inputs are not already ordered
fn scrambled(n: u64) -> Vec<u64> {
    (0..n)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 17)
        .collect()
}

fn bench_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_drain");
    for rank in [8u32, 12, 16] {
        let n = 1u64 << rank;
        let values = scrambled(n);
        group.bench_with_input(BenchmarkId::new("bounded_min_heap", format!("2^{rank}")), &values, |b, values| {
            b.iter(|| {
                let mut heap = BoundedMinHeap::new(values.len());
                for &v in values {
                    let pushed = heap.push(v);
                    debug_assert!(pushed);
                }
                let mut sum = 0u64;
                while let Ok(v) = heap.pop() {
                    sum = sum.wrapping_add(v);
                }
                black_box(sum)
            });
        });
        group.bench_with_input(BenchmarkId::new("std_binary_heap", format!("2^{rank}")), &values, |b, values| {
            b.iter(|| {
                let mut heap = std::collections::BinaryHeap::with_capacity(values.len());
                for &v in values {
                    heap.push(std::cmp::Reverse(v));
                }
                let mut sum = 0u64;
                while let Some(std::cmp::Reverse(v)) = heap.pop() {
                    sum = sum.wrapping_add(v);
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_top_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k");
    let values = scrambled(STREAM_LEN);
    for k in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("selector", k), &k, |b, &k| {
            b.iter(|| black_box(top_k(values.iter().copied(), k)));
        });
        group.bench_with_input(BenchmarkId::new("full_sort", k), &k, |b, &k| {
            b.iter(|| {
                let mut sorted = values.clone();
                sorted.sort_unstable_by(|a, b| b.cmp(a));
                sorted.truncate(k);
                black_box(sorted)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fill_drain, bench_top_k);
criterion_main!(benches);
