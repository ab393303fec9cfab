// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Rect;
use vantage_selection::Selection;

fn bench_replace_with(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/replace_with");

    // `replace_with` de-dups by scanning, so this is quadratic; sizes stay
    // in the range an interactive canvas selection reaches.
    for len in [16usize, 128, 512, 2_048] {
        let keys: Vec<u32> = (0..(len as u32)).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("unique", len), &keys, |b, keys| {
            b.iter_batched(
                Selection::<u32>::new,
                |mut sel| {
                    sel.replace_with(keys.iter().copied());
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });

        let doubled: Vec<u32> = keys.iter().flat_map(|k| [*k, *k]).collect();
        group.bench_with_input(BenchmarkId::new("duplicates", len), &doubled, |b, keys| {
            b.iter_batched(
                Selection::<u32>::new,
                |mut sel| {
                    sel.replace_with(keys.iter().copied());
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_visual_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/visual_bounds");

    for len in [16usize, 128, 1_024] {
        let mut sel = Selection::new();
        sel.replace_with(0..(len as u32));
        // Every eighth object has no bounds (a group with no visible children).
        let bounds: Vec<Option<Rect>> = (0..len)
            .map(|i| {
                let x = (i % 97) as f64 * 13.0;
                let y = (i / 97) as f64 * 7.0;
                (i % 8 != 0).then(|| Rect::new(x, y, x + 10.0, y + 5.0))
            })
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &sel, |b, sel| {
            b.iter(|| black_box(sel.visual_bounds(|k| bounds[*k as usize])));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_replace_with, bench_visual_bounds);
criterion_main!(benches);
