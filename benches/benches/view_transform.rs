// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use vantage_view::{DisplayQuad, FlipAxes, TransformHistory, ViewTransform};

fn rotated_view() -> ViewTransform {
    let mut view = ViewTransform::new();
    view.set_scale(2.5, -1.0);
    view.set_rotate(0.4);
    view.set_flip(FlipAxes::HORIZONTAL);
    view.set_offset(Vec2::new(-120.0, 48.0));
    view
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_transform/rebuild");

    group.bench_function("set_scale", |b| {
        let mut view = rotated_view();
        let mut zoom = 1.0;
        b.iter(|| {
            zoom = if zoom > 100.0 { 1.0 } else { zoom * 1.01 };
            view.set_scale(black_box(zoom), -1.0);
            black_box(view.d2w());
        });
    });

    group.bench_function("add_rotate", |b| {
        let mut view = rotated_view();
        b.iter(|| {
            view.add_rotate(black_box(0.01));
            black_box(view.w2d());
        });
    });

    group.finish();
}

fn bench_mapping(c: &mut Criterion) {
    let view = rotated_view();
    let points: Vec<Point> = (0..1_024)
        .map(|i| Point::new(f64::from(i % 32) * 10.0, f64::from(i / 32) * 10.0))
        .collect();

    c.bench_function("view_transform/d2w_points_1024", |b| {
        b.iter(|| {
            for p in &points {
                black_box(view.d2w_point(*p));
            }
        });
    });

    c.bench_function("view_transform/display_quad", |b| {
        let window = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        b.iter(|| {
            let quad = DisplayQuad::from_rect(black_box(window), view.w2d());
            black_box(quad.bounds())
        });
    });
}

fn bench_history(c: &mut Criterion) {
    c.bench_function("view_transform/history_log_undo_1024", |b| {
        let view = rotated_view();
        b.iter(|| {
            let mut history = TransformHistory::new();
            for _ in 0..1_024 {
                history.log(view);
            }
            while history.undo().is_ok() {}
            black_box(history.future_len())
        });
    });
}

criterion_group!(benches, bench_rebuild, bench_mapping, bench_history);
criterion_main!(benches);
