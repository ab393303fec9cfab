// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Rect, Vec2};
use vantage_desktop::{
    Canvas, DesktopConfig, DesktopWidget, Document, DocumentEvent, MessageLevel, ObjectId,
    Publisher, Subscriber, ViewportController,
};

struct Drawing {
    events: Publisher<DocumentEvent>,
}

impl Document for Drawing {
    fn subscribe(&self) -> Subscriber<DocumentEvent> {
        self.events.subscribe()
    }

    fn filename(&self) -> Option<String> {
        None
    }

    fn doc2dt(&self) -> Affine {
        Affine::IDENTITY
    }

    fn visual_bounds(&self) -> Option<Rect> {
        Some(Rect::new(-40.0, -25.0, 960.0, 725.0))
    }

    fn item_visual_bounds(&self, id: &ObjectId) -> Option<Rect> {
        let n: f64 = id.as_str().len() as f64;
        Some(Rect::new(n, n, n + 30.0, n + 20.0))
    }

    fn object_by_id(&self, id: &str) -> Option<ObjectId> {
        Some(ObjectId::new(id))
    }

    fn page_area(&self) -> Rect {
        Rect::new(0.0, 0.0, 793.7, 1122.5)
    }
}

/// Canvas and widget that drop everything they are told.
struct Sink;

impl Canvas for Sink {
    fn window_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 800.0)
    }

    fn set_affine(&mut self, affine: Affine) {
        black_box(affine);
    }

    fn scroll_to(&mut self, offset: Vec2) {
        black_box(offset);
    }

    fn attach_drawing(&mut self, _document: &dyn Document) {}

    fn detach_drawing(&mut self) {}

    fn request_frame(&mut self) {}
}

impl DesktopWidget for Sink {
    fn set_title(&mut self, _title: &str) {}

    fn flash(&mut self, _level: MessageLevel, _message: &str) {}
}

fn desktop() -> ViewportController {
    let mut desktop = ViewportController::new(DesktopConfig::default());
    desktop.init(
        Rc::new(Drawing {
            events: Publisher::new(),
        }),
        Box::new(Sink),
        Box::new(Sink),
    );
    desktop
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation/zoom");

    group.bench_function("wheel_in_out", |b| {
        let mut desktop = desktop();
        let anchor = Point::new(320.0, 240.0);
        b.iter(|| {
            desktop.zoom_in(black_box(anchor));
            desktop.zoom_out(black_box(anchor));
        });
    });

    group.bench_function("zoom_drawing", |b| {
        let mut desktop = desktop();
        b.iter(|| black_box(desktop.zoom_drawing()));
    });

    group.bench_function("quick_zoom_round_trip", |b| {
        let mut desktop = desktop();
        desktop.selection_mut().select_only(ObjectId::new("path12"));
        b.iter(|| {
            desktop.zoom_quick(true);
            desktop.zoom_quick(false);
        });
    });

    group.finish();
}

fn bench_pan_and_rotate(c: &mut Criterion) {
    c.bench_function("navigation/scroll_relative", |b| {
        let mut desktop = desktop();
        b.iter(|| desktop.scroll_relative(black_box(Vec2::new(3.0, -2.0))));
    });

    c.bench_function("navigation/rotate_step", |b| {
        let mut desktop = desktop();
        b.iter(|| desktop.rotate_step(black_box(Point::new(100.0, 100.0)), 1));
    });
}

fn bench_history(c: &mut Criterion) {
    c.bench_function("navigation/undo_redo_64", |b| {
        b.iter_batched(
            || {
                let mut desktop = desktop();
                for i in 0..64 {
                    desktop.zoom_absolute(Point::ZERO, 1.0 + f64::from(i) * 0.1, true);
                }
                desktop
            },
            |mut desktop| {
                while desktop.prev_transform().is_ok() {}
                while desktop.next_transform().is_ok() {}
                black_box(desktop);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_zoom, bench_pan_and_rotate, bench_history);
criterion_main!(benches);
