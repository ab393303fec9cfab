// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording collaborators shared by the integration tests.

#![allow(dead_code, reason = "not every test file uses every helper")]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use kurbo::{Affine, Point, Rect, Vec2};
use vantage_desktop::{
    Canvas, DesktopConfig, DesktopWidget, Document, DocumentEvent, FlipAxes, MessageLevel,
    ObjectId, Publisher, StoredView, Subscriber, ViewportController,
};

pub(crate) const WINDOW: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

pub(crate) fn assert_near(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

pub(crate) fn assert_point_near(a: Point, b: Point) {
    assert!((a - b).hypot() < 1e-6, "{a:?} != {b:?}");
}

pub(crate) struct MockDocument {
    events: Publisher<DocumentEvent>,
    pub(crate) filename: RefCell<Option<String>>,
    pub(crate) doc2dt: Affine,
    pub(crate) page: Rect,
    pub(crate) drawing: RefCell<Option<Rect>>,
    pub(crate) objects: RefCell<HashMap<String, Option<Rect>>>,
    pub(crate) stored_view: RefCell<Option<StoredView>>,
}

impl MockDocument {
    pub(crate) fn new() -> Self {
        Self {
            events: Publisher::new(),
            filename: RefCell::new(None),
            doc2dt: Affine::IDENTITY,
            page: Rect::new(0.0, 0.0, 200.0, 300.0),
            drawing: RefCell::new(None),
            objects: RefCell::new(HashMap::new()),
            stored_view: RefCell::new(None),
        }
    }

    /// A document whose Y axis points up, mapped onto desktop by a flip
    /// about the page.
    pub(crate) fn y_up() -> Self {
        let mut doc = Self::new();
        doc.doc2dt = Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, doc.page.height()]);
        doc
    }

    pub(crate) fn named(name: &str) -> Self {
        let doc = Self::new();
        *doc.filename.borrow_mut() = Some(name.to_string());
        doc
    }

    pub(crate) fn with_object(self, id: &str, bounds: Option<Rect>) -> Self {
        self.objects.borrow_mut().insert(id.to_string(), bounds);
        self
    }

    pub(crate) fn remove_object(&self, id: &str) {
        self.objects.borrow_mut().remove(id);
    }

    pub(crate) fn emit(&self, event: DocumentEvent) {
        self.events.publish(event);
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }
}

impl Document for MockDocument {
    fn subscribe(&self) -> Subscriber<DocumentEvent> {
        self.events.subscribe()
    }

    fn filename(&self) -> Option<String> {
        self.filename.borrow().clone()
    }

    fn doc2dt(&self) -> Affine {
        self.doc2dt
    }

    fn visual_bounds(&self) -> Option<Rect> {
        *self.drawing.borrow()
    }

    fn item_visual_bounds(&self, id: &ObjectId) -> Option<Rect> {
        self.objects.borrow().get(id.as_str()).copied().flatten()
    }

    fn object_by_id(&self, id: &str) -> Option<ObjectId> {
        self.objects
            .borrow()
            .contains_key(id)
            .then(|| ObjectId::new(id))
    }

    fn page_area(&self) -> Rect {
        self.page
    }

    fn stored_view(&self) -> Option<StoredView> {
        *self.stored_view.borrow()
    }
}

/// Everything the canvas and widget were told.
#[derive(Debug, Default)]
pub(crate) struct Log {
    pub(crate) window: Option<Rect>,
    pub(crate) affines: Vec<Affine>,
    pub(crate) scrolls: Vec<Vec2>,
    pub(crate) attached: usize,
    pub(crate) detached: usize,
    pub(crate) frames_requested: usize,
    pub(crate) titles: Vec<String>,
    pub(crate) flashes: Vec<(MessageLevel, String)>,
    pub(crate) readouts: Vec<(f64, f64, FlipAxes)>,
}

pub(crate) type SharedLog = Rc<RefCell<Log>>;

pub(crate) struct MockCanvas(pub(crate) SharedLog);

impl Canvas for MockCanvas {
    fn window_rect(&self) -> Rect {
        self.0.borrow().window.unwrap_or(WINDOW)
    }

    fn set_affine(&mut self, affine: Affine) {
        self.0.borrow_mut().affines.push(affine);
    }

    fn scroll_to(&mut self, offset: Vec2) {
        self.0.borrow_mut().scrolls.push(offset);
    }

    fn attach_drawing(&mut self, _document: &dyn Document) {
        self.0.borrow_mut().attached += 1;
    }

    fn detach_drawing(&mut self) {
        self.0.borrow_mut().detached += 1;
    }

    fn request_frame(&mut self) {
        self.0.borrow_mut().frames_requested += 1;
    }
}

pub(crate) struct MockWidget(pub(crate) SharedLog);

impl DesktopWidget for MockWidget {
    fn set_title(&mut self, title: &str) {
        self.0.borrow_mut().titles.push(title.to_string());
    }

    fn flash(&mut self, level: MessageLevel, message: &str) {
        self.0.borrow_mut().flashes.push((level, message.to_string()));
    }

    fn view_changed(&mut self, zoom: f64, rotation: f64, flip: FlipAxes) {
        self.0.borrow_mut().readouts.push((zoom, rotation, flip));
    }
}

pub(crate) struct Harness {
    pub(crate) desktop: ViewportController,
    pub(crate) document: Rc<MockDocument>,
    pub(crate) log: SharedLog,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self::with_document(MockDocument::new())
    }

    pub(crate) fn with_document(document: MockDocument) -> Self {
        Self::with_config(document, DesktopConfig::default())
    }

    pub(crate) fn with_config(document: MockDocument, config: DesktopConfig) -> Self {
        let document = Rc::new(document);
        let log = SharedLog::default();
        let mut desktop = ViewportController::new(config);
        desktop.init(
            document.clone(),
            Box::new(MockCanvas(log.clone())),
            Box::new(MockWidget(log.clone())),
        );
        Self {
            desktop,
            document,
            log,
        }
    }

    pub(crate) fn window_center(&self) -> Point {
        self.desktop.w2d(WINDOW.center())
    }
}
