// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};

use kurbo::{Affine, Point, Rect, Vec2};
use vantage_selection::Selection;
use vantage_view::{FlipAxes, TransformHistory, ViewTransform};

use crate::canvas::{Canvas, DesktopWidget, MessageLevel};
use crate::config::DesktopConfig;
use crate::document::{Document, DocumentEvent, ObjectId};
use crate::events::{DesktopEvent, Publisher, Subscriber};
use crate::frame::FrameHook;
use crate::layers::LayerTracker;
use crate::tool::{Tool, ToolRegistry, ToolSlot, ToolSwitch};

const UNTITLED: &str = "Untitled";

/// Whether a document is bound for the first time or replaces another one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DocumentBinding {
    Initial,
    Replace,
}

struct Bindings {
    document: Rc<dyn Document>,
    document_events: Subscriber<DocumentEvent>,
    canvas: Box<dyn Canvas>,
    widget: Box<dyn DesktopWidget>,
}

/// Orchestrates the view of one editing window.
///
/// A controller owns the live [`ViewTransform`], its [`TransformHistory`],
/// the active tool, the selection and the current layer. It holds the
/// document by shared reference (other windows may view the same one) and
/// owns the canvas and widget collaborators it was initialized with.
///
/// All work is synchronous. Document notifications are queued by the
/// document and handled when the host calls
/// [`ViewportController::process_document_events`]; deferred view work runs
/// from [`ViewportController::on_frame`].
///
/// # Panics
///
/// Every operation other than construction, configuration and
/// [`ViewportController::init`] panics if called before `init` or after
/// [`ViewportController::destroy`].
pub struct ViewportController {
    pub(crate) config: DesktopConfig,
    tools: ToolRegistry,
    bound: Option<Bindings>,
    pub(crate) view: ViewTransform,
    pub(crate) history: TransformHistory,
    pub(crate) quick_zoom: Option<ViewTransform>,
    pub(crate) view_from_document: FrameHook,
    tool: ToolSlot,
    selection: Selection<ObjectId>,
    layers: LayerTracker,
    reconstruction_layer: Option<String>,
    events: Publisher<DesktopEvent>,
}

impl ViewportController {
    /// Creates an unbound controller with the built-in tools.
    #[must_use]
    pub fn new(config: DesktopConfig) -> Self {
        Self::with_tools(config, ToolRegistry::with_builtin_tools())
    }

    /// Creates an unbound controller building tools from `tools`.
    #[must_use]
    pub fn with_tools(config: DesktopConfig, tools: ToolRegistry) -> Self {
        Self {
            config,
            tools,
            bound: None,
            view: ViewTransform::new(),
            history: TransformHistory::new(),
            quick_zoom: None,
            view_from_document: FrameHook::new(),
            tool: ToolSlot::NoTool,
            selection: Selection::new(),
            layers: LayerTracker::new(),
            reconstruction_layer: None,
            events: Publisher::new(),
        }
    }

    /// Binds the controller to its document and collaborators.
    ///
    /// Subscribes to the document, builds its drawing on the canvas, sets the
    /// initial view, activates the default tool and seeds the view history.
    ///
    /// # Panics
    ///
    /// Panics if the controller was already initialized.
    pub fn init(
        &mut self,
        document: Rc<dyn Document>,
        canvas: Box<dyn Canvas>,
        widget: Box<dyn DesktopWidget>,
    ) {
        assert!(self.bound.is_none(), "ViewportController::init called twice");
        let document_events = document.subscribe();
        self.bound = Some(Bindings {
            document,
            document_events,
            canvas,
            widget,
        });
        self.attach_document(DocumentBinding::Initial);

        self.view = ViewTransform::new();
        self.view.set_scale(1.0, self.yaxisdir());
        let default_tool = self.config.default_tool.clone();
        self.set_tool(&default_tool);
        self.present_view(true);
        tracing::debug!("viewport controller initialized");
    }

    /// Unbinds the controller: detaches the tool, tears down the drawing and
    /// drops the document subscription.
    pub fn destroy(&mut self) {
        if self.bound.is_none() {
            return;
        }
        self.set_tool("");
        if let Some(mut bindings) = self.bound.take() {
            bindings.canvas.detach_drawing();
        }
        self.quick_zoom = None;
        self.view_from_document = FrameHook::new();
        self.events.publish(DesktopEvent::Destroyed);
        tracing::debug!("viewport controller destroyed");
    }

    /// Returns `true` between [`ViewportController::init`] and
    /// [`ViewportController::destroy`].
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.bound.is_some()
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Mutable configuration. Changes apply to subsequent operations.
    pub fn config_mut(&mut self) -> &mut DesktopConfig {
        &mut self.config
    }

    /// Registers for controller notifications.
    pub fn subscribe(&self) -> Subscriber<DesktopEvent> {
        self.events.subscribe()
    }

    // --- Document -------------------------------------------------------

    /// The bound document.
    #[must_use]
    pub fn document(&self) -> &Rc<dyn Document> {
        &self.bindings().document
    }

    /// Binds another document to this window.
    ///
    /// Clears the selection and the current layer, rebuilds the drawing, re-subscribes to document
    /// notifications, refreshes the title and publishes
    /// [`DesktopEvent::DocumentReplaced`]. The view and its history are kept;
    /// use [`ViewportController::change_document`] for a full switch.
    pub fn set_document(&mut self, document: Rc<dyn Document>) {
        if same_document(self.document(), &document) {
            return;
        }
        self.bind_document(document);
    }

    /// Switches the window to another document.
    ///
    /// This is [`ViewportController::set_document`] plus a fresh instance of
    /// the active tool and a view history reseeded with the current view.
    pub fn change_document(&mut self, document: Rc<dyn Document>) {
        self.selection.clear();
        self.set_document(document);
        let tool = self
            .tool_name()
            .map_or_else(|| self.config.default_tool.clone(), ToString::to_string);
        self.set_tool(&tool);
        self.clear_transform_history();
    }

    fn bind_document(&mut self, document: Rc<dyn Document>) {
        self.selection.clear();
        // Layer ids belong to the old document.
        self.reconstruction_layer = None;
        if self.layers.reset() {
            self.events.publish(DesktopEvent::CurrentLayerChanged(None));
        }
        let document_events = document.subscribe();
        let bindings = self.bindings_mut();
        bindings.canvas.detach_drawing();
        // Replacing the subscriber drops the old document's queue.
        bindings.document_events = document_events;
        bindings.document = document;
        self.attach_document(DocumentBinding::Replace);
    }

    fn attach_document(&mut self, binding: DocumentBinding) {
        let Bindings {
            document,
            canvas,
            widget,
            ..
        } = self.bindings_mut();
        let title = document.filename().unwrap_or_else(|| UNTITLED.to_string());
        canvas.attach_drawing(&**document);
        widget.set_title(&title);

        if binding == DocumentBinding::Replace {
            // The new document may use the other Y-axis convention.
            let ydir = self.yaxisdir();
            if ydir != self.view.y_axis_dir() {
                self.view.set_scale(self.view.zoom(), ydir);
                self.present_view(false);
            }
            self.events.publish(DesktopEvent::DocumentReplaced);
        }
        tracing::debug!(?binding, title = %title, "document bound");
    }

    /// Handles every queued document notification, oldest first.
    pub fn process_document_events(&mut self) {
        loop {
            let Some(event) = self.bindings().document_events.try_recv() else {
                break;
            };
            self.handle_document_event(event);
        }
    }

    /// Handles a single document notification.
    pub fn handle_document_event(&mut self, event: DocumentEvent) {
        match event {
            DocumentEvent::ReconstructionStart => self.on_reconstruction_start(),
            DocumentEvent::ReconstructionFinish => self.on_reconstruction_finish(),
            DocumentEvent::FilenameChanged(name) => {
                self.bindings_mut().widget.set_title(&name);
                self.events.publish(DesktopEvent::TitleChanged(name));
            }
        }
    }

    fn on_reconstruction_start(&mut self) {
        self.reconstruction_layer = self
            .layers
            .current_layer()
            .map(|layer| layer.as_str().to_string());
        self.selection.clear();
        if self.layers.reset() {
            self.events.publish(DesktopEvent::CurrentLayerChanged(None));
        }
        tracing::debug!(layer = ?self.reconstruction_layer, "document reconstruction started");
    }

    fn on_reconstruction_finish(&mut self) {
        let Some(id) = self.reconstruction_layer.take() else {
            return;
        };
        let layer = self.document().object_by_id(&id);
        match layer {
            Some(layer) => self.set_current_layer(layer),
            None => tracing::debug!(%id, "layer vanished during reconstruction"),
        }
    }

    // --- Selection and layers -------------------------------------------

    /// The selection.
    #[must_use]
    pub fn selection(&self) -> &Selection<ObjectId> {
        &self.selection
    }

    /// Mutable selection.
    pub fn selection_mut(&mut self) -> &mut Selection<ObjectId> {
        &mut self.selection
    }

    /// Union of the visual bounds of the selected objects.
    #[must_use]
    pub fn selection_visual_bounds(&self) -> Option<Rect> {
        let document = self.document();
        self.selection
            .visual_bounds(|id| document.item_visual_bounds(id))
    }

    /// The layer new objects go into; `None` is the document root.
    #[must_use]
    pub fn current_layer(&self) -> Option<&ObjectId> {
        self.layers.current_layer()
    }

    /// Makes `layer` the current layer.
    pub fn set_current_layer(&mut self, layer: ObjectId) {
        if self.layers.set_current_layer(layer.clone()) {
            self.events
                .publish(DesktopEvent::CurrentLayerChanged(Some(layer)));
        }
    }

    // --- Tools ----------------------------------------------------------

    /// Replaces the active tool with the one named by `path`.
    ///
    /// `path` is a tool name (`"nodes"`) or path (`"/tools/nodes"`). The old
    /// tool is told it is being switched away from and destroyed before the
    /// new one is built. A tool that is unknown or not ready is replaced by
    /// the default tool. An empty path detaches the tool.
    pub fn set_tool(&mut self, path: &str) -> ToolSwitch {
        assert!(
            self.bound.is_some(),
            "ViewportController used before init() or after destroy()"
        );
        let outcome = self
            .tool
            .switch(path, &self.tools, &self.config.default_tool);
        match &outcome {
            ToolSwitch::FellBack { requested, reason } => {
                tracing::warn!(%requested, %reason, "falling back to the default tool");
            }
            ToolSwitch::Activated | ToolSwitch::Detached => {
                tracing::debug!(tool = ?self.tool_name(), "tool switched");
            }
        }
        self.events
            .publish(DesktopEvent::ToolChanged(self.tool_name().map(ToString::to_string)));
        outcome
    }

    /// The active tool.
    #[must_use]
    pub fn tool(&self) -> Option<&dyn Tool> {
        self.tool.tool()
    }

    /// The active tool, mutably.
    pub fn tool_mut(&mut self) -> Option<&mut dyn Tool> {
        self.tool.tool_mut()
    }

    /// Name of the active tool.
    #[must_use]
    pub fn tool_name(&self) -> Option<&str> {
        self.tool.tool().map(|tool| tool.name())
    }

    /// The tool registry, for registering application tools.
    pub fn tools_mut(&mut self) -> &mut ToolRegistry {
        &mut self.tools
    }

    // --- Coordinate conversion ------------------------------------------

    /// The live view transform.
    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// The view history.
    #[must_use]
    pub fn history(&self) -> &TransformHistory {
        &self.history
    }

    /// Window → desktop.
    #[must_use]
    pub fn w2d(&self, pt: Point) -> Point {
        self.view.w2d_point(pt)
    }

    /// Desktop → window.
    #[must_use]
    pub fn d2w(&self, pt: Point) -> Point {
        self.view.d2w_point(pt)
    }

    /// The document's fixed document → desktop affine.
    #[must_use]
    pub fn doc2dt_affine(&self) -> Affine {
        self.document().doc2dt()
    }

    /// Document → desktop.
    #[must_use]
    pub fn doc2dt(&self, pt: Point) -> Point {
        self.doc2dt_affine() * pt
    }

    /// Desktop → document.
    #[must_use]
    pub fn dt2doc(&self, pt: Point) -> Point {
        self.doc2dt_affine().inverse() * pt
    }

    /// `-1.0` if desktop Y grows upward, `1.0` if it grows downward.
    #[must_use]
    pub fn yaxisdir(&self) -> f64 {
        if self.doc2dt_affine().as_coeffs()[3] < 0.0 {
            -1.0
        } else {
            1.0
        }
    }

    /// Returns `true` if desktop Y grows downward.
    #[must_use]
    pub fn is_yaxisdown(&self) -> bool {
        self.yaxisdir() > 0.0
    }

    // --- Internals shared with navigation -------------------------------

    pub(crate) fn window_rect(&self) -> Rect {
        self.bindings().canvas.window_rect()
    }

    pub(crate) fn request_frame(&mut self) {
        self.bindings_mut().canvas.request_frame();
    }

    pub(crate) fn flash(&mut self, level: MessageLevel, message: &str) {
        self.bindings_mut().widget.flash(level, message);
    }

    /// Pushes the live view to the canvas and widget, optionally logging it.
    pub(crate) fn present_view(&mut self, log: bool) {
        if log {
            self.history.log(self.view);
        }
        let view = self.view;
        let bindings = self.bindings_mut();
        bindings.canvas.set_affine(view.linear());
        bindings.canvas.scroll_to(view.offset());
        bindings
            .widget
            .view_changed(view.zoom(), view.rotation(), view.flip());
        tracing::trace!(
            zoom = view.zoom(),
            rotation = view.rotation(),
            log,
            "view changed"
        );
        self.events.publish(DesktopEvent::ViewChanged);
    }

    fn bindings(&self) -> &Bindings {
        match &self.bound {
            Some(bindings) => bindings,
            None => panic!("ViewportController used before init() or after destroy()"),
        }
    }

    fn bindings_mut(&mut self) -> &mut Bindings {
        match &mut self.bound {
            Some(bindings) => bindings,
            None => panic!("ViewportController used before init() or after destroy()"),
        }
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> DesktopDebugInfo {
        DesktopDebugInfo {
            zoom: self.view.zoom(),
            rotation: self.view.rotation(),
            flip: self.view.flip(),
            offset: self.view.offset(),
            y_axis_dir: self.view.y_axis_dir(),
            past_len: self.history.past_len(),
            future_len: self.history.future_len(),
            quick_zoomed: self.quick_zoom.is_some(),
            tool: self.tool_name().map(ToString::to_string),
            frame_pending: self.view_from_document.is_pending(),
            selected: self.selection.len(),
            current_layer: self.layers.current_layer().cloned(),
        }
    }
}

impl core::fmt::Debug for ViewportController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewportController")
            .field("initialized", &self.bound.is_some())
            .field("view", &self.view)
            .field("tool", &self.tool)
            .field("quick_zoom", &self.quick_zoom)
            .finish_non_exhaustive()
    }
}

fn same_document(a: &Rc<dyn Document>, b: &Rc<dyn Document>) -> bool {
    core::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Debug snapshot of a [`ViewportController`].
#[derive(Clone, Debug, PartialEq)]
pub struct DesktopDebugInfo {
    /// Zoom factor.
    pub zoom: f64,
    /// Rotation in radians.
    pub rotation: f64,
    /// Flip state.
    pub flip: FlipAxes,
    /// Window-space offset.
    pub offset: Vec2,
    /// Desktop Y direction.
    pub y_axis_dir: f64,
    /// Entries in the past stack, current view included.
    pub past_len: usize,
    /// Entries available for redo.
    pub future_len: usize,
    /// Whether quick zoom is engaged.
    pub quick_zoomed: bool,
    /// Active tool name.
    pub tool: Option<String>,
    /// Whether the stored document view is waiting for a frame.
    pub frame_pending: bool,
    /// Number of selected objects.
    pub selected: usize,
    /// Current layer.
    pub current_layer: Option<ObjectId>,
}
