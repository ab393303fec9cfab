// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editing tools and the lifecycle of the active one.
//!
//! Tools are trait objects built by name from a [`ToolRegistry`]. Queries
//! only some tools can answer (the node tool's selected nodes) are optional
//! capability methods on [`Tool`] that default to `None`, so callers never
//! need to know a tool's concrete type.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

/// An editing tool.
pub trait Tool {
    /// Registry name of the tool.
    fn name(&self) -> &str;

    /// Whether the tool could be set up. A tool that is not ready right after
    /// construction is replaced by the default tool.
    fn is_ready(&self) -> bool {
        true
    }

    /// Called right before the tool is destroyed in favor of `next` (an empty
    /// name when the tool is detached). In-progress gestures end here.
    fn switching_away(&mut self, next: &str) {
        let _ = next;
    }

    /// Node-level sub-selection, for tools that edit path nodes.
    fn node_selection(&self) -> Option<&NodeSelection> {
        None
    }

    /// Mutable access to the node-level sub-selection.
    fn node_selection_mut(&mut self) -> Option<&mut NodeSelection> {
        None
    }
}

impl fmt::Debug for dyn Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool").field("name", &self.name()).finish()
    }
}

/// Selected path nodes, in desktop coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeSelection {
    points: Vec<Point>,
}

impl NodeSelection {
    /// Creates an empty node selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selected nodes.
    pub fn set_points(&mut self, points: impl IntoIterator<Item = Point>) {
        self.points.clear();
        self.points.extend(points);
    }

    /// Deselects all nodes.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Selected node positions.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Bounding box of the selected nodes.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let (first, rest) = self.points.split_first()?;
        Some(
            rest.iter()
                .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p)),
        )
    }
}

/// Object selection and transformation.
#[derive(Debug, Default)]
pub struct SelectTool;

impl Tool for SelectTool {
    fn name(&self) -> &str {
        "select"
    }
}

/// Path node editing.
#[derive(Debug, Default)]
pub struct NodeTool {
    nodes: NodeSelection,
}

impl Tool for NodeTool {
    fn name(&self) -> &str {
        "nodes"
    }

    fn switching_away(&mut self, _next: &str) {
        self.nodes.clear();
    }

    fn node_selection(&self) -> Option<&NodeSelection> {
        Some(&self.nodes)
    }

    fn node_selection_mut(&mut self) -> Option<&mut NodeSelection> {
        Some(&mut self.nodes)
    }
}

/// Kinds of shape drawn by [`ShapeTool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Rectangles.
    Rect,
    /// Circles, ellipses and arcs.
    Arc,
    /// Stars and polygons.
    Star,
    /// Spirals.
    Spiral,
    /// Bezier paths.
    Pen,
}

impl ShapeKind {
    fn name(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Arc => "arc",
            Self::Star => "star",
            Self::Spiral => "spiral",
            Self::Pen => "pen",
        }
    }
}

/// Draws new shapes of one kind.
#[derive(Debug)]
pub struct ShapeTool {
    kind: ShapeKind,
}

impl ShapeTool {
    /// Creates a tool drawing `kind`.
    #[must_use]
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }

    /// The shape kind this tool draws.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }
}

impl Tool for ShapeTool {
    fn name(&self) -> &str {
        self.kind.name()
    }
}

/// Why a requested tool was not activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolError {
    /// The tool was built but reported itself not ready.
    NotReady,
    /// No tool is registered under the requested name.
    Unknown,
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotReady => "tool is not ready",
            Self::Unknown => "no such tool",
        })
    }
}

impl core::error::Error for ToolError {}

/// Outcome of [`ViewportController::set_tool`](crate::ViewportController::set_tool).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolSwitch {
    /// The requested tool is active.
    Activated,
    /// The requested tool could not be used; the default tool is active.
    FellBack {
        /// Normalized name that was asked for.
        requested: String,
        /// Why it was rejected.
        reason: ToolError,
    },
    /// No tool is active any more.
    Detached,
}

type ToolFactory = Box<dyn Fn() -> Box<dyn Tool>>;

/// Name → constructor table for tools.
pub struct ToolRegistry {
    factories: HashMap<String, ToolFactory>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry holding the built-in tools.
    #[must_use]
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register("select", || Box::new(SelectTool));
        registry.register("nodes", || Box::new(NodeTool::default()));
        for kind in [
            ShapeKind::Rect,
            ShapeKind::Arc,
            ShapeKind::Star,
            ShapeKind::Spiral,
            ShapeKind::Pen,
        ] {
            registry.register(kind.name(), move || Box::new(ShapeTool::new(kind)));
        }
        registry
    }

    /// Registers (or replaces) the constructor for `name`.
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Tool> + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Returns `true` if a tool is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Builds the tool registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn Tool>, ToolError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or(ToolError::Unknown)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_builtin_tools()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ToolRegistry").field("tools", &names).finish()
    }
}

/// Reduces a tool path such as `/tools/shapes/rect` to its name (`rect`).
#[must_use]
pub fn tool_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Lifecycle of the active tool.
///
/// `NoTool` before the first activation, `Active` afterwards and `Detached`
/// once the controller drops its tool during teardown.
#[derive(Debug, Default)]
pub(crate) enum ToolSlot {
    #[default]
    NoTool,
    Active(Box<dyn Tool>),
    Detached,
}

impl ToolSlot {
    pub(crate) fn tool(&self) -> Option<&dyn Tool> {
        match self {
            Self::Active(tool) => Some(tool.as_ref()),
            Self::NoTool | Self::Detached => None,
        }
    }

    pub(crate) fn tool_mut(&mut self) -> Option<&mut dyn Tool> {
        match self {
            Self::Active(tool) => Some(tool.as_mut()),
            Self::NoTool | Self::Detached => None,
        }
    }

    /// Replaces the active tool with the one registered under `request`.
    ///
    /// Every switch, including re-selecting the active tool, runs the same
    /// steps: notify the old tool, destroy it, build the new one, check
    /// readiness, fall back to `default` if needed.
    pub(crate) fn switch(
        &mut self,
        request: &str,
        registry: &ToolRegistry,
        default: &str,
    ) -> ToolSwitch {
        let name = tool_name(request);
        if let Self::Active(old) = self {
            old.switching_away(name);
        }
        // The old tool is dropped before the new one is built.
        *self = Self::NoTool;

        if name.is_empty() {
            *self = Self::Detached;
            return ToolSwitch::Detached;
        }

        let reason = match registry.create(name) {
            Ok(tool) if tool.is_ready() => {
                *self = Self::Active(tool);
                return ToolSwitch::Activated;
            }
            Ok(rejected) => {
                drop(rejected);
                ToolError::NotReady
            }
            Err(err) => err,
        };

        let fallback = registry
            .create(tool_name(default))
            .ok()
            .filter(|tool| tool.is_ready())
            .unwrap_or_else(|| Box::new(SelectTool));
        *self = Self::Active(fallback);
        ToolSwitch::FellBack {
            requested: name.to_string(),
            reason,
        }
    }
}
