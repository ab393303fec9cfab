// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tool lifecycle of `ViewportController`.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{Harness, MockCanvas, MockDocument, MockWidget, SharedLog};
use vantage_desktop::{
    DesktopConfig, DesktopEvent, Tool, ToolError, ToolRegistry, ToolSwitch, ViewportController,
};

type Journal = Rc<RefCell<Vec<String>>>;

/// Records its construction and teardown into a shared journal.
struct Recording {
    journal: Journal,
}

impl Tool for Recording {
    fn name(&self) -> &str {
        "recording"
    }

    fn switching_away(&mut self, next: &str) {
        self.journal.borrow_mut().push(format!("away:{next}"));
    }
}

impl Drop for Recording {
    fn drop(&mut self) {
        self.journal.borrow_mut().push("drop".to_string());
    }
}

struct NotReady;

impl Tool for NotReady {
    fn name(&self) -> &str {
        "not-ready"
    }

    fn is_ready(&self) -> bool {
        false
    }
}

fn harness_with_recording() -> (Harness, Journal) {
    let mut h = Harness::new();
    let journal = Journal::default();
    let shared = journal.clone();
    h.desktop.tools_mut().register("recording", move || {
        shared.borrow_mut().push("new".to_string());
        Box::new(Recording {
            journal: shared.clone(),
        })
    });
    (h, journal)
}

#[test]
fn init_activates_the_default_tool() {
    let h = Harness::new();
    assert_eq!(h.desktop.tool_name(), Some("select"));
}

#[test]
fn tool_paths_select_tools_by_name() {
    let mut h = Harness::new();
    let events = h.desktop.subscribe();

    assert_eq!(h.desktop.set_tool("/tools/nodes"), ToolSwitch::Activated);
    assert_eq!(h.desktop.tool_name(), Some("nodes"));
    assert!(h.desktop.tool().unwrap().node_selection().is_some());

    assert_eq!(h.desktop.set_tool("/tools/shapes/star"), ToolSwitch::Activated);
    assert_eq!(h.desktop.tool_name(), Some("star"));

    assert_eq!(
        events.drain(),
        [
            DesktopEvent::ToolChanged(Some("nodes".to_string())),
            DesktopEvent::ToolChanged(Some("star".to_string())),
        ]
    );
}

#[test]
fn unknown_tools_fall_back_to_the_default() {
    let mut h = Harness::new();
    h.desktop.set_tool("nodes");
    assert_eq!(
        h.desktop.set_tool("/tools/lasso"),
        ToolSwitch::FellBack {
            requested: "lasso".to_string(),
            reason: ToolError::Unknown,
        }
    );
    assert_eq!(h.desktop.tool_name(), Some("select"));
}

#[test]
fn tools_that_are_not_ready_fall_back() {
    let mut h = Harness::new();
    h.desktop
        .tools_mut()
        .register("not-ready", || Box::new(NotReady));
    assert_eq!(
        h.desktop.set_tool("not-ready"),
        ToolSwitch::FellBack {
            requested: "not-ready".to_string(),
            reason: ToolError::NotReady,
        }
    );
    assert_eq!(h.desktop.tool_name(), Some("select"));
}

#[test]
fn old_tool_is_told_and_dropped_before_the_new_one_is_built() {
    let (mut h, journal) = harness_with_recording();
    h.desktop.set_tool("recording");
    h.desktop.set_tool("nodes");
    assert_eq!(*journal.borrow(), ["new", "away:nodes", "drop"]);
}

#[test]
fn reselecting_a_tool_rebuilds_it() {
    let (mut h, journal) = harness_with_recording();
    h.desktop.set_tool("recording");
    h.desktop.set_tool("recording");
    assert_eq!(
        *journal.borrow(),
        ["new", "away:recording", "drop", "new"]
    );
}

#[test]
fn node_tool_clears_its_nodes_when_switched_away() {
    let mut h = Harness::new();
    h.desktop.set_tool("nodes");
    h.desktop
        .tool_mut()
        .and_then(|tool| tool.node_selection_mut())
        .unwrap()
        .set_points([kurbo::Point::ZERO]);
    h.desktop.set_tool("nodes");
    assert!(
        h.desktop
            .tool()
            .and_then(|tool| tool.node_selection())
            .unwrap()
            .points()
            .is_empty()
    );
}

#[test]
fn destroy_detaches_the_tool() {
    let (mut h, journal) = harness_with_recording();
    h.desktop.set_tool("recording");
    let events = h.desktop.subscribe();

    h.desktop.destroy();

    assert!(!h.desktop.is_initialized());
    assert!(h.desktop.tool().is_none());
    assert_eq!(*journal.borrow(), ["new", "away:", "drop"]);
    assert_eq!(h.log.borrow().detached, 1);
    assert_eq!(
        events.drain(),
        [DesktopEvent::ToolChanged(None), DesktopEvent::Destroyed]
    );

    // A second destroy is a no-op.
    h.desktop.destroy();
    assert_eq!(h.log.borrow().detached, 1);
}

#[test]
fn broken_default_tool_falls_back_to_select() {
    let config = DesktopConfig {
        default_tool: "missing".to_string(),
        ..DesktopConfig::default()
    };
    let log = SharedLog::default();
    let mut desktop = ViewportController::with_tools(config, ToolRegistry::new());
    desktop.init(
        Rc::new(MockDocument::new()),
        Box::new(MockCanvas(log.clone())),
        Box::new(MockWidget(log)),
    );
    assert_eq!(desktop.tool_name(), Some("select"));
}

#[test]
#[should_panic(expected = "before init")]
fn set_tool_requires_init() {
    let mut desktop = ViewportController::new(DesktopConfig::default());
    desktop.set_tool("select");
}
