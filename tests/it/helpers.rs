//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestCanvasBuilder` - Builder for a page canvas with stacked blocks
//! - `CallLog` and `recording_target` - Record target callbacks in order
//! - Small constructors for events and payloads

use pagedrop::dnd::{Cleanup, DropTargetOptions, drop_target_for_elements};
use pagedrop::host::{DataTransfer, DragEvent, Element, EventKind, Surface};
use pagedrop::{ActiveDragRegistry, DragData, Point, Rect};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Call recording
// ============================================================================

/// Ordered log of "name:phase" entries shared with callbacks.
#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Entries with the "name:" prefix stripped, for single-target tests.
    pub fn phases(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|e| e.split_once(':').map(|(_, p)| p.to_string()).unwrap_or(e))
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Attach recorders for every phase callback to `options`.
pub fn recording(options: DropTargetOptions, log: &CallLog, name: &str) -> DropTargetOptions {
    let hook = |phase: &'static str| {
        let log = log.clone();
        let entry = format!("{name}:{phase}");
        move |_: &pagedrop::TargetEventArgs<'_>| log.push(entry.clone())
    };
    options
        .on_drag_start(hook("onDragStart"))
        .on_drag_enter(hook("onDragEnter"))
        .on_drag(hook("onDrag"))
        .on_drop(hook("onDrop"))
        .on_drag_leave(hook("onDragLeave"))
        .on_drag_end(hook("onDragEnd"))
}

/// Register a drop target on `element` that records all its callbacks.
pub fn recording_target(
    registry: &ActiveDragRegistry,
    element: &Element,
    log: &CallLog,
    name: &str,
) -> Cleanup {
    drop_target_for_elements(
        registry,
        recording(DropTargetOptions::new(element.clone()), log, name),
    )
}

// ============================================================================
// Events and payloads
// ============================================================================

/// Build an event of `kind` at `point`, targeting `target`.
pub fn event_at(kind: EventKind, point: Point, target: &Element) -> DragEvent {
    DragEvent::new(kind, point)
        .with_target(target.clone())
        .with_transfer(DataTransfer::new())
}

/// Dispatch an event of `kind` directly to `element` and return it.
pub fn fire(element: &Element, kind: EventKind) -> DragEvent {
    let mut event = event_at(kind, Point::default(), element);
    element.dispatch_event(&mut event);
    event
}

/// Build a payload from key/value pairs.
pub fn payload(pairs: &[(&str, Value)]) -> DragData {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

// ============================================================================
// TestCanvasBuilder - a page canvas with vertically stacked blocks
// ============================================================================

/// Builder for a canvas root holding named blocks stacked top to bottom.
///
/// # Example
/// ```ignore
/// let canvas = TestCanvasBuilder::new()
///     .with_blocks(&["hero", "features", "footer"])
///     .with_block_height(100.0)
///     .build();
/// ```
pub struct TestCanvasBuilder {
    blocks: Vec<String>,
    width: f32,
    block_height: f32,
    gap: f32,
}

impl Default for TestCanvasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCanvasBuilder {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            width: 400.0,
            block_height: 100.0,
            gap: 20.0,
        }
    }

    pub fn with_blocks(mut self, names: &[&str]) -> Self {
        self.blocks.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn with_block_height(mut self, height: f32) -> Self {
        self.block_height = height;
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn build(self) -> TestCanvas {
        let count = self.blocks.len() as f32;
        let total = count * self.block_height + (count + 1.0) * self.gap;
        let root = Element::named("canvas").with_bounds(Rect::new(0.0, total, 0.0, self.width));

        let blocks: Vec<Element> = self
            .blocks
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let top = self.gap + i as f32 * (self.block_height + self.gap);
                let block = Element::named(name.clone()).with_bounds(Rect::new(
                    top,
                    top + self.block_height,
                    self.gap,
                    self.width - self.gap,
                ));
                root.append_child(&block);
                block
            })
            .collect();

        let surface = Surface::new(root.clone());
        TestCanvas {
            root,
            blocks,
            surface,
        }
    }
}

pub struct TestCanvas {
    pub root: Element,
    pub blocks: Vec<Element>,
    pub surface: Surface,
}

impl TestCanvas {
    pub fn block(&self, name: &str) -> &Element {
        self.blocks
            .iter()
            .find(|b| b.name() == Some(name))
            .unwrap_or_else(|| panic!("no block named {name}"))
    }

    /// Point inside `name` at the given fraction of its height.
    pub fn point_in(&self, name: &str, fraction_y: f32) -> Point {
        use pagedrop::host::BoundingRect;
        let rect = self.block(name).bounding_rect();
        Point::new(
            (rect.left + rect.right) / 2.0,
            rect.top + rect.height() * fraction_y,
        )
    }

    /// Point on the canvas background between blocks.
    pub fn gutter(&self) -> Point {
        Point::new(5.0, 5.0)
    }
}
