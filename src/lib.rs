//! Drag-and-drop coordination for a block-based page builder canvas.
//!
//! The crate exposes four entry points:
//!
//! - [`draggable`] registers a drag source
//! - [`drop_target_for_elements`] registers a drop target
//! - [`attach_closest_edge`] / [`extract_closest_edge`] resolve which edge of
//!   a target the pointer is nearest to
//!
//! Sources and targets share an [`ActiveDragRegistry`] handle instead of a
//! global. Everything is single-threaded and runs synchronously inside the
//! host's event callbacks.
//!
//! The [`host`] module models the platform: element handles with named event
//! listeners, bounding rectangles, a transfer channel, and a pointer-driven
//! [`host::Surface`] that produces the drag event sequence.

pub mod config;
pub mod constants;
pub mod dnd;
pub mod error;
pub mod host;
pub mod logging;
pub mod perf;
pub mod types;

pub use config::DndSettings;
pub use dnd::{
    ActiveDragRegistry, Cleanup, ClosestEdgeInput, DragContext, DraggableOptions,
    DropTargetOptions, TargetEventArgs, attach_closest_edge, draggable, drop_target_for_elements,
    extract_closest_edge,
};
pub use error::{DndError, DndResult};
pub use types::{DragData, Edge, Point, Rect};
