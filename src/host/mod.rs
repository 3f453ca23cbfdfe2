//! Host platform model.
//!
//! The drag-and-drop layer needs very little from its host: element handles
//! that accept named event listeners, a bounding-rectangle query, containment
//! checks, and a write-only transfer channel. This module provides those as
//! an in-memory element tree, plus [`Surface`], a pointer-driven dispatch
//! loop that produces the platform event sequence.
//!
//! ## Modules
//!
//! - `element` - Element handles, tree structure, listener registry
//! - `event` - Drag event kinds and the event object
//! - `transfer` - The opaque transfer channel
//! - `hit_index` - R-tree hit testing
//! - `surface` - Pointer input to drag event dispatch

mod element;
mod event;
mod hit_index;
mod surface;
mod transfer;

pub use element::{Element, ElementId, Listener, ListenerId, WeakElement};
pub use event::{DragEvent, EventKind};
pub use hit_index::{HitEntry, HitIndex};
pub use surface::Surface;
pub use transfer::{DataTransfer, DropEffect, EffectAllowed};

use crate::types::Rect;

/// Anything that can report its bounding rectangle in client coordinates.
pub trait BoundingRect {
    fn bounding_rect(&self) -> Rect;
}

impl BoundingRect for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }
}
