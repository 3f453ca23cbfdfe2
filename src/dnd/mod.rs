//! Drag-and-drop coordination.
//!
//! One drag source at a time publishes a [`DragContext`] into an
//! [`ActiveDragRegistry`]; any number of drop targets read it while the
//! pointer moves over them and drive their own enter/leave state machine.
//!
//! ## Modules
//!
//! - `registry` - The single-slot drag context holder
//! - `source` - `draggable`: drag source registration
//! - `target` - `drop_target_for_elements`: drop target registration
//! - `edge` - Closest-edge resolution for insertion position
//! - `cleanup` - Idempotent disposers returned by the registrars

mod cleanup;
mod edge;
mod registry;
mod source;
mod target;

pub use cleanup::{Cleanup, CleanupGuard};
pub use edge::{ClosestEdgeInput, attach_closest_edge, closest_edge, extract_closest_edge};
pub use registry::{ActiveDragRegistry, DragContext};
pub use source::{DragStartArgs, DraggableOptions, SourceDropArgs, draggable};
pub use target::{
    DropTargetOptions, GetDataArgs, TargetDescriptor, TargetEventArgs, TargetState,
    drop_target_for_elements,
};
