//! Drag sources.
//!
//! [`draggable`] turns an element into a drag source. On `dragstart` it
//! publishes a [`DragContext`] into the registry; on `dragend` it reports the
//! outcome and clears the registry, whether or not anything accepted the drop.

use super::cleanup::Cleanup;
use super::registry::{ActiveDragRegistry, DragContext};
use crate::config::DndSettings;
use crate::constants::TRANSFER_MARKER_KEY;
use crate::host::{DragEvent, Element, EventKind};
use crate::types::DragData;
use std::rc::Rc;

/// Arguments passed to `on_drag_start`.
pub struct DragStartArgs<'a> {
    pub event: &'a DragEvent,
    pub data: &'a DragData,
}

/// Arguments passed to the source's `on_drop`, which fires on every drag end.
///
/// `data` is the payload still held by the registry, or `None` if something
/// cleared it before the drag ended.
pub struct SourceDropArgs<'a> {
    pub event: &'a DragEvent,
    pub data: Option<&'a DragData>,
}

type InitialData = Rc<dyn Fn() -> DragData>;
type DragStartCallback = Rc<dyn Fn(&DragStartArgs<'_>)>;
type SourceDropCallback = Rc<dyn Fn(&SourceDropArgs<'_>)>;

/// Configuration for [`draggable`]. Unset hooks are no-ops.
#[derive(Default)]
pub struct DraggableOptions {
    element: Option<Element>,
    drag_handle: Option<Element>,
    get_initial_data: Option<InitialData>,
    on_drag_start: Option<DragStartCallback>,
    on_drop: Option<SourceDropCallback>,
}

impl DraggableOptions {
    pub fn new(element: impl Into<Option<Element>>) -> Self {
        Self {
            element: element.into(),
            ..Self::default()
        }
    }

    /// Only gestures starting inside `handle` may begin a drag.
    pub fn drag_handle(mut self, handle: impl Into<Option<Element>>) -> Self {
        self.drag_handle = handle.into();
        self
    }

    /// Produce the payload once, when the drag starts.
    pub fn get_initial_data(mut self, f: impl Fn() -> DragData + 'static) -> Self {
        self.get_initial_data = Some(Rc::new(f));
        self
    }

    pub fn on_drag_start(mut self, f: impl Fn(&DragStartArgs<'_>) + 'static) -> Self {
        self.on_drag_start = Some(Rc::new(f));
        self
    }

    pub fn on_drop(mut self, f: impl Fn(&SourceDropArgs<'_>) + 'static) -> Self {
        self.on_drop = Some(Rc::new(f));
        self
    }
}

/// Make `options.element` a drag source bound to `registry`.
///
/// Returns a no-op cleanup when no element is given.
pub fn draggable(registry: &ActiveDragRegistry, options: DraggableOptions) -> Cleanup {
    let DraggableOptions {
        element,
        drag_handle,
        get_initial_data,
        on_drag_start,
        on_drop,
    } = options;

    let Some(element) = element else {
        tracing::debug!("draggable called without an element");
        return Cleanup::noop();
    };

    element.set_draggable(true);

    let start_id = {
        let registry = registry.clone();
        let source = element.downgrade();
        element.add_event_listener(EventKind::DragStart, move |event| {
            let Some(source) = source.upgrade() else {
                return;
            };
            handle_drag_start(
                &registry,
                &source,
                drag_handle.as_ref(),
                get_initial_data.as_deref(),
                on_drag_start.as_deref(),
                event,
            );
        })
    };

    let end_id = {
        let registry = registry.clone();
        element.add_event_listener(EventKind::DragEnd, move |event| {
            let last = registry.read();
            if let Some(on_drop) = &on_drop {
                on_drop(&SourceDropArgs {
                    event,
                    data: last.as_ref().map(DragContext::data),
                });
            }
            registry.clear();
        })
    };

    tracing::trace!(element = %element.id(), "Drag source registered");

    let weak = element.downgrade();
    Cleanup::new(move || {
        let Some(element) = weak.upgrade() else {
            return;
        };
        element.remove_event_listener(start_id);
        element.remove_event_listener(end_id);
        element.set_draggable(false);
        tracing::trace!(element = %element.id(), "Drag source disposed");
    })
}

fn handle_drag_start(
    registry: &ActiveDragRegistry,
    source: &Element,
    drag_handle: Option<&Element>,
    get_initial_data: Option<&dyn Fn() -> DragData>,
    on_drag_start: Option<&dyn Fn(&DragStartArgs<'_>)>,
    event: &mut DragEvent,
) {
    if let Some(handle) = drag_handle {
        let outside = event.target().is_some_and(|origin| !handle.contains(origin));
        if outside {
            tracing::debug!(
                source = %source.id(),
                handle = %handle.id(),
                "Drag started outside the drag handle; suppressing"
            );
            event.prevent_default();
            event.stop_propagation();
            return;
        }
    }

    let data = get_initial_data.map(|f| f()).unwrap_or_default();
    let context = DragContext::new(source.clone(), data);
    registry.set(context.clone());
    write_transfer_marker(registry.settings(), event);

    if let Some(on_drag_start) = on_drag_start {
        on_drag_start(&DragStartArgs {
            event,
            data: context.data(),
        });
    }
}

/// Write the opaque marker the platform needs to deliver a drag. The payload
/// itself stays in the registry.
fn write_transfer_marker(settings: &DndSettings, event: &mut DragEvent) {
    let Some(transfer) = event.data_transfer_mut() else {
        return;
    };
    let marker = serde_json::json!({ TRANSFER_MARKER_KEY: true });
    if let Err(e) = transfer.set_data(&settings.transfer_mime, &marker) {
        tracing::debug!(error = %e, "Ignoring transfer write failure");
    }
    transfer.set_effect_allowed(settings.effect_allowed);
}
