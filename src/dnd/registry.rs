//! The active drag registry.
//!
//! A single slot shared by one drag source and every drop target bound to the
//! same registry handle. Writes are last-write-wins; reads clone the cheap
//! `Rc`-backed context, so no borrow is ever held across a callback.

use crate::config::DndSettings;
use crate::host::Element;
use crate::types::DragData;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// In-memory record of an in-progress drag.
#[derive(Clone, Debug)]
pub struct DragContext {
    source_element: Element,
    data: Rc<DragData>,
    session: Uuid,
}

impl DragContext {
    pub fn new(source_element: Element, data: DragData) -> Self {
        Self {
            source_element,
            data: Rc::new(data),
            session: Uuid::new_v4(),
        }
    }

    pub fn source_element(&self) -> &Element {
        &self.source_element
    }

    pub fn data(&self) -> &DragData {
        &self.data
    }

    /// Identifier of this drag, for correlating log lines.
    pub fn session(&self) -> Uuid {
        self.session
    }
}

/// Handle to the single-slot drag registry. Clones share the slot.
#[derive(Clone, Default)]
pub struct ActiveDragRegistry {
    slot: Rc<RefCell<Option<DragContext>>>,
    settings: Rc<DndSettings>,
}

impl ActiveDragRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: DndSettings) -> Self {
        Self {
            slot: Rc::default(),
            settings: Rc::new(settings),
        }
    }

    pub fn settings(&self) -> &DndSettings {
        &self.settings
    }

    /// Publish the context of a starting drag.
    pub fn set(&self, context: DragContext) {
        let mut slot = self.slot.borrow_mut();
        if let Some(previous) = slot.as_ref() {
            tracing::warn!(
                previous = %previous.session,
                next = %context.session,
                "Drag started while another drag was active; replacing it"
            );
        }
        tracing::debug!(
            session = %context.session,
            source = %context.source_element.id(),
            "Drag context published"
        );
        *slot = Some(context);
    }

    pub fn read(&self) -> Option<DragContext> {
        self.slot.borrow().clone()
    }

    pub fn is_active(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Remove and return the current context.
    pub fn clear(&self) -> Option<DragContext> {
        let previous = self.slot.borrow_mut().take();
        if let Some(context) = &previous {
            tracing::debug!(session = %context.session, "Drag context cleared");
        }
        previous
    }

    /// True if both handles share the same slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl fmt::Debug for ActiveDragRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveDragRegistry")
            .field("active", &self.read().map(|c| c.session))
            .finish()
    }
}
