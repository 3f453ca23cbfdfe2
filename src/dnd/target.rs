//! Drop targets.
//!
//! Each call to [`drop_target_for_elements`] owns a small state machine:
//!
//! ```text
//! Idle   -> Active   (dragenter/dragover, predicate true)   on_drag_start, on_drag_enter
//! Active -> Active   (dragover, predicate true)             on_drag
//! Active -> Active   (dragover, predicate false)            nothing
//! Active -> Idle     (dragleave | accepted drop)            on_drag_leave, on_drag_end
//! ```
//!
//! A failing predicate never deactivates an active target; only a leave or a
//! drop does.
//!
//! Targets are independent: nested targets each run their own machine, and
//! this layer does not decide which one "wins". Callers that want innermost
//! wins can compare `event.target()` against their own element in `can_drop`.

use super::cleanup::Cleanup;
use super::registry::{ActiveDragRegistry, DragContext};
use crate::host::{DragEvent, Element, EventKind, WeakElement};
use crate::types::DragData;
use std::cell::Cell;
use std::rc::Rc;

/// A drop target's own element and the data its `get_data` produced for the
/// current event.
#[derive(Clone, Debug)]
pub struct TargetDescriptor {
    pub element: Element,
    pub data: DragData,
}

/// Arguments passed to every target callback and to `can_drop`.
pub struct TargetEventArgs<'a> {
    pub event: &'a DragEvent,
    pub target: &'a TargetDescriptor,
    pub source: &'a DragContext,
}

/// Arguments passed to `get_data`.
pub struct GetDataArgs<'a> {
    pub element: &'a Element,
    pub input: &'a DragEvent,
}

type GetData = Rc<dyn Fn(&GetDataArgs<'_>) -> DragData>;
type CanDrop = Rc<dyn Fn(&TargetEventArgs<'_>) -> bool>;
type TargetCallback = Rc<dyn Fn(&TargetEventArgs<'_>)>;

/// Whether a target is between an enter and its matching leave or drop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetState {
    #[default]
    Idle,
    Active,
}

/// Configuration for [`drop_target_for_elements`]. Unset hooks are no-ops.
#[derive(Default)]
pub struct DropTargetOptions {
    element: Option<Element>,
    hooks: TargetHooks,
}

#[derive(Default)]
struct TargetHooks {
    get_data: Option<GetData>,
    can_drop: Option<CanDrop>,
    on_drag: Option<TargetCallback>,
    on_drop: Option<TargetCallback>,
    on_drag_enter: Option<TargetCallback>,
    on_drag_leave: Option<TargetCallback>,
    on_drag_start: Option<TargetCallback>,
    on_drag_end: Option<TargetCallback>,
}

macro_rules! callback_setter {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub fn $name(mut self, f: impl Fn(&TargetEventArgs<'_>) + 'static) -> Self {
            self.hooks.$name = Some(Rc::new(f));
            self
        }
    };
}

impl DropTargetOptions {
    pub fn new(element: impl Into<Option<Element>>) -> Self {
        Self {
            element: element.into(),
            hooks: TargetHooks::default(),
        }
    }

    /// Data describing this target, recomputed on every event.
    pub fn get_data(mut self, f: impl Fn(&GetDataArgs<'_>) -> DragData + 'static) -> Self {
        self.hooks.get_data = Some(Rc::new(f));
        self
    }

    /// Gate deciding whether this target accepts the current drag.
    pub fn can_drop(mut self, f: impl Fn(&TargetEventArgs<'_>) -> bool + 'static) -> Self {
        self.hooks.can_drop = Some(Rc::new(f));
        self
    }

    callback_setter!(
        /// Fires on every accepted `dragover`.
        on_drag
    );
    callback_setter!(on_drop);
    callback_setter!(on_drag_enter);
    callback_setter!(on_drag_leave);
    callback_setter!(
        /// Same transition as `on_drag_enter`, fired just before it.
        on_drag_start
    );
    callback_setter!(
        /// Same transition as `on_drag_leave`, fired just after it.
        on_drag_end
    );
}

/// Per-registration state shared by the four listeners.
struct RegisteredTarget {
    element: WeakElement,
    registry: ActiveDragRegistry,
    hooks: TargetHooks,
    state: Cell<TargetState>,
}

impl RegisteredTarget {
    fn descriptor(&self, element: &Element, event: &DragEvent) -> TargetDescriptor {
        let data = match &self.hooks.get_data {
            Some(get_data) => get_data(&GetDataArgs {
                element,
                input: event,
            }),
            None => DragData::new(),
        };
        TargetDescriptor {
            element: element.clone(),
            data,
        }
    }

    fn accepts(&self, args: &TargetEventArgs<'_>) -> bool {
        self.hooks.can_drop.as_ref().is_none_or(|can_drop| can_drop(args))
    }

    fn fire(hook: &Option<TargetCallback>, args: &TargetEventArgs<'_>) {
        if let Some(hook) = hook {
            hook(args);
        }
    }

    fn activate(&self, args: &TargetEventArgs<'_>) {
        self.state.set(TargetState::Active);
        tracing::trace!(
            target_el = %args.target.element.id(),
            session = %args.source.session(),
            "Drop target activated"
        );
        Self::fire(&self.hooks.on_drag_start, args);
        Self::fire(&self.hooks.on_drag_enter, args);
    }

    fn deactivate(&self, args: &TargetEventArgs<'_>) {
        Self::fire(&self.hooks.on_drag_leave, args);
        Self::fire(&self.hooks.on_drag_end, args);
        self.state.set(TargetState::Idle);
        tracing::trace!(
            target_el = %args.target.element.id(),
            session = %args.source.session(),
            "Drop target deactivated"
        );
    }

    fn is_active(&self) -> bool {
        self.state.get() == TargetState::Active
    }

    fn handle_enter(&self, event: &mut DragEvent) {
        let Some(source) = self.registry.read() else {
            return;
        };
        if self.is_active() {
            return;
        }
        let Some(element) = self.element.upgrade() else {
            return;
        };
        let target = self.descriptor(&element, event);
        let args = TargetEventArgs {
            event,
            target: &target,
            source: &source,
        };
        if !self.accepts(&args) {
            return;
        }
        self.activate(&args);
    }

    fn handle_over(&self, event: &mut DragEvent) {
        let Some(source) = self.registry.read() else {
            return;
        };
        let Some(element) = self.element.upgrade() else {
            return;
        };
        let target = self.descriptor(&element, event);
        let allowed = self.accepts(&TargetEventArgs {
            event,
            target: &target,
            source: &source,
        });
        if !allowed {
            return;
        }

        event.prevent_default();

        let args = TargetEventArgs {
            event,
            target: &target,
            source: &source,
        };
        if !self.is_active() {
            self.activate(&args);
        }
        Self::fire(&self.hooks.on_drag, &args);
    }

    fn handle_leave(&self, event: &mut DragEvent) {
        let Some(source) = self.registry.read() else {
            return;
        };
        if !self.is_active() {
            return;
        }
        let Some(element) = self.element.upgrade() else {
            return;
        };
        let target = self.descriptor(&element, event);
        self.deactivate(&TargetEventArgs {
            event,
            target: &target,
            source: &source,
        });
    }

    fn handle_drop(&self, event: &mut DragEvent) {
        let Some(source) = self.registry.read() else {
            return;
        };
        let Some(element) = self.element.upgrade() else {
            return;
        };
        let target = self.descriptor(&element, event);
        let allowed = self.accepts(&TargetEventArgs {
            event,
            target: &target,
            source: &source,
        });
        if !allowed {
            tracing::debug!(
                target_el = %element.id(),
                session = %source.session(),
                "Drop rejected by predicate"
            );
            return;
        }

        event.prevent_default();

        let args = TargetEventArgs {
            event,
            target: &target,
            source: &source,
        };
        tracing::debug!(
            target_el = %element.id(),
            session = %source.session(),
            "Drop accepted"
        );
        Self::fire(&self.hooks.on_drop, &args);
        if self.is_active() {
            self.deactivate(&args);
        }
    }
}

/// Make `options.element` a drop target reading drags from `registry`.
///
/// Returns a no-op cleanup when no element is given.
pub fn drop_target_for_elements(
    registry: &ActiveDragRegistry,
    options: DropTargetOptions,
) -> Cleanup {
    let DropTargetOptions { element, hooks } = options;
    let Some(element) = element else {
        tracing::debug!("drop_target_for_elements called without an element");
        return Cleanup::noop();
    };

    let target = Rc::new(RegisteredTarget {
        element: element.downgrade(),
        registry: registry.clone(),
        hooks,
        state: Cell::new(TargetState::Idle),
    });

    let handlers: [(EventKind, fn(&RegisteredTarget, &mut DragEvent)); 4] = [
        (EventKind::DragEnter, RegisteredTarget::handle_enter),
        (EventKind::DragOver, RegisteredTarget::handle_over),
        (EventKind::DragLeave, RegisteredTarget::handle_leave),
        (EventKind::Drop, RegisteredTarget::handle_drop),
    ];
    let ids: Vec<_> = handlers
        .into_iter()
        .map(|(kind, handler)| {
            let target = target.clone();
            element.add_event_listener(kind, move |event| handler(&target, event))
        })
        .collect();

    tracing::trace!(element = %element.id(), "Drop target registered");

    let weak = element.downgrade();
    Cleanup::new(move || {
        let Some(element) = weak.upgrade() else {
            return;
        };
        for id in &ids {
            element.remove_event_listener(*id);
        }
        tracing::trace!(element = %element.id(), "Drop target disposed");
    })
}
