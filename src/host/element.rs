//! Element handles.
//!
//! An [`Element`] is a reference-counted node in a layout tree. It owns a
//! bounding rectangle, a draggable affordance flag, and a list of named event
//! listeners. Parents hold their children strongly and children point back
//! weakly, so dropping the root releases the whole tree.

use super::event::{DragEvent, EventKind};
use super::BoundingRect;
use crate::types::Rect;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of an element for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle returned by [`Element::add_event_listener`], used to detach it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A listener callback. Listeners receive the event mutably so they can
/// suppress its default action or stop its propagation.
pub type Listener = Rc<dyn Fn(&mut DragEvent)>;

struct ListenerEntry {
    id: ListenerId,
    kind: EventKind,
    callback: Listener,
}

struct Node {
    id: ElementId,
    name: Option<String>,
    bounds: Cell<Rect>,
    draggable: Cell<bool>,
    parent: RefCell<Weak<Node>>,
    children: RefCell<Vec<Element>>,
    listeners: RefCell<Vec<ListenerEntry>>,
}

/// A cheaply cloneable handle to a node. Equality is identity.
#[derive(Clone)]
pub struct Element(Rc<Node>);

/// Non-owning element handle, used by listeners that must not keep their
/// own element alive.
#[derive(Clone)]
pub struct WeakElement(Weak<Node>);

impl WeakElement {
    pub fn upgrade(&self) -> Option<Element> {
        self.0.upgrade().map(Element)
    }
}

impl Element {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Create an element with a name used in logs and debug output.
    pub fn named(name: impl Into<String>) -> Self {
        Self::build(Some(name.into()))
    }

    fn build(name: Option<String>) -> Self {
        Self(Rc::new(Node {
            id: ElementId(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed)),
            name,
            bounds: Cell::new(Rect::default()),
            draggable: Cell::new(false),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    /// Builder-style bounds setter.
    pub fn with_bounds(self, rect: Rect) -> Self {
        self.set_bounds(rect);
        self
    }

    pub fn id(&self) -> ElementId {
        self.0.id
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    pub fn downgrade(&self) -> WeakElement {
        WeakElement(Rc::downgrade(&self.0))
    }

    pub fn set_bounds(&self, rect: Rect) {
        self.0.bounds.set(rect);
    }

    // ========================================================================
    // Draggable affordance
    // ========================================================================

    pub fn set_draggable(&self, draggable: bool) {
        self.0.draggable.set(draggable);
    }

    pub fn is_draggable(&self) -> bool {
        self.0.draggable.get()
    }

    // ========================================================================
    // Tree structure
    // ========================================================================

    /// Append `child`, detaching it from any previous parent first.
    pub fn append_child(&self, child: &Element) {
        if child == self || child.contains(self) {
            tracing::warn!(
                parent = %self.id(),
                child = %child.id(),
                "Refusing to create a cycle in the element tree"
            );
            return;
        }
        child.remove();
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
    }

    /// Detach this element from its parent. Listeners stay attached.
    pub fn remove(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent.0.children.borrow_mut().retain(|c| c != self);
        *self.0.parent.borrow_mut() = Weak::new();
    }

    pub fn parent(&self) -> Option<Element> {
        self.0.parent.borrow().upgrade().map(Element)
    }

    pub fn children(&self) -> Vec<Element> {
        self.0.children.borrow().clone()
    }

    /// Ancestors from the parent up to the root.
    pub fn ancestors(&self) -> Vec<Element> {
        let mut out = Vec::new();
        let mut current = self.parent();
        while let Some(el) = current {
            current = el.parent();
            out.push(el);
        }
        out
    }

    /// Number of ancestors.
    pub fn depth(&self) -> usize {
        self.ancestors().len()
    }

    /// True if `other` is this element or one of its descendants.
    pub fn contains(&self, other: &Element) -> bool {
        if other == self {
            return true;
        }
        let mut current = other.parent();
        while let Some(el) = current {
            if &el == self {
                return true;
            }
            current = el.parent();
        }
        false
    }

    /// Pre-order traversal including this element.
    pub fn descendants(&self) -> Vec<Element> {
        let mut out = Vec::new();
        let mut stack = vec![self.clone()];
        while let Some(el) = stack.pop() {
            let children = el.children();
            out.push(el);
            stack.extend(children.into_iter().rev());
        }
        out
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    pub fn add_event_listener(
        &self,
        kind: EventKind,
        callback: impl Fn(&mut DragEvent) + 'static,
    ) -> ListenerId {
        let id = ListenerId(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed));
        self.0.listeners.borrow_mut().push(ListenerEntry {
            id,
            kind,
            callback: Rc::new(callback),
        });
        id
    }

    /// Detach a listener. Returns false if it was not attached.
    pub fn remove_event_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.0.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|entry| entry.id != id);
        listeners.len() != before
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.0
            .listeners
            .borrow()
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }

    fn has_listener(&self, id: ListenerId) -> bool {
        self.0.listeners.borrow().iter().any(|entry| entry.id == id)
    }

    /// Invoke this element's listeners for `event.kind()` in registration order.
    ///
    /// The listener list is snapshotted first, so listeners may attach or
    /// detach listeners (including themselves) while running. A listener
    /// detached by an earlier one in the same dispatch is skipped.
    pub fn dispatch_event(&self, event: &mut DragEvent) {
        let snapshot: Vec<(ListenerId, Listener)> = self
            .0
            .listeners
            .borrow()
            .iter()
            .filter(|entry| entry.kind == event.kind())
            .map(|entry| (entry.id, entry.callback.clone()))
            .collect();

        for (id, callback) in snapshot {
            if !self.has_listener(id) {
                continue;
            }
            callback(event);
        }
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Element");
        s.field("id", &self.0.id);
        if let Some(name) = &self.0.name {
            s.field("name", name);
        }
        s.field("bounds", &self.0.bounds.get()).finish()
    }
}

impl BoundingRect for Element {
    fn bounding_rect(&self) -> Rect {
        self.0.bounds.get()
    }
}
