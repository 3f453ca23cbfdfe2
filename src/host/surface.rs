//! Reference host surface.
//!
//! `Surface` turns raw pointer input (press, move, release, cancel) into the
//! platform drag event sequence and delivers it to the element tree:
//!
//! ```text
//! press    -> dragstart  (origin element, bubbling)
//! move     -> dragenter  (each newly hovered element, no bubbling)
//!             dragleave  (each element no longer hovered, no bubbling)
//!             dragover   (topmost hovered element, bubbling)
//! release  -> drop       (bubbling, only if the last dragover was accepted)
//!             dragleave  (hovered elements, when nothing accepted the drop)
//!             dragend    (source element, bubbling)
//! cancel   -> dragleave + dragend at the last pointer position
//! ```
//!
//! Each `dragover` starts with the drop effect implied by the source's
//! `effectAllowed`. A dragover counts as accepted when a listener prevents its
//! default and leaves a drop effect other than none. `drop` carries that
//! effect, and `dragend` carries it only if the drop was accepted.
//!
//! The hovered chain is the topmost hit element plus its ancestors. Elements
//! detached from the surface root stop receiving events even if they still
//! carry listeners. Call [`Surface::reindex`] after layout changes.

use super::element::{Element, ElementId};
use super::event::{DragEvent, EventKind};
use super::hit_index::{HitEntry, HitIndex};
use super::transfer::{DataTransfer, DropEffect};
use super::BoundingRect;
use crate::config::DndSettings;
use crate::perf::{OperationStats, measure_and_log};
use crate::profile_scope;
use crate::types::Point;
use std::collections::HashMap;

/// State of the one pointer-driven drag session a surface supports.
struct PointerSession {
    source: Element,
    /// Innermost first
    hovered: Vec<Element>,
    transfer: DataTransfer,
    /// Last pointer position seen by the session
    point: Point,
    /// Effect of the last accepted dragover, if it was accepted
    accepted_effect: Option<DropEffect>,
}

pub struct Surface {
    root: Element,
    index: HitIndex,
    elements: HashMap<ElementId, Element>,
    session: Option<PointerSession>,
    stats: HashMap<EventKind, OperationStats>,
    slow_dispatch_ms: f64,
}

impl Surface {
    pub fn new(root: Element) -> Self {
        let mut surface = Self {
            root,
            index: HitIndex::new(),
            elements: HashMap::new(),
            session: None,
            stats: HashMap::new(),
            slow_dispatch_ms: DndSettings::default().slow_dispatch_ms,
        };
        surface.reindex();
        surface
    }

    pub fn with_settings(mut self, settings: &DndSettings) -> Self {
        self.slow_dispatch_ms = settings.slow_dispatch_ms;
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Rebuild the hit index from the current tree and element bounds.
    pub fn reindex(&mut self) {
        profile_scope!("surface_reindex");

        let descendants = self.root.descendants();
        let entries: Vec<HitEntry> = descendants
            .iter()
            .enumerate()
            .filter(|(_, el)| !el.bounding_rect().is_empty())
            .map(|(order, el)| HitEntry {
                element_id: el.id(),
                rect: el.bounding_rect(),
                order,
            })
            .collect();

        self.elements = descendants.into_iter().map(|el| (el.id(), el)).collect();
        self.index.rebuild(entries.into_iter());
        tracing::trace!(indexed = self.index.len(), "Surface reindexed");
    }

    fn is_connected(&self, el: &Element) -> bool {
        self.root.contains(el)
    }

    /// Topmost connected element under `point`.
    pub fn hit_test(&self, point: Point) -> Option<Element> {
        self.index
            .query_point(point)
            .into_iter()
            .filter_map(|entry| self.elements.get(&entry.element_id))
            .find(|el| self.is_connected(el))
            .cloned()
    }

    /// The topmost hit element followed by its ancestors, innermost first.
    pub fn hovered_chain(&self, point: Point) -> Vec<Element> {
        let Some(hit) = self.hit_test(point) else {
            return Vec::new();
        };
        let mut chain = vec![hit.clone()];
        chain.extend(hit.ancestors());
        chain
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The element currently being dragged, if any.
    pub fn drag_source(&self) -> Option<&Element> {
        self.session.as_ref().map(|s| &s.source)
    }

    /// Elements currently hovered by the drag, innermost first.
    pub fn hovered(&self) -> Vec<Element> {
        self.session
            .as_ref()
            .map(|s| s.hovered.clone())
            .unwrap_or_default()
    }

    /// Timing statistics for each dispatched event kind.
    pub fn dispatch_stats(&self, kind: EventKind) -> Option<&OperationStats> {
        self.stats.get(&kind)
    }

    // ========================================================================
    // Pointer input
    // ========================================================================

    /// Begin a drag at `origin`. Returns true if a drag session started.
    ///
    /// The source is the innermost draggable element on the hovered chain;
    /// `dragstart` targets the element under the pointer so sources can check
    /// where the gesture began.
    pub fn press(&mut self, origin: Point) -> bool {
        if self.session.is_some() {
            tracing::warn!("press ignored: a drag session is already in progress");
            return false;
        }

        let chain = self.hovered_chain(origin);
        let Some(origin_el) = chain.first().cloned() else {
            return false;
        };
        let Some(source) = chain.iter().find(|el| el.is_draggable()).cloned() else {
            tracing::trace!(origin = %origin_el.id(), "press on non-draggable element");
            return false;
        };

        let mut event = DragEvent::new(EventKind::DragStart, origin)
            .with_target(origin_el)
            .with_transfer(DataTransfer::new());
        let source_chain: Vec<Element> = chain
            .iter()
            .skip_while(|el| *el != &source)
            .cloned()
            .collect();
        self.dispatch_bubbling(&source_chain, &mut event);

        if event.default_prevented() {
            tracing::debug!(source = %source.id(), "dragstart suppressed, no drag session");
            return false;
        }

        let transfer = event.take_transfer().unwrap_or_default();
        tracing::debug!(source = %source.id(), types = ?transfer.types(), "Drag session started");
        self.session = Some(PointerSession {
            source,
            hovered: Vec::new(),
            transfer,
            point: origin,
            accepted_effect: None,
        });
        true
    }

    /// Move the pointer during a drag.
    pub fn move_to(&mut self, point: Point) {
        profile_scope!("surface_move");

        let Some(session) = self.session.as_ref() else {
            return;
        };
        let transfer = session.transfer.protected();
        let previous = session.hovered.clone();
        let next = self.hovered_chain(point);

        for el in next.iter().rev().filter(|el| !previous.contains(el)) {
            let mut event = self.event(EventKind::DragEnter, point, el, &transfer);
            self.dispatch_to(el, &mut event);
        }
        for el in previous.iter().filter(|el| !next.contains(el)) {
            if !self.is_connected(el) {
                continue;
            }
            let mut event = self.event(EventKind::DragLeave, point, el, &transfer);
            self.dispatch_to(el, &mut event);
        }

        let accepted_effect = match next.first() {
            Some(topmost) => {
                let initial = DropEffect::initial_for(transfer.effect_allowed());
                let transfer = transfer.with_drop_effect(initial);
                let mut event = self.event(EventKind::DragOver, point, topmost, &transfer);
                self.dispatch_bubbling(&next, &mut event);
                let effect = event
                    .data_transfer()
                    .map_or(DropEffect::None, DataTransfer::drop_effect);
                (event.default_prevented() && effect != DropEffect::None).then_some(effect)
            }
            None => None,
        };

        if let Some(session) = self.session.as_mut() {
            session.hovered = next;
            session.point = point;
            session.accepted_effect = accepted_effect;
        }
    }

    /// Release the pointer. Returns true if a drop listener accepted the drop.
    pub fn release(&mut self, point: Point) -> bool {
        if self.session.is_none() {
            return false;
        }
        self.move_to(point);

        let Some(session) = self.session.take() else {
            return false;
        };
        let transfer = session.transfer.protected();
        let hovered: Vec<Element> = session
            .hovered
            .into_iter()
            .filter(|el| self.is_connected(el))
            .collect();

        let mut outcome = DropEffect::None;
        match (hovered.first(), session.accepted_effect) {
            (Some(topmost), Some(effect)) => {
                let transfer = transfer.with_drop_effect(effect);
                let mut event = self.event(EventKind::Drop, point, topmost, &transfer);
                self.dispatch_bubbling(&hovered, &mut event);
                if event.default_prevented() {
                    outcome = effect;
                }
            }
            _ => self.leave_all(&hovered, point, &transfer),
        }
        let dropped = outcome != DropEffect::None;

        self.finish(&session.source, point, &transfer.with_drop_effect(outcome));
        tracing::debug!(source = %session.source.id(), dropped, "Drag session ended");
        dropped
    }

    /// Abort the drag without dropping.
    pub fn cancel(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        let transfer = session.transfer.protected();
        let hovered: Vec<Element> = session
            .hovered
            .into_iter()
            .filter(|el| self.is_connected(el))
            .collect();
        self.leave_all(&hovered, session.point, &transfer);
        self.finish(&session.source, session.point, &transfer);
        tracing::debug!(source = %session.source.id(), "Drag session cancelled");
    }

    fn leave_all(&mut self, hovered: &[Element], point: Point, transfer: &DataTransfer) {
        for el in hovered {
            let mut event = self.event(EventKind::DragLeave, point, el, transfer);
            self.dispatch_to(el, &mut event);
        }
    }

    fn finish(&mut self, source: &Element, point: Point, transfer: &DataTransfer) {
        let mut chain = vec![source.clone()];
        chain.extend(source.ancestors());
        let mut event = self.event(EventKind::DragEnd, point, source, transfer);
        self.dispatch_bubbling(&chain, &mut event);
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    fn event(
        &self,
        kind: EventKind,
        point: Point,
        target: &Element,
        transfer: &DataTransfer,
    ) -> DragEvent {
        DragEvent::new(kind, point)
            .with_target(target.clone())
            .with_transfer(transfer.clone())
    }

    fn dispatch_to(&mut self, el: &Element, event: &mut DragEvent) {
        self.dispatch_bubbling(std::slice::from_ref(el), event);
    }

    fn dispatch_bubbling(&mut self, chain: &[Element], event: &mut DragEvent) {
        let kind = event.kind();
        let ((), elapsed_ms) = measure_and_log(kind.as_str(), self.slow_dispatch_ms, || {
            for el in chain {
                el.dispatch_event(event);
                if event.propagation_stopped() {
                    break;
                }
            }
        });
        self.stats.entry(kind).or_default().record(elapsed_ms);
    }
}
