//! Closest-edge resolution.
//!
//! Given a pointer position and a target's bounding rectangle, pick the edge
//! the pointer is nearest to. The page builder uses it to decide whether a
//! dragged block lands before or after the hovered one.

use crate::config::DndSettings;
use crate::constants::{CLOSEST_EDGE_KEY, DEFAULT_ALLOWED_EDGES};
use crate::host::{BoundingRect, DragEvent};
use crate::types::{DragData, Edge, Point, Rect};
use serde_json::Value;

/// Nearest edge among `allowed_edges`.
///
/// Distances are measured to each edge's boundary line: vertical distance for
/// top and bottom, horizontal for left and right. Ties go to the edge listed
/// first. An empty edge set yields `None`.
pub fn closest_edge(pointer: Point, rect: &Rect, allowed_edges: &[Edge]) -> Option<Edge> {
    let mut closest = None;
    let mut min = f32::INFINITY;
    for &edge in allowed_edges {
        let distance = edge.distance(pointer, rect);
        if distance < min {
            min = distance;
            closest = Some(edge);
        }
    }
    closest
}

/// Input to [`attach_closest_edge`].
pub struct ClosestEdgeInput<'a> {
    element: &'a dyn BoundingRect,
    pointer: Point,
    allowed_edges: Option<&'a [Edge]>,
}

impl<'a> ClosestEdgeInput<'a> {
    pub fn new(element: &'a dyn BoundingRect, pointer: Point) -> Self {
        Self {
            element,
            pointer,
            allowed_edges: None,
        }
    }

    /// Take the pointer position from a drag event.
    pub fn from_event(element: &'a dyn BoundingRect, event: &DragEvent) -> Self {
        Self::new(element, event.client())
    }

    /// Restrict the candidate edges. Order decides ties. Defaults to top and
    /// bottom.
    pub fn allowed_edges(mut self, edges: &'a [Edge]) -> Self {
        self.allowed_edges = Some(edges);
        self
    }

    /// Fall back to the configured edges instead of top and bottom. An
    /// explicit [`allowed_edges`](Self::allowed_edges) still wins.
    pub fn with_settings(mut self, settings: &'a DndSettings) -> Self {
        if self.allowed_edges.is_none() {
            self.allowed_edges = Some(settings.default_allowed_edges.as_slice());
        }
        self
    }
}

/// Return `data` with its `closestEdge` key set to the nearest allowed edge,
/// or to null when no edges are allowed.
///
/// The element's rectangle is only queried when there is at least one edge to
/// compare.
pub fn attach_closest_edge(mut data: DragData, input: ClosestEdgeInput<'_>) -> DragData {
    let edges = input.allowed_edges.unwrap_or(&DEFAULT_ALLOWED_EDGES);
    let edge = if edges.is_empty() {
        None
    } else {
        closest_edge(input.pointer, &input.element.bounding_rect(), edges)
    };
    let value = edge.map_or(Value::Null, |e| Value::String(e.as_str().to_string()));
    data.insert(CLOSEST_EDGE_KEY.to_string(), value);
    data
}

/// Read back the edge stored by [`attach_closest_edge`].
///
/// Missing data, a missing key, null, and unrecognized values all give `None`.
pub fn extract_closest_edge(data: Option<&DragData>) -> Option<Edge> {
    data?.get(CLOSEST_EDGE_KEY)?.as_str()?.parse().ok()
}
