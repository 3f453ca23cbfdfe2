//! Core geometry and payload types shared by the host model and the
//! drag-and-drop registrars.

use crate::error::DndError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Associative payload carried by a drag and by drop target descriptors.
///
/// Consumers validate it in their `can_drop` predicate before relying on any
/// particular key.
pub type DragData = serde_json::Map<String, serde_json::Value>;

// ============================================================================
// Geometry
// ============================================================================

/// A position in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding rectangle in client coordinates.
///
/// `top <= bottom` and `left <= right` for any rectangle built through
/// [`Rect::from_origin_size`]; [`Rect::new`] stores the sides as given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Rect {
    pub const fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Build a rectangle from its top-left corner and size.
    pub fn from_origin_size(origin: Point, size: (f32, f32)) -> Self {
        Self {
            top: origin.y,
            bottom: origin.y + size.1.max(0.0),
            left: origin.x,
            right: origin.x + size.0.max(0.0),
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

// ============================================================================
// Edges
// ============================================================================

/// One side of a target's bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }

    /// Absolute distance from `pointer` to this edge's boundary line of `rect`.
    #[inline]
    pub fn distance(&self, pointer: Point, rect: &Rect) -> f32 {
        match self {
            Edge::Top => (pointer.y - rect.top).abs(),
            Edge::Bottom => (pointer.y - rect.bottom).abs(),
            Edge::Left => (pointer.x - rect.left).abs(),
            Edge::Right => (pointer.x - rect.right).abs(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Edge {
    type Err = DndError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Edge::Top),
            "bottom" => Ok(Edge::Bottom),
            "left" => Ok(Edge::Left),
            "right" => Ok(Edge::Right),
            other => Err(DndError::UnknownEdge(other.to_string())),
        }
    }
}
