//! Hit Index Module
//!
//! R-tree backed hit testing for the reference surface. Point queries are
//! O(log n) instead of walking every element on the canvas.

use super::element::ElementId;
use crate::types::{Point, Rect};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// An element's bounding box plus its paint order.
#[derive(Debug, Clone, Copy)]
pub struct HitEntry {
    pub element_id: ElementId,
    pub rect: Rect,
    /// Pre-order position in the tree. Descendants paint above their
    /// ancestors and later subtrees above earlier ones.
    pub order: usize,
}

impl HitEntry {
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}

impl RTreeObject for HitEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.rect.left, self.rect.top],
            [self.rect.right, self.rect.bottom],
        )
    }
}

impl PartialEq for HitEntry {
    fn eq(&self, other: &Self) -> bool {
        self.element_id == other.element_id
    }
}

/// Spatial index over element bounds.
pub struct HitIndex {
    tree: RTree<HitEntry>,
    entries: HashMap<ElementId, HitEntry>,
}

impl HitIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, entry: HitEntry) {
        if let Some(old_entry) = self.entries.remove(&entry.element_id) {
            self.tree.remove(&old_entry);
        }
        self.tree.insert(entry);
        self.entries.insert(entry.element_id, entry);
    }

    pub fn remove(&mut self, element_id: ElementId) -> bool {
        if let Some(entry) = self.entries.remove(&element_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Entries containing `point`, topmost first.
    pub fn query_point(&self, point: Point) -> Vec<HitEntry> {
        let envelope = AABB::from_point([point.x, point.y]);
        let mut hits: Vec<HitEntry> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(point))
            .copied()
            .collect();
        hits.sort_by(|a, b| b.order.cmp(&a.order));
        hits
    }

    pub fn topmost(&self, point: Point) -> Option<ElementId> {
        self.query_point(point).first().map(|entry| entry.element_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, entries: I)
    where
        I: Iterator<Item = HitEntry>,
    {
        let entries: Vec<HitEntry> = entries.collect();
        self.entries = entries.iter().map(|e| (e.element_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for HitIndex {
    fn default() -> Self {
        Self::new()
    }
}
