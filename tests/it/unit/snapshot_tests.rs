//! Snapshot tests using the insta crate.
//!
//! These pin the JSON shapes that cross the crate boundary: the payload keys
//! written by `attach_closest_edge`, and the names used in settings files.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::payload;
use pagedrop::host::{DropEffect, EffectAllowed};
use pagedrop::{ClosestEdgeInput, DragData, Edge, Point, Rect, attach_closest_edge};
use serde_json::json;

const BLOCK: Rect = Rect::new(100.0, 200.0, 0.0, 400.0);

#[test]
fn snapshot_attach_top_edge() {
    let data = attach_closest_edge(
        payload(&[("blockId", json!("hero")), ("index", json!(0))]),
        ClosestEdgeInput::new(&BLOCK, Point::new(200.0, 120.0)),
    );
    insta::assert_json_snapshot!(data, @r#"
    {
      "blockId": "hero",
      "closestEdge": "top",
      "index": 0
    }
    "#);
}

#[test]
fn snapshot_attach_without_edges() {
    let data = attach_closest_edge(
        payload(&[("blockId", json!("footer"))]),
        ClosestEdgeInput::new(&BLOCK, Point::new(200.0, 120.0)).allowed_edges(&[]),
    );
    insta::assert_json_snapshot!(data, @r#"
    {
      "blockId": "footer",
      "closestEdge": null
    }
    "#);
}

#[test]
fn snapshot_attach_horizontal_edges() {
    let edges = [Edge::Left, Edge::Right];
    let data = attach_closest_edge(
        DragData::new(),
        ClosestEdgeInput::new(&BLOCK, Point::new(390.0, 150.0)).allowed_edges(&edges),
    );
    insta::assert_json_snapshot!(data, @r#"
    {
      "closestEdge": "right"
    }
    "#);
}

#[test]
fn snapshot_edge_names() {
    insta::assert_json_snapshot!(Edge::ALL, @r#"
    [
      "top",
      "bottom",
      "left",
      "right"
    ]
    "#);
}

#[test]
fn snapshot_effect_names() {
    let effects = [
        EffectAllowed::None,
        EffectAllowed::CopyMove,
        EffectAllowed::Move,
        EffectAllowed::Uninitialized,
    ];
    insta::assert_json_snapshot!(effects, @r#"
    [
      "none",
      "copyMove",
      "move",
      "uninitialized"
    ]
    "#);
    insta::assert_json_snapshot!(DropEffect::Move, @r#""move""#);
}
