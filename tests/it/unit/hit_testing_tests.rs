//! Unit tests for hit testing on the reference surface.

use crate::helpers::TestCanvasBuilder;
use pagedrop::host::{Element, Surface};
use pagedrop::{Point, Rect};

#[test]
fn test_hit_test_finds_block_under_pointer() {
    let canvas = TestCanvasBuilder::new()
        .with_blocks(&["hero", "features", "footer"])
        .build();

    let hit = canvas.surface.hit_test(canvas.point_in("features", 0.5));
    assert_eq!(hit.as_ref(), Some(canvas.block("features")));
}

#[test]
fn test_gutter_hits_canvas_root() {
    let canvas = TestCanvasBuilder::new().with_blocks(&["hero"]).build();
    assert_eq!(canvas.surface.hit_test(canvas.gutter()), Some(canvas.root.clone()));
    assert_eq!(canvas.surface.hit_test(Point::new(-10.0, -10.0)), None);
}

#[test]
fn test_later_sibling_wins_on_overlap() {
    let root = Element::named("root").with_bounds(Rect::new(0.0, 100.0, 0.0, 100.0));
    let below = Element::named("below").with_bounds(Rect::new(10.0, 60.0, 10.0, 60.0));
    let above = Element::named("above").with_bounds(Rect::new(40.0, 90.0, 40.0, 90.0));
    root.append_child(&below);
    root.append_child(&above);
    let surface = Surface::new(root);

    assert_eq!(surface.hit_test(Point::new(50.0, 50.0)), Some(above));
    assert_eq!(surface.hit_test(Point::new(20.0, 20.0)), Some(below));
}

#[test]
fn test_later_sibling_covers_earlier_siblings_child() {
    let root = Element::named("root").with_bounds(Rect::new(0.0, 100.0, 0.0, 100.0));
    let section = Element::named("section").with_bounds(Rect::new(0.0, 100.0, 0.0, 50.0));
    let button = Element::named("button").with_bounds(Rect::new(10.0, 20.0, 10.0, 20.0));
    let overlay = Element::named("overlay").with_bounds(Rect::new(0.0, 30.0, 0.0, 30.0));
    root.append_child(&section);
    section.append_child(&button);
    root.append_child(&overlay);
    let surface = Surface::new(root);

    // The overlay paints after the whole section subtree
    assert_eq!(surface.hit_test(Point::new(15.0, 15.0)), Some(overlay.clone()));
    assert_eq!(surface.hit_test(Point::new(25.0, 25.0)), Some(overlay));
    assert_eq!(surface.hit_test(Point::new(40.0, 40.0)), Some(section));

    button.remove();
    let root = Element::named("root").with_bounds(Rect::new(0.0, 100.0, 0.0, 100.0));
    let card = Element::named("card").with_bounds(Rect::new(0.0, 100.0, 0.0, 100.0));
    root.append_child(&card);
    card.append_child(&button);
    let surface = Surface::new(root);
    assert_eq!(surface.hit_test(Point::new(15.0, 15.0)), Some(button));
}

#[test]
fn test_detached_element_is_not_hit() {
    let mut canvas = TestCanvasBuilder::new().with_blocks(&["hero", "footer"]).build();
    let point = canvas.point_in("hero", 0.5);
    canvas.block("hero").remove();

    // Stale index entries are skipped until the next reindex
    assert_eq!(canvas.surface.hit_test(point), Some(canvas.root.clone()));
    canvas.surface.reindex();
    assert_eq!(canvas.surface.hit_test(point), Some(canvas.root.clone()));
}

#[test]
fn test_reindex_picks_up_moved_bounds() {
    let mut canvas = TestCanvasBuilder::new().with_blocks(&["hero"]).build();
    let hero = canvas.block("hero").clone();
    hero.set_bounds(Rect::new(500.0, 600.0, 0.0, 100.0));
    canvas.root.set_bounds(Rect::new(0.0, 1000.0, 0.0, 1000.0));
    canvas.surface.reindex();

    assert_eq!(canvas.surface.hit_test(Point::new(50.0, 550.0)), Some(hero));
}

#[test]
fn test_hovered_chain_reaches_root() {
    let canvas = TestCanvasBuilder::new().with_blocks(&["hero"]).build();
    let chain = canvas.surface.hovered_chain(canvas.point_in("hero", 0.25));
    assert_eq!(chain, vec![canvas.block("hero").clone(), canvas.root.clone()]);
}

#[test]
fn test_custom_block_layout() {
    use pagedrop::host::BoundingRect;
    let canvas = TestCanvasBuilder::new()
        .with_blocks(&["a", "b"])
        .with_block_height(50.0)
        .with_gap(10.0)
        .build();

    assert_eq!(canvas.block("b").bounding_rect(), Rect::new(70.0, 120.0, 10.0, 390.0));
    assert_eq!(canvas.surface.hit_test(Point::new(200.0, 65.0)), Some(canvas.root.clone()));
}
