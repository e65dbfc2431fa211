use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// --- Rect ---

#[test]
fn rect_contains_interior_and_top_left_edge() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert!(r.contains(pt(10.0, 20.0)));
    assert!(r.contains(pt(25.0, 50.0)));
}

#[test]
fn rect_excludes_bottom_right_edge_and_outside() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert!(!r.contains(pt(40.0, 30.0)));
    assert!(!r.contains(pt(15.0, 60.0)));
    assert!(!r.contains(pt(9.9, 30.0)));
}

// --- ChromeRegion ---

#[test]
fn top_left_region_resolves_as_is() {
    let region = ChromeRegion { name: "a".into(), anchor: Anchor::TopLeft, rect: Rect::new(5.0, 5.0, 10.0, 10.0) };
    assert_eq!(region.resolve(800.0), Rect::new(5.0, 5.0, 10.0, 10.0));
}

#[test]
fn top_right_region_follows_right_edge() {
    let region = ChromeRegion { name: "back".into(), anchor: Anchor::TopRight, rect: Rect::new(32.0, 24.0, 64.0, 16.0) };
    assert_eq!(region.resolve(800.0), Rect::new(704.0, 24.0, 64.0, 16.0));
    assert_eq!(region.resolve(400.0), Rect::new(304.0, 24.0, 64.0, 16.0));
}

// --- ChromeRegions ---

#[test]
fn empty_regions_hit_nothing() {
    let regions = ChromeRegions::new(800.0);
    assert!(regions.is_empty());
    assert!(!regions.contains(pt(0.0, 0.0)));
}

#[test]
fn hit_returns_region_name() {
    let mut regions = ChromeRegions::new(800.0);
    regions.insert("back", Anchor::TopRight, Rect::new(32.0, 24.0, 64.0, 16.0));
    assert_eq!(regions.hit(pt(710.0, 30.0)), Some("back"));
    assert_eq!(regions.hit(pt(100.0, 30.0)), None);
}

#[test]
fn insert_replaces_same_name() {
    let mut regions = ChromeRegions::new(800.0);
    regions.insert("btn", Anchor::TopLeft, Rect::new(0.0, 0.0, 10.0, 10.0));
    regions.insert("btn", Anchor::TopLeft, Rect::new(100.0, 0.0, 10.0, 10.0));
    assert_eq!(regions.len(), 1);
    assert!(!regions.contains(pt(5.0, 5.0)));
    assert!(regions.contains(pt(105.0, 5.0)));
}

#[test]
fn later_region_is_on_top() {
    let mut regions = ChromeRegions::new(800.0);
    regions.insert("under", Anchor::TopLeft, Rect::new(0.0, 0.0, 50.0, 50.0));
    regions.insert("over", Anchor::TopLeft, Rect::new(10.0, 10.0, 10.0, 10.0));
    assert_eq!(regions.hit(pt(15.0, 15.0)), Some("over"));
    assert_eq!(regions.hit(pt(40.0, 40.0)), Some("under"));
}

#[test]
fn remove_reports_existence() {
    let mut regions = ChromeRegions::new(800.0);
    regions.insert("btn", Anchor::TopLeft, Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(regions.remove("btn"));
    assert!(!regions.remove("btn"));
    assert!(!regions.contains(pt(5.0, 5.0)));
}

#[test]
fn resize_moves_right_anchored_regions() {
    let mut regions = ChromeRegions::new(800.0);
    regions.insert("back", Anchor::TopRight, Rect::new(32.0, 24.0, 64.0, 16.0));
    regions.set_viewport_width(400.0);
    assert!(regions.contains(pt(310.0, 30.0)));
    assert!(!regions.contains(pt(710.0, 30.0)));
}
