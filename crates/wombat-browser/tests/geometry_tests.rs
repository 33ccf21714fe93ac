//! Integration tests for the geometry accessors against the headless host.

use wombat_browser::{HeadlessHost, HostError};
use wombat_dom::NodeId;
use wombat_geometry::{Accessor, Geometry, GeometrySnapshot, StyleReader, Target};

/// Helper: an 800 × 600 document with one `div` in the body.
fn host_with(style: &str) -> (HeadlessHost, NodeId) {
    let mut host = HeadlessHost::new(800.0, 600.0);
    let body = host.body_element();
    let el = host.append_element(body, "div", style).expect("body is an element");
    (host, el)
}

const CONTENT_BOX: &str = "width: 100px; height: 40px; padding: 10px; border: 5px solid";
const BORDER_BOX: &str = "box-sizing: border-box; width: 130px; height: 70px; padding: 10px; border: 5px solid";

// --- sizes ---

#[test]
fn test_content_box_sizes_at_each_boundary() {
    let (mut host, el) = host_with(CONTENT_BOX);
    let mut geometry = Geometry::new(&mut host);
    let el = Target::Element(el);

    assert_eq!(geometry.width(el, None).unwrap(), 100.0);
    assert_eq!(geometry.inner_width(el, None).unwrap(), 120.0);
    assert_eq!(geometry.outer_width(el, None).unwrap(), 130.0);
    assert_eq!(geometry.height(el, None).unwrap(), 40.0);
    assert_eq!(geometry.inner_height(el, None).unwrap(), 60.0);
    assert_eq!(geometry.outer_height(el, None).unwrap(), 70.0);
}

#[test]
fn test_border_box_reads_match_content_box_reads() {
    let (mut host, el) = host_with(BORDER_BOX);
    let mut geometry = Geometry::new(&mut host);
    let el = Target::Element(el);

    assert_eq!(geometry.width(el, None).unwrap(), 100.0);
    assert_eq!(geometry.inner_width(el, None).unwrap(), 120.0);
    assert_eq!(geometry.outer_width(el, None).unwrap(), 130.0);
    assert_eq!(geometry.height(el, None).unwrap(), 40.0);
    assert_eq!(geometry.outer_height(el, None).unwrap(), 70.0);
}

#[test]
fn test_size_writes_round_trip_in_both_sizing_modes() {
    let cases = [
        Accessor::Width,
        Accessor::Height,
        Accessor::InnerWidth,
        Accessor::InnerHeight,
        Accessor::OuterWidth,
        Accessor::OuterHeight,
    ];

    for style in [CONTENT_BOX, BORDER_BOX] {
        for accessor in cases {
            let (mut host, el) = host_with(style);
            let mut geometry = Geometry::new(&mut host);
            let el = Target::Element(el);

            assert_eq!(geometry.access(accessor, el, Some(257.5)).unwrap(), 257.5);
            assert_eq!(
                geometry.access(accessor, el, None).unwrap(),
                257.5,
                "{accessor} under `{style}`"
            );
        }
    }
}

#[test]
fn test_outer_width_write_under_content_box_sets_css_width() {
    let (mut host, el) = host_with(CONTENT_BOX);
    let _ = Geometry::new(&mut host).outer_width(Target::Element(el), Some(200.0)).unwrap();

    assert_eq!(host.inline_style(el, "width").unwrap().as_deref(), Some("170px"));
}

#[test]
fn test_inner_width_write_under_border_box_sets_css_width() {
    let (mut host, el) = host_with(BORDER_BOX);
    let _ = Geometry::new(&mut host).inner_width(Target::Element(el), Some(200.0)).unwrap();

    assert_eq!(host.inline_style(el, "width").unwrap().as_deref(), Some("210px"));
}

#[test]
fn test_unparsable_padding_counts_as_zero() {
    let (mut host, el) = host_with("width: 100px; padding-left: auto; padding-right: 4px");
    let mut geometry = Geometry::new(&mut host);

    assert_eq!(geometry.inner_width(Target::Element(el), None).unwrap(), 104.0);
}

#[test]
fn test_unrendered_element_measures_zero() {
    let (mut host, el) = host_with("display: none; width: 100px");
    let mut geometry = Geometry::new(&mut host);

    assert_eq!(geometry.outer_width(Target::Element(el), None).unwrap(), 0.0);
    assert_eq!(geometry.offset_top(Target::Element(el), None).unwrap(), 0.0);
}

#[test]
fn test_window_size_is_the_viewport() {
    let (mut host, _) = host_with("height: 5000px");
    let mut geometry = Geometry::new(&mut host);

    assert_eq!(geometry.width(Target::Window, None).unwrap(), 800.0);
    assert_eq!(geometry.outer_width(Target::Window, None).unwrap(), 800.0);
    assert_eq!(geometry.inner_height(Target::Window, None).unwrap(), 600.0);
}

#[test]
fn test_legacy_window_size_falls_back_to_root_client_size() {
    let mut host = HeadlessHost::legacy(1024.0, 768.0);
    let mut geometry = Geometry::new(&mut host);

    assert_eq!(geometry.width(Target::Window, None).unwrap(), 1024.0);
    assert_eq!(geometry.height(Target::Window, None).unwrap(), 768.0);
}

#[test]
fn test_document_size_covers_overflowing_content() {
    let (mut host, _) = host_with("width: 2000px; height: 3000px");
    let mut geometry = Geometry::new(&mut host);

    assert_eq!(geometry.width(Target::Document, None).unwrap(), 2000.0);
    assert_eq!(geometry.outer_height(Target::Document, None).unwrap(), 3000.0);
}

#[test]
fn test_short_document_is_at_least_the_viewport() {
    let (mut host, _) = host_with("height: 10px");
    let mut geometry = Geometry::new(&mut host);

    assert_eq!(geometry.height(Target::Document, None).unwrap(), 600.0);
}

#[test]
fn test_window_and_document_size_writes_are_ignored() {
    let (mut host, _) = host_with("");
    let mut geometry = Geometry::new(&mut host);

    assert_eq!(geometry.width(Target::Window, Some(10.0)).unwrap(), 10.0);
    assert_eq!(geometry.outer_height(Target::Document, Some(10.0)).unwrap(), 10.0);
    assert_eq!(geometry.width(Target::Window, None).unwrap(), 800.0);
    assert_eq!(geometry.outer_height(Target::Document, None).unwrap(), 600.0);
}

// --- scrolling ---

#[test]
fn test_window_scroll_write_preserves_other_axis() {
    let (mut host, _) = host_with("width: 2000px; height: 3000px");
    let mut geometry = Geometry::new(&mut host);

    let _ = geometry.scroll_top(Target::Window, Some(100.0)).unwrap();
    let _ = geometry.scroll_left(Target::Window, Some(30.0)).unwrap();

    assert_eq!(geometry.scroll_top(Target::Window, None).unwrap(), 100.0);
    assert_eq!(geometry.scroll_left(Target::Document, None).unwrap(), 30.0);
    assert_eq!(geometry.host().window().scroll_y(), 100.0);
}

#[test]
fn test_window_scroll_clamps_to_document() {
    let (mut host, _) = host_with("height: 3000px");
    let mut geometry = Geometry::new(&mut host);

    assert_eq!(geometry.scroll_top(Target::Document, Some(99_999.0)).unwrap(), 99_999.0);
    assert_eq!(geometry.scroll_top(Target::Window, None).unwrap(), 2400.0);
    assert_eq!(geometry.scroll_left(Target::Window, None).unwrap(), 0.0);
}

#[test]
fn test_legacy_window_scroll_reads_root_element() {
    let mut host = HeadlessHost::legacy(800.0, 600.0);
    let body = host.body_element();
    let _ = host.append_element(body, "div", "height: 3000px").unwrap();
    let mut geometry = Geometry::new(&mut host);

    let _ = geometry.scroll_top(Target::Window, Some(250.0)).unwrap();

    assert_eq!(geometry.scroll_top(Target::Window, None).unwrap(), 250.0);
}

#[test]
fn test_element_scroll_offsets() {
    let (mut host, scroller) = host_with("width: 100px; height: 100px");
    let _ = host.append_element(scroller, "div", "width: 300px; height: 400px").unwrap();
    let mut geometry = Geometry::new(&mut host);
    let scroller = Target::Element(scroller);

    assert_eq!(geometry.scroll_top(scroller, None).unwrap(), 0.0);
    let _ = geometry.scroll_top(scroller, Some(50.0)).unwrap();
    assert_eq!(geometry.scroll_top(scroller, None).unwrap(), 50.0);

    let _ = geometry.scroll_left(scroller, Some(1000.0)).unwrap();
    assert_eq!(geometry.scroll_left(scroller, None).unwrap(), 200.0);
    assert_eq!(geometry.scroll_top(scroller, None).unwrap(), 50.0);
}

#[test]
fn test_scroll_extent_reads_and_ignores_writes() {
    let (mut host, scroller) = host_with("width: 100px; height: 100px");
    let _ = host.append_element(scroller, "div", "width: 300px; height: 400px").unwrap();
    let mut geometry = Geometry::new(&mut host);
    let scroller = Target::Element(scroller);

    assert_eq!(geometry.scroll_width(scroller, None).unwrap(), 300.0);
    assert_eq!(geometry.scroll_height(scroller, None).unwrap(), 400.0);

    assert_eq!(geometry.scroll_width(scroller, Some(5.0)).unwrap(), 5.0);
    assert_eq!(geometry.scroll_width(scroller, None).unwrap(), 300.0);
    assert_eq!(geometry.scroll_height(Target::Window, None).unwrap(), 600.0);
}

// --- position ---

#[test]
fn test_offset_top_write_shifts_static_element() {
    let (mut host, _) = host_with("height: 50px");
    let body = host.body_element();
    let el = host.append_element(body, "p", "height: 20px").unwrap();
    let mut geometry = Geometry::new(&mut host);
    let target = Target::Element(el);

    assert_eq!(geometry.offset_top(target, None).unwrap(), 50.0);
    assert!(!geometry.positioned(el).unwrap());

    assert_eq!(geometry.offset_top(target, Some(80.0)).unwrap(), 80.0);

    assert_eq!(geometry.offset_top(target, None).unwrap(), 80.0);
    assert!(geometry.positioned(el).unwrap());
    assert_eq!(host.computed_style(el, "position").unwrap(), "relative");
    assert_eq!(host.computed_style(el, "top").unwrap(), "30px");
}

#[test]
fn test_offset_left_write_keeps_existing_positioning() {
    let (mut host, el) = host_with("position: absolute; left: 40px; top: 10px; width: 10px; height: 10px");
    let mut geometry = Geometry::new(&mut host);
    let target = Target::Element(el);

    assert_eq!(geometry.offset_left(target, None).unwrap(), 40.0);
    let _ = geometry.offset_left(target, Some(15.0)).unwrap();

    assert_eq!(geometry.offset_left(target, None).unwrap(), 15.0);
    assert_eq!(host.computed_style(el, "position").unwrap(), "absolute");
}

#[test]
fn test_offset_top_write_on_absolute_element_without_declared_top() {
    let (mut host, _) = host_with("height: 50px");
    let body = host.body_element();
    let el = host.append_element(body, "div", "position: absolute; height: 10px").unwrap();
    let mut geometry = Geometry::new(&mut host);
    let target = Target::Element(el);

    assert_eq!(geometry.offset_top(target, None).unwrap(), 50.0);
    let _ = geometry.offset_top(target, Some(80.0)).unwrap();

    assert_eq!(geometry.offset_top(target, None).unwrap(), 80.0);
    assert_eq!(host.computed_style(el, "top").unwrap(), "80px");
}

#[test]
fn test_offset_top_write_on_element_shifted_by_bottom() {
    let (mut host, _) = host_with("height: 50px");
    let body = host.body_element();
    let el = host.append_element(body, "div", "position: relative; bottom: 10px; height: 10px").unwrap();
    assert_eq!(host.computed_style(el, "top").unwrap(), "-10px");
    assert_eq!(host.computed_style(el, "bottom").unwrap(), "10px");

    let mut geometry = Geometry::new(&mut host);
    let target = Target::Element(el);

    assert_eq!(geometry.offset_top(target, None).unwrap(), 40.0);
    let _ = geometry.offset_top(target, Some(80.0)).unwrap();

    assert_eq!(geometry.offset_top(target, None).unwrap(), 80.0);
}

#[test]
fn test_static_element_insets_resolve_as_declared() {
    let (host, el) = host_with("top: 12px");

    assert_eq!(host.computed_style(el, "top").unwrap(), "12px");
    assert_eq!(host.computed_style(el, "left").unwrap(), "auto");
}

#[test]
fn test_offset_is_relative_to_positioned_ancestor() {
    let (mut host, container) =
        host_with("position: relative; margin-top: 100px; border: 2px solid; padding: 8px");
    let child = host.append_element(container, "div", "height: 10px").unwrap();
    let mut geometry = Geometry::new(&mut host);

    assert_eq!(geometry.offset_top(Target::Element(child), None).unwrap(), 8.0);
    assert_eq!(geometry.offset_left(Target::Element(child), None).unwrap(), 8.0);
    assert_eq!(geometry.offset_top(Target::Element(container), None).unwrap(), 100.0);
}

#[test]
fn test_client_position_includes_window_scroll() {
    let (mut host, _) = host_with("height: 200px");
    let body = host.body_element();
    let el = host.append_element(body, "div", "height: 20px").unwrap();
    let _ = host.append_element(body, "div", "height: 2000px").unwrap();
    let mut geometry = Geometry::new(&mut host);
    let target = Target::Element(el);

    let _ = geometry.scroll_top(Target::Window, Some(100.0)).unwrap();
    assert_eq!(geometry.client_top(target, None).unwrap(), 200.0);

    let _ = geometry.client_top(target, Some(250.0)).unwrap();
    assert_eq!(geometry.client_top(target, None).unwrap(), 250.0);
    assert_eq!(geometry.client_left(target, None).unwrap(), 0.0);
}

#[test]
fn test_client_position_follows_scrolled_container() {
    let (mut host, scroller) = host_with("width: 100px; height: 100px");
    let child = host.append_element(scroller, "div", "width: 300px; height: 400px").unwrap();
    let pinned = host.append_element(scroller, "div", "position: absolute; top: 10px; height: 5px").unwrap();
    let mut geometry = Geometry::new(&mut host);
    let child = Target::Element(child);

    assert_eq!(geometry.client_top(child, None).unwrap(), 0.0);

    let _ = geometry.scroll_top(Target::Element(scroller), Some(50.0)).unwrap();
    let _ = geometry.scroll_left(Target::Element(scroller), Some(20.0)).unwrap();

    assert_eq!(geometry.client_top(child, None).unwrap(), -50.0);
    assert_eq!(geometry.client_left(child, None).unwrap(), -20.0);
    assert_eq!(geometry.outer_height(child, None).unwrap(), 400.0);
    assert_eq!(geometry.offset_top(child, None).unwrap(), 0.0);

    // Its containing block is the viewport, outside the scroller.
    assert_eq!(geometry.client_top(Target::Element(pinned), None).unwrap(), 10.0);
}

#[test]
fn test_window_and_document_positions_are_zero() {
    let (mut host, _) = host_with("height: 3000px");
    let mut geometry = Geometry::new(&mut host);
    let _ = geometry.scroll_top(Target::Window, Some(100.0)).unwrap();

    assert_eq!(geometry.offset_top(Target::Window, None).unwrap(), 0.0);
    assert_eq!(geometry.client_left(Target::Document, None).unwrap(), 0.0);
    assert_eq!(geometry.offset_top(Target::Document, Some(9.0)).unwrap(), 9.0);
    assert_eq!(geometry.offset_top(Target::Document, None).unwrap(), 0.0);
}

#[test]
fn test_positioned_matches_position_keywords() {
    for (style, expected) in [
        ("position: absolute", true),
        ("position: fixed", true),
        ("position: relative", true),
        ("position: static", false),
        ("position: sticky", false),
        ("", false),
    ] {
        let (mut host, el) = host_with(style);
        assert_eq!(Geometry::new(&mut host).positioned(el).unwrap(), expected, "`{style}`");
    }
}

// --- surface ---

#[test]
fn test_accessor_by_name_including_misspelling() {
    let (mut host, el) = host_with("border-left: 3px solid; width: 10px");
    let mut geometry = Geometry::new(&mut host);

    let accessor: Accessor = "clienttLeft".parse().unwrap();
    assert_eq!(accessor, Accessor::ClientLeft);
    assert_eq!(geometry.access(accessor, Target::Element(el), None).unwrap(), 0.0);

    let outer: Accessor = "outerWidth".parse().unwrap();
    assert_eq!(geometry.access(outer, Target::Element(el), None).unwrap(), 13.0);
}

#[test]
fn test_snapshot_serializes_with_camel_case_names() {
    let (host, el) = host_with(CONTENT_BOX);

    let snapshot = GeometrySnapshot::capture(&host, Target::Element(el)).unwrap();
    assert_eq!(snapshot.get(Accessor::InnerWidth), 120.0);

    let json = serde_json::to_value(snapshot).unwrap();
    assert_eq!(json["outerWidth"].as_f64(), Some(130.0));
    assert_eq!(json["offsetTop"].as_f64(), Some(0.0));
    assert_eq!(json["scrollHeight"].as_f64(), Some(60.0));
}

// --- errors ---

#[test]
fn test_unknown_node_error_propagates() {
    let (mut host, _) = host_with("");
    let mut geometry = Geometry::new(&mut host);
    let ghost = Target::Element(NodeId(999));

    assert_eq!(geometry.width(ghost, None), Err(HostError::UnknownNode(NodeId(999))));
    assert_eq!(geometry.offset_top(ghost, Some(1.0)), Err(HostError::UnknownNode(NodeId(999))));
}

#[test]
fn test_non_element_error_propagates() {
    let (mut host, el) = host_with("");
    let text = host.append_text(el, "hello").unwrap();
    let mut geometry = Geometry::new(&mut host);

    assert_eq!(
        geometry.scroll_top(Target::Element(text), None),
        Err(HostError::NotAnElement(text))
    );
    assert_eq!(
        geometry.outer_width(Target::Element(NodeId::ROOT), None),
        Err(HostError::NotAnElement(NodeId::ROOT))
    );
    assert!(matches!(
        host.set_style(text, "width", "1px"),
        Err(HostError::NotAnElement(_))
    ));
}
