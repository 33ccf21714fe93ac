//! Property tests: boundary ordering and write/read round trips over
//! randomly sized boxes.

use quickcheck_macros::quickcheck;
use wombat_browser::HeadlessHost;
use wombat_dom::NodeId;
use wombat_geometry::{Accessor, Geometry, Target};

const SIZE_ACCESSORS: [Accessor; 6] = [
    Accessor::Width,
    Accessor::Height,
    Accessor::InnerWidth,
    Accessor::InnerHeight,
    Accessor::OuterWidth,
    Accessor::OuterHeight,
];

/// Helper: one `div` with uniform padding and border.
fn sized_box(padding: u8, border: u8, size: u16, border_box: bool) -> (HeadlessHost, NodeId) {
    let sizing = if border_box { "border-box" } else { "content-box" };
    let style = format!(
        "box-sizing: {sizing}; padding: {padding}px; border: {border}px solid; width: {size}px; height: {size}px"
    );
    let mut host = HeadlessHost::new(800.0, 600.0);
    let body = host.body_element();
    let el = host.append_element(body, "div", &style).expect("body is an element");
    (host, el)
}

#[quickcheck]
fn prop_boundaries_are_ordered(padding: u8, border: u8, size: u16, border_box: bool) -> bool {
    let (mut host, el) = sized_box(padding, border, size, border_box);
    let mut geometry = Geometry::new(&mut host);
    let el = Target::Element(el);

    let width = geometry.width(el, None).unwrap();
    let inner = geometry.inner_width(el, None).unwrap();
    let outer = geometry.outer_width(el, None).unwrap();
    let height = geometry.height(el, None).unwrap();
    let outer_height = geometry.outer_height(el, None).unwrap();

    width >= 0.0
        && width <= inner
        && inner <= outer
        && outer - width == 2.0 * (f64::from(padding) + f64::from(border))
        && outer_height - height == outer - width
}

#[quickcheck]
fn prop_size_write_reads_back(padding: u8, border: u8, extra: u16, border_box: bool, which: u8) -> bool {
    let accessor = SIZE_ACCESSORS[usize::from(which) % SIZE_ACCESSORS.len()];
    let (mut host, el) = sized_box(padding, border, 50, border_box);
    let mut geometry = Geometry::new(&mut host);
    let el = Target::Element(el);

    // Large enough that no boundary needs a negative CSS size.
    let value = 2.0 * (f64::from(padding) + f64::from(border)) + f64::from(extra);

    geometry.access(accessor, el, Some(value)).unwrap() == value
        && geometry.access(accessor, el, None).unwrap() == value
}

#[quickcheck]
fn prop_sizing_mode_does_not_change_reads_of_same_box(padding: u8, border: u8, content: u8) -> bool {
    let chrome = 2 * (u16::from(padding) + u16::from(border));
    let content_box = sized_box(padding, border, u16::from(content), false);
    let border_box = sized_box(padding, border, u16::from(content) + chrome, true);

    SIZE_ACCESSORS.iter().all(|&accessor| {
        let (mut a, a_el) = content_box.clone();
        let (mut b, b_el) = border_box.clone();
        Geometry::new(&mut a).access(accessor, Target::Element(a_el), None).unwrap()
            == Geometry::new(&mut b).access(accessor, Target::Element(b_el), None).unwrap()
    })
}
