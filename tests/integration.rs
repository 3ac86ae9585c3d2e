//! Integration tests for tuibox.
//!
//! These tests exercise the public API from outside the crate: style strings
//! feed components, the screen composes them, hit testing finds them again,
//! and the driver turns frame diffs into terminal output.

use std::error::Error;

use tuibox::dom::{DomError, NodeListError};
use tuibox::geometry::Coordinates;
use tuibox::render::{CellUpdate, Compositor, CompositorError, Driver};
use tuibox::style::{Orientation, StyleError};
use tuibox::testing::{area_to_string, fill_component, rows_of};
use tuibox::widgets::Label;
use tuibox::{Component, Dom, Screen, Style};

fn style(source: &str) -> Style {
    source.parse().unwrap()
}

fn label(source: &str, text: &str) -> Component {
    Component::widget(style(source), Label::new(text)).unwrap()
}

// ---------------------------------------------------------------------------
// Style strings to components
// ---------------------------------------------------------------------------

#[test]
fn test_styled_label_renders_inside_border_and_padding() {
    let mut screen = Screen::new(5, 12).unwrap();
    screen
        .add(label(
            "rows=5, columns=12, border=thin, padding_left=1,
             text_align=left, vertical_align=top",
            "hello world",
        ))
        .unwrap();
    screen.render().unwrap();

    insta::assert_snapshot!(screen.frame().unwrap().to_string(), @r"
    ┌──────────┐
    │ hello    │
    │ world    │
    │          │
    └──────────┘
    ");
}

#[test]
fn test_label_alignment_comes_from_component_style() {
    let mut screen = Screen::new(1, 6).unwrap();
    screen
        .add(label("rows=1, columns=6, text_align=left", "ab"))
        .unwrap();
    screen.render().unwrap();
    assert_eq!(screen.frame().unwrap().to_string(), "ab    ");
}

#[test]
fn test_style_errors_surface_from_parse() {
    assert_eq!(
        "rows=3, colour=red".parse::<Style>(),
        Err(StyleError::UnknownAttribute("colour".into()))
    );
    assert!(matches!(
        "display=sideways".parse::<Style>(),
        Err(StyleError::InvalidValue { .. })
    ));
    assert!(matches!(
        "rows=3 columns=3".parse::<Style>(),
        Err(StyleError::Syntax { .. })
    ));
}

#[test]
fn test_border_too_large_for_style_fails() {
    assert!(Component::container(style("rows=2, columns=2, border=double")).is_err());
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

#[test]
fn test_block_and_inline_layout() {
    let mut dom = Dom::new();
    let root = dom.insert(fill_component(style("rows=6, columns=8"), '.').unwrap());
    let toolbar = dom
        .insert_container(
            fill_component(style("rows=2, columns=8, display=inline"), '-').unwrap(),
            [
                fill_component(style("rows=2, columns=3"), 'A').unwrap(),
                fill_component(style("rows=1, columns=2"), 'B').unwrap(),
            ],
        )
        .unwrap();
    let body = dom.insert(fill_component(style("rows=3, columns=8"), '#').unwrap());
    dom.append_child(root, toolbar).unwrap();
    dom.append_child(root, body).unwrap();

    let frame = Compositor::new().compose(&mut dom, root).unwrap();
    assert_eq!(
        frame.lines(),
        rows_of(&[
            (1, "AAABB---"),
            (1, "AAA-----"),
            (3, "########"),
            (1, "........"),
        ])
    );
    assert_eq!(
        dom.get(toolbar).unwrap().style().compositor_info.orientation,
        Orientation::Inline
    );
}

#[test]
fn test_overflow_reports_insufficient_area() {
    let mut screen = Screen::new(4, 10).unwrap();
    for _ in 0..3 {
        screen.add(label("rows=2, columns=10", "x")).unwrap();
    }

    let err = screen.render().unwrap_err();
    assert!(matches!(err, CompositorError::InsufficientArea { .. }));
    assert_eq!(err.to_string(), "component area isn't large enough");
    assert!(err.source().is_some());
    assert!(screen.frame().is_none());
}

#[test]
fn test_pre_hook_updates_label_each_frame() {
    let mut screen = Screen::new(1, 9).unwrap();
    let counter = screen.add(label("rows=1, columns=9, text_align=left", "")).unwrap();

    let mut frames = 0;
    screen.compositor.add_pre_hook(move |dom: &mut Dom| {
        frames += 1;
        if let Some(label) = dom.widget_mut::<Label>(counter) {
            label.set_text(format!("frame {frames}"));
        }
    });

    screen.render().unwrap();
    assert_eq!(area_to_string(screen.frame().unwrap()), "frame 1");
    let updates = screen.render().unwrap();
    assert_eq!(area_to_string(screen.frame().unwrap()), "frame 2");
    assert_eq!(updates, vec![CellUpdate { row: 0, column: 6, ch: '2' }]);
}

// ---------------------------------------------------------------------------
// Tree editing
// ---------------------------------------------------------------------------

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut screen = Screen::new(4, 10).unwrap();
    screen
        .add(label("rows=1, columns=10", "a").with_id("status"))
        .unwrap();
    assert_eq!(
        screen.add(label("rows=1, columns=10", "b").with_id("status")),
        Err(DomError::Children(NodeListError::DuplicateId("status".into())))
    );
    let found = screen.dom.child_with_id(screen.root(), "status").unwrap();
    assert_eq!(screen.dom.widget::<Label>(found).unwrap().text(), "a");
}

#[test]
fn test_removed_child_disappears_from_next_frame() {
    let mut screen = Screen::new(2, 4).unwrap();
    let top = screen.add(label("rows=1, columns=4", "top")).unwrap();
    screen.add(label("rows=1, columns=4", "bot")).unwrap();
    screen.render().unwrap();
    assert_eq!(area_to_string(screen.frame().unwrap()), "top\nbot");

    screen.dom.remove(top);
    screen.render().unwrap();
    assert_eq!(area_to_string(screen.frame().unwrap()), "bot\n");
}

// ---------------------------------------------------------------------------
// Hit testing and focus
// ---------------------------------------------------------------------------

#[test]
fn test_find_component_after_render() {
    let mut screen = Screen::new(6, 10).unwrap();
    let header = screen.add(label("rows=1, columns=10", "title")).unwrap();
    let panel = screen
        .add(fill_component(style("rows=4, columns=10, padding=1"), ' ').unwrap())
        .unwrap();
    let inner = screen.dom.insert(label("rows=1, columns=4", "ok"));
    screen.dom.append_child(panel, inner).unwrap();
    screen.render().unwrap();

    let root = screen.root();
    assert_eq!(screen.dom.find_component(root, Coordinates::new(6, 0)), None);
    assert_eq!(screen.dom.find_component(root, Coordinates::new(0, 9)), Some(header));
    assert_eq!(screen.dom.find_component(root, Coordinates::new(2, 1)), Some(inner));
    assert_eq!(screen.dom.find_component(root, Coordinates::new(2, 6)), Some(panel));
    assert_eq!(screen.dom.find_component(root, Coordinates::new(5, 0)), Some(root));
}

#[test]
fn test_steal_focus_panel_claims_clicks() {
    let mut screen = Screen::new(3, 6).unwrap();
    let panel = screen
        .add(fill_component(style("rows=3, columns=6, steal_focus=true"), ' ').unwrap())
        .unwrap();
    let inner = screen.dom.insert(label("rows=1, columns=6", "btn"));
    screen.dom.append_child(panel, inner).unwrap();
    screen.render().unwrap();

    assert_eq!(screen.focus_at(Coordinates::new(0, 0)), Some(panel));
    assert!(screen.dom.get(panel).unwrap().has_focus());
    assert!(!screen.dom.get(inner).unwrap().has_focus());
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

#[test]
fn test_driver_writes_frame_updates() {
    let mut screen = Screen::new(1, 3).unwrap();
    screen.add(label("rows=1, columns=3", "hey")).unwrap();
    let updates = screen.render().unwrap();
    assert_eq!(updates.len(), 3);

    let mut driver = Driver::with_writer(Vec::new());
    driver.apply_updates(&updates).unwrap();
    driver.flush().unwrap();
    let output = String::from_utf8(driver.into_inner()).unwrap();
    assert_eq!(output, "\x1b[1;1Hh\x1b[1;2He\x1b[1;3Hy");
}
