use coreui_dom::layout::layout;
use coreui_dom::{
    ancestor_path, collect_focusable, hit_test, hit_test_focusable, Element, FocusState, Position,
    Rect, Size,
};

fn form() -> Element {
    Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::box_()
                .id("select")
                .child(Element::text("Choose").id("select-trigger").clickable(true).focusable(true))
                .child(
                    Element::col()
                        .id("select-menu")
                        .position(Position::Absolute)
                        .top(1)
                        .left(0)
                        .child(Element::text("Apple").id("opt-0").clickable(true))
                        .child(Element::text("Banana").id("opt-1").clickable(true)),
                ),
        )
        .child(Element::text("Submit").id("submit").clickable(true).focusable(true))
        .child(Element::text("Off").id("off").focusable(true).disabled(true))
}

#[test]
fn test_hit_prefers_overlay_over_flow_sibling() {
    let root = form();
    let result = layout(&root, Rect::from_size(20, 5));

    assert_eq!(hit_test(&result, &root, 0, 1).as_deref(), Some("opt-0"));
    assert_eq!(hit_test(&result, &root, 0, 2).as_deref(), Some("opt-1"));
    assert_eq!(hit_test(&result, &root, 0, 0).as_deref(), Some("select-trigger"));
}

#[test]
fn test_hit_misses_return_none() {
    let root = form();
    let result = layout(&root, Rect::from_size(20, 5));

    assert_eq!(hit_test(&result, &root, 19, 4), None);
    assert_eq!(hit_test_focusable(&result, &root, 0, 3), None);
}

#[test]
fn test_ancestor_path() {
    let root = form();
    assert_eq!(
        ancestor_path(&root, "opt-1"),
        vec!["root", "select", "select-menu", "opt-1"]
    );
    assert!(ancestor_path(&root, "missing").is_empty());
}

#[test]
fn test_focus_order_skips_disabled() {
    let root = form();
    assert_eq!(collect_focusable(&root), vec!["select-trigger", "submit"]);
}

#[test]
fn test_focus_cycles() {
    let root = form();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root).as_deref(), Some("select-trigger"));
    assert_eq!(focus.focus_next(&root).as_deref(), Some("submit"));
    assert_eq!(focus.focus_next(&root).as_deref(), Some("select-trigger"));
    assert_eq!(focus.focus_prev(&root).as_deref(), Some("submit"));
}

#[test]
fn test_validate_drops_vanished_focus() {
    let root = form();
    let mut focus = FocusState::new();
    focus.focus("gone");

    assert_eq!(focus.validate(&root).as_deref(), Some("gone"));
    assert_eq!(focus.focused(), None);
}
