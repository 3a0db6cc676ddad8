use coreui_dom::layout::layout;
use coreui_dom::{Border, Direction, Edges, Element, Justify, Position, Rect, Size, Style, Wrap};

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::text("one").id("a"))
        .child(Element::text("two").id("b"));

    let result = layout(&root, Rect::new(0, 0, 20, 10));

    assert_eq!(result["root"], Rect::new(0, 0, 20, 10));
    assert_eq!(result["a"], Rect::new(0, 0, 3, 1));
    assert_eq!(result["b"], Rect::new(0, 1, 3, 1));
}

#[test]
fn test_row_gap_and_padding() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(1))
        .gap(2)
        .child(Element::text("ab").id("a"))
        .child(Element::text("cd").id("b"));

    let result = layout(&root, Rect::new(0, 0, 20, 5));

    assert_eq!(result["a"], Rect::new(1, 1, 2, 1));
    assert_eq!(result["b"], Rect::new(5, 1, 2, 1));
}

#[test]
fn test_fill_and_flex_share_remaining_space() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(30))
        .height(Size::Fixed(1))
        .child(Element::box_().id("fixed").width(Size::Fixed(6)))
        .child(Element::box_().id("one").width(Size::Flex(1)))
        .child(Element::box_().id("two").width(Size::Flex(2)));

    let result = layout(&root, Rect::new(0, 0, 30, 1));

    assert_eq!(result["fixed"].width, 6);
    assert_eq!(result["one"].width, 8);
    assert_eq!(result["two"].width, 16);
    assert_eq!(result["two"].x, 14);
}

#[test]
fn test_border_shrinks_content_area() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Rounded))
        .child(Element::text("hi").id("t"));

    let result = layout(&root, Rect::new(0, 0, 40, 10));

    assert_eq!(result["t"], Rect::new(1, 1, 2, 1));
}

#[test]
fn test_justify_space_between() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .justify(Justify::SpaceBetween)
        .child(Element::text("a").id("a"))
        .child(Element::text("b").id("b"));

    let result = layout(&root, Rect::new(0, 0, 10, 1));

    assert_eq!(result["a"].x, 0);
    assert_eq!(result["b"].x, 9);
}

#[test]
fn test_reverse_direction_flips_order() {
    let root = Element::row()
        .id("root")
        .direction(Direction::RowReverse)
        .child(Element::text("a").id("a"))
        .child(Element::text("b").id("b"));

    let result = layout(&root, Rect::new(0, 0, 10, 1));

    assert_eq!(result["b"].x, 0);
    assert_eq!(result["a"].x, 1);
}

#[test]
fn test_wrapped_row_breaks_lines() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(7))
        .height(Size::Fixed(5))
        .wrap(Wrap::Wrap)
        .gap(1)
        .child(Element::text("aaa").id("a"))
        .child(Element::text("bbb").id("b"))
        .child(Element::text("ccc").id("c"));

    let result = layout(&root, Rect::new(0, 0, 7, 5));

    assert_eq!(result["a"], Rect::new(0, 0, 3, 1));
    assert_eq!(result["b"], Rect::new(4, 0, 3, 1));
    assert_eq!(result["c"], Rect::new(0, 2, 3, 1));
}

#[test]
fn test_absolute_child_is_relative_to_parent_and_out_of_flow() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::text("above").id("above"))
        .child(
            Element::box_()
                .id("anchor")
                .child(Element::text("trigger").id("trigger"))
                .child(
                    Element::text("menu")
                        .id("menu")
                        .position(Position::Absolute)
                        .top(1)
                        .left(0),
                ),
        )
        .child(Element::text("below").id("below"));

    let result = layout(&root, Rect::new(0, 0, 40, 10));

    assert_eq!(result["anchor"].height, 1);
    assert_eq!(result["below"].y, 2);
    assert_eq!(result["menu"], Rect::new(0, 2, 4, 1));
}

#[test]
fn test_absolute_child_is_kept_on_screen() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::text("wide popup")
                .id("popup")
                .position(Position::Absolute)
                .left(15)
                .top(0),
        );

    let result = layout(&root, Rect::new(0, 0, 20, 5));

    assert_eq!(result["popup"].x, 10);
    assert_eq!(result["popup"].right(), 20);
}

#[test]
fn test_min_max_constraints() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(40))
        .child(Element::box_().id("a").width(Size::Fill).max_width(5))
        .child(Element::text("x").id("b").min_width(4));

    let result = layout(&root, Rect::new(0, 0, 40, 3));

    assert_eq!(result["a"].width, 5);
    assert_eq!(result["b"].width, 4);
}
