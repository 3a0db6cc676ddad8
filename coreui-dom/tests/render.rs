use coreui_dom::layout::layout;
use coreui_dom::{
    render_to_buffer, Border, Buffer, Color, EmptyTheme, Element, MapTheme, Position, Rect, Rgb,
    Size, Style, TextAlign, TextStyle, TextWrap,
};

fn draw(root: &Element, width: u16, height: u16, theme: &dyn coreui_dom::Theme) -> Buffer {
    let result = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &result, &mut buf, theme);
    buf
}

#[test]
fn test_text_is_painted() {
    let root = Element::text("hello").id("t");
    let buf = draw(&root, 10, 1, &EmptyTheme);
    assert_eq!(buf.row_text(0), "hello");
}

#[test]
fn test_border_glyphs() {
    let root = Element::box_()
        .width(Size::Fixed(4))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Rounded));
    let buf = draw(&root, 4, 3, &EmptyTheme);

    assert_eq!(buf.row_text(0), "╭──╮");
    assert_eq!(buf.row_text(1), "│  │");
    assert_eq!(buf.row_text(2), "╰──╯");
}

#[test]
fn test_theme_variables_resolve() {
    let theme = MapTheme::new().with("accent", Color::rgb(10, 20, 30));
    let root = Element::text("x").style(Style::new().foreground(Color::var("accent")));
    let buf = draw(&root, 1, 1, &theme);

    assert_eq!(buf.get(0, 0).map(|c| c.fg), Some(Rgb::new(10, 20, 30)));
}

#[test]
fn test_children_inherit_foreground() {
    let root = Element::row()
        .style(Style::new().foreground(Color::rgb(1, 2, 3)))
        .child(Element::text("a"));
    let buf = draw(&root, 2, 1, &EmptyTheme);

    assert_eq!(buf.get(0, 0).map(|c| c.fg), Some(Rgb::new(1, 2, 3)));
}

#[test]
fn test_absolute_layer_paints_over_later_siblings() {
    let root = Element::col()
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::box_()
                .child(Element::text("trigger"))
                .child(
                    Element::text("MENU")
                        .position(Position::Absolute)
                        .top(1)
                        .left(0),
                ),
        )
        .child(Element::text("sibling"));
    let buf = draw(&root, 10, 3, &EmptyTheme);

    assert_eq!(buf.row_text(1), "MENUing");
}

#[test]
fn test_truncate_and_align() {
    let root = Element::col()
        .width(Size::Fixed(6))
        .child(
            Element::text("abcdefghij")
                .width(Size::Fill)
                .text_wrap(TextWrap::Truncate),
        )
        .child(Element::text("ab").width(Size::Fill).text_align(TextAlign::Right));
    let buf = draw(&root, 6, 2, &EmptyTheme);

    assert_eq!(buf.row_text(0), "abcde…");
    assert_eq!(buf.row_text(1), "    ab");
}

#[test]
fn test_wide_characters_take_two_cells() {
    let root = Element::text("日本");
    let buf = draw(&root, 4, 1, &EmptyTheme);

    assert_eq!(buf.row_text(0), "日本");
    assert_eq!(buf.get(1, 0).map(|c| c.continuation), Some(true));
}

#[test]
fn test_focused_style_layers_over_base() {
    let mut root = Element::text("f")
        .style(Style::new().foreground(Color::rgb(9, 9, 9)))
        .style_focused(Style::new().background(Color::rgb(200, 0, 0)));
    root.focused = true;
    let buf = draw(&root, 1, 1, &EmptyTheme);

    let cell = buf.get(0, 0).copied().unwrap_or_default();
    assert_eq!(cell.fg, Rgb::new(9, 9, 9));
    assert_eq!(cell.bg, Rgb::new(200, 0, 0));
}

#[test]
fn test_fill_covers_content_box() {
    let root = Element::col()
        .width(Size::Fixed(6))
        .child(Element::fill('─').width(Size::Fill).height(Size::Fixed(1)))
        .child(Element::text("ab"));
    let buf = draw(&root, 6, 2, &EmptyTheme);

    assert_eq!(buf.row_text(0), "──────");
    assert_eq!(buf.row_text(1), "ab");
}

#[test]
fn test_changes_report_only_differing_cells() {
    let before = Buffer::new(3, 2);
    let mut after = Buffer::new(3, 2);
    after.put(1, 1, 'x', 1, Rgb::new(1, 1, 1), TextStyle::new());

    let changed: Vec<_> = after.changes(&before).map(|(x, y, c)| (x, y, c.glyph)).collect();
    assert_eq!(changed, vec![(1, 1, 'x')]);
    assert_eq!(after.changes(&Buffer::stale(3, 2)).count(), 6);

    after.reset();
    assert_eq!(after.changes(&before).count(), 0);
}
