use coreui::dom::{Color, Style};
use coreui::prelude::*;

use super::Kit;
use crate::showcase::PropsTable;

fn tile(label: &str) -> Element {
    Element::text(format!(" {} ", label)).style(
        Style::new()
            .background(ColorScheme::Primary.tint())
            .foreground(Color::var("fg")),
    )
}

fn tiles() -> Vec<Element> {
    ["One", "Two", "Three"].iter().map(|l| tile(l)).collect()
}

pub fn sections(kit: &Kit) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let directions = kit
        .showcase("stack-direction", "Direction")
        .description("HStack and VStack are Stack with the direction preset.")
        .preview(
            Element::row()
                .gap(4)
                .children(StackDirection::ALL.iter().map(|direction| {
                    Stack::new()
                        .direction(*direction)
                        .spacing(Spacing::Xs)
                        .children(tiles())
                        .build(r, &none)
                })),
        )
        .code(
            r#"
HStack::new()
    .spacing(Spacing::Sm)
    .child(Element::text("One"))
    .child(Element::text("Two"))
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let justify = kit
        .showcase("stack-justify", "Justify")
        .preview(
            Element::col().children(StackJustify::ALL.iter().map(|justify| {
                HStack::new()
                    .full_width()
                    .justify(*justify)
                    .spacing(Spacing::Sm)
                    .children(tiles())
                    .build(r, &none)
            })),
        )
        .code(
            r#"
HStack::new().full_width().justify(StackJustify::Between)
"#,
        )
        .build(r);

    let divided = kit
        .showcase("stack-divider", "With Divider")
        .preview(
            HStack::new()
                .spacing(Spacing::Sm)
                .align(StackAlign::Center)
                .divider(Divider::new().vertical().spacing(Spacing::None).build(r, &none))
                .children(tiles())
                .build(r, &none),
        )
        .code(
            r#"
HStack::new()
    .divider(Divider::new().vertical().build(&registry, &handlers))
"#,
        )
        .build(r);

    let wrapping = kit
        .showcase("stack-wrap", "Wrap")
        .preview(
            HStack::new()
                .wrap()
                .spacing(Spacing::Xs)
                .children((1..=24).map(|n| tile(&format!("Item {}", n))))
                .build(r, &none)
                .width(Size::Fill),
        )
        .code(
            r#"
HStack::new().wrap().children(items)
"#,
        )
        .build(r);

    vec![
        directions,
        justify,
        divided,
        wrapping,
        PropsTable::new("stack-props", Stack::PROPS)
            .title("Stack Props")
            .build(r),
    ]
}
