use coreui::prelude::*;

use super::{Kit, caption};
use crate::showcase::PropsTable;

pub fn sections(kit: &Kit) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let padding = kit
        .showcase("box-padding", "Padding and Border")
        .description("Spacing tokens become cells horizontally and rows vertically.")
        .preview(
            Element::row()
                .gap(2)
                .children([Spacing::Xs, Spacing::Md, Spacing::Xl].into_iter().map(|spacing| {
                    Container::new()
                        .padding(spacing)
                        .border(true)
                        .child(caption(format!("padding {}", spacing)))
                        .build(r, &none)
                })),
        )
        .code(
            r#"
Container::new()
    .padding(Spacing::Md)
    .border(true)
    .child(Element::text("Content"))
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let background = kit
        .showcase("box-background", "Background and Radius")
        .preview(
            Element::row()
                .gap(2)
                .child(
                    Container::new()
                        .padding(Spacing::Sm)
                        .background(ColorScheme::Blue.tint())
                        .child(Element::text("Tinted"))
                        .build(r, &none),
                )
                .children([Radius::None, Radius::Md, Radius::Full].into_iter().map(|radius| {
                    Container::new()
                        .padding(Spacing::Sm)
                        .border(true)
                        .radius(radius)
                        .child(Element::text(format!("radius {}", radius)))
                        .build(r, &none)
                })),
        )
        .code(
            r#"
Container::new()
    .background(ColorScheme::Blue.tint())
    .radius(Radius::Full)
    .border(true)
"#,
        )
        .build(r);

    let center = kit
        .showcase("box-center", "Centering")
        .preview(
            Container::new()
                .width(Size::Fill)
                .height(Size::Fixed(5))
                .border(true)
                .center()
                .child(Element::text("Centered"))
                .build(r, &none),
        )
        .code(
            r#"
Container::new()
    .width(Size::Fill)
    .height(Size::Fixed(5))
    .center()
"#,
        )
        .build(r);

    vec![
        padding,
        background,
        center,
        PropsTable::new("box-props", Container::PROPS)
            .title("Box Props")
            .build(r),
    ]
}
