use coreui::prelude::*;

use super::{Kit, caption};
use crate::showcase::PropsTable;

pub fn sections(kit: &Kit) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let variants = kit
        .showcase("divider-variants", "Variants")
        .preview(Element::col().children(DividerVariant::ALL.iter().map(|variant| {
            Divider::new()
                .variant(*variant)
                .spacing(Spacing::None)
                .label(variant.name())
                .label_position(LabelPosition::Start)
                .build(r, &none)
        })))
        .code(
            r#"
Divider::new().variant(DividerVariant::Dashed).build(&registry, &handlers)
"#,
        )
        .build(r);

    let weight = kit
        .showcase("divider-weight", "Color and Thickness")
        .preview(
            Element::col()
                .children(DividerColor::ALL.iter().map(|color| {
                    Divider::new()
                        .color(*color)
                        .spacing(Spacing::None)
                        .build(r, &none)
                }))
                .child(
                    Divider::new()
                        .thickness(DividerThickness::Thick)
                        .spacing(Spacing::None)
                        .build(r, &none),
                ),
        )
        .code(
            r#"
Divider::new()
    .color(DividerColor::Dark)
    .thickness(DividerThickness::Thick)
"#,
        )
        .build(r);

    let labels = kit
        .showcase("divider-labels", "Labels")
        .preview(Element::col().children(LabelPosition::ALL.iter().map(|position| {
            Divider::new()
                .label(format!("{}", position))
                .label_position(*position)
                .spacing(Spacing::None)
                .build(r, &none)
        })))
        .code(
            r#"
Divider::new().label("OR").label_position(LabelPosition::Center)
"#,
        )
        .build(r);

    let vertical = kit
        .showcase("divider-vertical", "Vertical")
        .preview(
            Element::row()
                .height(Size::Fixed(3))
                .child(caption("Left"))
                .child(Divider::new().vertical().spacing(Spacing::Sm).build(r, &none))
                .child(caption("Right")),
        )
        .code(
            r#"
Divider::new().orientation(Orientation::Vertical)
"#,
        )
        .build(r);

    vec![
        variants,
        weight,
        labels,
        vertical,
        PropsTable::new("divider-props", Divider::PROPS)
            .title("Divider Props")
            .build(r),
    ]
}
