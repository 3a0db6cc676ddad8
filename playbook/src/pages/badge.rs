use coreui::dom::Wrap;
use coreui::prelude::*;

use super::Kit;
use crate::showcase::PropsTable;

const COLORS: [ColorScheme; 8] = [
    ColorScheme::Gray,
    ColorScheme::Primary,
    ColorScheme::Secondary,
    ColorScheme::Success,
    ColorScheme::Warning,
    ColorScheme::Error,
    ColorScheme::Info,
    ColorScheme::Pink,
];

pub fn sections(kit: &Kit) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let variants = kit
        .showcase("badge-variants", "Variants")
        .preview(Element::col().gap(1).children(BadgeVariant::ALL.iter().map(|variant| {
            Element::row()
                .gap(1)
                .wrap(Wrap::Wrap)
                .children(COLORS.iter().map(|color| {
                    Badge::new(color.name())
                        .variant(*variant)
                        .color(*color)
                        .build(r, &none)
                }))
        })))
        .code(
            r#"
Badge::new("New")
    .variant(BadgeVariant::Solid)
    .color(ColorScheme::Success)
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let sizes = kit
        .showcase("badge-sizes", "Sizes")
        .preview(
            Element::row()
                .gap(1)
                .children(BadgeSize::ALL.iter().map(|size| {
                    Badge::new(size.name())
                        .size(*size)
                        .color(ColorScheme::Primary)
                        .build(r, &none)
                })),
        )
        .code(
            r#"
Badge::new("Large").size(BadgeSize::Lg)
"#,
        )
        .build(r);

    let dots = kit
        .showcase("badge-dots", "Dot and Radius")
        .preview(
            Element::row()
                .gap(1)
                .child(Badge::new("Online").dot().color(ColorScheme::Success).build(r, &none))
                .child(Badge::new("Away").dot().color(ColorScheme::Warning).build(r, &none))
                .children(Radius::ALL.iter().map(|radius| {
                    Badge::new(radius.name())
                        .variant(BadgeVariant::Outline)
                        .radius(*radius)
                        .build(r, &none)
                })),
        )
        .code(
            r#"
Badge::new("Online").dot().color(ColorScheme::Success)
Badge::new("Pill").variant(BadgeVariant::Outline).radius(Radius::Full)
"#,
        )
        .build(r);

    vec![
        variants,
        sizes,
        dots,
        PropsTable::new("badge-props", Badge::PROPS)
            .title("Badge Props")
            .build(r),
    ]
}
