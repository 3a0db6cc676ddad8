use coreui::dom::Wrap;
use coreui::prelude::*;

use super::{Kit, caption};
use crate::showcase::PropsTable;

const CELL_WIDTH: u16 = 18;

pub fn sections(kit: &Kit) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let table = kit
        .showcase("icons-table", "Icon Set")
        .description("Every named glyph. Unknown names draw `?`.")
        .preview(
            Element::row()
                .width(Size::Fill)
                .wrap(Wrap::Wrap)
                .children(ICONS.iter().map(|(name, _)| {
                    Element::row()
                        .gap(1)
                        .width(Size::Fixed(CELL_WIDTH))
                        .child(Icon::new(*name).build(r, &none))
                        .child(caption(*name))
                })),
        )
        .code(
            r#"
Icon::new("search").build(&registry, &handlers)
"#,
        )
        .build(r);

    let sizes = kit
        .showcase("icons-sizes", "Sizes and Colors")
        .preview(
            Element::row()
                .gap(2)
                .children(IconSize::ALL.iter().map(|size| {
                    Icon::new("star").size(*size).build(r, &none)
                }))
                .child(Icon::new("heart").color(ColorScheme::Rose).build(r, &none))
                .child(
                    Icon::new("success")
                        .color(ColorScheme::Success)
                        .label("Done")
                        .build(r, &none),
                ),
        )
        .code(
            r#"
Icon::new("heart").size(IconSize::Lg).color(ColorScheme::Rose)
Icon::new("success").label("Done")
"#,
        )
        .build(r);

    vec![table, sizes, PropsTable::new("icons-props", Icon::PROPS).build(r)]
}
