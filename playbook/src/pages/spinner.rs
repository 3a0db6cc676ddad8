use coreui::prelude::*;

use super::{Kit, caption};
use crate::showcase::PropsTable;

pub fn sections(kit: &Kit) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let sizes = kit
        .showcase("spinner-sizes", "Sizes")
        .description("Each size cycles its own glyph set.")
        .preview(
            Element::row()
                .gap(3)
                .children(SpinnerSize::ALL.iter().map(|size| {
                    Element::col()
                        .child(Spinner::new().size(*size).hide_label().build(r, &none))
                        .child(caption(size.name()))
                })),
        )
        .code(
            r#"
Spinner::new().size(SpinnerSize::Lg).build(&registry, &handlers)
"#,
        )
        .build(r);

    let colors = kit
        .showcase("spinner-colors", "Colors")
        .preview(
            Element::row()
                .gap(3)
                .children(SpinnerColor::ALL.iter().map(|color| {
                    Spinner::new()
                        .color(*color)
                        .label(color.name())
                        .build(r, &none)
                })),
        )
        .code(
            r#"
Spinner::new().color(SpinnerColor::Primary)
"#,
        )
        .build(r);

    let labels = kit
        .showcase("spinner-labels", "Labels")
        .preview(
            Element::col()
                .gap(1)
                .child(Spinner::new().build(r, &none))
                .child(
                    Spinner::new()
                        .label("Fetching records")
                        .color(SpinnerColor::Secondary)
                        .build(r, &none),
                ),
        )
        .code(
            r#"
Spinner::new().label("Fetching records")
Spinner::new().hide_label()
"#,
        )
        .build(r);

    vec![
        sizes,
        colors,
        labels,
        PropsTable::new("spinner-props", Spinner::PROPS)
            .title("Spinner Props")
            .build(r),
    ]
}
