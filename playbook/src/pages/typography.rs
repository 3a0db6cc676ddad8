use coreui::prelude::*;

use super::Kit;
use crate::showcase::PropsTable;

pub fn sections(kit: &Kit) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let headings = kit
        .showcase("typography-headings", "Headings")
        .description("h1 through h6. h1 and h2 carry a rule.")
        .preview(
            Element::col().children(HeadingLevel::ALL.iter().map(|level| {
                Heading::new(format!("Heading {}", level))
                    .level(*level)
                    .build(r, &none)
            })),
        )
        .code(
            r#"
Heading::new("Page title").level(HeadingLevel::H1).build(&registry, &handlers)
"#,
        )
        .build(r);

    let sizes = kit
        .showcase("typography-sizes", "Text Sizes")
        .description("A terminal cannot scale glyphs, so sizes map to emphasis.")
        .preview(Element::col().children(FontSize::ALL.iter().map(|size| {
            Text::new(format!("{} text", size)).size(*size).build(r, &none)
        })))
        .code(
            r#"
Text::new("Large text").size(FontSize::Xl).build(&registry, &handlers)
"#,
        )
        .build(r);

    let weights = kit
        .showcase("typography-weights", "Weights and Colors")
        .preview(
            Element::row()
                .gap(2)
                .children(FontWeight::ALL.iter().map(|weight| {
                    Text::new(weight.name()).weight(*weight).build(r, &none)
                }))
                .child(Text::new("muted").muted().build(r, &none))
                .child(
                    Text::new("primary")
                        .color(ColorScheme::Primary)
                        .build(r, &none),
                )
                .child(Text::new("error").color(ColorScheme::Error).build(r, &none)),
        )
        .code(
            r#"
Text::new("Bold").weight(FontWeight::Bold).build(&registry, &handlers)
Text::new("Secondary").muted().build(&registry, &handlers)
"#,
        )
        .build(r);

    let labels = kit
        .showcase("typography-labels", "Labels and Code")
        .preview(
            Element::col()
                .child(Label::new("Email").required().build(r, &none))
                .child(Label::new("Disabled label").disabled().build(r, &none))
                .child(
                    Element::row()
                        .gap(1)
                        .child(Text::new("Run").build(r, &none))
                        .child(Code::new("cargo run -p playbook").build(r, &none)),
                ),
        )
        .code(
            r#"
Label::new("Email").required().build(&registry, &handlers)
Code::new("cargo run -p playbook").build(&registry, &handlers)
"#,
        )
        .build(r);

    vec![
        headings,
        sizes,
        weights,
        labels,
        PropsTable::new("typography-text-props", Text::PROPS)
            .title("Text Props")
            .build(r),
        PropsTable::new("typography-heading-props", Heading::PROPS)
            .title("Heading Props")
            .build(r),
    ]
}
