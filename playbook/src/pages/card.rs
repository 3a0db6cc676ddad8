use coreui::dom::Wrap;
use coreui::prelude::*;

use super::{Kit, caption, readout};
use crate::showcase::{PropsTable, on};

#[derive(Default)]
pub struct Demo {
    pub presses: State<usize>,
}

pub fn sections(kit: &Kit, demo: &Demo) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let variants = kit
        .showcase("card-variants", "Variants")
        .preview(
            Element::row()
                .gap(2)
                .wrap(Wrap::Wrap)
                .children(CardVariant::ALL.iter().map(|variant| {
                    Card::new()
                        .id(format!("card-variant-{}", variant))
                        .variant(*variant)
                        .width(Size::Fixed(22))
                        .child(Text::new(variant.name()).weight(FontWeight::Bold).build(r, &none))
                        .child(caption("Card content"))
                        .build(r, &none)
                })),
        )
        .code(
            r#"
Card::new()
    .variant(CardVariant::Outline)
    .child(Text::new("Card content").build(&registry, &handlers))
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let sections = kit
        .showcase("card-sections", "Header, Body and Footer")
        .preview(
            Card::new()
                .id("card-composed")
                .width(Size::Fixed(48))
                .child(
                    CardHeader::new("Team settings")
                        .subtitle("Manage who can see this project")
                        .action(Badge::new("Pro").color(ColorScheme::Purple).build(r, &none))
                        .build(r, &none),
                )
                .child(
                    CardBody::new()
                        .child(caption("Four members, two pending invites."))
                        .build(r, &none),
                )
                .child(
                    CardFooter::new()
                        .child(
                            Button::new("Cancel")
                                .id("card-cancel")
                                .variant(ButtonVariant::Ghost)
                                .size(ButtonSize::Sm)
                                .build(r, &none),
                        )
                        .child(
                            Button::new("Save")
                                .id("card-save")
                                .size(ButtonSize::Sm)
                                .build(r, &none),
                        )
                        .build(r, &none),
                )
                .build(r, &none),
        )
        .code(
            r#"
Card::new()
    .child(CardHeader::new("Team settings").subtitle("Manage access").build(&registry, &handlers))
    .child(CardBody::new().child(body).build(&registry, &handlers))
    .child(CardFooter::new().child(save).build(&registry, &handlers))
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let press = {
        let presses = demo.presses.downgrade();
        on("on_activate", move |_hx| {
            if let Some(presses) = presses.upgrade() {
                presses.update(|n| *n += 1);
            }
        })
    };
    let interactive = kit
        .showcase("card-interactive", "Hoverable and Pressable")
        .description("Both take focus and highlight. Only a pressable card activates.")
        .preview(
            Element::row()
                .gap(2)
                .child(
                    Card::new()
                        .id("card-hoverable")
                        .hoverable()
                        .width(Size::Fixed(24))
                        .child(caption("Focus me"))
                        .build(r, &none),
                )
                .child(
                    Card::new()
                        .id("card-pressable")
                        .variant(CardVariant::Filled)
                        .pressable()
                        .width(Size::Fixed(24))
                        .child(caption("Press me"))
                        .build(r, &press),
                ),
        )
        .preview(readout("Presses", demo.presses.get().to_string()))
        .code(
            r#"
Card::new().pressable().build(&registry, &on_activate)
"#,
        )
        .build(r);

    let padding = kit
        .showcase("card-padding", "Padding")
        .preview(
            Element::row()
                .gap(2)
                .children(CardPadding::ALL.iter().map(|padding| {
                    Card::new()
                        .variant(CardVariant::Outline)
                        .padding(*padding)
                        .child(caption(padding.name()))
                        .build(r, &none)
                })),
        )
        .code(
            r#"
Card::new().padding(CardPadding::Lg)
"#,
        )
        .build(r);

    vec![
        variants,
        sections,
        interactive,
        padding,
        PropsTable::new("card-props", Card::PROPS)
            .title("Card Props")
            .build(r),
    ]
}
