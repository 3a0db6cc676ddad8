use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use coreui::prelude::*;

use super::{Kit, readout};
use crate::showcase::{PropsTable, on};

#[derive(Default)]
pub struct Demo {
    pub loading: State<bool>,
    pub clicks: Arc<AtomicUsize>,
}

pub fn sections(kit: &Kit, demo: &Demo) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let clicks = Arc::clone(&demo.clicks);
    let count = on("on_activate", move |_hx| {
        clicks.fetch_add(1, Ordering::SeqCst);
    });
    let variants = kit
        .showcase("button-variants", "Variants")
        .description("Enter, Space or a click fires on_activate.")
        .preview(
            Element::row()
                .gap(1)
                .children(ButtonVariant::ALL.iter().map(|variant| {
                    Button::new(variant.name())
                        .id(format!("button-variant-{}", variant))
                        .variant(*variant)
                        .build(r, &count)
                })),
        )
        .preview(readout(
            "Clicks",
            demo.clicks.load(Ordering::SeqCst).to_string(),
        ))
        .code(
            r#"
let mut handlers = WidgetHandlers::new();
handlers.insert("on_activate", Arc::new(|_hx| log::info!("clicked")));

Button::new("Save")
    .variant(ButtonVariant::Outline)
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let colors = kit
        .showcase("button-colors", "Colors")
        .preview(
            Element::row().gap(1).children(
                [
                    ColorScheme::Primary,
                    ColorScheme::Secondary,
                    ColorScheme::Success,
                    ColorScheme::Warning,
                    ColorScheme::Error,
                    ColorScheme::Teal,
                ]
                .into_iter()
                .map(|color| {
                    Button::new(color.name())
                        .id(format!("button-color-{}", color))
                        .color(color)
                        .build(r, &none)
                }),
            ),
        )
        .code(
            r#"
Button::new("Delete").color(ColorScheme::Error)
"#,
        )
        .build(r);

    let sizes = kit
        .showcase("button-sizes", "Sizes")
        .preview(
            Element::row()
                .gap(1)
                .children(ButtonSize::ALL.iter().map(|size| {
                    Button::new(size.name())
                        .id(format!("button-size-{}", size))
                        .size(*size)
                        .build(r, &none)
                })),
        )
        .code(
            r#"
Button::new("Large").size(ButtonSize::Lg)
"#,
        )
        .build(r);

    let icons = kit
        .showcase("button-icons", "With Icons")
        .preview(
            Element::row()
                .gap(1)
                .child(
                    Button::new("Search")
                        .id("button-icon-left")
                        .left_icon("search")
                        .build(r, &none),
                )
                .child(
                    Button::new("Next")
                        .id("button-icon-right")
                        .variant(ButtonVariant::Outline)
                        .right_icon("arrow-right")
                        .build(r, &none),
                )
                .child(
                    Button::new("Settings")
                        .id("button-icon-only")
                        .variant(ButtonVariant::Ghost)
                        .left_icon("settings")
                        .icon_only()
                        .build(r, &none),
                ),
        )
        .code(
            r#"
Button::new("Search").left_icon("search")
Button::new("Settings").left_icon("settings").icon_only()
"#,
        )
        .build(r);

    let loading = demo.loading.get();
    let toggle = {
        let weak = demo.loading.downgrade();
        on("on_activate", move |_hx| {
            if let Some(loading) = weak.upgrade() {
                loading.update(|l| *l = !*l);
            }
        })
    };
    let states = kit
        .showcase("button-states", "Loading and Disabled")
        .description("A loading or disabled button ignores activation.")
        .preview(
            Element::row()
                .gap(1)
                .child(
                    Button::new("Submit")
                        .id("button-loading")
                        .loading(loading)
                        .loading_text("Saving")
                        .build(r, &none),
                )
                .child(
                    Button::new(if loading { "Stop" } else { "Start loading" })
                        .id("button-loading-toggle")
                        .variant(ButtonVariant::Outline)
                        .build(r, &toggle),
                )
                .child(
                    Button::new("Disabled")
                        .id("button-disabled")
                        .disabled(true)
                        .build(r, &none),
                ),
        )
        .preview(
            Button::new("Full width")
                .id("button-full")
                .variant(ButtonVariant::Soft)
                .full_width()
                .build(r, &none),
        )
        .code(
            r#"
Button::new("Submit")
    .loading(is_saving)
    .loading_text("Saving")
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    vec![
        variants,
        colors,
        sizes,
        icons,
        states,
        PropsTable::new("button-props", Button::PROPS)
            .title("Button Props")
            .build(r),
    ]
}
