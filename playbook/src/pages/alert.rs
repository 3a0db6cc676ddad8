use coreui::dom::{Border, Color, Edges, Style};
use coreui::prelude::*;

use super::{Kit, caption, readout};
use crate::showcase::{PropsTable, on};

/// How long the toast stays up.
pub const TOAST_MS: u64 = 3000;

pub struct Demo {
    pub dismissible: State<AlertState>,
    pub toast: State<AlertState>,
    /// Alerts that never close, one per status and variant.
    pub fixed: State<AlertState>,
}

impl Default for Demo {
    fn default() -> Self {
        let mut toast = AlertState::new();
        toast.close();
        Self {
            dismissible: State::new(AlertState::new()),
            toast: State::new(toast),
            fixed: State::new(AlertState::new()),
        }
    }
}

fn reopen(state: &State<AlertState>) -> WidgetHandlers {
    let weak = state.downgrade();
    on("on_activate", move |_hx| {
        if let Some(state) = weak.upgrade() {
            state.update(|s| s.show());
        }
    })
}

pub fn sections(kit: &Kit, demo: &Demo) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let statuses = kit
        .showcase("alert-statuses", "Statuses")
        .preview(Element::col().gap(1).children(AlertStatus::ALL.iter().map(|status| {
            Alert::new()
                .id(format!("alert-status-{}", status))
                .status(*status)
                .title(status.name())
                .description("Something worth knowing happened.")
                .state(&demo.fixed)
                .build(r, &none)
        })))
        .code(
            r#"
let alert = State::new(AlertState::new());

Alert::new()
    .status(AlertStatus::Warning)
    .title("Heads up")
    .description("Something worth knowing happened.")
    .state(&alert)
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let variants = kit
        .showcase("alert-variants", "Variants")
        .preview(Element::col().gap(1).children(AlertVariant::ALL.iter().map(|variant| {
            Alert::new()
                .id(format!("alert-variant-{}", variant))
                .status(AlertStatus::Success)
                .variant(*variant)
                .title(variant.name())
                .state(&demo.fixed)
                .build(r, &none)
        })))
        .code(
            r#"
Alert::new().variant(AlertVariant::LeftAccent)
"#,
        )
        .build(r);

    let closed = !demo.dismissible.with(|s| s.is_open());
    let mut dismissible = kit
        .showcase("alert-closable", "Closable")
        .description("The close button takes a click or Enter.")
        .preview(
            Alert::new()
                .id("alert-closable")
                .status(AlertStatus::Error)
                .title("Upload failed")
                .description("The file was larger than 10 MB.")
                .closable()
                .state(&demo.dismissible)
                .build(r, &none),
        );
    if closed {
        dismissible = dismissible.preview(
            Button::new("Show again")
                .id("alert-show-again")
                .variant(ButtonVariant::Outline)
                .size(ButtonSize::Sm)
                .build(r, &reopen(&demo.dismissible)),
        );
    }
    let dismissible = dismissible
        .preview(readout(
            "Times closed",
            demo.dismissible.with(|s| s.closed_count()).to_string(),
        ))
        .code(
            r#"
Alert::new()
    .status(AlertStatus::Error)
    .closable()
    .state(&alert)
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let toast_open = demo.toast.with(|s| s.is_open());
    let stage = Element::col()
        .width(Size::Fill)
        .height(Size::Fixed(7))
        .padding(Edges::all(1))
        .style(
            Style::new()
                .border(Border::Rounded)
                .border_color(Color::var("border")),
        )
        .child(
            Button::new(if toast_open { "Showing..." } else { "Show toast" })
                .id("alert-toast-trigger")
                .size(ButtonSize::Sm)
                .disabled(toast_open)
                .build(r, &reopen(&demo.toast)),
        )
        .child(caption("Closes by itself after three seconds."))
        .child(
            AlertContainer::new()
                .position(AlertPosition::TopRight)
                .width(32)
                .alert(
                    Alert::new()
                        .id("alert-toast")
                        .status(AlertStatus::Success)
                        .variant(AlertVariant::Solid)
                        .title("Saved")
                        .duration(TOAST_MS)
                        .state(&demo.toast)
                        .build(r, &none),
                )
                .build(r, &none),
        );
    let toast = kit
        .showcase("alert-toast", "Toast")
        .preview(stage)
        .code(
            r#"
AlertContainer::new()
    .position(AlertPosition::TopRight)
    .alert(
        Alert::new()
            .title("Saved")
            .duration(3000)
            .state(&toast)
            .build(&registry, &handlers),
    )
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    vec![
        statuses,
        variants,
        dismissible,
        toast,
        PropsTable::new("alert-props", Alert::PROPS)
            .title("Alert Props")
            .build(r),
        PropsTable::new("alert-container-props", AlertContainer::PROPS)
            .title("AlertContainer Props")
            .build(r),
    ]
}
