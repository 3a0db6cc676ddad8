//! One module per documentation page.
//!
//! A page is a list of sections, each usually a [`Showcase`]. Widget state
//! used by the live previews lives in [`Demos`] so it survives rebuilds.

mod alert;
mod autocomplete;
mod avatar;
mod badge;
mod button;
mod card;
mod checkbox;
mod colors;
mod container;
mod date_picker;
mod divider;
mod dropdown;
mod icons;
mod input;
mod select;
mod skeleton;
mod spinner;
mod stack;
mod typography;

use std::collections::HashMap;
use std::time::Duration;

use coreui::dom::{Color, Element, Style};
use coreui::{Context, HandlerRegistry, State};

use crate::catalog::PageId;
use crate::showcase::{COPY_FEEDBACK, Showcase, ShowcaseState};

/// Preview state of every page.
#[derive(Default)]
pub struct Demos {
    showcases: State<HashMap<String, State<ShowcaseState>>>,
    pub alert: alert::Demo,
    pub autocomplete: autocomplete::Demo,
    pub button: button::Demo,
    pub card: card::Demo,
    pub checkbox: checkbox::Demo,
    pub date_picker: date_picker::Demo,
    pub dropdown: dropdown::Demo,
    pub input: input::Demo,
    pub select: select::Demo,
}

impl Demos {
    pub fn new() -> Self {
        Self::default()
    }

    /// The state of showcase `id`, created on first use.
    pub fn showcase(&self, id: &str) -> State<ShowcaseState> {
        self.showcases
            .update(|all| all.entry(id.to_string()).or_default().clone())
    }
}

/// Everything a page needs while building.
pub struct Kit<'a> {
    pub registry: &'a HandlerRegistry,
    pub cx: &'a Context,
    pub demos: &'a Demos,
    pub copy_feedback: Duration,
}

impl<'a> Kit<'a> {
    pub fn new(registry: &'a HandlerRegistry, cx: &'a Context, demos: &'a Demos) -> Self {
        Self {
            registry,
            cx,
            demos,
            copy_feedback: COPY_FEEDBACK,
        }
    }

    pub fn copy_feedback(mut self, feedback: Duration) -> Self {
        self.copy_feedback = feedback;
        self
    }

    /// A showcase wired to its persistent state and the configured copy
    /// feedback.
    pub fn showcase(&self, id: &str, title: &str) -> Showcase {
        Showcase::new(id, title, self.demos.showcase(id)).copy_feedback(self.copy_feedback)
    }
}

/// Sections of `page`, top to bottom.
pub fn sections(page: PageId, kit: &Kit) -> Vec<Element> {
    log::debug!("pages::sections page={}", page);
    match page {
        PageId::Colors => colors::sections(kit),
        PageId::Typography => typography::sections(kit),
        PageId::Icons => icons::sections(kit),
        PageId::Box => container::sections(kit),
        PageId::Stack => stack::sections(kit),
        PageId::Divider => divider::sections(kit),
        PageId::Button => button::sections(kit, &kit.demos.button),
        PageId::Input => input::sections(kit, &kit.demos.input),
        PageId::Checkbox => checkbox::sections(kit, &kit.demos.checkbox),
        PageId::Select => select::sections(kit, &kit.demos.select),
        PageId::Autocomplete => autocomplete::sections(kit, &kit.demos.autocomplete),
        PageId::DatePicker => date_picker::sections(kit, &kit.demos.date_picker),
        PageId::Dropdown => dropdown::sections(kit, &kit.demos.dropdown),
        PageId::Card => card::sections(kit, &kit.demos.card),
        PageId::Badge => badge::sections(kit),
        PageId::Avatar => avatar::sections(kit),
        PageId::Alert => alert::sections(kit, &kit.demos.alert),
        PageId::Spinner => spinner::sections(kit),
        PageId::Skeleton => skeleton::sections(kit),
    }
}

/// Plain muted text.
pub(crate) fn caption(text: impl Into<String>) -> Element {
    Element::text(text).style(Style::new().foreground(Color::var("muted")))
}

/// "Value: x" readout under a stateful preview.
pub(crate) fn readout(label: &str, value: impl AsRef<str>) -> Element {
    let value = value.as_ref();
    caption(format!(
        "{}: {}",
        label,
        if value.is_empty() { "(none)" } else { value }
    ))
}
