//! Option list popup and outside-click bookkeeping shared by the
//! selection widgets.

use coreui_dom::{Color, Edges, Element, Position, Size, Style};

use crate::handler_context::Handler;
use crate::pointer::{PointerWatch, Subscription};
use crate::selection::{Combobox, SelectOption};
use crate::tokens::Radius;

/// Most option rows shown at once. The window follows the highlight.
const MAX_ROWS: usize = 8;

/// One clickable option row, for handler registration.
pub(crate) struct OptionRow {
    pub element_id: String,
    pub option: SelectOption,
}

/// Element id of the option at `pos` in the visible list.
pub(crate) fn option_id(id: &str, pos: usize) -> String {
    format!("{}-opt-{}", id, pos)
}

fn window(len: usize, highlighted: Option<usize>) -> (usize, usize) {
    if len <= MAX_ROWS {
        return (0, len);
    }
    let h = highlighted.unwrap_or(0);
    let start = h.saturating_sub(MAX_ROWS - 1).min(len - MAX_ROWS);
    (start, start + MAX_ROWS)
}

fn popup_frame(id: &str, top: u16) -> Element {
    Element::col()
        .id(format!("{}-list", id))
        .position(Position::Absolute)
        .top(top as i16)
        .left(0)
        .z_index(100)
        .width(Size::Fill)
        .min_width(20)
        .style(
            Style::new()
                .background(Color::var("surface"))
                .border(Radius::Md.border())
                .border_color(Color::var("border")),
        )
}

fn message_row(text: &str) -> Element {
    Element::text(text)
        .padding(Edges::horizontal(1))
        .style(Style::new().foreground(Color::var("muted")))
}

/// Build the dropdown under a field of height `top`. Options render under
/// their group headers with the highlight, selection check, description
/// and disabled state. `loading` replaces the rows with its message.
pub(crate) fn option_list(
    id: &str,
    combobox: &Combobox,
    is_selected: &dyn Fn(&str) -> bool,
    empty_message: &str,
    loading: Option<&str>,
    top: u16,
) -> (Element, Vec<OptionRow>) {
    let mut list = popup_frame(id, top);
    let mut rows = Vec::new();

    if let Some(message) = loading {
        return (list.child(message_row(message)), rows);
    }
    if combobox.visible_len() == 0 {
        return (list.child(message_row(empty_message)), rows);
    }

    let (start, end) = window(combobox.visible_len(), combobox.highlighted());
    for section in combobox.sections() {
        let entries: Vec<_> = section
            .entries
            .iter()
            .filter(|(pos, _)| (start..end).contains(pos))
            .collect();
        if entries.is_empty() {
            continue;
        }

        if let Some(group) = section.group {
            list = list.child(
                Element::text(group)
                    .padding(Edges::horizontal(1))
                    .style(Style::new().foreground(Color::var("muted")).bold()),
            );
        }

        for (pos, option) in entries {
            let element_id = option_id(id, *pos);
            let selected = is_selected(&option.id);
            let highlighted = combobox.highlighted() == Some(*pos);

            let mut style = Style::new();
            if highlighted {
                style = style.background(Color::var("overlay")).bold();
            }

            let mut row = Element::row()
                .id(&element_id)
                .gap(1)
                .padding(Edges::horizontal(1))
                .width(Size::Fill)
                .clickable(true)
                .disabled(option.disabled)
                .style(style)
                .style_disabled(Style::new().dim())
                .child(Element::text(if selected { "✓" } else { " " }))
                .child(Element::text(&option.label));
            if let Some(description) = &option.description {
                row = row.child(
                    Element::text(description)
                        .style(Style::new().foreground(Color::var("muted"))),
                );
            }
            list = list.child(row);

            rows.push(OptionRow {
                element_id,
                option: (*option).clone(),
            });
        }
    }

    (list, rows)
}

/// Hold an outside-click subscription exactly while `open`. `make` builds
/// the callback, and is only called when a new subscription is needed.
pub(crate) fn sync_outside(
    slot: &mut Option<Subscription>,
    open: bool,
    pointer: &PointerWatch,
    region: &str,
    make: impl FnOnce() -> Handler,
) {
    match (open, slot.is_some()) {
        (true, false) => *slot = Some(pointer.watch(region, make())),
        (false, true) => *slot = None,
        _ => {}
    }
}
