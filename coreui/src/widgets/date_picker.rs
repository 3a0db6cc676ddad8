//! DatePicker widget - a `yyyy-MM-dd` text field with a calendar popup.

use std::sync::Arc;

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use coreui_dom::{Color, Edges, Element, Justify, Key, Modifiers, Position, Size, Style};

use super::field::{FieldLook, FieldSize, FieldVariant, field_text};
use super::input::{Edit, InputState, text_with_cursor};
use super::popup;
use super::{HasState, NeedsState, handler};
use crate::binding::Binding;
use crate::handler_context::{EventData, Handler, HandlerRegistry, WidgetHandlers};
use crate::pointer::Subscription;
use crate::state::{State, WeakState};
use crate::style::{ColorScheme, PropDoc};
use crate::tokens::Radius;

/// Text format of a date: `2024-03-09`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse typed text. Blank text is no date.
pub fn parse_date(text: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map(Some)
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// What a key did to a date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKey {
    Ignored,
    Handled,
    /// The typed text changed. Nothing is committed until Enter or blur.
    Input,
    /// The value changed.
    Commit(Option<NaiveDate>),
}

/// State for a date picker: the committed date, the typed text and the
/// calendar popup.
#[derive(Debug, Default)]
pub struct DatePickerState {
    value: Binding<Option<NaiveDate>>,
    input: InputState,
    open: bool,
    cursor: Option<NaiveDate>,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    outside: Option<Subscription>,
}

impl DatePickerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, date: NaiveDate) -> Self {
        self.value = Binding::uncontrolled(Some(date));
        self.input.set_text(format_date(Some(date)));
        self
    }

    pub fn with_binding(mut self, value: Binding<Option<NaiveDate>>) -> Self {
        self.input.set_text(format_date(value.get()));
        self.value = value;
        self
    }

    /// Earliest date that can be picked.
    pub fn with_min_date(mut self, min: NaiveDate) -> Self {
        self.min = Some(min);
        self
    }

    /// Latest date that can be picked.
    pub fn with_max_date(mut self, max: NaiveDate) -> Self {
        self.max = Some(max);
        self
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value.get()
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The day the calendar keyboard focus is on.
    pub fn cursor(&self) -> Option<NaiveDate> {
        self.cursor
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.max
    }

    pub fn in_range(&self, date: NaiveDate) -> bool {
        self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
    }

    fn clamp(&self, date: NaiveDate) -> NaiveDate {
        let date = self.min.map_or(date, |min| date.max(min));
        self.max.map_or(date, |max| date.min(max))
    }

    /// Open the calendar on the selected date, or today.
    pub fn open(&mut self) {
        let start = self.value.get().unwrap_or_else(|| Local::now().date_naive());
        self.cursor = Some(self.clamp(start));
        self.open = true;
        log::debug!("DatePickerState::open cursor={:?}", self.cursor);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Move the calendar cursor by `days`, clamped to the bounds.
    pub fn move_days(&mut self, days: i64) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let moved = if days >= 0 {
            cursor.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        self.cursor = Some(self.clamp(moved.unwrap_or(cursor)));
    }

    /// Move the calendar cursor by `months`, clamped to the bounds.
    pub fn move_months(&mut self, months: i32) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let moved = if months >= 0 {
            cursor.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            cursor.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        self.cursor = Some(self.clamp(moved.unwrap_or(cursor)));
    }

    /// Commit `date` and close. Out-of-range dates are rejected.
    pub fn pick(&mut self, date: NaiveDate) -> bool {
        if !self.in_range(date) {
            log::debug!("DatePickerState::pick rejected date={}", date);
            return false;
        }
        self.value.commit(Some(date));
        self.input.set_text(format_date(Some(date)));
        self.cursor = Some(date);
        self.close();
        true
    }

    /// Commit the typed text. Blank text clears the value. Unparsable or
    /// out-of-range text leaves the value alone and restores its text.
    /// Returns the new value when it changed.
    pub fn commit_text(&mut self) -> Option<Option<NaiveDate>> {
        let current = self.value.get();
        let parsed = match parse_date(self.input.text()) {
            Ok(Some(date)) if !self.in_range(date) => {
                log::debug!("DatePickerState::commit_text out of range date={}", date);
                None
            }
            Ok(parsed) => Some(parsed),
            Err(err) => {
                log::debug!(
                    "DatePickerState::commit_text unparsable text={:?}: {}",
                    self.input.text(),
                    err
                );
                None
            }
        };

        match parsed {
            Some(date) if date != current => {
                self.value.commit(date);
                self.input.set_text(format_date(date));
                Some(date)
            }
            _ => {
                self.input.set_text(format_date(current));
                None
            }
        }
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> DateKey {
        if self.open {
            match key {
                Key::Left => self.move_days(-1),
                Key::Right => self.move_days(1),
                Key::Up => self.move_days(-7),
                Key::Down => self.move_days(7),
                Key::PageUp => self.move_months(-1),
                Key::PageDown => self.move_months(1),
                Key::Escape => self.close(),
                Key::Enter => {
                    let cursor = self.cursor;
                    return match cursor {
                        Some(date) if self.pick(date) => DateKey::Commit(Some(date)),
                        _ => DateKey::Handled,
                    };
                }
                _ => return DateKey::Ignored,
            }
            return DateKey::Handled;
        }

        match key {
            Key::Down => {
                self.open();
                DateKey::Handled
            }
            Key::Enter => match self.commit_text() {
                Some(date) => DateKey::Commit(date),
                None => {
                    self.open();
                    DateKey::Handled
                }
            },
            _ => match self.input.edit(key, modifiers) {
                Edit::Changed => DateKey::Input,
                Edit::Moved => DateKey::Handled,
                Edit::Ignored => DateKey::Ignored,
            },
        }
    }
}

/// A date picker widget builder.
#[derive(Debug)]
pub struct DatePicker<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    placeholder: Option<String>,
    look: FieldLook,
    readonly: bool,
}

impl Default for DatePicker<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl DatePicker<NeedsState> {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("value", "Binding<Option<NaiveDate>>", "uncontrolled none", "Selected date"),
        PropDoc::new("min_date", "NaiveDate", "none", "Earliest pickable date"),
        PropDoc::new("max_date", "NaiveDate", "none", "Latest pickable date"),
        PropDoc::new("placeholder", "string", "\"Select date\"", "Shown while empty"),
        PropDoc::new("size", "sm | md | lg", "md", "Field size"),
        PropDoc::new("variant", "outline | filled | flushed", "outline", "Field style"),
        PropDoc::new("disabled", "bool", "false", "Ignore all input"),
        PropDoc::new("readonly", "bool", "false", "Show the date, block changes"),
        PropDoc::new("invalid", "bool", "false", "Error styling"),
        PropDoc::new("on_change", "handler", "-", "Fires with the new date or none"),
    ];

    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            placeholder: None,
            look: FieldLook::default(),
            readonly: false,
        }
    }

    pub fn state(self, s: &State<DatePickerState>) -> DatePicker<HasState<'_, DatePickerState>> {
        DatePicker {
            state_marker: HasState(s),
            id: self.id,
            placeholder: self.placeholder,
            look: self.look,
            readonly: self.readonly,
        }
    }
}

impl<S> DatePicker<S> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn size(mut self, size: FieldSize) -> Self {
        self.look.size = size;
        self
    }

    pub fn variant(mut self, variant: FieldVariant) -> Self {
        self.look.variant = variant;
        self
    }

    pub fn color(mut self, color: ColorScheme) -> Self {
        self.look.color = color;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.look.disabled = disabled;
        self
    }

    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.look.invalid = invalid;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.look.full_width = true;
        self
    }
}

const WEEKDAYS: &str = "Mo Tu We Th Fr Sa Su";

/// Days of the cursor's month as week rows, `None` for padding cells.
fn month_grid(month_start: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let offset = month_start.weekday().num_days_from_monday() as usize;
    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = offset;
    let mut day = Some(month_start);
    while let Some(date) = day.filter(|d| d.month() == month_start.month()) {
        week[slot] = Some(date);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        day = date.succ_opt();
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

fn date_event(date: Option<NaiveDate>) -> EventData {
    EventData::Date { date }
}

impl<'a> DatePicker<HasState<'a, DatePickerState>> {
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let id = self.id.clone().unwrap_or_else(|| "date-picker".into());
        let root_id = format!("{}-root", id);
        let interactive = !self.look.disabled && !self.readonly;
        let weak = state.downgrade();

        let open = state.with(|s| s.is_open());
        let watch = open && interactive;
        if watch != state.with(|s| s.outside.is_some()) {
            state.update(|s| {
                popup::sync_outside(
                    &mut s.outside,
                    watch,
                    registry.context().pointer(),
                    &root_id,
                    || close_handler(weak.clone()),
                )
            });
        }

        let (text, cursor) = state.with(|s| (s.text().to_string(), s.input.cursor()));
        let focused = registry.context().is_focused(&id);
        log::debug!(
            "DatePicker::build id={} open={} text={:?}",
            id,
            open,
            text
        );

        let mut frame = self
            .look
            .frame(&id, !self.look.disabled)
            .captures_input(interactive);
        frame = if focused && interactive {
            frame.child(text_with_cursor(&text, cursor))
        } else if text.is_empty() {
            frame.child(field_text(
                self.placeholder.as_deref().unwrap_or("Select date"),
                true,
            ))
        } else {
            frame.child(field_text(&text, false))
        };
        frame = frame.child(
            Element::text("▦").style(Style::new().foreground(Color::var("muted"))),
        );

        let mut root = Element::col().id(&root_id).child(frame);
        if self.look.full_width {
            root = root.width(Size::Fill);
        }
        if !interactive {
            return root;
        }

        let on_change = handler(handlers, "on_change");
        registry.register(&id, "on_activate", {
            let weak = weak.clone();
            Arc::new(move |_hx| {
                if let Some(state) = weak.upgrade() {
                    state.update(|s| s.toggle());
                }
            })
        });
        registry.register(&id, "on_blur", {
            let weak = weak.clone();
            let on_change = on_change.clone();
            Arc::new(move |hx| {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                let changed = state.update(|s| {
                    s.close();
                    s.commit_text()
                });
                if let (Some(date), Some(on_change)) = (changed, &on_change) {
                    hx.emit(on_change, date_event(date));
                }
            })
        });
        registry.register(&id, "on_key", {
            let weak = weak.clone();
            let on_change = on_change.clone();
            Arc::new(move |hx| {
                let Some((key, modifiers)) = hx.event().key() else {
                    return;
                };
                let Some(state) = weak.upgrade() else {
                    return;
                };
                match state.update(|s| s.handle_key(key, modifiers)) {
                    DateKey::Commit(date) => {
                        if let Some(on_change) = &on_change {
                            hx.emit(on_change, date_event(date));
                        }
                    }
                    DateKey::Ignored => hx.ignore(),
                    DateKey::Handled | DateKey::Input => {}
                }
            })
        });

        if open {
            root = root.child(self.calendar(&id, state, registry, &weak, &on_change));
        }
        root
    }

    fn calendar(
        &self,
        id: &str,
        state: &State<DatePickerState>,
        registry: &HandlerRegistry,
        weak: &WeakState<DatePickerState>,
        on_change: &Option<Handler>,
    ) -> Element {
        let today = Local::now().date_naive();
        let (cursor, value, min, max) =
            state.with(|s| (s.cursor.unwrap_or(today), s.value(), s.min, s.max));
        let month_start = cursor.with_day(1).unwrap_or(cursor);

        let prev_id = format!("{}-prev", id);
        let next_id = format!("{}-next", id);
        for (nav_id, months) in [(&prev_id, -1), (&next_id, 1)] {
            let weak = weak.clone();
            registry.register(
                nav_id,
                "on_activate",
                Arc::new(move |_hx| {
                    if let Some(state) = weak.upgrade() {
                        state.update(|s| s.move_months(months));
                    }
                }),
            );
        }

        let header = Element::row()
            .width(Size::Fill)
            .justify(Justify::SpaceBetween)
            .child(Element::text("‹").id(&prev_id).clickable(true))
            .child(
                Element::text(month_start.format("%B %Y").to_string())
                    .style(Style::new().bold()),
            )
            .child(Element::text("›").id(&next_id).clickable(true));

        let mut calendar = Element::col()
            .id(format!("{}-calendar", id))
            .position(Position::Absolute)
            .top(self.look.height() as i16)
            .left(0)
            .z_index(100)
            .padding(Edges::horizontal(1))
            .style(
                Style::new()
                    .background(Color::var("surface"))
                    .border(Radius::Md.border())
                    .border_color(Color::var("border")),
            )
            .child(header)
            .child(Element::text(WEEKDAYS).style(Style::new().foreground(Color::var("muted"))));

        for week in month_grid(month_start) {
            let mut row = Element::row().gap(1);
            for day in week {
                let Some(date) = day else {
                    row = row.child(Element::text("  "));
                    continue;
                };
                let day_id = format!("{}-day-{}", id, date.format(DATE_FORMAT));
                let enabled = min.is_none_or(|m| date >= m) && max.is_none_or(|m| date <= m);

                let mut style = Style::new();
                if Some(date) == value {
                    style = style
                        .background(self.look.color.base())
                        .foreground(self.look.color.on_solid())
                        .bold();
                } else if date == cursor {
                    style = style.background(Color::var("overlay")).bold();
                }
                if date == today {
                    style = style.underline();
                }

                row = row.child(
                    Element::text(format!("{:>2}", date.day()))
                        .id(&day_id)
                        .clickable(true)
                        .disabled(!enabled)
                        .style(style)
                        .style_disabled(Style::new().dim()),
                );

                if enabled {
                    let weak = weak.clone();
                    let on_change = on_change.clone();
                    registry.register(
                        &day_id,
                        "on_activate",
                        Arc::new(move |hx| {
                            let Some(state) = weak.upgrade() else {
                                return;
                            };
                            if state.update(|s| s.pick(date))
                                && let Some(on_change) = &on_change
                            {
                                hx.emit(on_change, date_event(Some(date)));
                            }
                        }),
                    );
                }
            }
            calendar = calendar.child(row);
        }

        calendar
    }
}

fn close_handler(weak: WeakState<DatePickerState>) -> Handler {
    Arc::new(move |_hx| {
        if let Some(state) = weak.upgrade() {
            state.update(|s| s.close());
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_grid_starts_on_weekday() {
        // 2024-02-01 is a Thursday
        let weeks = month_grid(date(2024, 2, 1));
        assert_eq!(weeks[0][..3], [None, None, None]);
        assert_eq!(weeks[0][3], Some(date(2024, 2, 1)));
        let days: usize = weeks.iter().map(|w| w.iter().flatten().count()).sum();
        assert_eq!(days, 29);
    }
}
