use chrono::{Days, Local, NaiveDate};
use coreui::prelude::*;

use super::{Kit, readout};
use crate::showcase::{PropsTable, on};

pub struct Demo {
    pub basic: State<DatePickerState>,
    pub bounded: State<DatePickerState>,
    pub preset: State<DatePickerState>,
    /// Last date reported by on_change on the bounded picker.
    pub changed: State<Option<NaiveDate>>,
}

impl Default for Demo {
    fn default() -> Self {
        let today = Local::now().date_naive();
        let month_out = today.checked_add_days(Days::new(30)).unwrap_or(today);
        let preset = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap_or(today);
        Self {
            basic: State::new(DatePickerState::new()),
            bounded: State::new(
                DatePickerState::new()
                    .with_min_date(today)
                    .with_max_date(month_out),
            ),
            preset: State::new(DatePickerState::new().with_value(preset)),
            changed: State::default(),
        }
    }
}

fn shown(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn sections(kit: &Kit, demo: &Demo) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let basic = kit
        .showcase("date-basic", "Basic Date Picker")
        .description(
            "Type yyyy-mm-dd and press Enter, or Down for the calendar. \
             Arrows move by day or week, PageUp and PageDown by month.",
        )
        .preview(
            DatePicker::new()
                .id("date-basic")
                .state(&demo.basic)
                .build(r, &none),
        )
        .preview(readout("Value", shown(demo.basic.with(|s| s.value()))))
        .code(
            r#"
let date = State::new(DatePickerState::new());

DatePicker::new()
    .placeholder("Select date")
    .state(&date)
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let record = {
        let changed = demo.changed.downgrade();
        on("on_change", move |hx| {
            if let (Some(changed), Some(date)) = (changed.upgrade(), hx.event().date()) {
                changed.set(date);
            }
        })
    };
    let bounded = kit
        .showcase("date-bounded", "Min and Max")
        .description("Only the next thirty days can be picked. Typed dates outside the range are rejected.")
        .preview(
            DatePicker::new()
                .id("date-bounded")
                .placeholder("Within a month")
                .color(ColorScheme::Teal)
                .state(&demo.bounded)
                .build(r, &record),
        )
        .preview(readout("Changed to", shown(demo.changed.get())))
        .code(
            r#"
let today = Local::now().date_naive();

DatePickerState::new()
    .with_min_date(today)
    .with_max_date(today + Days::new(30))
"#,
        )
        .build(r);

    let looks = kit
        .showcase("date-variants", "Variants and States")
        .preview(
            Element::col()
                .gap(1)
                .child(
                    DatePicker::new()
                        .id("date-filled")
                        .variant(FieldVariant::Filled)
                        .readonly(true)
                        .state(&demo.preset)
                        .build(r, &none),
                )
                .child(
                    DatePicker::new()
                        .id("date-disabled")
                        .variant(FieldVariant::Flushed)
                        .disabled(true)
                        .state(&demo.preset)
                        .build(r, &none),
                ),
        )
        .code(
            r#"
DatePicker::new().variant(FieldVariant::Filled).readonly(true)
DatePicker::new().disabled(true)
"#,
        )
        .build(r);

    vec![
        basic,
        bounded,
        looks,
        PropsTable::new("date-picker-props", DatePicker::PROPS)
            .title("DatePicker Props")
            .build(r),
    ]
}
