use coreui::prelude::*;

use super::{Kit, readout};
use crate::showcase::{PropsTable, on};

const FRUITS: &[(&str, &str)] = &[
    ("apple", "Apple"),
    ("banana", "Banana"),
    ("cherry", "Cherry"),
    ("date", "Date"),
    ("elderberry", "Elderberry"),
    ("fig", "Fig"),
    ("grape", "Grape"),
];

fn fruits() -> impl Iterator<Item = SelectOption> {
    FRUITS.iter().map(|(id, label)| SelectOption::new(*id, *label))
}

pub struct Demo {
    pub basic: State<AutocompleteState>,
    pub free: State<AutocompleteState>,
    pub fuzzy: State<AutocompleteState>,
    pub loading: State<AutocompleteState>,
    /// Last text reported by on_input_change.
    pub typed: State<String>,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            basic: State::new(AutocompleteState::new(fruits())),
            free: State::new(AutocompleteState::new(fruits()).free_solo()),
            fuzzy: State::new(
                AutocompleteState::new(fruits())
                    .with_filter(Filter::Fuzzy)
                    .with_min_chars(1),
            ),
            loading: State::new(AutocompleteState::new([])),
            typed: State::default(),
        }
    }
}

pub fn sections(kit: &Kit, demo: &Demo) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let basic = kit
        .showcase("autocomplete-basic", "Basic Autocomplete")
        .description("Typing filters by substring. Escape restores the committed text.")
        .preview(
            Autocomplete::new()
                .id("autocomplete-basic")
                .placeholder("Search fruits")
                .clearable()
                .state(&demo.basic)
                .build(r, &none),
        )
        .preview(readout(
            "Value",
            demo.basic.with(|s| s.value()).unwrap_or_default(),
        ))
        .code(
            r#"
let fruit = State::new(AutocompleteState::new([
    SelectOption::new("apple", "Apple"),
    SelectOption::new("banana", "Banana"),
]));

Autocomplete::new()
    .placeholder("Search fruits")
    .clearable()
    .state(&fruit)
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let echo = {
        let typed = demo.typed.downgrade();
        on("on_input_change", move |hx| {
            if let (Some(typed), Some(text)) = (typed.upgrade(), hx.event().text()) {
                typed.set(text.to_string());
            }
        })
    };
    let free = kit
        .showcase("autocomplete-free", "Free Solo")
        .description("Any typed text is a value, suggestions are optional.")
        .preview(
            Autocomplete::new()
                .id("autocomplete-free")
                .placeholder("Type anything")
                .state(&demo.free)
                .build(r, &echo),
        )
        .preview(readout("Typed", demo.typed.get()))
        .code(
            r#"
AutocompleteState::new(options).free_solo()
"#,
        )
        .build(r);

    let fuzzy = kit
        .showcase("autocomplete-fuzzy", "Fuzzy Filter")
        .description("Characters match in order, not necessarily adjacent: try \"ery\".")
        .preview(
            Autocomplete::new()
                .id("autocomplete-fuzzy")
                .placeholder("Fuzzy search")
                .variant(FieldVariant::Filled)
                .state(&demo.fuzzy)
                .build(r, &none),
        )
        .code(
            r#"
AutocompleteState::new(options)
    .with_filter(Filter::Fuzzy)
    .with_min_chars(1)
"#,
        )
        .build(r);

    let loading = kit
        .showcase("autocomplete-loading", "Loading and Empty")
        .preview(
            Autocomplete::new()
                .id("autocomplete-loading")
                .placeholder("Fetching")
                .loading(true)
                .loading_message("Fetching fruit...")
                .state(&demo.loading)
                .build(r, &none),
        )
        .code(
            r#"
Autocomplete::new()
    .loading(true)
    .loading_message("Fetching fruit...")
    .no_options_message("No fruit")
"#,
        )
        .build(r);

    vec![
        basic,
        free,
        fuzzy,
        loading,
        PropsTable::new("autocomplete-props", Autocomplete::PROPS)
            .title("Autocomplete Props")
            .build(r),
    ]
}
