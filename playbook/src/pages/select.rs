use coreui::prelude::*;

use super::{Kit, readout};
use crate::showcase::{PropsTable, on};

fn options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("option1", "Option 1"),
        SelectOption::new("option2", "Option 2"),
        SelectOption::new("option3", "Option 3"),
        SelectOption::new("option4", "Option 4").disabled(),
    ]
}

fn produce() -> Vec<SelectOption> {
    vec![
        SelectOption::new("any", "Anything"),
        SelectOption::new("apple", "Apple").group("Fruits"),
        SelectOption::new("banana", "Banana").group("Fruits"),
        SelectOption::new("carrot", "Carrot")
            .group("Vegetables")
            .description("Crunchy"),
        SelectOption::new("cherry", "Cherry").group("Fruits"),
        SelectOption::new("leek", "Leek").group("Vegetables"),
    ]
}

pub struct Demo {
    pub single: State<SelectState>,
    /// Owner of the controlled select's value.
    pub owned: State<Option<String>>,
    pub controlled: State<SelectState>,
    pub grouped: State<SelectState>,
    pub multi: State<MultiSelectState>,
    pub variants: Vec<State<SelectState>>,
}

impl Default for Demo {
    fn default() -> Self {
        let owned = State::new(Some("option2".to_string()));
        Self {
            single: State::new(SelectState::new(options()).with_value("option1")),
            controlled: State::new(
                SelectState::new(options()).with_binding(Binding::controlled(&owned)),
            ),
            owned,
            grouped: State::new(SelectState::new(produce())),
            multi: State::new(
                MultiSelectState::new(options())
                    .with_values(["option1", "option2"])
                    .with_max(3),
            ),
            variants: FieldVariant::ALL
                .iter()
                .map(|_| State::new(SelectState::new(options())))
                .collect(),
        }
    }
}

pub fn sections(kit: &Kit, demo: &Demo) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let single = kit
        .showcase("select-single", "Single Select")
        .description("Down opens the list, Enter picks, Escape closes. Option 4 is disabled.")
        .preview(
            Select::new()
                .id("select-single")
                .placeholder("Select an option")
                .state(&demo.single)
                .build(r, &none),
        )
        .preview(readout(
            "Value",
            demo.single.with(|s| s.value()).unwrap_or_default(),
        ))
        .code(
            r#"
let choice = State::new(SelectState::new([
    SelectOption::new("option1", "Option 1"),
    SelectOption::new("option2", "Option 2"),
    SelectOption::new("option4", "Option 4").disabled(),
]));

Select::new()
    .placeholder("Select an option")
    .state(&choice)
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let commit = {
        let owned = demo.owned.downgrade();
        on("on_change", move |hx| {
            if let Some(owned) = owned.upgrade() {
                owned.set(hx.event().selected_id().map(str::to_string));
            }
        })
    };
    let controlled = kit
        .showcase("select-controlled", "Controlled")
        .description("The page owns the value and applies changes from on_change.")
        .preview(
            Select::new()
                .id("select-controlled")
                .clearable()
                .state(&demo.controlled)
                .build(r, &commit),
        )
        .preview(readout("Owner", demo.owned.get().unwrap_or_default()))
        .code(
            r#"
let value = State::new(Some("option2".to_string()));
let select = State::new(
    SelectState::new(options).with_binding(Binding::controlled(&value)),
);

handlers.insert("on_change", Arc::new(move |hx| {
    value.set(hx.event().selected_id().map(str::to_string));
}));
"#,
        )
        .build(r);

    let grouped = kit
        .showcase("select-grouped", "Searchable and Grouped")
        .description("Ungrouped options first, then groups in order of appearance.")
        .preview(
            Select::new()
                .id("select-grouped")
                .placeholder("Pick produce")
                .searchable()
                .clearable()
                .state(&demo.grouped)
                .build(r, &none),
        )
        .code(
            r#"
SelectOption::new("apple", "Apple").group("Fruits")

Select::new().searchable().clearable().state(&produce)
"#,
        )
        .build(r);

    let multi = kit
        .showcase("select-multi", "Multi Select")
        .description("Enter toggles and keeps the list open. At most three values.")
        .preview(
            MultiSelect::new()
                .id("select-multi")
                .placeholder("Select options")
                .searchable()
                .clearable()
                .full_width()
                .state(&demo.multi)
                .build(r, &none),
        )
        .preview(readout("Values", demo.multi.with(|s| s.values().join(", "))))
        .code(
            r#"
let picks = State::new(
    MultiSelectState::new(options)
        .with_values(["option1", "option2"])
        .with_max(3),
);

MultiSelect::new().searchable().state(&picks)
"#,
        )
        .build(r);

    let variants = kit
        .showcase("select-variants", "Variants")
        .preview(
            Element::col()
                .gap(1)
                .children(FieldVariant::ALL.iter().zip(&demo.variants).map(|(variant, state)| {
                    Select::new()
                        .id(format!("select-variant-{}", variant))
                        .placeholder(variant.name())
                        .variant(*variant)
                        .state(state)
                        .build(r, &none)
                })),
        )
        .code(
            r#"
Select::new().variant(FieldVariant::Filled).placeholder("Filled")
"#,
        )
        .build(r);

    vec![
        single,
        controlled,
        grouped,
        multi,
        variants,
        PropsTable::new("select-props", Select::PROPS)
            .title("Select Props")
            .build(r),
        PropsTable::new("multi-select-props", MultiSelect::PROPS)
            .title("MultiSelect Props")
            .build(r),
    ]
}
