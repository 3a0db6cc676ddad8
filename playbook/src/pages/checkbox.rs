use coreui::prelude::*;

use super::{Kit, readout};
use crate::showcase::PropsTable;

pub struct Demo {
    pub terms: State<CheckboxState>,
    pub newsletter: State<CheckboxState>,
    pub indeterminate: State<CheckboxState>,
    pub disabled: State<CheckboxState>,
    pub invalid: State<CheckboxState>,
    pub sizes: Vec<State<CheckboxState>>,
    pub colors: Vec<(ColorScheme, State<CheckboxState>)>,
    pub group: State<CheckboxGroupState>,
    pub frameworks: State<CheckboxGroupState>,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            terms: State::new(CheckboxState::new(false)),
            newsletter: State::new(CheckboxState::new(true)),
            indeterminate: State::new(CheckboxState::new(false)),
            disabled: State::new(CheckboxState::new(true)),
            invalid: State::new(CheckboxState::new(false)),
            sizes: CheckboxSize::ALL
                .iter()
                .map(|_| State::new(CheckboxState::new(true)))
                .collect(),
            colors: [
                ColorScheme::Primary,
                ColorScheme::Success,
                ColorScheme::Warning,
                ColorScheme::Error,
                ColorScheme::Purple,
            ]
            .into_iter()
            .map(|color| (color, State::new(CheckboxState::new(true))))
            .collect(),
            group: State::new(
                CheckboxGroupState::new([
                    SelectOption::new("option1", "Option 1"),
                    SelectOption::new("option2", "Option 2"),
                    SelectOption::new("option3", "Option 3").description("With helper text"),
                ])
                .with_values(["option1"]),
            ),
            frameworks: State::new(CheckboxGroupState::new([
                SelectOption::new("react", "React"),
                SelectOption::new("vue", "Vue"),
                SelectOption::new("angular", "Angular"),
                SelectOption::new("svelte", "Svelte"),
            ])),
        }
    }
}

pub fn sections(kit: &Kit, demo: &Demo) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let basic = kit
        .showcase("checkbox-basic", "Basic Checkbox")
        .description("Space, Enter or a click toggles.")
        .preview(
            Checkbox::new()
                .id("checkbox-terms")
                .label("Accept terms and conditions")
                .state(&demo.terms)
                .build(r, &none),
        )
        .preview(
            Checkbox::new()
                .id("checkbox-newsletter")
                .label("Subscribe to newsletter")
                .helper_text("Get updates about new features")
                .state(&demo.newsletter)
                .build(r, &none),
        )
        .code(
            r#"
let terms = State::new(CheckboxState::new(false));

Checkbox::new()
    .label("Accept terms and conditions")
    .state(&terms)
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let sizes = kit
        .showcase("checkbox-sizes", "Sizes")
        .preview(
            Element::row()
                .gap(2)
                .children(CheckboxSize::ALL.iter().zip(&demo.sizes).map(|(size, state)| {
                    Checkbox::new()
                        .id(format!("checkbox-size-{}", size))
                        .label(size.name())
                        .size(*size)
                        .state(state)
                        .build(r, &none)
                })),
        )
        .code(
            r#"
Checkbox::new().size(CheckboxSize::Lg)
"#,
        )
        .build(r);

    let colors = kit
        .showcase("checkbox-colors", "Colors")
        .preview(
            Element::row()
                .gap(2)
                .children(demo.colors.iter().map(|(color, state)| {
                    Checkbox::new()
                        .id(format!("checkbox-color-{}", color))
                        .label(color.name())
                        .color(*color)
                        .state(state)
                        .build(r, &none)
                })),
        )
        .code(
            r#"
Checkbox::new().color(ColorScheme::Success)
"#,
        )
        .build(r);

    let states = kit
        .showcase("checkbox-states", "States")
        .preview(
            Element::row()
                .gap(2)
                .child(
                    Checkbox::new()
                        .id("checkbox-indeterminate")
                        .label("Indeterminate")
                        .indeterminate(true)
                        .state(&demo.indeterminate)
                        .build(r, &none),
                )
                .child(
                    Checkbox::new()
                        .id("checkbox-disabled")
                        .label("Disabled")
                        .disabled(true)
                        .state(&demo.disabled)
                        .build(r, &none),
                )
                .child(
                    Checkbox::new()
                        .id("checkbox-invalid")
                        .label("Invalid")
                        .invalid(true)
                        .required()
                        .state(&demo.invalid)
                        .build(r, &none),
                ),
        )
        .code(
            r#"
Checkbox::new().indeterminate(true)
Checkbox::new().disabled(true)
Checkbox::new().invalid(true)
"#,
        )
        .build(r);

    let group = kit
        .showcase("checkbox-group", "Checkbox Group")
        .description("Values come back in option order.")
        .preview(
            CheckboxGroup::new()
                .id("checkbox-group")
                .state(&demo.group)
                .build(r, &none),
        )
        .preview(readout(
            "Selected",
            demo.group.with(|g| g.values().join(", ")),
        ))
        .code(
            r#"
let values = State::new(CheckboxGroupState::new([
    SelectOption::new("option1", "Option 1"),
    SelectOption::new("option2", "Option 2"),
    SelectOption::new("option3", "Option 3"),
]));

CheckboxGroup::new().state(&values).build(&registry, &handlers)
"#,
        )
        .build(r);

    let horizontal = kit
        .showcase("checkbox-horizontal", "Horizontal Group")
        .preview(
            CheckboxGroup::new()
                .id("checkbox-frameworks")
                .direction(StackDirection::Row)
                .color(ColorScheme::Secondary)
                .state(&demo.frameworks)
                .build(r, &none),
        )
        .code(
            r#"
CheckboxGroup::new()
    .direction(StackDirection::Row)
    .state(&frameworks)
"#,
        )
        .build(r);

    vec![
        basic,
        sizes,
        colors,
        states,
        group,
        horizontal,
        PropsTable::new("checkbox-props", Checkbox::PROPS)
            .title("Checkbox Props")
            .build(r),
        PropsTable::new("checkbox-group-props", CheckboxGroup::PROPS)
            .title("CheckboxGroup Props")
            .build(r),
    ]
}
