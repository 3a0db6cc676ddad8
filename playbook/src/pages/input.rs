use coreui::prelude::*;

use super::{Kit, readout};
use crate::showcase::{PropsTable, on};

#[derive(Default)]
pub struct Demo {
    pub name: State<InputState>,
    pub email: State<InputState>,
    pub password: State<InputState>,
    pub search: State<InputState>,
    pub website: State<InputState>,
    /// Backs the disabled and read-only previews, never edited.
    pub looks: State<InputState>,
    pub submitted: State<String>,
}

pub fn sections(kit: &Kit, demo: &Demo) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let submit = {
        let name = demo.name.downgrade();
        let submitted = demo.submitted.downgrade();
        on("on_submit", move |_hx| {
            if let (Some(name), Some(submitted)) = (name.upgrade(), submitted.upgrade()) {
                submitted.set(name.with(|s| s.text().to_string()));
            }
        })
    };
    let basic = kit
        .showcase("input-basic", "Basic Input")
        .description("Type while focused. Enter submits.")
        .preview(
            Input::new()
                .id("input-name")
                .placeholder("Your name")
                .full_width()
                .state(&demo.name)
                .build(r, &submit),
        )
        .preview(readout("Submitted", demo.submitted.get()))
        .code(
            r#"
let name = State::new(InputState::new());

Input::new()
    .placeholder("Your name")
    .state(&name)
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let validation = kit
        .showcase("input-validation", "Validation")
        .description("Rules run on Enter, then on every edit while an error shows.")
        .preview(
            Input::new()
                .id("input-email")
                .placeholder("you@example.com")
                .required()
                .helper_text("We never share your email.")
                .validator(Validator::new().email("Enter a valid email address"))
                .full_width()
                .state(&demo.email)
                .build(r, &none),
        )
        .preview(
            Input::new()
                .id("input-password")
                .placeholder("Password")
                .password()
                .validator(Validator::new().min_length(8, "At least 8 characters"))
                .full_width()
                .state(&demo.password)
                .build(r, &none),
        )
        .code(
            r#"
Input::new()
    .required()
    .validator(Validator::new().email("Enter a valid email address"))
    .state(&email)
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let addons = kit
        .showcase("input-addons", "Elements and Addons")
        .preview(
            Input::new()
                .id("input-search")
                .placeholder("Search")
                .left_element(InputAddon::icon("search"))
                .full_width()
                .state(&demo.search)
                .build(r, &none),
        )
        .preview(
            Input::new()
                .id("input-website")
                .placeholder("example.com")
                .left_addon(InputAddon::text("https://"))
                .right_addon(InputAddon::text(".dev"))
                .full_width()
                .state(&demo.website)
                .build(r, &none),
        )
        .code(
            r#"
Input::new()
    .left_element(InputAddon::icon("search"))
    .left_addon(InputAddon::text("https://"))
"#,
        )
        .build(r);

    let variants = kit
        .showcase("input-variants", "Variants and States")
        .preview(Element::col().gap(1).children(FieldVariant::ALL.iter().map(|variant| {
            Input::new()
                .id(format!("input-variant-{}", variant))
                .placeholder(variant.name())
                .variant(*variant)
                .disabled(true)
                .state(&demo.looks)
                .build(r, &none)
        })))
        .preview(
            Input::new()
                .id("input-invalid")
                .placeholder("Invalid")
                .invalid(true)
                .readonly(true)
                .state(&demo.looks)
                .build(r, &none),
        )
        .code(
            r#"
Input::new().variant(FieldVariant::Filled)
Input::new().invalid(true)
"#,
        )
        .build(r);

    vec![
        basic,
        validation,
        addons,
        variants,
        PropsTable::new("input-props", Input::PROPS)
            .title("Input Props")
            .build(r),
    ]
}
