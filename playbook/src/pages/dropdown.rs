use std::sync::Arc;

use coreui::prelude::*;

use super::{Kit, readout};
use crate::showcase::PropsTable;

fn actions() -> Vec<DropdownItem> {
    vec![
        DropdownItem::new("edit", "Edit").icon("edit").shortcut("Ctrl+E"),
        DropdownItem::new("duplicate", "Duplicate")
            .icon("copy")
            .shortcut("Ctrl+D"),
        DropdownItem::new("share", "Share")
            .icon("external-link")
            .divider_after()
            .items([
                DropdownItem::new("share-mail", "By email").icon("mail"),
                DropdownItem::new("share-link", "Copy link").icon("copy"),
                DropdownItem::new("share-print", "Print").disabled(),
            ]),
        DropdownItem::new("archive", "Archive").disabled(),
        DropdownItem::new("delete", "Delete").icon("trash").danger(),
    ]
}

pub struct Demo {
    pub menu: State<DropdownState>,
    pub sticky: State<DropdownState>,
    pub placements: Vec<(Placement, State<DropdownState>)>,
    /// Last chosen item id.
    pub last: State<String>,
    pub open: State<bool>,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            menu: State::new(DropdownState::new(actions())),
            sticky: State::new(DropdownState::new([
                DropdownItem::new("bold", "Bold"),
                DropdownItem::new("italic", "Italic"),
                DropdownItem::new("underline", "Underline"),
            ])),
            placements: [
                Placement::BottomStart,
                Placement::BottomEnd,
                Placement::TopStart,
                Placement::Right,
            ]
            .into_iter()
            .map(|placement| {
                (
                    placement,
                    State::new(DropdownState::new([
                        DropdownItem::new("one", "First"),
                        DropdownItem::new("two", "Second"),
                    ])),
                )
            })
            .collect(),
            last: State::default(),
            open: State::default(),
        }
    }
}

fn recorder(demo: &Demo) -> WidgetHandlers {
    let mut handlers = WidgetHandlers::new();
    let last = demo.last.downgrade();
    handlers.insert(
        "on_select",
        Arc::new(move |hx| {
            if let (Some(last), Some(id)) = (last.upgrade(), hx.event().item_id()) {
                last.set(id.to_string());
            }
        }),
    );
    let open = demo.open.downgrade();
    handlers.insert(
        "on_open_change",
        Arc::new(move |hx| {
            if let (Some(open), Some(now)) = (open.upgrade(), hx.event().open()) {
                open.set(now);
            }
        }),
    );
    handlers
}

pub fn sections(kit: &Kit, demo: &Demo) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;
    let handlers = recorder(demo);

    let basic = kit
        .showcase("dropdown-basic", "Basic Menu")
        .description(
            "Enter opens. Up and Down move, Right enters a submenu, Left leaves it, \
             Escape closes.",
        )
        .preview(
            Dropdown::new()
                .id("dropdown-actions")
                .trigger(DropdownButton::new("Open Menu").element())
                .state(&demo.menu)
                .build(r, &handlers),
        )
        .preview(readout("Last action", demo.last.get()))
        .preview(readout(
            "Menu",
            if demo.open.get() { "open" } else { "closed" },
        ))
        .code(
            r#"
let menu = State::new(DropdownState::new([
    DropdownItem::new("edit", "Edit").icon("edit").shortcut("Ctrl+E"),
    DropdownItem::new("share", "Share").items([
        DropdownItem::new("share-mail", "By email"),
    ]),
    DropdownItem::new("delete", "Delete").danger(),
]));

Dropdown::new()
    .trigger(DropdownButton::new("Open Menu").element())
    .state(&menu)
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let sticky = kit
        .showcase("dropdown-sticky", "Stay Open")
        .description("With close_on_select off, several items can be chosen in a row.")
        .preview(
            Dropdown::new()
                .id("dropdown-sticky")
                .trigger(
                    DropdownButton::new("Format")
                        .variant(MenuVariant::Outline)
                        .color(MenuColor::Neutral)
                        .element(),
                )
                .close_on_select(false)
                .state(&demo.sticky)
                .build(r, &handlers),
        )
        .code(
            r#"
Dropdown::new().close_on_select(false)
"#,
        )
        .build(r);

    let placements = kit
        .showcase("dropdown-placements", "Placements")
        .preview(
            Element::row()
                .gap(2)
                .children(demo.placements.iter().map(|(placement, state)| {
                    Dropdown::new()
                        .id(format!("dropdown-{}", placement))
                        .placement(*placement)
                        .trigger(
                            DropdownButton::new(placement.name())
                                .variant(MenuVariant::Ghost)
                                .size(ButtonSize::Sm)
                                .element(),
                        )
                        .state(state)
                        .build(r, &none)
                })),
        )
        .code(
            r#"
Dropdown::new().placement(Placement::TopStart)
"#,
        )
        .build(r);

    vec![
        basic,
        sticky,
        placements,
        PropsTable::new("dropdown-props", Dropdown::PROPS)
            .title("Dropdown Props")
            .build(r),
        PropsTable::new("dropdown-button-props", DropdownButton::PROPS)
            .title("DropdownButton Props")
            .build(r),
    ]
}
