//! Dropdown menu - a trigger plus a popup of actions, with one level of
//! submenus.

use std::sync::Arc;

use coreui_dom::layout::estimate_size;
use coreui_dom::{Color, Edges, Element, Key, Position, Size, Style};

use super::icon::glyph;
use super::{HasState, NeedsState, handler};
use crate::binding::Binding;
use crate::handler_context::{
    EventData, Handler, HandlerContext, HandlerRegistry, WidgetHandlers,
};
use crate::pointer::Subscription;
use crate::state::{State, WeakState};
use crate::style::{ColorScheme, PropDoc, named_enum};
use crate::tokens::Radius;

/// One menu entry. Entries with `items` open a submenu instead of firing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownItem {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub shortcut: Option<String>,
    pub danger: bool,
    pub disabled: bool,
    pub divider_after: bool,
    pub items: Vec<DropdownItem>,
}

impl DropdownItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }

    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn divider_after(mut self) -> Self {
        self.divider_after = true;
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = DropdownItem>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    pub fn has_submenu(&self) -> bool {
        !self.items.is_empty()
    }
}

named_enum! {
    pub enum Placement ("placement") {
        Top = "top",
        TopStart = "top-start",
        TopEnd = "top-end",
        Bottom = "bottom",
        BottomStart = "bottom-start",
        BottomEnd = "bottom-end",
        Left = "left",
        LeftStart = "left-start",
        LeftEnd = "left-end",
        Right = "right",
        RightStart = "right-start",
        RightEnd = "right-end",
    }
    default BottomStart
}

impl Placement {
    /// Offset of a `menu`-sized popup from the top-left of a
    /// `trigger`-sized anchor, as (top, left).
    pub fn offset(self, trigger: (u16, u16), menu: (u16, u16)) -> (i16, i16) {
        let (tw, th) = (trigger.0 as i16, trigger.1 as i16);
        let (mw, mh) = (menu.0 as i16, menu.1 as i16);
        use Placement::*;
        match self {
            Top => (-mh, (tw - mw) / 2),
            TopStart => (-mh, 0),
            TopEnd => (-mh, tw - mw),
            Bottom => (th, (tw - mw) / 2),
            BottomStart => (th, 0),
            BottomEnd => (th, tw - mw),
            Left => ((th - mh) / 2, -mw),
            LeftStart => (0, -mw),
            LeftEnd => (th - mh, -mw),
            Right => ((th - mh) / 2, tw),
            RightStart => (0, tw),
            RightEnd => (th - mh, tw),
        }
    }
}

/// What a key did to a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuKey {
    Ignored,
    Handled,
    /// The menu asked to open or close.
    Open(bool),
    /// An enabled leaf item was chosen.
    Select(String),
}

/// First enabled index after `from` in direction `delta`, wrapping.
fn step_enabled(items: &[DropdownItem], from: Option<usize>, delta: isize) -> Option<usize> {
    let len = items.len() as isize;
    if len == 0 {
        return None;
    }
    let mut pos = match from {
        Some(i) => i as isize,
        None if delta >= 0 => -1,
        None => len,
    };
    for _ in 0..len {
        pos = (pos + delta).rem_euclid(len);
        if !items[pos as usize].disabled {
            return Some(pos as usize);
        }
    }
    None
}

/// State for a dropdown menu: its items, open flag and keyboard position.
#[derive(Debug, Default)]
pub struct DropdownState {
    items: Vec<DropdownItem>,
    open: Binding<bool>,
    highlighted: Option<usize>,
    /// Parent index and highlight inside the open submenu.
    submenu: Option<(usize, Option<usize>)>,
    outside: Option<Subscription>,
}

impl DropdownState {
    pub fn new(items: impl IntoIterator<Item = DropdownItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn with_binding(mut self, open: Binding<bool>) -> Self {
        self.open = open;
        self
    }

    pub fn items(&self) -> &[DropdownItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Index of the item whose submenu is open.
    pub fn submenu(&self) -> Option<usize> {
        self.submenu.map(|(parent, _)| parent)
    }

    pub fn submenu_highlighted(&self) -> Option<usize> {
        self.submenu.and_then(|(_, h)| h)
    }

    /// The highlighted item, inside the submenu when one is open.
    pub fn highlighted_item(&self) -> Option<&DropdownItem> {
        match self.submenu {
            Some((parent, h)) => self.items.get(parent)?.items.get(h?),
            None => self.items.get(self.highlighted?),
        }
    }

    /// Ask for the menu to open or close. Returns false when already in
    /// that state.
    pub fn set_open(&mut self, open: bool) -> bool {
        if self.open.get() == open {
            return false;
        }
        log::debug!("DropdownState::set_open open={}", open);
        self.open.commit(open);
        self.submenu = None;
        self.highlighted = if open {
            step_enabled(&self.items, None, 1)
        } else {
            None
        };
        true
    }

    /// Move the highlight in the active level, skipping disabled items.
    pub fn move_highlight(&mut self, delta: isize) {
        match &mut self.submenu {
            Some((parent, h)) => {
                let items = &self.items[*parent].items;
                *h = step_enabled(items, *h, delta);
            }
            None => self.highlighted = step_enabled(&self.items, self.highlighted, delta),
        }
    }

    fn highlight_edge(&mut self, last: bool) {
        let delta = if last { -1 } else { 1 };
        match &mut self.submenu {
            Some((parent, h)) => *h = step_enabled(&self.items[*parent].items, None, delta),
            None => self.highlighted = step_enabled(&self.items, None, delta),
        }
    }

    /// Open the submenu of the highlighted top-level item.
    pub fn open_submenu(&mut self) -> bool {
        if self.submenu.is_some() {
            return false;
        }
        let Some(parent) = self.highlighted else {
            return false;
        };
        match self.items.get(parent) {
            Some(item) if item.has_submenu() && !item.disabled => {
                self.submenu = Some((parent, step_enabled(&item.items, None, 1)));
                true
            }
            _ => false,
        }
    }

    pub fn close_submenu(&mut self) -> bool {
        self.submenu.take().is_some()
    }

    /// Choose the item `id` at either level. Disabled items are a no-op
    /// and submenu parents open their submenu. Returns the id of a chosen
    /// leaf.
    pub fn choose(&mut self, id: &str) -> Option<String> {
        for (i, item) in self.items.iter().enumerate() {
            if item.id == id {
                if item.disabled {
                    return None;
                }
                self.highlighted = Some(i);
                if item.has_submenu() {
                    self.submenu = Some((i, step_enabled(&item.items, None, 1)));
                    return None;
                }
                return Some(item.id.clone());
            }
            if let Some(child) = item.items.iter().find(|c| c.id == id) {
                return (!item.disabled && !child.disabled).then(|| child.id.clone());
            }
        }
        None
    }

    pub fn handle_key(&mut self, key: Key) -> MenuKey {
        if !self.is_open() {
            return match key {
                Key::Down | Key::Enter | Key::Char(' ') => {
                    self.set_open(true);
                    MenuKey::Open(true)
                }
                _ => MenuKey::Ignored,
            };
        }

        match key {
            Key::Down => self.move_highlight(1),
            Key::Up => self.move_highlight(-1),
            Key::Home => self.highlight_edge(false),
            Key::End => self.highlight_edge(true),
            Key::Right => {
                self.open_submenu();
            }
            Key::Left => {
                self.close_submenu();
            }
            Key::Escape => {
                self.set_open(false);
                return MenuKey::Open(false);
            }
            Key::Enter | Key::Char(' ') => {
                if self.open_submenu() {
                    return MenuKey::Handled;
                }
                return match self.highlighted_item() {
                    Some(item) if !item.disabled && !item.has_submenu() => {
                        MenuKey::Select(item.id.clone())
                    }
                    _ => MenuKey::Handled,
                };
            }
            _ => return MenuKey::Ignored,
        }
        MenuKey::Handled
    }
}

/// A dropdown menu builder.
#[derive(Debug)]
pub struct Dropdown<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    trigger: Option<Element>,
    placement: Placement,
    close_on_select: bool,
    disabled: bool,
}

impl Default for Dropdown<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Dropdown<NeedsState> {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("trigger", "Element", "\"Menu\"", "What opens the menu"),
        PropDoc::new("items", "DropdownItem[]", "[]", "id, label, icon, shortcut, danger, disabled, divider_after, items"),
        PropDoc::new("placement", "top | bottom | left | right, with -start | -end", "bottom-start", "Where the menu opens"),
        PropDoc::new("close_on_select", "bool", "true", "Close after choosing an item"),
        PropDoc::new("open", "Binding<bool>", "uncontrolled", "Open state"),
        PropDoc::new("on_select", "handler", "-", "Fires with the chosen item id"),
        PropDoc::new("on_open_change", "handler", "-", "Fires when the menu opens or closes"),
    ];

    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            trigger: None,
            placement: Placement::default(),
            close_on_select: true,
            disabled: false,
        }
    }

    pub fn state(self, s: &State<DropdownState>) -> Dropdown<HasState<'_, DropdownState>> {
        Dropdown {
            state_marker: HasState(s),
            id: self.id,
            trigger: self.trigger,
            placement: self.placement,
            close_on_select: self.close_on_select,
            disabled: self.disabled,
        }
    }
}

impl<S> Dropdown<S> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The element drawn as the trigger. It should not be focusable or
    /// clickable itself; the dropdown wraps it.
    pub fn trigger(mut self, trigger: Element) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn close_on_select(mut self, close: bool) -> Self {
        self.close_on_select = close;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

fn menu_frame(id: String) -> Element {
    Element::col()
        .id(id)
        .position(Position::Absolute)
        .z_index(100)
        .min_width(16)
        .style(
            Style::new()
                .background(Color::var("surface"))
                .border(Radius::Md.border())
                .border_color(Color::var("border")),
        )
}

fn item_row(element_id: &str, item: &DropdownItem, highlighted: bool) -> Element {
    let mut style = Style::new();
    if item.danger {
        style = style.foreground(ColorScheme::Error.base());
    }
    if highlighted {
        style = style.background(Color::var("overlay")).bold();
    }

    let icon = item
        .icon
        .as_deref()
        .map(|name| glyph(name).unwrap_or('?').to_string())
        .unwrap_or_else(|| " ".into());
    let mut row = Element::row()
        .id(element_id)
        .gap(1)
        .padding(Edges::horizontal(1))
        .width(Size::Fill)
        .clickable(true)
        .disabled(item.disabled)
        .style(style)
        .style_disabled(Style::new().dim())
        .child(Element::text(icon))
        .child(Element::text(&item.label).flex_grow(1));
    if let Some(shortcut) = &item.shortcut {
        row = row.child(
            Element::text(shortcut).style(Style::new().foreground(Color::var("muted"))),
        );
    }
    if item.has_submenu() {
        row = row.child(Element::text("›"));
    }
    row
}

fn divider() -> Element {
    Element::fill('─')
        .width(Size::Fill)
        .height(Size::Fixed(1))
        .style(Style::new().foreground(Color::var("border")))
}

/// Shared by every item handler: emits and applies close-on-select.
#[derive(Clone)]
struct MenuCallbacks {
    on_select: Option<Handler>,
    on_open_change: Option<Handler>,
    close_on_select: bool,
}

impl MenuCallbacks {
    fn selected(&self, hx: &HandlerContext, state: &State<DropdownState>, id: String) {
        log::debug!("Dropdown select id={}", id);
        if let Some(on_select) = &self.on_select {
            hx.emit(on_select, EventData::Item { id });
        }
        if self.close_on_select && state.update(|s| s.set_open(false)) {
            self.open_changed(hx, false);
        }
    }

    fn open_changed(&self, hx: &HandlerContext, open: bool) {
        if let Some(on_open_change) = &self.on_open_change {
            hx.emit(on_open_change, EventData::Open { open });
        }
    }
}

impl<'a> Dropdown<HasState<'a, DropdownState>> {
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let id = self.id.clone().unwrap_or_else(|| "dropdown".into());
        let root_id = format!("{}-root", id);
        let weak = state.downgrade();
        let callbacks = MenuCallbacks {
            on_select: handler(handlers, "on_select"),
            on_open_change: handler(handlers, "on_open_change"),
            close_on_select: self.close_on_select,
        };

        let open = state.with(|s| s.is_open()) && !self.disabled;
        if open != state.with(|s| s.outside.is_some()) {
            state.update(|s| {
                if open {
                    let callbacks = callbacks.clone();
                    let weak = weak.clone();
                    s.outside = Some(registry.context().pointer().watch(
                        &root_id,
                        Arc::new(move |hx| {
                            if let Some(state) = weak.upgrade()
                                && state.update(|s| s.set_open(false))
                            {
                                callbacks.open_changed(hx, false);
                            }
                        }),
                    ));
                } else {
                    s.outside = None;
                }
            });
        }

        log::debug!("Dropdown::build id={} open={}", id, open);

        let trigger = self
            .trigger
            .unwrap_or_else(|| DropdownButton::new("Menu").element());
        let trigger_size = (estimate_size(&trigger, true), estimate_size(&trigger, false));
        let wrapper = Element::row()
            .id(&id)
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled)
            .style_focused(Style::new().underline())
            .style_disabled(Style::new().dim())
            .child(trigger);
        let mut root = Element::col().id(&root_id).child(wrapper);

        if self.disabled {
            return root;
        }

        registry.register(&id, "on_activate", {
            let weak = weak.clone();
            let callbacks = callbacks.clone();
            Arc::new(move |hx| {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                let open = !state.with(|s| s.is_open());
                if state.update(|s| s.set_open(open)) {
                    callbacks.open_changed(hx, open);
                }
            })
        });
        registry.register(&id, "on_key", {
            let weak = weak.clone();
            let callbacks = callbacks.clone();
            Arc::new(move |hx| {
                let Some((key, _)) = hx.event().key() else {
                    return;
                };
                let Some(state) = weak.upgrade() else {
                    return;
                };
                match state.update(|s| s.handle_key(key)) {
                    MenuKey::Open(open) => callbacks.open_changed(hx, open),
                    MenuKey::Select(item) => callbacks.selected(hx, &state, item),
                    MenuKey::Ignored => hx.ignore(),
                    MenuKey::Handled => {}
                }
            })
        });

        if !open {
            return root;
        }

        let (items, highlighted, submenu, sub_highlighted) = state.with(|s| {
            (
                s.items.clone(),
                s.highlighted,
                s.submenu(),
                s.submenu_highlighted(),
            )
        });

        let mut menu = menu_frame(format!("{}-menu", id));
        let mut parent_row = 0u16;
        let mut row_offset = 0u16;
        for (i, item) in items.iter().enumerate() {
            let item_id = format!("{}-item-{}", id, i);
            if submenu == Some(i) {
                parent_row = row_offset;
            }
            menu = menu.child(item_row(&item_id, item, highlighted == Some(i)));
            row_offset += 1;
            if item.divider_after {
                menu = menu.child(divider());
                row_offset += 1;
            }
            register_item(registry, &weak, &callbacks, item_id, item.id.clone());
        }

        if let Some(parent) = submenu
            && let Some(item) = items.get(parent)
        {
            let mut sub = menu_frame(format!("{}-sub", id)).top(parent_row as i16);
            for (j, child) in item.items.iter().enumerate() {
                let child_id = format!("{}-item-{}-{}", id, parent, j);
                sub = sub.child(item_row(&child_id, child, sub_highlighted == Some(j)));
                if child.divider_after {
                    sub = sub.child(divider());
                }
                register_item(registry, &weak, &callbacks, child_id, child.id.clone());
            }
            let menu_width = estimate_size(&menu, true);
            menu = menu.child(sub.left(menu_width as i16));
        }

        let menu_size = (estimate_size(&menu, true), estimate_size(&menu, false));
        let (top, left) = self.placement.offset(trigger_size, menu_size);
        root = root.child(menu.top(top).left(left));
        root
    }
}

fn register_item(
    registry: &HandlerRegistry,
    weak: &WeakState<DropdownState>,
    callbacks: &MenuCallbacks,
    element_id: String,
    item_id: String,
) {
    let weak = weak.clone();
    let callbacks = callbacks.clone();
    registry.register(
        &element_id,
        "on_activate",
        Arc::new(move |hx| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            if let Some(id) = state.update(|s| s.choose(&item_id)) {
                callbacks.selected(hx, &state, id);
            }
        }),
    );
}

named_enum! {
    pub enum MenuVariant ("menu variant") {
        Solid = "solid",
        Outline = "outline",
        Ghost = "ghost",
    }
    default Solid
}

named_enum! {
    pub enum MenuColor ("menu color") {
        Primary = "primary",
        Secondary = "secondary",
        Neutral = "neutral",
    }
    default Primary
}

impl MenuColor {
    pub const fn scheme(self) -> ColorScheme {
        match self {
            MenuColor::Primary => ColorScheme::Primary,
            MenuColor::Secondary => ColorScheme::Secondary,
            MenuColor::Neutral => ColorScheme::Neutral,
        }
    }
}

/// The styled label of a dropdown trigger: text plus a chevron. Pass the
/// result to [`Dropdown::trigger`].
#[derive(Debug, Clone)]
pub struct DropdownButton {
    label: String,
    variant: MenuVariant,
    color: MenuColor,
    size: super::button::ButtonSize,
}

impl DropdownButton {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("variant", "solid | outline | ghost", "solid", "Trigger style"),
        PropDoc::new("color", "primary | secondary | neutral", "primary", "Trigger color"),
        PropDoc::new("size", "xs | sm | md | lg | xl", "md", "Trigger padding"),
    ];

    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: MenuVariant::default(),
            color: MenuColor::default(),
            size: super::button::ButtonSize::default(),
        }
    }

    pub fn variant(mut self, variant: MenuVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: MenuColor) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: super::button::ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn element(self) -> Element {
        let scheme = self.color.scheme();
        let style = match self.variant {
            MenuVariant::Solid => Style::new()
                .background(scheme.base())
                .foreground(scheme.on_solid()),
            MenuVariant::Outline => Style::new()
                .border(Radius::Md.border())
                .border_color(scheme.base())
                .foreground(scheme.base()),
            MenuVariant::Ghost => Style::new().foreground(scheme.base()),
        };
        Element::row()
            .gap(1)
            .padding(self.size.padding())
            .style(style)
            .child(Element::text(self.label))
            .child(Element::text("▾"))
    }
}
