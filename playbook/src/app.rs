//! The playbook app: a sidebar of pages and the selected page's sections.

use std::sync::Arc;

use coreui::dom::{Border, Color, Edges, Style};
use coreui::prelude::*;

use crate::catalog::{CATEGORIES, PageId};
use crate::config::Config;
use crate::pages::{self, Demos, Kit};

const SIDEBAR_WIDTH: u16 = 26;
const COLLAPSED_WIDTH: u16 = 7;

/// The id of the sidebar entry for `page`.
pub fn nav_id(page: PageId) -> String {
    format!("nav-{}", page.slug())
}

pub struct Playbook {
    config: Config,
    page: State<PageId>,
    /// Index of the first visible section.
    scroll: State<usize>,
    /// Section count of the last build, bounds `scroll`.
    sections: State<usize>,
    demos: Demos,
}

impl Playbook {
    pub fn new(config: Config) -> Self {
        log::info!("Playbook::new start_page={}", config.start_page);
        Self {
            page: State::new(config.start_page),
            scroll: State::new(0),
            sections: State::new(0),
            demos: Demos::new(),
            config,
        }
    }

    pub fn page(&self) -> PageId {
        self.page.get()
    }

    pub fn scroll(&self) -> usize {
        self.scroll.get()
    }

    pub fn open(&self, page: PageId) {
        open(&self.page, &self.scroll, page);
    }

    /// Move the first visible section by `delta`, within the page.
    pub fn scroll_by(&self, delta: isize) {
        scroll_by(&self.scroll, &self.sections, delta);
    }

    fn sidebar(&self, registry: &HandlerRegistry, collapsed: bool) -> Element {
        let current = self.page.get();
        let mut sidebar = Element::col()
            .id("sidebar")
            .width(Size::Fixed(if collapsed {
                COLLAPSED_WIDTH
            } else {
                SIDEBAR_WIDTH
            }))
            .height(Size::Fill)
            .padding(Edges::symmetric(1, 1))
            .style(
                Style::new()
                    .background(Color::var("surface"))
                    .border(Border::Single)
                    .border_color(Color::var("border")),
            );

        sidebar = if collapsed {
            sidebar.child(
                Element::text("◆").style(Style::new().foreground(ColorScheme::Primary.base())),
            )
        } else {
            sidebar
                .child(
                    Element::text("Core UI")
                        .style(Style::new().bold().foreground(ColorScheme::Primary.base())),
                )
                .child(
                    Element::text("Design System")
                        .style(Style::new().foreground(Color::var("muted"))),
                )
        };

        for category in CATEGORIES {
            sidebar = sidebar.child(Element::text(""));
            if !collapsed {
                sidebar = sidebar.child(
                    Element::text(category.title.to_uppercase())
                        .style(Style::new().dim().bold()),
                );
            }
            for page in category.pages {
                let active = *page == current;
                sidebar = sidebar.child(self.nav_item(registry, *page, active, collapsed));
            }
        }
        sidebar
    }

    fn nav_item(
        &self,
        registry: &HandlerRegistry,
        page: PageId,
        active: bool,
        collapsed: bool,
    ) -> Element {
        let id = nav_id(page);
        let glyph = glyph(page.icon()).unwrap_or('•');
        let mut style = Style::new();
        if active {
            style = style.bold().foreground(ColorScheme::Primary.base());
        }
        let mut item = Element::row()
            .id(&id)
            .gap(1)
            .width(Size::Fill)
            .padding(Edges::horizontal(1))
            .focusable(true)
            .clickable(true)
            .style(style)
            .style_focused(Style::new().background(Color::var("overlay")))
            .child(Element::text(glyph.to_string()));
        if !collapsed {
            item = item.child(Element::text(page.title()));
        }

        let (weak_page, weak_scroll) = (self.page.downgrade(), self.scroll.downgrade());
        registry.register(
            &id,
            "on_activate",
            Arc::new(move |_hx| {
                if let (Some(current), Some(scroll)) =
                    (weak_page.upgrade(), weak_scroll.upgrade())
                {
                    open(&current, &scroll, page);
                }
            }),
        );

        let (weak_page, weak_scroll) = (self.page.downgrade(), self.scroll.downgrade());
        registry.register(
            &id,
            "on_key",
            Arc::new(move |hx| {
                let step = match hx.event().key() {
                    Some((Key::Up, modifiers)) if modifiers.none() => -1,
                    Some((Key::Down, modifiers)) if modifiers.none() => 1,
                    _ => return hx.ignore(),
                };
                let (Some(current), Some(scroll)) = (weak_page.upgrade(), weak_scroll.upgrade())
                else {
                    return;
                };
                let next = page.step(step);
                open(&current, &scroll, next);
                hx.cx().focus(nav_id(next));
            }),
        );
        item
    }

    fn content(&self, registry: &HandlerRegistry, cx: &Context) -> Element {
        let page = self.page.get();
        let kit =
            Kit::new(registry, cx, &self.demos).copy_feedback(self.config.copy_feedback());
        let sections = pages::sections(page, &kit);

        let last = sections.len().saturating_sub(1);
        self.sections.set(sections.len());
        let skip = self.scroll.get().min(last);
        if skip != self.scroll.get() {
            self.scroll.set(skip);
        }

        let none = WidgetHandlers::new();
        let mut content = Element::col()
            .id("content")
            .flex_grow(1)
            .height(Size::Fill)
            .padding(Edges::symmetric(1, 2))
            .gap(1)
            .child(
                Heading::new(page.title())
                    .level(HeadingLevel::H1)
                    .build(registry, &none),
            )
            .child(Text::new(page.description()).muted().build(registry, &none));
        if skip > 0 {
            content = content.child(hint(format!("↑ {} above (PageUp)", skip)));
        }
        content = content.children(sections.into_iter().skip(skip));
        if skip < last {
            content = content.child(hint("↓ more below (PageDown)"));
        }

        let (weak_scroll, weak_sections) = (self.scroll.downgrade(), self.sections.downgrade());
        registry.register(
            "content",
            "on_scroll",
            Arc::new(move |hx| {
                if let (Some(scroll), Some(sections), Some(delta)) = (
                    weak_scroll.upgrade(),
                    weak_sections.upgrade(),
                    hx.event().scroll_delta(),
                ) {
                    scroll_by(&scroll, &sections, delta as isize);
                }
            }),
        );
        content
    }
}

fn hint(text: impl Into<String>) -> Element {
    Element::text(text).style(Style::new().dim())
}

fn open(current: &State<PageId>, scroll: &State<usize>, page: PageId) {
    if current.get() != page {
        log::debug!("Playbook open page={}", page);
        current.set(page);
    }
    scroll.set(0);
}

fn scroll_by(scroll: &State<usize>, sections: &State<usize>, delta: isize) {
    let last = sections.get().saturating_sub(1);
    scroll.update(|s| *s = s.saturating_add_signed(delta).min(last));
}

impl App for Playbook {
    fn element(&self, registry: &HandlerRegistry, cx: &Context) -> Element {
        let (width, _) = cx.viewport();
        let collapsed = !Breakpoint::Md.reached(width);
        Element::row()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fill)
            .style(Style::new().background(Color::var("bg")))
            .child(self.sidebar(registry, collapsed))
            .child(self.content(registry, cx))
    }

    fn on_key(&self, key: Key, modifiers: Modifiers, _cx: &Context) -> bool {
        if !modifiers.none() {
            return false;
        }
        match key {
            Key::PageDown => self.scroll_by(1),
            Key::PageUp => self.scroll_by(-1),
            _ => return false,
        }
        true
    }
}
