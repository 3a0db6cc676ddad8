use std::time::Duration;

use coreui::dom::element::{find_element, text_content};
use coreui::dom::layout::layout;
use coreui::dom::{Element, Event, Key, LayoutResult, Modifiers, MouseButton, Rect, Size};
use coreui::runtime::{Dispatcher, Flow};
use coreui::{App, HandlerRegistry};
use playbook::app::nav_id;
use playbook::catalog::{CATEGORIES, PageId};
use playbook::{Config, Playbook};

/// Drives the playbook the way the runtime does, minus the terminal.
struct Harness {
    app: Playbook,
    registry: HandlerRegistry,
    dispatcher: Dispatcher,
    root: Element,
    layout: LayoutResult,
    size: (u16, u16),
}

impl Harness {
    fn new(config: Config) -> Self {
        Self::sized(config, 100, 48)
    }

    fn sized(config: Config, width: u16, height: u16) -> Self {
        let mut harness = Self {
            app: Playbook::new(config),
            registry: HandlerRegistry::new(),
            dispatcher: Dispatcher::new(),
            root: Element::default(),
            layout: LayoutResult::default(),
            size: (width, height),
        };
        harness.frame();
        harness
    }

    fn frame(&mut self) {
        self.registry.clear();
        let cx = self.registry.context().clone();
        cx.set_focused(self.dispatcher.focused().map(str::to_string));
        cx.set_viewport(self.size.0, self.size.1);
        self.root = self.app.element(&self.registry, &cx);
        self.dispatcher.settle(&mut self.root, &self.registry);
        self.layout = layout(&self.root, Rect::from_size(self.size.0, self.size.1));
    }

    fn send(&mut self, event: Event) -> Flow {
        let flow = self
            .dispatcher
            .dispatch(&event, &self.root, &self.layout, &self.registry, &self.app);
        self.frame();
        flow
    }

    fn key(&mut self, key: Key) -> Flow {
        self.send(Event::Key {
            key,
            modifiers: Modifiers::new(),
        })
    }

    fn click_on(&mut self, id: &str) -> Flow {
        let rect = self.layout[id];
        self.send(Event::Click {
            x: rect.x,
            y: rect.y,
            button: MouseButton::Left,
        })
    }

    fn scroll_over(&mut self, id: &str, delta: i16) -> Flow {
        let rect = self.layout[id];
        self.send(Event::Scroll {
            x: rect.x,
            y: rect.y,
            delta,
        })
    }

    fn text_of(&self, id: &str) -> String {
        find_element(&self.root, id)
            .map(text_content)
            .unwrap_or_default()
    }
}

fn starting_at(page: PageId) -> Config {
    Config {
        start_page: page,
        ..Config::default()
    }
}

#[test]
fn test_sidebar_lists_every_page_by_category() {
    let h = Harness::new(Config::default());
    let sidebar = h.text_of("sidebar");
    assert!(sidebar.starts_with("Core UIDesign System"));

    for category in CATEGORIES {
        assert!(sidebar.contains(&category.title.to_uppercase()));
        for page in category.pages {
            assert!(find_element(&h.root, &nav_id(*page)).is_some(), "{}", page);
        }
    }
    let listed: usize = CATEGORIES.iter().map(|c| c.pages.len()).sum();
    assert_eq!(listed, PageId::ALL.len());
}

#[test]
fn test_opens_on_start_page() {
    let h = Harness::new(starting_at(PageId::Button));
    assert_eq!(h.app.page(), PageId::Button);
    assert!(h.text_of("content").starts_with("Button"));
    assert!(find_element(&h.root, "button-variants").is_some());
}

#[test]
fn test_arrows_move_between_pages() {
    let mut h = Harness::new(Config::default());
    h.key(Key::Tab);
    assert_eq!(h.dispatcher.focused(), Some("nav-colors"));

    h.key(Key::Down);
    assert_eq!(h.app.page(), PageId::Typography);
    assert_eq!(h.dispatcher.focused(), Some("nav-typography"));

    h.key(Key::Up);
    h.key(Key::Up);
    assert_eq!(h.app.page(), PageId::Skeleton);
    assert_eq!(h.dispatcher.focused(), Some("nav-skeleton"));

    h.key(Key::Down);
    assert_eq!(h.app.page(), PageId::Colors);
}

#[test]
fn test_enter_opens_focused_page() {
    let mut h = Harness::new(Config::default());
    h.key(Key::Tab);
    h.key(Key::Tab);
    assert_eq!(h.dispatcher.focused(), Some("nav-typography"));
    // Focus alone does not navigate
    assert_eq!(h.app.page(), PageId::Colors);

    h.key(Key::Enter);
    assert_eq!(h.app.page(), PageId::Typography);
}

#[test]
fn test_click_opens_page() {
    let mut h = Harness::new(Config::default());
    assert_eq!(h.click_on("nav-alert"), Flow::Render);
    assert_eq!(h.app.page(), PageId::Alert);
    assert_eq!(h.dispatcher.focused(), Some("nav-alert"));
    assert!(find_element(&h.root, "alert-statuses").is_some());
}

#[test]
fn test_active_page_is_highlighted() {
    let h = Harness::new(starting_at(PageId::Card));
    let active = find_element(&h.root, "nav-card").unwrap();
    let other = find_element(&h.root, "nav-badge").unwrap();
    assert!(active.style.text_style.bold);
    assert!(!other.style.text_style.bold);
}

#[test]
fn test_sidebar_collapses_below_md() {
    let wide = Harness::sized(Config::default(), 100, 48);
    let sidebar = find_element(&wide.root, "sidebar").unwrap();
    assert!(text_content(find_element(&wide.root, "nav-colors").unwrap()).contains("Colors"));
    let wide_width = sidebar.width;

    let narrow = Harness::sized(Config::default(), 50, 48);
    let sidebar = find_element(&narrow.root, "sidebar").unwrap();
    assert!(!text_content(sidebar).contains("Design System"));
    assert!(!text_content(find_element(&narrow.root, "nav-colors").unwrap()).contains("Colors"));
    assert_ne!(sidebar.width, wide_width);
    assert!(matches!(sidebar.width, Size::Fixed(w) if w < 10));
}

#[test]
fn test_page_keys_scroll_sections() {
    let mut h = Harness::new(starting_at(PageId::Button));
    assert_eq!(h.app.scroll(), 0);
    assert!(h.text_of("content").contains("more below"));

    h.key(Key::PageDown);
    assert_eq!(h.app.scroll(), 1);
    assert!(find_element(&h.root, "button-variants").is_none());
    assert!(find_element(&h.root, "button-colors").is_some());

    for _ in 0..20 {
        h.key(Key::PageDown);
    }
    let last = h.app.scroll();
    assert!(last > 1);
    assert!(!h.text_of("content").contains("more below"));
    assert!(find_element(&h.root, "button-props").is_some());

    h.key(Key::PageUp);
    assert_eq!(h.app.scroll(), last - 1);

    // A new page starts at the top
    h.click_on("nav-input");
    assert_eq!(h.app.scroll(), 0);
}

#[test]
fn test_wheel_scrolls_content() {
    let mut h = Harness::new(starting_at(PageId::Checkbox));
    assert_eq!(h.scroll_over("content", 1), Flow::Render);
    assert_eq!(h.app.scroll(), 1);
    h.scroll_over("content", -1);
    h.scroll_over("content", -1);
    assert_eq!(h.app.scroll(), 0);

    // The sidebar does not scroll the page
    assert_eq!(h.scroll_over("sidebar", 1), Flow::Idle);
    assert_eq!(h.app.scroll(), 0);
}

#[test]
fn test_button_clicks_are_counted() {
    let mut h = Harness::new(starting_at(PageId::Button));
    assert!(h.text_of("button-variants").contains("Clicks: 0"));
    h.click_on("button-variant-solid");
    h.click_on("button-variant-ghost");
    assert!(h.text_of("button-variants").contains("Clicks: 2"));
}

#[test]
fn test_loading_toggle_flips_label() {
    let mut h = Harness::new(starting_at(PageId::Button));
    assert!(h.text_of("button-loading-toggle").contains("Start loading"));
    h.click_on("button-loading-toggle");
    assert!(h.text_of("button-loading-toggle").contains("Stop"));
    assert!(h.text_of("button-loading").contains("Saving"));
}

#[test]
fn test_demo_state_survives_page_changes() {
    let mut h = Harness::new(starting_at(PageId::Button));
    h.click_on("button-variant-solid");
    h.click_on("nav-badge");
    h.click_on("nav-button");
    assert!(h.text_of("button-variants").contains("Clicks: 1"));
}

#[tokio::test(start_paused = true)]
async fn test_show_code_and_copy() {
    let mut h = Harness::new(starting_at(PageId::Button));
    assert!(find_element(&h.root, "button-variants-code").is_none());

    h.click_on("button-variants-toggle");
    assert!(h.text_of("button-variants-toggle").contains("Hide Code"));
    assert!(h.text_of("button-variants-code").contains("ButtonVariant::Outline"));

    h.click_on("button-variants-code-copy");
    assert!(h.text_of("button-variants-code-copy").contains("✓ Copied"));
    let copied = h.registry.context().take_clipboard();
    assert_eq!(copied.len(), 1);
    assert!(copied[0].starts_with("let mut handlers"));

    tokio::time::sleep(Duration::from_millis(2001)).await;
    tokio::task::yield_now().await;
    h.frame();
    assert!(h.text_of("button-variants-code-copy").contains("Copy"));
    assert!(!h.text_of("button-variants-code-copy").contains("Copied"));
}

#[tokio::test(start_paused = true)]
async fn test_copy_feedback_follows_config() {
    let config = Config {
        start_page: PageId::Button,
        copy_feedback_ms: 500,
        ..Config::default()
    };
    let mut h = Harness::new(config);
    h.click_on("button-variants-toggle");
    h.click_on("button-variants-code-copy");

    tokio::time::sleep(Duration::from_millis(501)).await;
    tokio::task::yield_now().await;
    h.frame();
    assert!(!h.text_of("button-variants-code-copy").contains("Copied"));
}

#[test]
fn test_every_page_builds() {
    let mut h = Harness::new(Config::default());
    for page in PageId::ALL {
        h.app.open(*page);
        h.frame();
        let content = h.text_of("content");
        assert!(content.starts_with(page.title()), "{}", page);
        assert!(content.contains(page.description()), "{}", page);
    }
}
