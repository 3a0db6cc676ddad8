use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use coreui::dom::layout::layout;
use coreui::dom::{Element, Event, Key, LayoutResult, Modifiers, MouseButton, Rect, Size};
use coreui::runtime::{Dispatcher, Flow};
use coreui::selection::SelectOption;
use coreui::widgets::{Autocomplete, AutocompleteState, Button, Select, SelectState};
use coreui::{App, Context, HandlerRegistry, State, WidgetHandlers};

struct Form {
    saves: Arc<AtomicUsize>,
    app_keys: Arc<AtomicUsize>,
    changes: Arc<AtomicUsize>,
    fruit: State<SelectState>,
    search: State<AutocompleteState>,
    save_disabled: bool,
}

impl Form {
    fn new() -> Self {
        Self {
            saves: Arc::new(AtomicUsize::new(0)),
            app_keys: Arc::new(AtomicUsize::new(0)),
            changes: Arc::new(AtomicUsize::new(0)),
            fruit: State::new(SelectState::new([
                SelectOption::new("apple", "Apple"),
                SelectOption::new("banana", "Banana"),
                SelectOption::new("cherry", "Cherry").disabled(),
            ])),
            search: State::new(
                AutocompleteState::new([
                    SelectOption::new("apple", "Apple"),
                    SelectOption::new("banana", "Banana"),
                    SelectOption::new("cherry", "Cherry").disabled(),
                ])
                .free_solo(),
            ),
            save_disabled: false,
        }
    }
}

impl App for Form {
    fn element(&self, registry: &HandlerRegistry, _cx: &Context) -> Element {
        let mut save = WidgetHandlers::new();
        let saves = Arc::clone(&self.saves);
        save.insert(
            "on_activate",
            Arc::new(move |_hx| {
                saves.fetch_add(1, Ordering::SeqCst);
            }),
        );

        let mut fruit = WidgetHandlers::new();
        let changes = Arc::clone(&self.changes);
        fruit.insert(
            "on_change",
            Arc::new(move |_hx| {
                changes.fetch_add(1, Ordering::SeqCst);
            }),
        );

        Element::col()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fill)
            .child(
                Button::new("Save")
                    .id("save")
                    .disabled(self.save_disabled)
                    .build(registry, &save),
            )
            .child(
                Select::new()
                    .id("fruit")
                    .state(&self.fruit)
                    .build(registry, &fruit),
            )
            .child(
                Autocomplete::new()
                    .id("search")
                    .state(&self.search)
                    .build(registry, &WidgetHandlers::new()),
            )
    }

    fn on_key(&self, key: Key, _modifiers: Modifiers, _cx: &Context) -> bool {
        if key == Key::Char('x') {
            self.app_keys.fetch_add(1, Ordering::SeqCst);
            return true;
        }
        false
    }
}

/// Drives an app the way the runtime does, minus the terminal.
struct Harness {
    app: Form,
    registry: HandlerRegistry,
    dispatcher: Dispatcher,
    root: Element,
    layout: LayoutResult,
}

impl Harness {
    fn new(app: Form) -> Self {
        let mut harness = Self {
            app,
            registry: HandlerRegistry::new(),
            dispatcher: Dispatcher::new(),
            root: Element::default(),
            layout: LayoutResult::default(),
        };
        harness.frame();
        harness
    }

    fn frame(&mut self) {
        self.registry.clear();
        let cx = self.registry.context().clone();
        cx.set_focused(self.dispatcher.focused().map(str::to_string));
        self.root = self.app.element(&self.registry, &cx);
        self.dispatcher.settle(&mut self.root, &self.registry);
        self.layout = layout(&self.root, Rect::from_size(40, 12));
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
        let rect = &self.layout[id];
        let (x, y) = (rect.x, rect.y);
        self.click(x, y)
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(Key::Char(c));
        }
    }

    fn click(&mut self, x: u16, y: u16) -> Flow {
        self.send(Event::Click {
            x,
            y,
            button: MouseButton::Left,
        })
    }
}

#[test]
fn test_tab_cycles_focus() {
    let mut h = Harness::new(Form::new());
    assert_eq!(h.dispatcher.focused(), None);

    assert_eq!(h.key(Key::Tab), Flow::Render);
    assert_eq!(h.dispatcher.focused(), Some("save"));
    assert!(h.registry.context().is_focused("save"));
    h.key(Key::Tab);
    assert_eq!(h.dispatcher.focused(), Some("fruit"));
    h.key(Key::Tab);
    assert_eq!(h.dispatcher.focused(), Some("search"));
    h.key(Key::Tab);
    assert_eq!(h.dispatcher.focused(), Some("save"));
    h.key(Key::BackTab);
    assert_eq!(h.dispatcher.focused(), Some("search"));
}

#[test]
fn test_enter_and_space_activate_focused_button() {
    let mut h = Harness::new(Form::new());
    h.key(Key::Tab);

    h.key(Key::Enter);
    h.key(Key::Char(' '));
    assert_eq!(h.app.saves.load(Ordering::SeqCst), 2);

    // Modified activation keys are not activation
    h.send(Event::Key {
        key: Key::Enter,
        modifiers: Modifiers::ctrl(),
    });
    assert_eq!(h.app.saves.load(Ordering::SeqCst), 2);
}

#[test]
fn test_click_focuses_and_activates() {
    let mut h = Harness::new(Form::new());

    assert_eq!(h.click_on("save"), Flow::Render);
    assert_eq!(h.app.saves.load(Ordering::SeqCst), 1);
    assert_eq!(h.dispatcher.focused(), Some("save"));
}

#[test]
fn test_disabled_button_ignores_clicks() {
    let mut form = Form::new();
    form.save_disabled = true;
    let mut h = Harness::new(form);

    h.click_on("save");
    assert_eq!(h.app.saves.load(Ordering::SeqCst), 0);
    assert_eq!(h.dispatcher.focused(), None);
}

#[test]
fn test_select_keyboard_flow() {
    let mut h = Harness::new(Form::new());
    h.key(Key::Tab);
    h.key(Key::Tab);
    assert_eq!(h.dispatcher.focused(), Some("fruit"));

    h.key(Key::Down);
    assert!(h.app.fruit.with(|s| s.is_open()));
    assert!(h.layout.contains_key("fruit-list"));

    h.key(Key::Down);
    h.key(Key::Enter);
    h.app.fruit.with(|s| {
        assert!(!s.is_open());
        assert_eq!(s.value().as_deref(), Some("banana"));
    });
    assert_eq!(h.app.changes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_select_option_click() {
    let mut h = Harness::new(Form::new());
    h.click_on("fruit");
    assert!(h.app.fruit.with(|s| s.is_open()));

    h.click_on("fruit-opt-0");
    h.app.fruit.with(|s| {
        assert!(!s.is_open());
        assert_eq!(s.value().as_deref(), Some("apple"));
    });
    // Clicking inside the popup keeps focus on the field
    assert_eq!(h.dispatcher.focused(), Some("fruit"));
}

#[test]
fn test_outside_click_closes_select() {
    let mut h = Harness::new(Form::new());
    h.click_on("fruit");
    assert!(h.app.fruit.with(|s| s.is_open()));
    assert_eq!(h.registry.context().pointer().len(), 1);

    h.click(39, 11);
    assert!(!h.app.fruit.with(|s| s.is_open()));
    assert_eq!(h.dispatcher.focused(), Some("fruit"));
    // The watch is released once the list is closed
    assert!(h.registry.context().pointer().is_empty());
}

#[test]
fn test_blur_closes_select() {
    let mut h = Harness::new(Form::new());
    h.click_on("fruit");
    assert!(h.app.fruit.with(|s| s.is_open()));

    h.key(Key::Tab);
    assert_eq!(h.dispatcher.focused(), Some("search"));
    assert!(!h.app.fruit.with(|s| s.is_open()));
}

#[test]
fn test_disabled_option_click_changes_nothing() {
    let mut h = Harness::new(Form::new());
    h.click_on("fruit");
    assert!(h.layout.contains_key("fruit-opt-2"));

    h.click_on("fruit-opt-2");
    assert_eq!(h.app.fruit.with(|s| s.value()), None);
    assert_eq!(h.app.changes.load(Ordering::SeqCst), 0);

    // The enabled rows still commit
    h.click_on("fruit-opt-1");
    assert_eq!(h.app.fruit.with(|s| s.value()).as_deref(), Some("banana"));
    assert_eq!(h.app.changes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_disabled_autocomplete_option_is_not_chosen() {
    let mut h = Harness::new(Form::new());
    h.click_on("search");
    h.type_text("ch");
    assert!(h.layout.contains_key("search-opt-0"));

    h.click_on("search-opt-0");
    h.app.search.with(|s| {
        assert_eq!(s.text(), "ch");
        assert_ne!(s.value().as_deref(), Some("cherry"));
    });
}

#[test]
fn test_autocomplete_outside_click_empties_free_text() {
    let mut h = Harness::new(Form::new());
    h.click_on("search");
    h.type_text("kiwi");
    assert_eq!(h.app.search.with(|s| s.text().to_string()), "kiwi");
    assert!(h.app.search.with(|s| s.is_open()));

    h.click(39, 11);
    h.app.search.with(|s| {
        assert_eq!(s.text(), "");
        assert!(!s.is_open());
    });
    assert!(h.registry.context().pointer().is_empty());
}

#[test]
fn test_autocomplete_blur_keeps_chosen_label() {
    let mut h = Harness::new(Form::new());
    h.click_on("search");
    h.type_text("ban");
    h.click_on("search-opt-0");
    assert_eq!(h.app.search.with(|s| s.text().to_string()), "Banana");

    h.key(Key::Tab);
    assert_eq!(h.dispatcher.focused(), Some("save"));
    h.app.search.with(|s| {
        assert_eq!(s.text(), "Banana");
        assert_eq!(s.value().as_deref(), Some("banana"));
    });

    // Free text with no option behind it empties on blur
    h.click_on("search");
    for _ in 0.."Banana".len() {
        h.key(Key::Backspace);
    }
    h.type_text("kiwi");
    assert_eq!(h.app.search.with(|s| s.value()).as_deref(), Some("kiwi"));
    h.key(Key::Tab);
    assert_eq!(h.app.search.with(|s| s.text().to_string()), "");
}

#[test]
fn test_unhandled_keys_reach_app() {
    let mut h = Harness::new(Form::new());

    assert_eq!(h.key(Key::Char('x')), Flow::Render);
    assert_eq!(h.key(Key::Char('y')), Flow::Idle);
    assert_eq!(h.app.app_keys.load(Ordering::SeqCst), 1);
}

#[test]
fn test_ctrl_q_quits() {
    let mut h = Harness::new(Form::new());
    let flow = h.send(Event::Key {
        key: Key::Char('q'),
        modifiers: Modifiers::ctrl(),
    });

    assert_eq!(flow, Flow::Quit);
    assert!(h.registry.context().should_quit());
}

#[test]
fn test_focus_request_from_handler() {
    let mut h = Harness::new(Form::new());
    h.registry.context().focus("fruit");
    assert!(h.dispatcher.apply_requests(&h.root, &h.registry));
    assert_eq!(h.dispatcher.focused(), Some("fruit"));

    // Unknown ids are ignored
    h.registry.context().focus("missing");
    assert!(!h.dispatcher.apply_requests(&h.root, &h.registry));
    assert_eq!(h.dispatcher.focused(), Some("fruit"));
}
