//! Routes input events to handlers and keeps track of focus.
//!
//! Nothing here touches the terminal, so the whole path from an event to
//! widget state can be driven from tests with a layout computed in memory.

use coreui_dom::element::find_element;
use coreui_dom::{
    Element, Event, FocusState, Key, LayoutResult, Modifiers, MouseButton, ancestor_path,
    collect_focusable, hit_test_any,
};
use log::{debug, trace};

use super::App;
use crate::handler_context::{EventData, HandlerContext, HandlerRegistry};

/// What the runtime should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Nothing changed; skip the render.
    Idle,
    Render,
    Quit,
}

/// Focus tracking plus event routing.
#[derive(Debug, Default)]
pub struct Dispatcher {
    focus: FocusState,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Run after every build: drops focus from elements that vanished or
    /// became disabled, and marks the focused element so its focus style
    /// renders.
    pub fn settle(&mut self, root: &mut Element, registry: &HandlerRegistry) {
        if let Some(lost) = self.focus.validate(root) {
            debug!("focus dropped from {}", lost);
            registry.context().set_focused(None);
        }
        self.focus.apply(root);
    }

    /// Carry out focus requests queued by handlers.
    pub fn apply_requests(&mut self, root: &Element, registry: &HandlerRegistry) -> bool {
        let Some(id) = registry.context().take_focus_request() else {
            return false;
        };
        match find_element(root, &id) {
            Some(element) if element.focusable && !element.disabled => {
                self.move_focus(Some(id), registry)
            }
            _ => {
                debug!("focus request for {} ignored, not focusable", id);
                false
            }
        }
    }

    /// Move focus to `target`, firing `on_blur` on the old element and
    /// `on_focus` on the new one. Returns whether focus changed.
    pub fn move_focus(&mut self, target: Option<String>, registry: &HandlerRegistry) -> bool {
        let previous = self.focus.focused().map(str::to_string);
        if previous == target {
            return false;
        }
        match &target {
            Some(id) => self.focus.focus(id),
            None => self.focus.blur(),
        };
        debug!("focus {:?} -> {:?}", previous, target);

        let cx = registry.context();
        cx.set_focused(target.clone());
        if let Some(old) = &previous
            && let Some(on_blur) = registry.get(old, "on_blur")
        {
            on_blur(&HandlerContext::with_event(
                cx,
                EventData::Blur {
                    new_target: target.clone(),
                },
            ));
        }
        if let Some(new) = &target
            && let Some(on_focus) = registry.get(new, "on_focus")
        {
            on_focus(&HandlerContext::new(cx));
        }
        true
    }

    pub fn dispatch(
        &mut self,
        event: &Event,
        root: &Element,
        layout: &LayoutResult,
        registry: &HandlerRegistry,
        app: &dyn App,
    ) -> Flow {
        trace!("dispatch {:?}", event);
        match event {
            Event::Key { key, modifiers } => self.key(*key, *modifiers, root, registry, app),
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => {
                self.click(*x, *y, root, layout, registry);
                Flow::Render
            }
            Event::Click { .. } | Event::MouseMove { .. } => Flow::Idle,
            Event::Scroll { x, y, delta } => self.scroll(*x, *y, *delta, root, layout, registry),
            Event::Resize { .. } => Flow::Render,
        }
    }

    fn key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        root: &Element,
        registry: &HandlerRegistry,
        app: &dyn App,
    ) -> Flow {
        let cx = registry.context();
        if key == Key::Char('q') && modifiers.ctrl {
            cx.quit();
            return Flow::Quit;
        }

        if matches!(key, Key::Tab | Key::BackTab) {
            let step = if key == Key::BackTab || modifiers.shift { -1 } else { 1 };
            let target = cycle(root, self.focus.focused(), step);
            let moved = target.is_some() && self.move_focus(target, registry);
            return if moved { Flow::Render } else { Flow::Idle };
        }

        if let Some(id) = self.focus.focused().map(str::to_string) {
            if let Some(on_key) = registry.get(&id, "on_key") {
                let hx = HandlerContext::with_event(cx, EventData::Key { key, modifiers });
                on_key(&hx);
                if !hx.is_ignored() {
                    return self.after_handlers(root, registry);
                }
            }

            if key.is_activation() && modifiers.none() && activate(&id, root, registry) {
                return self.after_handlers(root, registry);
            }
        }

        if app.on_key(key, modifiers, cx) {
            return self.after_handlers(root, registry);
        }
        if cx.should_quit() {
            Flow::Quit
        } else {
            Flow::Idle
        }
    }

    fn click(
        &mut self,
        x: u16,
        y: u16,
        root: &Element,
        layout: &LayoutResult,
        registry: &HandlerRegistry,
    ) {
        let cx = registry.context();
        let path = hit_test_any(layout, root, x, y)
            .map(|target| ancestor_path(root, &target))
            .unwrap_or_default();
        debug!("click ({}, {}) path={:?}", x, y, path.last());

        cx.pointer().dispatch(&path, &HandlerContext::new(cx));

        // Clicks inside a popup keep focus on the widget that owns it.
        let focus_target = path.iter().rev().find(|id| {
            find_element(root, id).is_some_and(|e| e.focusable && !e.disabled)
        });
        if let Some(id) = focus_target {
            self.move_focus(Some(id.clone()), registry);
        }

        let clicked = path
            .iter()
            .rev()
            .find(|id| find_element(root, id).is_some_and(|e| e.clickable));
        if let Some(id) = clicked {
            activate(id, root, registry);
        }
        self.apply_requests(root, registry);
    }

    fn scroll(
        &mut self,
        x: u16,
        y: u16,
        delta: i16,
        root: &Element,
        layout: &LayoutResult,
        registry: &HandlerRegistry,
    ) -> Flow {
        let Some(target) = hit_test_any(layout, root, x, y) else {
            return Flow::Idle;
        };
        let path = ancestor_path(root, &target);
        let handler = path
            .iter()
            .rev()
            .find_map(|id| registry.get(id, "on_scroll"));
        match handler {
            Some(on_scroll) => {
                on_scroll(&HandlerContext::with_event(
                    registry.context(),
                    EventData::Scroll { delta },
                ));
                Flow::Render
            }
            None => Flow::Idle,
        }
    }

    fn after_handlers(&mut self, root: &Element, registry: &HandlerRegistry) -> Flow {
        self.apply_requests(root, registry);
        if registry.context().should_quit() {
            Flow::Quit
        } else {
            Flow::Render
        }
    }
}

/// The focusable element `step` places after `current`, wrapping.
fn cycle(root: &Element, current: Option<&str>, step: isize) -> Option<String> {
    let focusable = collect_focusable(root);
    if focusable.is_empty() {
        return None;
    }
    let len = focusable.len() as isize;
    let next = match current.and_then(|id| focusable.iter().position(|f| f == id)) {
        Some(i) => (i as isize + step).rem_euclid(len),
        None if step > 0 => 0,
        None => len - 1,
    };
    focusable.into_iter().nth(next as usize)
}

/// Fire `on_activate` on `id` unless it is disabled. Returns whether a
/// handler ran.
fn activate(id: &str, root: &Element, registry: &HandlerRegistry) -> bool {
    if find_element(root, id).is_some_and(|e| e.disabled) {
        return false;
    }
    match registry.get(id, "on_activate") {
        Some(on_activate) => {
            debug!("activate {}", id);
            on_activate(&HandlerContext::new(registry.context()));
            true
        }
        None => false,
    }
}
