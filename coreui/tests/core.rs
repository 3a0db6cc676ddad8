use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use coreui::pointer::PointerWatch;
use coreui::{Binding, Context, EventData, Handler, HandlerContext, HandlerRegistry, State};

fn counter() -> (Arc<AtomicUsize>, Handler) {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = Arc::clone(&count);
    let handler: Handler = Arc::new(move |_hx| {
        inner.fetch_add(1, Ordering::SeqCst);
    });
    (count, handler)
}

fn path(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_state_update_marks_dirty() {
    let state = State::new(1);
    assert!(!state.is_dirty());

    let doubled = state.update(|v| {
        *v *= 2;
        *v
    });
    assert_eq!(doubled, 2);
    assert!(state.is_dirty());

    state.clear_dirty();
    let shared = state.clone();
    shared.set(5);
    assert_eq!(state.get(), 5);
    assert!(state.is_dirty());
    assert!(state.ptr_eq(&shared));
}

#[test]
fn test_weak_state_does_not_keep_value_alive() {
    let state = State::new(String::from("x"));
    let weak = state.downgrade();
    assert!(weak.upgrade().is_some());

    drop(state);
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_uncontrolled_binding_keeps_commits() {
    let binding = Binding::uncontrolled(false);
    assert!(!binding.is_controlled());

    binding.commit(true);
    assert!(binding.get());
    // Clones share the value
    assert!(binding.clone().get());
}

#[test]
fn test_controlled_binding_reads_owner() {
    let owner = State::new(3);
    let binding = Binding::controlled(&owner);
    assert!(binding.is_controlled());

    binding.commit(9);
    assert_eq!(binding.get(), 3);
    owner.set(7);
    assert_eq!(binding.get(), 7);
}

#[test]
fn test_binding_default_is_uncontrolled() {
    let binding: Binding<Vec<String>> = Binding::default();
    assert!(!binding.is_controlled());
    assert!(binding.get().is_empty());
}

#[test]
fn test_registry_lookup_and_clear() {
    let registry = HandlerRegistry::new();
    let (count, handler) = counter();

    registry.register("save", "on_activate", handler);
    assert!(registry.has("save", "on_activate"));
    assert!(!registry.has("save", "on_key"));
    assert_eq!(registry.len(), 1);

    let on_activate = registry.get("save", "on_activate").expect("registered");
    on_activate(&HandlerContext::new(registry.context()));
    assert_eq!(count.load(Ordering::SeqCst), 1);

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.get("save", "on_activate").is_none());
}

#[test]
fn test_emit_carries_event_data() {
    let cx = Context::new();
    let seen = Arc::new(std::sync::Mutex::new(None));
    let sink = Arc::clone(&seen);
    let on_change: Handler = Arc::new(move |hx| {
        *sink.lock().unwrap() = hx.event().text().map(str::to_string);
    });

    let hx = HandlerContext::new(&cx);
    hx.emit(
        &on_change,
        EventData::Change {
            text: "hello".into(),
        },
    );
    assert_eq!(seen.lock().unwrap().as_deref(), Some("hello"));
}

#[test]
fn test_ignore_flag() {
    let cx = Context::new();
    let hx = HandlerContext::new(&cx);
    assert!(!hx.is_ignored());
    hx.ignore();
    assert!(hx.is_ignored());
}

#[test]
fn test_event_data_accessors() {
    assert_eq!(EventData::Toggle { checked: true }.checked(), Some(true));
    assert_eq!(EventData::Open { open: false }.open(), Some(false));
    assert_eq!(
        EventData::Item { id: "copy".into() }.item_id(),
        Some("copy")
    );
    assert_eq!(EventData::Scroll { delta: -3 }.scroll_delta(), Some(-3));
    assert_eq!(EventData::None.text(), None);
    assert_eq!(EventData::Submit.checked(), None);
}

#[test]
fn test_context_queues() {
    let cx = Context::new();
    let other = cx.clone();

    other.copy_to_clipboard("one");
    other.copy_to_clipboard("two");
    assert_eq!(cx.take_clipboard(), vec!["one", "two"]);
    assert!(cx.take_clipboard().is_empty());

    other.focus("email");
    assert_eq!(cx.take_focus_request().as_deref(), Some("email"));
    assert_eq!(cx.take_focus_request(), None);

    assert!(!cx.should_quit());
    other.quit();
    assert!(cx.should_quit());

    assert_eq!(cx.viewport(), (0, 0));
    other.set_viewport(80, 24);
    assert_eq!(cx.viewport(), (80, 24));
}

#[test]
fn test_pointer_fires_outside_only() {
    let cx = Context::new();
    let pointer = PointerWatch::new();
    let (count, handler) = counter();
    let _watch = pointer.watch("menu", handler);

    let hx = HandlerContext::new(&cx);
    assert_eq!(pointer.dispatch(&path(&["root", "menu", "menu-item-0"]), &hx), 0);
    assert_eq!(pointer.dispatch(&path(&["root", "save"]), &hx), 1);
    assert_eq!(pointer.dispatch(&[], &hx), 1);
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_dropping_subscription_unsubscribes() {
    let cx = Context::new();
    let pointer = PointerWatch::new();
    let (count, handler) = counter();

    let watch = pointer.watch("menu", handler);
    assert_eq!(pointer.len(), 1);
    drop(watch);
    assert!(pointer.is_empty());

    pointer.dispatch(&path(&["root"]), &HandlerContext::new(&cx));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_subscription_outliving_watch_is_harmless() {
    let (_, handler) = counter();
    let watch = {
        let pointer = PointerWatch::new();
        pointer.watch("menu", handler)
    };
    drop(watch);
}
