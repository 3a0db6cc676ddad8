use std::time::Duration;

use coreui::dom::element::{find_element, text_content};
use coreui::style::PropDoc;
use coreui::{HandlerContext, HandlerRegistry, State};
use playbook::showcase::{
    COPY_FEEDBACK, CodeBlock, PropsTable, Showcase, ShowcaseState, copy_code,
};

const SNIPPET: &str = "\nButton::new(\"Save\")\n    .build(&registry, &handlers)\n";

fn activate(registry: &HandlerRegistry, id: &str) {
    let handler = registry
        .get(id, "on_activate")
        .unwrap_or_else(|| panic!("no on_activate on {}", id));
    handler(&HandlerContext::new(registry.context()));
}

#[tokio::test(start_paused = true)]
async fn test_copy_reverts_after_feedback() {
    let registry = HandlerRegistry::new();
    let cx = registry.context();
    let state = State::new(ShowcaseState::new());

    copy_code(&state, SNIPPET, cx, COPY_FEEDBACK);
    assert!(state.with(|s| s.is_copied()));
    assert!(state.with(|s| s.is_reverting()));
    assert_eq!(
        cx.take_clipboard(),
        vec!["Button::new(\"Save\")\n    .build(&registry, &handlers)".to_string()]
    );

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(state.with(|s| s.is_copied()));

    tokio::time::sleep(Duration::from_millis(2)).await;
    tokio::task::yield_now().await;
    assert!(!state.with(|s| s.is_copied()));
    assert!(!state.with(|s| s.is_reverting()));
}

#[tokio::test(start_paused = true)]
async fn test_copy_again_restarts_countdown() {
    let registry = HandlerRegistry::new();
    let cx = registry.context();
    let state = State::new(ShowcaseState::new());

    copy_code(&state, SNIPPET, cx, COPY_FEEDBACK);
    tokio::time::sleep(Duration::from_millis(1500)).await;
    copy_code(&state, SNIPPET, cx, COPY_FEEDBACK);

    // Past the first deadline, inside the second
    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(state.with(|s| s.is_copied()));

    tokio::time::sleep(Duration::from_millis(1100)).await;
    tokio::task::yield_now().await;
    assert!(!state.with(|s| s.is_copied()));
    assert_eq!(cx.take_clipboard().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_copy_feedback_is_configurable() {
    let registry = HandlerRegistry::new();
    let state = State::new(ShowcaseState::new());

    copy_code(&state, "x", registry.context(), Duration::from_millis(300));
    tokio::time::sleep(Duration::from_millis(301)).await;
    tokio::task::yield_now().await;
    assert!(!state.with(|s| s.is_copied()));
}

#[tokio::test(start_paused = true)]
async fn test_code_block_copy_button() {
    let registry = HandlerRegistry::new();
    let state = State::new(ShowcaseState::new());

    let block = CodeBlock::new("demo", SNIPPET).build(&registry, &state);
    assert!(text_content(&block).contains("Copy"));
    assert!(text_content(&block).contains("rust"));
    assert!(find_element(&block, "demo-copy").is_some());

    activate(&registry, "demo-copy");
    assert_eq!(registry.context().take_clipboard().len(), 1);

    registry.clear();
    let block = CodeBlock::new("demo", SNIPPET).build(&registry, &state);
    assert!(text_content(&block).contains("✓ Copied"));
}

#[test]
fn test_toggle_code() {
    let mut state = ShowcaseState::new();
    assert!(!state.is_code_shown());
    assert!(state.toggle_code());
    assert!(!state.toggle_code());
    assert!(!state.is_copied());
}

#[test]
fn test_showcase_code_hidden_until_toggled() {
    let registry = HandlerRegistry::new();
    let state = State::new(ShowcaseState::new());
    let build = |registry: &HandlerRegistry| {
        Showcase::new("demo", "Demo", state.clone())
            .description("What it shows")
            .preview(coreui::dom::Element::text("preview body"))
            .code(SNIPPET)
            .build(registry)
    };

    let section = build(&registry);
    assert!(text_content(&section).contains("▷ Show Code"));
    assert!(text_content(&section).contains("preview body"));
    assert!(find_element(&section, "demo-preview").is_some());
    assert!(find_element(&section, "demo-code").is_none());

    activate(&registry, "demo-toggle");
    registry.clear();
    let section = build(&registry);
    assert!(text_content(&section).contains("◁ Hide Code"));
    assert!(find_element(&section, "demo-code").is_some());
    assert!(find_element(&section, "demo-code-copy").is_some());
}

#[test]
fn test_showcase_without_code_has_no_toggle() {
    let registry = HandlerRegistry::new();
    let section = Showcase::new("bare", "Bare", State::default())
        .preview(coreui::dom::Element::text("only a preview"))
        .build(&registry);
    assert!(find_element(&section, "bare-toggle").is_none());
    assert!(!registry.has("bare-toggle", "on_activate"));
}

#[test]
fn test_props_table() {
    const ROWS: &[PropDoc] = &[
        PropDoc::new("size", "sm | md | lg", "md", "Field size"),
        PropDoc::new("on_change", "handler", "", "Fires on change"),
    ];
    let registry = HandlerRegistry::new();
    let table = PropsTable::new("props", ROWS).build(&registry);
    let text = text_content(&table);

    assert!(text.starts_with("Props"));
    for cell in ["Prop", "Type", "Default", "Description", "size", "sm | md | lg", "Field size"] {
        assert!(text.contains(cell), "missing {}", cell);
    }
    assert!(text.contains("handler-Fires on change"));

    let titled = PropsTable::new("props", ROWS).title("Select Props").build(&registry);
    assert!(text_content(&titled).starts_with("Select Props"));
}
