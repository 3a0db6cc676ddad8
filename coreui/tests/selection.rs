use coreui::dom::Key;
use coreui::selection::{Combobox, Filter, Nav, SelectOption, display_order, fuzzy_filter};
use coreui::widgets::{MultiSelectState, SelectState};
use coreui::{Binding, State};

fn fruits() -> Vec<SelectOption> {
    vec![
        SelectOption::new("apple", "Apple"),
        SelectOption::new("banana", "Banana"),
        SelectOption::new("cherry", "Cherry").disabled(),
        SelectOption::new("grape", "Grape"),
    ]
}

fn visible_ids(combobox: &Combobox) -> Vec<String> {
    combobox.visible().map(|o| o.id.clone()).collect()
}

#[test]
fn test_substring_filter_ignores_case() {
    let options = fruits();
    let all: Vec<usize> = (0..options.len()).collect();

    assert_eq!(Filter::Substring.apply(&options, &all, "AN"), vec![1]);
    assert_eq!(Filter::Substring.apply(&options, &all, "ap"), vec![0, 3]);
    assert_eq!(Filter::Substring.apply(&options, &all, ""), all);
}

#[test]
fn test_filter_is_idempotent() {
    let options = fruits();
    let all: Vec<usize> = (0..options.len()).collect();

    for filter in [Filter::Substring, Filter::Fuzzy] {
        let once = filter.apply(&options, &all, "ap");
        let twice = filter.apply(&options, &once, "ap");
        assert_eq!(once, twice);
    }
}

#[test]
fn test_custom_filter() {
    let options = fruits();
    let all: Vec<usize> = (0..options.len()).collect();
    let starts_with = Filter::custom(|option, query| option.id.starts_with(query));

    assert_eq!(starts_with.apply(&options, &all, "gr"), vec![3]);
}

#[test]
fn test_fuzzy_filter_ranks_best_first() {
    let items = vec![
        "Settings".to_string(),
        "Select".to_string(),
        "Selection list".to_string(),
    ];
    let matches = fuzzy_filter("sel", &items);

    assert!(!matches.is_empty());
    assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(matches.iter().all(|m| m.index != 0));
}

#[test]
fn test_display_order_groups_after_ungrouped() {
    let options = vec![
        SelectOption::new("carrot", "Carrot").group("Vegetables"),
        SelectOption::new("any", "Anything"),
        SelectOption::new("apple", "Apple").group("Fruits"),
        SelectOption::new("leek", "Leek").group("Vegetables"),
    ];

    assert_eq!(display_order(&options), vec![1, 0, 3, 2]);

    let combobox = Combobox::new(options);
    let groups: Vec<Option<&str>> = combobox.sections().iter().map(|s| s.group).collect();
    assert_eq!(groups, vec![None, Some("Vegetables"), Some("Fruits")]);
}

#[test]
fn test_typing_then_clearing_restores_order() {
    let mut combobox = Combobox::new(fruits());
    let before = visible_ids(&combobox);

    combobox.set_query("gr");
    assert_eq!(visible_ids(&combobox), vec!["grape"]);
    assert!(combobox.is_open());
    assert_eq!(combobox.highlighted(), Some(0));

    combobox.set_query("");
    assert_eq!(visible_ids(&combobox), before);
}

#[test]
fn test_highlight_wraps() {
    let mut combobox = Combobox::new(fruits());
    assert!(combobox.open());
    assert_eq!(combobox.highlighted(), Some(0));

    combobox.move_highlight(-1);
    assert_eq!(combobox.highlighted(), Some(3));
    combobox.move_highlight(1);
    assert_eq!(combobox.highlighted(), Some(0));

    combobox.handle_key(Key::End);
    assert_eq!(combobox.highlighted_option().map(|o| o.id.as_str()), Some("grape"));
    combobox.handle_key(Key::Home);
    assert_eq!(combobox.highlighted(), Some(0));
}

#[test]
fn test_enter_on_disabled_option_does_not_commit() {
    let mut combobox = Combobox::new(fruits());
    combobox.open();
    combobox.move_highlight(2);
    assert_eq!(combobox.highlighted_option().map(|o| o.id.as_str()), Some("cherry"));

    assert_eq!(combobox.handle_key(Key::Enter), Nav::Handled);
    assert!(combobox.is_open());
}

#[test]
fn test_min_chars_keeps_list_closed() {
    let mut combobox = Combobox::new(fruits()).with_min_chars(2);

    assert!(!combobox.open());
    combobox.set_query("a");
    assert!(!combobox.is_open());
    combobox.set_query("ap");
    assert!(combobox.is_open());
    assert_eq!(visible_ids(&combobox), vec!["apple", "grape"]);
}

#[test]
fn test_closed_list_only_opens_on_down() {
    let mut combobox = Combobox::new(fruits());

    assert_eq!(combobox.handle_key(Key::Up), Nav::Ignored);
    assert_eq!(combobox.handle_key(Key::Down), Nav::Handled);
    assert!(combobox.is_open());
    assert_eq!(combobox.handle_key(Key::Escape), Nav::Closed);
    assert!(!combobox.is_open());
    assert_eq!(combobox.highlighted(), None);
}

#[test]
fn test_searchable_select_commits_typed_match() {
    let state = State::new(SelectState::new([
        SelectOption::new("apple", "Apple"),
        SelectOption::new("banana", "Banana"),
    ]));

    state.update(|s| s.open());
    state.update(|s| s.handle_key(Key::Char('a'), true));
    state.update(|s| s.handle_key(Key::Char('p'), true));

    let visible: Vec<String> = state.with(|s| visible_ids(s.combobox()));
    assert_eq!(visible, vec!["apple"]);

    let nav = state.update(|s| s.handle_key(Key::Enter, true));
    assert!(matches!(nav, Nav::Commit(ref o) if o.id == "apple"));

    state.with(|s| {
        assert!(!s.is_open());
        assert_eq!(s.value().as_deref(), Some("apple"));
        assert_eq!(s.selected().map(|o| o.label.as_str()), Some("Apple"));
    });
}

#[test]
fn test_select_rejects_disabled_and_unknown() {
    let mut state = SelectState::new(fruits());

    assert_eq!(state.choose("cherry"), None);
    assert_eq!(state.choose("durian"), None);
    assert_eq!(state.value(), None);
    assert!(!state.clear());

    assert!(state.choose("banana").is_some());
    assert!(state.clear());
    assert_eq!(state.value(), None);
}

#[test]
fn test_controlled_select_leaves_value_to_owner() {
    let owner = State::new(Some("apple".to_string()));
    let mut state = SelectState::new(fruits()).with_binding(Binding::controlled(&owner));

    let chosen = state.choose("banana");
    assert_eq!(chosen.map(|o| o.id), Some("banana".to_string()));
    assert_eq!(state.value().as_deref(), Some("apple"));

    owner.set(Some("grape".to_string()));
    assert_eq!(state.value().as_deref(), Some("grape"));
}

#[test]
fn test_multi_select_toggle_twice_restores_set() {
    let mut state = MultiSelectState::new(fruits()).with_values(["apple"]);

    assert!(state.toggle("grape"));
    assert_eq!(state.values(), vec!["apple", "grape"]);
    assert!(state.toggle("grape"));
    assert_eq!(state.values(), vec!["apple"]);

    assert!(!state.toggle("cherry"));
    assert!(!state.is_selected("cherry"));
}

#[test]
fn test_multi_select_respects_max() {
    let mut state = MultiSelectState::new(fruits()).with_max(2);

    assert!(state.toggle("apple"));
    assert!(state.toggle("banana"));
    assert!(state.is_full());
    assert!(!state.toggle("grape"));
    assert_eq!(state.values().len(), 2);

    // Removing still works at the limit
    assert!(state.toggle("apple"));
    assert!(!state.is_full());
}

#[test]
fn test_multi_select_enter_keeps_list_open() {
    let mut state = MultiSelectState::new(fruits());
    state.open();

    let nav = state.handle_key(Key::Enter, false);
    assert!(matches!(nav, Nav::Commit(ref o) if o.id == "apple"));
    assert!(state.is_open());
    assert!(state.is_selected("apple"));
}

#[test]
fn test_multi_select_backspace_drops_last_tag() {
    let mut state = MultiSelectState::new(fruits()).with_values(["apple", "banana"]);

    let nav = state.handle_key(Key::Backspace, true);
    assert!(matches!(nav, Nav::Commit(ref o) if o.id == "banana"));
    assert_eq!(state.values(), vec!["apple"]);
}
