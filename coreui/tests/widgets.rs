use chrono::NaiveDate;
use coreui::dom::{Key, Modifiers};
use coreui::selection::SelectOption;
use coreui::validation::Validator;
use coreui::widgets::{
    AutocompleteKey, AutocompleteState, Avatar, AvatarGroup, CheckboxGroupState, CheckboxState,
    DateKey, DatePickerState, DropdownItem, DropdownState, Edit, InputState, MenuKey, Placement,
    initials, parse_date,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn menu() -> DropdownState {
    DropdownState::new([
        DropdownItem::new("new", "New file"),
        DropdownItem::new("open", "Open").disabled(),
        DropdownItem::new("share", "Share").items([
            DropdownItem::new("email", "Email"),
            DropdownItem::new("link", "Copy link").disabled(),
        ]),
        DropdownItem::new("delete", "Delete").danger(),
    ])
}

fn typed(state: &mut InputState, text: &str) {
    for c in text.chars() {
        state.edit(Key::Char(c), Modifiers::new());
    }
}

#[test]
fn test_dropdown_opens_on_first_enabled_item() {
    let mut state = DropdownState::new([
        DropdownItem::new("a", "A").disabled(),
        DropdownItem::new("b", "B"),
    ]);

    assert_eq!(state.handle_key(Key::Enter), MenuKey::Open(true));
    assert!(state.is_open());
    assert_eq!(state.highlighted(), Some(1));
    assert!(!state.set_open(true));
}

#[test]
fn test_dropdown_highlight_skips_disabled() {
    let mut state = menu();
    state.set_open(true);
    assert_eq!(state.highlighted(), Some(0));

    state.handle_key(Key::Down);
    assert_eq!(state.highlighted(), Some(2));
    state.handle_key(Key::Up);
    assert_eq!(state.highlighted(), Some(0));
    state.handle_key(Key::Up);
    assert_eq!(state.highlighted(), Some(3));
    state.handle_key(Key::Home);
    assert_eq!(state.highlighted(), Some(0));
}

#[test]
fn test_dropdown_submenu_navigation() {
    let mut state = menu();
    state.set_open(true);
    state.move_highlight(1);

    state.handle_key(Key::Right);
    assert_eq!(state.submenu(), Some(2));
    assert_eq!(state.submenu_highlighted(), Some(0));

    // The only other child is disabled
    state.handle_key(Key::Down);
    assert_eq!(state.submenu_highlighted(), Some(0));

    assert_eq!(state.handle_key(Key::Enter), MenuKey::Select("email".into()));

    state.handle_key(Key::Left);
    assert_eq!(state.submenu(), None);
    assert_eq!(state.highlighted_item().map(|i| i.id.as_str()), Some("share"));
}

#[test]
fn test_dropdown_choose() {
    let mut state = menu();
    state.set_open(true);

    assert_eq!(state.choose("open"), None);
    assert_eq!(state.choose("link"), None);
    assert_eq!(state.choose("email").as_deref(), Some("email"));
    assert_eq!(state.choose("share"), None);
    assert_eq!(state.submenu(), Some(2));
    assert_eq!(state.choose("delete").as_deref(), Some("delete"));
}

#[test]
fn test_dropdown_escape_closes() {
    let mut state = menu();
    state.set_open(true);

    assert_eq!(state.handle_key(Key::Escape), MenuKey::Open(false));
    assert!(!state.is_open());
    assert_eq!(state.highlighted(), None);
    assert_eq!(state.handle_key(Key::Escape), MenuKey::Ignored);
}

#[test]
fn test_placement_offsets() {
    let trigger = (10, 1);
    let menu = (20, 5);

    assert_eq!(Placement::BottomStart.offset(trigger, menu), (1, 0));
    assert_eq!(Placement::TopEnd.offset(trigger, menu), (-5, -10));
    assert_eq!(Placement::Right.offset(trigger, menu), (-2, 10));
    assert_eq!(Placement::LeftStart.offset(trigger, menu), (0, -20));
    assert_eq!(Placement::default(), Placement::BottomStart);
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2024-03-09").unwrap(), Some(date(2024, 3, 9)));
    assert_eq!(parse_date("  ").unwrap(), None);
    assert!(parse_date("09/03/2024").is_err());
    assert!(parse_date("2024-02-30").is_err());
}

#[test]
fn test_date_picker_respects_bounds() {
    let mut state = DatePickerState::new()
        .with_min_date(date(2024, 1, 10))
        .with_max_date(date(2024, 1, 20));

    assert!(!state.pick(date(2024, 1, 5)));
    assert_eq!(state.value(), None);

    assert!(state.pick(date(2024, 1, 15)));
    assert_eq!(state.value(), Some(date(2024, 1, 15)));
    assert_eq!(state.text(), "2024-01-15");
    assert!(!state.is_open());

    state.open();
    assert_eq!(state.cursor(), Some(date(2024, 1, 15)));
    state.move_days(30);
    assert_eq!(state.cursor(), Some(date(2024, 1, 20)));
    state.move_months(-1);
    assert_eq!(state.cursor(), Some(date(2024, 1, 10)));
}

#[test]
fn test_date_picker_calendar_keys() {
    let mut state = DatePickerState::new().with_value(date(2024, 1, 31));
    let none = Modifiers::new();

    assert_eq!(state.handle_key(Key::Down, none), DateKey::Handled);
    assert!(state.is_open());
    assert_eq!(state.handle_key(Key::Right, none), DateKey::Handled);
    assert_eq!(state.cursor(), Some(date(2024, 2, 1)));
    state.handle_key(Key::PageDown, none);
    assert_eq!(state.cursor(), Some(date(2024, 3, 1)));

    assert_eq!(
        state.handle_key(Key::Enter, none),
        DateKey::Commit(Some(date(2024, 3, 1)))
    );
    assert!(!state.is_open());
}

#[test]
fn test_date_picker_typed_text() {
    let mut state = DatePickerState::new().with_value(date(2024, 1, 1));
    let none = Modifiers::new();

    for _ in 0..2 {
        assert_eq!(state.handle_key(Key::Backspace, none), DateKey::Input);
    }
    for c in "15".chars() {
        state.handle_key(Key::Char(c), none);
    }
    assert_eq!(state.text(), "2024-01-15");
    assert_eq!(state.value(), Some(date(2024, 1, 1)));

    assert_eq!(
        state.handle_key(Key::Enter, none),
        DateKey::Commit(Some(date(2024, 1, 15)))
    );

    // Garbage restores the committed text
    state.handle_key(Key::Char('x'), none);
    assert_eq!(state.commit_text(), None);
    assert_eq!(state.text(), "2024-01-15");
    assert_eq!(state.value(), Some(date(2024, 1, 15)));
}

#[test]
fn test_date_picker_blank_text_clears() {
    let mut state = DatePickerState::new().with_value(date(2024, 1, 1));
    let none = Modifiers::new();

    for _ in 0.."2024-01-01".len() {
        state.handle_key(Key::Backspace, none);
    }
    assert_eq!(state.commit_text(), Some(None));
    assert_eq!(state.value(), None);
}

#[test]
fn test_checkbox_toggle() {
    let mut state = CheckboxState::new(false);
    assert!(state.toggle());
    assert!(state.checked());
    assert!(!state.toggle());
}

#[test]
fn test_checkbox_group_keeps_option_order() {
    let mut state = CheckboxGroupState::new([
        SelectOption::new("email", "Email"),
        SelectOption::new("sms", "SMS").disabled(),
        SelectOption::new("push", "Push"),
    ]);

    assert_eq!(state.toggle("push"), Some(vec!["push".to_string()]));
    assert_eq!(
        state.toggle("email"),
        Some(vec!["email".to_string(), "push".to_string()])
    );
    assert_eq!(state.toggle("sms"), None);
    assert_eq!(state.toggle("fax"), None);

    assert_eq!(state.toggle("email"), Some(vec!["push".to_string()]));
    assert!(!state.is_checked("email"));
}

#[test]
fn test_input_editing() {
    let mut state = InputState::new();
    typed(&mut state, "héllo");
    assert_eq!(state.cursor(), 5);

    state.edit(Key::Home, Modifiers::new());
    state.edit(Key::Right, Modifiers::new());
    assert_eq!(state.edit(Key::Delete, Modifiers::new()), Edit::Changed);
    assert_eq!(state.text(), "hllo");

    assert_eq!(state.edit(Key::Backspace, Modifiers::new()), Edit::Changed);
    assert_eq!(state.text(), "llo");
    assert_eq!(state.edit(Key::Backspace, Modifiers::new()), Edit::Moved);

    assert_eq!(state.edit(Key::Char('a'), Modifiers::ctrl()), Edit::Ignored);
    assert_eq!(state.edit(Key::Tab, Modifiers::new()), Edit::Ignored);
    assert_eq!(state.text(), "llo");
}

#[test]
fn test_validator_reports_first_failure() {
    let validator = Validator::new()
        .required("Email is required")
        .email("Enter a valid email");

    assert_eq!(validator.validate(""), Err("Email is required".to_string()));
    assert_eq!(validator.validate("nope"), Err("Enter a valid email".to_string()));
    assert_eq!(validator.validate("ada@example.com"), Ok(()));

    let mut state = InputState::with_text("nope");
    assert!(!state.validate(&validator));
    assert_eq!(state.error(), Some("Enter a valid email"));
    state.set_text("ada@example.com");
    assert!(state.validate(&validator));
    assert_eq!(state.error(), None);
}

#[test]
fn test_validator_lengths_and_pattern() {
    let validator = Validator::new()
        .min_length(3, "Too short")
        .max_length(5, "Too long")
        .pattern("^[a-z]+$", "Lowercase only");

    assert_eq!(validator.len(), 3);
    assert_eq!(validator.validate("ab"), Err("Too short".to_string()));
    assert_eq!(validator.validate("abcdef"), Err("Too long".to_string()));
    assert_eq!(validator.validate("ABC"), Err("Lowercase only".to_string()));
    assert_eq!(validator.validate("abc"), Ok(()));

    // A broken pattern is skipped
    assert!(Validator::new().pattern("(", "never").is_empty());
}

#[test]
fn test_autocomplete_commits_highlighted_option() {
    let mut state = AutocompleteState::new([
        SelectOption::new("apple", "Apple"),
        SelectOption::new("banana", "Banana"),
        SelectOption::new("apricot", "Apricot"),
    ]);
    let none = Modifiers::new();

    assert_eq!(state.handle_key(Key::Char('a'), none), AutocompleteKey::Input);
    assert_eq!(state.handle_key(Key::Char('p'), none), AutocompleteKey::Input);
    assert!(state.is_open());
    assert_eq!(state.combobox().visible_len(), 2);

    state.handle_key(Key::Down, none);
    let key = state.handle_key(Key::Enter, none);
    assert!(matches!(key, AutocompleteKey::Commit(ref o) if o.id == "apricot"));
    assert_eq!(state.text(), "Apricot");
    assert_eq!(state.value().as_deref(), Some("apricot"));
    assert!(!state.is_open());
}

#[test]
fn test_autocomplete_revert_drops_typing() {
    let mut state = AutocompleteState::new([SelectOption::new("apple", "Apple")]).with_value("apple");
    assert_eq!(state.text(), "Apple");

    state.set_text("Appx");
    state.revert();
    assert_eq!(state.text(), "Apple");
    assert_eq!(state.value().as_deref(), Some("apple"));
    assert!(!state.is_open());
}

#[test]
fn test_autocomplete_free_solo_empties_on_focus_loss() {
    let mut state = AutocompleteState::new([SelectOption::new("apple", "Apple")]).free_solo();

    state.set_text("kiwi");
    assert_eq!(state.value().as_deref(), Some("kiwi"));
    state.revert();
    assert_eq!(state.text(), "");
    assert!(!state.is_open());

    // A chosen option survives focus loss
    state.set_text("app");
    state.choose("apple");
    state.revert();
    assert_eq!(state.text(), "Apple");

    assert!(state.clear());
    assert_eq!(state.value(), None);
    assert!(!state.clear());
}

#[test]
fn test_autocomplete_free_solo_shows_initial_text() {
    let state = AutocompleteState::new([SelectOption::new("apple", "Apple")])
        .free_solo()
        .with_value("kiwi");
    assert_eq!(state.text(), "kiwi");
}

#[test]
fn test_initials() {
    assert_eq!(initials("Ada Lovelace"), "AL");
    assert_eq!(initials("grace brewster murray hopper"), "GH");
    assert_eq!(initials("Linus"), "L");
    assert_eq!(initials("   "), "");
}

#[test]
fn test_avatar_group_overflow() {
    let group = AvatarGroup::new()
        .max(2)
        .avatar(Avatar::new().name("Ada Lovelace"))
        .avatar(Avatar::new().name("Alan Turing"))
        .avatar(Avatar::new().name("Grace Hopper"))
        .avatar(Avatar::new().name("Edsger Dijkstra"));

    assert_eq!(group.overflow(), 2);
    assert_eq!(AvatarGroup::new().overflow(), 0);
}
