use coreui_dom::text::{align_offset, display_width, pad_to_width, truncate_to_width, wrap_words};
use coreui_dom::TextAlign;

#[test]
fn test_display_width_counts_wide_chars() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("日本"), 4);
}

#[test]
fn test_truncate() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello world", 6), "hello…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_pad_to_width() {
    assert_eq!(pad_to_width("ab", 4), "ab  ");
    assert_eq!(pad_to_width("abcdef", 4), "abc…");
}

#[test]
fn test_wrap_words() {
    assert_eq!(wrap_words("the quick brown fox", 10), vec!["the quick", "brown fox"]);
    assert_eq!(wrap_words("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    assert_eq!(wrap_words("a\n\nb", 4), vec!["a", "", "b"]);
}

#[test]
fn test_align_offset() {
    assert_eq!(align_offset(2, 10, TextAlign::Left), 0);
    assert_eq!(align_offset(2, 10, TextAlign::Center), 4);
    assert_eq!(align_offset(2, 10, TextAlign::Right), 8);
    assert_eq!(align_offset(12, 10, TextAlign::Right), 0);
}
