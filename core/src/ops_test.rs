//! Tests for compose, substr and split

use crate::test_utils::init_test_logging;
use crate::{Error, FilteredStringView, Predicate, ToString, Vec, compose, split, substr, vec};
use pretty_assertions::assert_eq;

fn texts(views: &[FilteredStringView<'_>]) -> Vec<std::string::String> {
    views.iter().map(|v| v.to_string()).collect()
}

// ============================================================================
// compose
// ============================================================================

#[test]
fn test_compose_conjunction() {
    let base = FilteredStringView::new("c / c++");
    let view = compose(
        &base,
        [
            Predicate::new(|c: &u8| *c == b'c' || *c == b'+' || *c == b'/'),
            Predicate::new(|c: &u8| *c > b' '),
            Predicate::accept_all(),
        ],
    );
    assert_eq!(view.to_string(), "c/c++");
    assert!(core::ptr::eq(view.data(), base.data()));
}

#[test]
fn test_compose_replaces_original_predicate() {
    let base = FilteredStringView::with_predicate("abc123", |c: &u8| c.is_ascii_digit());
    let view = compose(&base, [Predicate::new(|c: &u8| *c != b'b')]);
    assert_eq!(view.to_string(), "ac123");
}

#[test]
fn test_compose_empty_list_accepts_everything() {
    let base = FilteredStringView::with_predicate("hello", |_: &u8| false);
    let view = compose(&base, vec![]);
    assert_eq!(view, "hello");
}

// ============================================================================
// substr
// ============================================================================

#[test]
fn test_substr_basic() {
    let s = FilteredStringView::new("new york city");
    assert_eq!(substr(&s, 4, Some(4)).unwrap().to_string(), "york");
}

#[test]
fn test_substr_position_to_end() {
    let s = FilteredStringView::new("baldurs gate");
    let result = substr(&s, 8, None).unwrap();
    assert!(core::ptr::eq(result.data(), s.data()));
    assert_eq!(result.to_string(), "gate");
}

#[test]
fn test_substr_defaults_to_whole_view() {
    let s = FilteredStringView::with_predicate("a.b.c", |c: &u8| *c != b'.');
    assert_eq!(substr(&s, 0, None).unwrap(), s);
}

#[test]
fn test_substr_out_of_range() {
    let s = FilteredStringView::with_predicate(
        "No no its no use jo, jo we gotta have it out",
        |c: &u8| c.is_ascii_uppercase(),
    );
    let err = substr(&s, 6, None).unwrap_err();
    assert_eq!(err, Error::PositionOutOfRange { pos: 6, size: 1 });
    assert_eq!(
        err.to_string(),
        "substr(6): position out of range for filtered view of size 1"
    );
}

#[test]
fn test_substr_empty_results() {
    let s = FilteredStringView::new("notebook");
    let at_end = substr(&s, 8, None).unwrap();
    assert!(at_end.is_empty());
    assert!(core::ptr::eq(at_end.data(), s.data()));
    assert!(substr(&s, 3, Some(0)).unwrap().is_empty());
}

#[test]
fn test_substr_partial() {
    let s = FilteredStringView::new("abcdefghijk");
    assert_eq!(substr(&s, 2, Some(3)).unwrap(), "cde");
}

#[test]
fn test_substr_count_is_clamped() {
    let s = FilteredStringView::new("abc");
    assert_eq!(substr(&s, 1, Some(100)).unwrap(), "bc");
    assert_eq!(substr(&s, 1, Some(usize::MAX)).unwrap(), "bc");
}

#[test]
fn test_substr_keeps_original_predicate() {
    // Logical "bcd" spans raw "b-c-d"; the dashes inside the range stay hidden.
    let s = FilteredStringView::with_predicate("a-b-c-d-e", |c: &u8| *c != b'-');
    let sub = substr(&s, 1, Some(3)).unwrap();
    assert_eq!(sub, "bcd");
    assert_eq!(sub.len(), 3);
    assert_eq!(sub.raw_len(), s.raw_len());
    assert_eq!(sub.raw_positions(), [2, 4, 6]);
}

#[test]
fn test_substr_of_substr() {
    let s = FilteredStringView::new("the quick brown fox");
    let quick_brown = substr(&s, 4, Some(11)).unwrap();
    let brown = substr(&quick_brown, 6, None).unwrap();
    assert_eq!(brown, "brown");
    assert!(substr(&brown, 6, None).is_err());
}

#[test]
fn test_substr_predicate_rejects_foreign_bytes() {
    let s = FilteredStringView::new("abc");
    let sub = substr(&s, 0, Some(2)).unwrap();
    // Same value, but not a byte of the buffer.
    let outsider = b'a';
    assert!(!sub.predicate().test(&outsider));
    assert!(sub.predicate().test(&s.data()[0]));
}

// ============================================================================
// split
// ============================================================================

#[test]
fn test_split_filtered_view_and_token() {
    init_test_logging();
    let wentworth = FilteredStringView::with_predicate("Malcom? Bligh? Turnbull", |c: &u8| *c != b'?');
    let token = FilteredStringView::with_predicate(" 2015", |c: &u8| *c == b' ');
    let representative = split(&wentworth, &token);
    assert_eq!(representative.len(), 3);
    assert_eq!(representative[1], "Bligh");
    assert_eq!(texts(&representative), ["Malcom", "Bligh", "Turnbull"]);
}

#[test]
fn test_split_token_not_present() {
    let s = FilteredStringView::new("fishing");
    let tok = FilteredStringView::new("robert");
    let result = split(&s, &tok);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0], "fishing");
}

#[test]
fn test_split_empty_token_returns_view() {
    let s = FilteredStringView::new("fishing");
    let result = split(&s, &FilteredStringView::new(""));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0], "fishing");
    assert!(Predicate::ptr_eq(result[0].predicate(), s.predicate()));
}

#[test]
fn test_split_token_filtered_to_nothing() {
    let s = FilteredStringView::new("a b c");
    let tok = FilteredStringView::with_predicate(" ", |_: &u8| false);
    let result = split(&s, &tok);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0], "a b c");
}

#[test]
fn test_split_empty_view() {
    let s = FilteredStringView::with_predicate("xxx", |c: &u8| *c != b'x');
    let result = split(&s, &FilteredStringView::new("x"));
    assert_eq!(result.len(), 1);
    assert!(result[0].is_empty());
}

#[test]
fn test_split_token_at_edges() {
    let s = FilteredStringView::new("xax");
    let tok = FilteredStringView::new("x");
    let result = split(&s, &tok);
    let expected = [
        FilteredStringView::new(""),
        FilteredStringView::new("a"),
        FilteredStringView::new(""),
    ];
    assert_eq!(result, expected);
}

#[test]
fn test_split_consecutive_delimiters() {
    let tok = FilteredStringView::with_predicate("x", |c: &u8| *c == b'x');
    let s = FilteredStringView::with_predicate("xx", |c: &u8| *c != b' ');
    let result = split(&s, &tok);
    assert_eq!(texts(&result), ["", "", ""]);
}

#[test]
fn test_split_non_overlapping() {
    let s = FilteredStringView::new("aaaaa");
    let tok = FilteredStringView::new("aa");
    assert_eq!(texts(&split(&s, &tok)), ["", "", "a"]);
}

#[test]
fn test_split_multibyte_token() {
    let s = FilteredStringView::new("one, two,, three");
    let tok = FilteredStringView::new(", ");
    assert_eq!(texts(&split(&s, &tok)), ["one", "two,", "three"]);
}

#[test]
fn test_split_matches_across_hidden_bytes() {
    // The token only has to match the filtered text, not the raw bytes.
    let s = FilteredStringView::with_predicate("ab-:-cd:e-f", |c: &u8| *c != b'-');
    let tok = FilteredStringView::new(":");
    let parts = split(&s, &tok);
    assert_eq!(texts(&parts), ["ab", "cd", "ef"]);
    assert!(parts.iter().all(|p| core::ptr::eq(p.data(), s.data())));
}

#[test]
fn test_split_round_trip() {
    let s = FilteredStringView::with_predicate("a1,b2,,c3,", |c: &u8| !c.is_ascii_digit());
    let tok = FilteredStringView::new(",");
    let parts = split(&s, &tok);
    let joined = texts(&parts).join(&tok.to_string());
    assert_eq!(joined, s.to_string());
}
