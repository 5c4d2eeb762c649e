//! Integration tests for combinator grammar nodes

use parlance_foundation::Value;
use parlance_grammar::{Alternation, Parse, Repetition, Sequence, Spec};

fn move_command() -> Spec {
    Spec::sequence(vec![
        Spec::literal("mv"),
        Spec::after_space(Spec::integer_between(1, 5)),
        Spec::after_space(Spec::enumerated(["north", "northeast", "south"])),
    ])
}

// =============================================================================
// Alternation
// =============================================================================

#[test]
fn alternation_first_success_wins() {
    let spec = Spec::one_of(vec![Spec::integer(), Spec::enumerated(["one", "two"])]);
    assert_eq!(spec.parse("12", &[]).unwrap().value, Value::Int(12));
    assert_eq!(spec.parse("tw", &[]).unwrap().value, Value::from("two"));
}

#[test]
fn alternation_merges_failures_at_same_offset() {
    let spec = Spec::one_of(vec![Spec::literal("cat"), Spec::literal("car")]);
    let failure = spec.parse("cab", &[]).unwrap_err();
    assert_eq!(failure.offset, 2);
    assert_eq!(failure.message, None);
    assert_eq!(failure.expected, vec!["cat", "car"]);
    assert_eq!(failure.to_string(), "expected cat or car");
}

#[test]
fn alternation_prefers_longer_partial_literal() {
    let spec = Spec::one_of(vec![Spec::literal("cart"), Spec::literal("cab")]);
    let failure = spec.parse("carp", &[]).unwrap_err();
    assert_eq!(failure.offset, 3);
    assert_eq!(failure.expected, vec!["cart"]);
}

#[test]
fn alternation_joins_messages_with_or() {
    let spec = Spec::one_of(vec![Spec::integer_at_least(10), Spec::integer_at_most(-10)]);
    let failure = spec.parse("0", &[]).unwrap_err();
    assert_eq!(
        failure.message.as_deref(),
        Some("0 is too low or 0 is too high")
    );
    assert_eq!(
        failure.expected,
        vec!["number 10 or higher", "number -10 or lower"]
    );
}

#[test]
fn alternation_prefers_furthest_failure() {
    let spec = Spec::one_of(vec![move_command(), Spec::literal("mvp")]);
    let failure = spec.parse("mv 9 north", &[]).unwrap_err();
    assert_eq!(failure.offset, 3);
    assert_eq!(failure.message.as_deref(), Some("9 is too high"));
    assert_eq!(failure.expected, vec!["number between 1 and 5"]);
}

#[test]
fn empty_alternation_fails() {
    let spec = Spec::from(Alternation(Vec::new()));
    let failure = spec.parse("anything", &[]).unwrap_err();
    assert_eq!(failure.to_string(), "invalid input");
}

// =============================================================================
// Sequence
// =============================================================================

#[test]
fn sequence_collects_values() {
    let out = move_command().parse("MV 3 so", &[]).unwrap();
    assert_eq!(
        out.value,
        Value::List(vec![
            Value::from("mv"),
            Value::List(vec![Value::from(" "), Value::Int(3)]),
            Value::List(vec![Value::from(" "), Value::from("south")]),
        ])
    );
    assert_eq!(out.remaining, "");
}

#[test]
fn sequence_failure_offset_is_absolute() {
    let failure = move_command().parse("mv 3 x", &[]).unwrap_err();
    assert_eq!(failure.offset, 5);
    assert_eq!(failure.expected, vec!["north", "northeast", "south"]);
}

#[test]
fn sequence_offset_counts_characters() {
    let spec = Spec::sequence(vec![Spec::literal("é"), Spec::integer()]);
    let failure = spec.parse("éx", &[]).unwrap_err();
    assert_eq!(failure.offset, 1);
}

#[test]
fn empty_sequence_succeeds() {
    let out = Spec::from(Sequence(Vec::new())).parse("rest", &[]).unwrap();
    assert_eq!(out.value, Value::List(Vec::new()));
    assert_eq!(out.consumed, "");
    assert_eq!(out.remaining, "rest");
}

#[test]
fn sequence_expected_is_first_step() {
    assert_eq!(move_command().expected(&[]), vec!["mv"]);
}

// =============================================================================
// Repetition
// =============================================================================

#[test]
fn repetition_delimited_integers() {
    let spec = Spec::from(Spec::repeat(Spec::integer()).with_delimiter(","));
    let out = spec.parse("1,2,3", &[]).unwrap();
    assert_eq!(out.value, Value::from(vec![1i64, 2, 3]));
    assert_eq!(out.consumed, "1,2,3");
}

#[test]
fn repetition_insufficient_items() {
    let spec = Spec::from(
        Spec::repeat(Spec::integer())
            .with_delimiter(",")
            .with_min(2),
    );
    let failure = spec.parse("1", &[]).unwrap_err();
    assert_eq!(
        failure.message.as_deref(),
        Some("expected at least 2 items but could only parse 1")
    );
    assert_eq!(failure.offset, 1);
    assert!(failure.expected.is_empty());
}

#[test]
fn repetition_zero_max_reads_nothing() {
    let spec = Spec::from(Repetition::new(Spec::integer()).with_max(0));
    let out = spec.parse("1,2", &[]).unwrap();
    assert_eq!(out.value, Value::List(Vec::new()));
    assert_eq!(out.remaining, "1,2");
}

#[test]
fn repetition_min_above_max_reads_nothing() {
    let spec = Spec::from(Repetition::new(Spec::integer()).with_min(3).with_max(2));
    let out = spec.parse("1,2,3", &[]).unwrap();
    assert_eq!(out.consumed, "");
}

#[test]
fn bounded_repetition_of_optional_reaches_max() {
    let spec = Spec::from(
        Repetition::new(Spec::optional(Spec::integer()))
            .with_min(3)
            .with_max(5),
    );
    let out = spec.parse("abc", &[]).unwrap();
    assert_eq!(out.value, Value::List(vec![Value::Absent; 5]));
    assert_eq!(out.remaining, "abc");
}

#[test]
fn repetition_expected_names_bounds() {
    let expected = |r: Repetition| Spec::from(r).expected(&[]);
    assert_eq!(
        expected(Repetition::new(Spec::integer()).with_min(1).with_max(3)),
        vec!["between 1 and 3 number"]
    );
    assert_eq!(
        expected(Repetition::new(Spec::integer()).with_min(2)),
        vec!["2 or more number"]
    );
    assert_eq!(
        expected(Repetition::new(Spec::integer()).with_max(4)),
        vec!["up to 4 number"]
    );
    assert_eq!(
        expected(Repetition::new(Spec::integer())),
        vec!["any number of number"]
    );
}

// =============================================================================
// Optional
// =============================================================================

#[test]
fn optional_swallows_failure() {
    let out = Spec::optional(Spec::integer()).parse("abc", &[]).unwrap();
    assert!(out.value.is_absent());
    assert_eq!(out.consumed, "");
    assert_eq!(out.remaining, "abc");
}

#[test]
fn optional_passes_success_through() {
    let out = Spec::optional(Spec::integer()).parse("42abc", &[]).unwrap();
    assert_eq!(out.value, Value::Int(42));
    assert_eq!(out.remaining, "abc");
}

#[test]
fn optional_expected_is_prefixed() {
    assert_eq!(
        Spec::optional(Spec::enumerated(["a", "b"])).expected(&[]),
        vec!["optional a", "optional b"]
    );
}

// =============================================================================
// Documented
// =============================================================================

#[test]
fn documented_is_transparent() {
    let plain = move_command();
    let documented = Spec::documented("mv", "move units", move_command());
    assert_eq!(
        documented.parse("mv 2 s", &[]).unwrap(),
        plain.parse("mv 2 s", &[]).unwrap()
    );
    assert_eq!(
        documented.parse("mv 2", &[]).unwrap_err(),
        plain.parse("mv 2", &[]).unwrap_err()
    );
    assert_eq!(documented.expected(&[]), plain.expected(&[]));
}

#[test]
fn documentation_lists_nested_entries() {
    let spec = Spec::one_of(vec![
        Spec::documented("mv", "move units", move_command()),
        Spec::optional(Spec::documented("pass", "end the turn", Spec::literal("pass"))),
    ]);
    let names: Vec<_> = spec.documentation().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["mv", "pass"]);
}
