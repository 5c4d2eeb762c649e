//! Properties that hold across grammar nodes

use parlance_foundation::Value;
use parlance_grammar::{Parse, Spec};
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

fn roster() -> Vec<String> {
    vec!["Mick".into(), "Steve".into(), "Stella".into()]
}

fn trade() -> Spec {
    Spec::one_of(vec![
        Spec::sequence(vec![
            Spec::literal("buy"),
            Spec::after_space(Spec::integer_between(1, 9)),
            Spec::after_space(Spec::enumerated(["railroad", "ship", "steel"])),
        ]),
        Spec::sequence(vec![
            Spec::literal("give"),
            Spec::after_space(Spec::player()),
            Spec::optional(Spec::after_space(Spec::integer_at_least(1))),
        ]),
        Spec::from(
            Spec::repeat(Spec::enumerated(["north", "northeast", "south"]))
                .with_delimiter(",")
                .with_min(1),
        ),
        Spec::literal("pass"),
    ])
}

fn grammars() -> Vec<Spec> {
    vec![
        Spec::integer(),
        Spec::integer_between(-5, 5),
        Spec::literal("Move"),
        Spec::enumerated(["north", "northeast"]),
        Spec::player(),
        Spec::whitespace(),
        Spec::optional(Spec::integer()),
        Spec::from(Spec::repeat(Spec::integer()).with_delimiter(",")),
        trade(),
    ]
}

proptest! {
    #[test]
    fn consumed_and_remaining_rebuild_input(input in "[a-zA-Z0-9 ,é-]{0,24}") {
        for spec in grammars() {
            if let Ok(out) = spec.parse(&input, &roster()) {
                prop_assert_eq!(format!("{}{}", out.consumed, out.remaining), input.clone());
            }
        }
    }

    #[test]
    fn failure_offset_within_input(input in "\\PC{0,24}") {
        let players = roster();
        for spec in grammars() {
            if let Err(failure) = spec.parse(&input, &players) {
                prop_assert!(failure.offset <= input.chars().count());
            }
        }
    }

    #[test]
    fn in_range_integers_parse_exactly(n in -5i64..=5, tail in "[ a-z]{0,5}") {
        let input = format!("{n}{tail}");
        let out = Spec::integer_between(-5, 5).parse(&input, &[]).unwrap();
        prop_assert_eq!(out.value, Value::Int(n));
        prop_assert_eq!(out.remaining, tail.as_str());
    }

    #[test]
    fn out_of_range_integers_name_value(n in 6i64..1_000_000) {
        let failure = Spec::integer_between(-5, 5).parse(&n.to_string(), &[]).unwrap_err();
        prop_assert_eq!(failure.message, Some(format!("{n} is too high")));
        prop_assert_eq!(failure.offset, 0);
    }

    #[test]
    fn optional_never_fails(input in "\\PC{0,16}") {
        let out = Spec::optional(trade()).parse(&input, &roster());
        prop_assert!(out.is_ok());
    }
}

#[test]
fn grammar_shared_across_threads() {
    let spec = Arc::new(trade());
    let players = Arc::new(roster());

    thread::scope(|scope| {
        for line in ["buy 2 rai", "give ste 3", "n,so", "pass"] {
            let spec = Arc::clone(&spec);
            let players = Arc::clone(&players);
            scope.spawn(move || {
                let first = spec.parse(line, &players);
                let second = spec.parse(line, &players);
                assert_eq!(first, second);
            });
        }
    });
}
