//! Comportement observable du translittérateur, caractère par caractère.

use bt_core::cell::Output;
use bt_core::config::EngineOptions;
use bt_translit::transliterate::{Transliterator, transliterate};
use proptest::prelude::*;

fn ids(outputs: &[Output]) -> Vec<&str> {
    outputs.iter().filter_map(Output::symbol_id).collect()
}

// ============== Letters ==============

#[test]
fn every_lowercase_letter_is_a_single_cell() {
    for c in 'a'..='z' {
        assert_eq!(transliterate(&c.to_string()), vec![Output::cell(c, c)]);
    }
}

#[test]
fn every_uppercase_letter_is_cap_then_letter() {
    for c in 'A'..='Z' {
        assert_eq!(
            transliterate(&c.to_string()),
            vec![
                Output::cell("cap", "Caps"),
                Output::cell(c.to_ascii_lowercase(), c)
            ]
        );
    }
}

// ============== Numeric mode ==============

#[test]
fn single_digit_gets_number_sign() {
    assert_eq!(
        transliterate("5"),
        vec![Output::cell("num", "Number"), Output::cell("e", "5")]
    );
}

#[test]
fn consecutive_digits_share_one_number_sign() {
    let out = transliterate("55");
    assert_eq!(out.len(), 3);
    assert_eq!(ids(&out), ["num", "e", "e"]);
}

#[test]
fn letter_ends_numeric_mode() {
    assert_eq!(ids(&transliterate("5a5")), ["num", "e", "a", "num", "e"]);
}

#[test]
fn decimal_point_only_in_numeric_mode() {
    assert_eq!(ids(&transliterate("3.5")), ["num", "c", "dec", "e"]);
    assert_eq!(ids(&transliterate("end.")), ["e", "n", "d", "period"]);
}

// ============== Punctuation ==============

#[test]
fn space_is_blank_cell() {
    assert_eq!(transliterate(" "), vec![Output::cell("sp", "")]);
}

#[test]
fn percent_is_two_cells() {
    assert_eq!(ids(&transliterate("%")), ["col", "p"]);
}

#[test]
fn asterisk_is_doubled() {
    assert_eq!(
        transliterate("*"),
        vec![Output::cell("ast", "*"), Output::cell("ast", "*")]
    );
}

#[test]
fn sentence_round_trip_of_symbols() {
    let out = transliterate("It's 10:30, (ok)?");
    assert_eq!(
        ids(&out),
        [
            "cap", "i", "t", "qs", "s", "sp", "num", "a", "j", "col", "num", "c", "j", "comma",
            "sp", "par", "o", "k", "par", "qu"
        ]
    );
}

// ============== Totality ==============

#[test]
fn empty_input_is_empty_output() {
    assert!(transliterate("").is_empty());
}

#[test]
fn unsupported_character_yields_nothing_and_leaves_no_trace() {
    assert!(transliterate("@").is_empty());
    assert_eq!(ids(&transliterate("5")), ["num", "e"]);
}

#[test]
fn repeated_calls_are_identical() {
    let text = "Hello, World! 42.5% [x]\n'quoted'";
    assert_eq!(transliterate(text), transliterate(text));
}

// ============== Properties ==============

proptest! {
    #[test]
    fn prop_fan_out_is_at_most_two(s in "[ -~\n]{0,64}") {
        let out = transliterate(&s);
        prop_assert!(out.len() <= s.chars().count() * 2);
    }

    #[test]
    fn prop_pure_across_calls(s in "\\PC{0,64}") {
        prop_assert_eq!(transliterate(&s), transliterate(&s));
    }

    #[test]
    fn prop_iterator_matches_materialized(s in "[ -~\n]{0,64}") {
        let opts = EngineOptions::default();
        let lazy: Vec<Output> = Transliterator::new(&s, &opts).collect();
        prop_assert_eq!(lazy, transliterate(&s));
    }

    #[test]
    fn prop_unsupported_only_is_empty(s in "[@#&+=<>^_`{|}~/\\\\\"-]{0,32}") {
        prop_assert!(transliterate(&s).is_empty());
    }

    #[test]
    fn prop_each_printable_ascii_char_emits_or_skips(c in proptest::char::range(' ', '~')) {
        let out = transliterate(&c.to_string());
        prop_assert!(out.len() <= 2);
        prop_assert!(out.iter().all(|o| o.as_cell().is_some()));
    }
}
