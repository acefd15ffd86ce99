//! Property-based tests for the scanner.
//!
//! These tests use proptest to generate queries and arbitrary text and check:
//! 1. Round-trip: lexemes plus trivia rebuild the input exactly
//! 2. Determinism: scanning twice gives the same output
//! 3. Progress: recovering scans account for every character of any input

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use proptest::prelude::*;
use scanner::{reference, scan, scan_with, ScanOptions};

/// A fragment the reference vocabulary covers, followed by its separator.
fn fragment_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        prop::sample::select(vec!["select", "WHERE", "Limit", "a"]).prop_map(String::from),
        prop::string::string_regex(r"\?[a-z_][a-z0-9_]{0,6}").unwrap(),
        // prefixes avoid reserved words, which would win over the identifier
        prop::string::string_regex(r"(dbo|foaf|rdf|ex_1):[A-Za-z][a-z-]{0,6}").unwrap(),
        prop::string::string_regex(r#""[a-zA-Z ]{0,8}"(@[a-z]{2})?"#).unwrap(),
        prop::string::string_regex(r"[0-9]{1,5}").unwrap(),
        prop::sample::select(vec!["{", "}", ".", ";"]).prop_map(String::from),
        prop::string::string_regex(r"#[a-z ]{0,10}").unwrap(),
    ];
    let separator = prop::sample::select(vec![" ", "\n", "\t", "  \n"]);

    (piece, separator).prop_map(|(piece, separator)| {
        if piece.starts_with('#') {
            format!("{}\n", piece)
        } else {
            format!("{}{}", piece, separator)
        }
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment_strategy(), 0..24).prop_map(|fragments| fragments.concat())
}

proptest! {
    #[test]
    fn covered_input_round_trips(source in query_strategy()) {
        let options = ScanOptions { keep_trivia: true, ..ScanOptions::default() };
        let scan = scan_with(reference(), &source, options);

        prop_assert!(scan.is_ok(), "unexpected error {:?} in {:?}", scan.error(), source);
        let rebuilt: String = scan.tokens.iter().map(|token| token.lexeme.as_str()).collect();
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn tokens_are_contiguous(source in query_strategy()) {
        let options = ScanOptions { keep_trivia: true, ..ScanOptions::default() };
        let scan = scan_with(reference(), &source, options);

        let mut offset = 0;
        for token in &scan.tokens {
            prop_assert_eq!(token.offset(), offset);
            prop_assert_eq!(&source[token.offset()..token.end()], token.lexeme.as_str());
            offset = token.end();
        }
        prop_assert_eq!(offset, source.len());
    }

    #[test]
    fn scanning_is_deterministic(source in "\\PC{0,64}") {
        prop_assert_eq!(scan(reference(), &source), scan(reference(), &source));
    }

    #[test]
    fn recovery_accounts_for_every_character(source in "\\PC{0,64}") {
        let options = ScanOptions { recover: true, keep_trivia: true };
        let scan = scan_with(reference(), &source, options);

        let mut pieces: Vec<(usize, String)> = scan
            .tokens
            .iter()
            .map(|token| (token.offset(), token.lexeme.clone()))
            .chain(scan.errors.iter().map(|error| (error.offset(), error.character().to_string())))
            .collect();
        pieces.sort_by_key(|(offset, _)| *offset);

        let rebuilt: String = pieces.into_iter().map(|(_, text)| text).collect();
        prop_assert_eq!(rebuilt, source);
    }
}
