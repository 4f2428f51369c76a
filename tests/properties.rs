//! Property tests for tokenization and rendering.
//!
//! Every property here must hold for any input string, including unicode
//! and punctuation-heavy ones.

use caseconv::{
    convert, convert_str, tokenize, CaseEngine, CaseError, InputPolicy, NoiseHandling,
};
use proptest::prelude::*;
use serde_json::json;

const STYLES: [&str; 3] = ["camel", "kebab", "dot"];

fn word_lists() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9]{0,7}", 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn kebab_is_idempotent(input in "\\PC{0,64}") {
        let once = convert_str(&input, "kebab").unwrap();
        let twice = convert_str(&once, "kebab").unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn kebab_is_idempotent_with_strip(input in "[[:ascii:]]{0,64}") {
        let engine = CaseEngine::builder()
            .noise_handling(NoiseHandling::Strip)
            .build()
            .unwrap();
        let once = engine.convert_str(&input, "kebab").unwrap();
        let twice = engine.convert_str(&once, "kebab").unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn tokenize_is_deterministic(input in "\\PC{0,64}") {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }

    #[test]
    fn tokens_are_non_empty_alphanumeric(input in "\\PC{0,64}") {
        for token in tokenize(&input) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn delimiters_are_equivalent(
        words in word_lists(),
        delimiter in prop::sample::select(vec![" ", "_", "-", ".", "  ", "-_", " . "]),
    ) {
        let spaced = tokenize(&words.join(" "));
        let delimited = tokenize(&words.join(delimiter));
        prop_assert_eq!(&spaced, &delimited);
        prop_assert_eq!(spaced.len(), words.len());
    }

    #[test]
    fn kebab_tokens_round_trip(words in word_lists()) {
        let kebab = convert_str(&words.join(" "), "kebab").unwrap();
        let tokens: Vec<String> = tokenize(&kebab).into_iter().map(|t| t.into_string()).collect();
        prop_assert_eq!(tokens, words);
    }

    #[test]
    fn noise_only_input_is_empty(
        input in "[ \\t!@#$%^&*()\\[\\]{}:;'\",<>/?\\\\|~`+=_.-]{0,32}",
    ) {
        for style in STYLES {
            prop_assert_eq!(convert_str(&input, style).unwrap(), "");
        }
    }

    #[test]
    fn camel_output_has_no_delimiters(input in "\\PC{0,64}") {
        let camel = convert_str(&input, "camel").unwrap();
        prop_assert!(camel.chars().all(|c| c.is_ascii_alphanumeric()));
        prop_assert!(!camel.starts_with(|c: char| c.is_ascii_uppercase()));
    }

    #[test]
    fn numbers_are_rejected_under_both_policies(n in any::<i64>()) {
        let lenient = CaseEngine::builder()
            .policy(InputPolicy::Lenient)
            .build()
            .unwrap();
        for style in STYLES {
            let is_invalid_input = matches!(
                convert(&json!(n), style),
                Err(CaseError::InvalidInputType { .. })
            );
            prop_assert!(is_invalid_input);
            let is_invalid_input = matches!(
                lenient.convert(&json!(n), style),
                Err(CaseError::InvalidInputType { .. })
            );
            prop_assert!(is_invalid_input);
        }
    }
}
