//! Parser properties: determinism, totality, and field evidence.

use propsearch::{parse_query, ParsedQuery};
use proptest::prelude::*;

/// Words the parser reacts to, mixed with filler.
fn query_word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "under", "below", "max", "budget", "above", "min", "at", "least", "near", "in", "to",
            "with", "and", "for", "bhk", "bed", "bedroom", "parking", "park", "pool", "gym",
            "metro", "school", "hospital", "pet", "balcony", "the", "a", ",", ".",
        ])
        .prop_map(str::to_string),
        (1u32..500).prop_map(|n| n.to_string()),
        (1u32..200).prop_map(|n| format!("{}k", n)),
        prop::string::string_regex("[a-z]{2,8}").unwrap(),
    ]
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(query_word_strategy(), 0..12).prop_map(|words| words.join(" "))
}

proptest! {
    /// Property: parsing is deterministic.
    #[test]
    fn prop_parse_is_deterministic(text in query_strategy()) {
        prop_assert_eq!(parse_query(&text), parse_query(&text));
    }

    /// Property: parsing never panics on arbitrary input.
    #[test]
    fn prop_parse_is_total(text in any::<String>()) {
        let _ = parse_query(&text);
    }

    /// Property: letter case never changes the result.
    #[test]
    fn prop_parse_ignores_case(text in query_strategy()) {
        prop_assert_eq!(parse_query(&text.to_uppercase()), parse_query(&text));
    }

    /// Property: text without digits never yields prices or bedrooms.
    #[test]
    fn prop_no_digits_no_numbers(text in "[a-zA-Z ,.]{0,60}") {
        let parsed = parse_query(&text);
        prop_assert_eq!(parsed.max_price, None);
        prop_assert_eq!(parsed.min_price, None);
        prop_assert_eq!(parsed.bedrooms, None);
    }

    /// Property: a detected location is non-empty, trimmed and not a stop word.
    #[test]
    fn prop_location_is_meaningful(text in query_strategy()) {
        if let Some(location) = parse_query(&text).location {
            prop_assert!(!location.is_empty());
            prop_assert_eq!(location.trim(), location.as_str());
            let lower = location.to_lowercase();
            prop_assert!(!["the", "a", "an"].contains(&lower.as_str()));
        }
    }

    /// Property: "under N" always sets the max price to N.
    #[test]
    fn prop_under_sets_max_price(n in 1u64..10_000_000) {
        let parsed = parse_query(&format!("flat under {}", n));
        prop_assert_eq!(parsed.max_price, Some(n));
    }

    /// Property: "Nk" means N thousand.
    #[test]
    fn prop_k_suffix_multiplies(n in 1u64..10_000) {
        let parsed = parse_query(&format!("budget {}k", n));
        prop_assert_eq!(parsed.max_price, Some(n * 1000));
    }

    /// Property: "N bhk" always sets bedrooms to N.
    #[test]
    fn prop_bhk_sets_bedrooms(n in 0u32..20) {
        prop_assert_eq!(parse_query(&format!("{} bhk", n)).bedrooms, Some(n));
    }
}

#[test]
fn empty_text_is_unconstrained() {
    assert_eq!(parse_query(""), ParsedQuery::default());
}
