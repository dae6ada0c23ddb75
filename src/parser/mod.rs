// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query understanding: free text in, structured intent out.
//!
//! Every rule is an independent regex or substring check targeting its own
//! field of `ParsedQuery`, so rule order never changes the result. The parser
//! is total. Text that matches nothing yields `ParsedQuery::default()`.
//!
//! # Rules
//!
//! | Field         | Trigger                                                     |
//! |---------------|-------------------------------------------------------------|
//! | `max_price`   | `under` / `less than` / `max` / `budget` / `below` + number |
//! | `min_price`   | `above` / `more than` / `min` / `at least` + number         |
//! | `bedrooms`    | number + `bhk` / `bed` / `bedroom`                          |
//! | `amenities`   | any synonym from [`keywords::AMENITY_KEYWORDS`]             |
//! | `prefer_*`    | any synonym from the preference keyword lists               |
//! | `location`    | `near` / `in` / `at` / `to` + words, up to a boundary token |
//!
//! Prices see `40k` as `40000`. Bedrooms and location read the plain
//! lowercased text.

pub mod keywords;

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ParsedQuery;
use keywords::{
    contains_any, AMENITY_KEYWORDS, HOSPITAL_KEYWORDS, LOCATION_STOP_WORDS, SCHOOL_KEYWORDS,
    TRANSIT_KEYWORDS,
};

static THOUSANDS_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)k").expect("valid thousands regex"));

static MAX_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:under|less than|max|budget|below)\s+([0-9]+)").expect("valid max price regex")
});

static MIN_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:above|more than|min|at least)\s+([0-9]+)").expect("valid min price regex")
});

static BEDROOMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*(?:bhk|bed|bedroom)").expect("valid bedrooms regex")
});

static LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:near|in|at|to)\s+([a-z\s]+?)(?:\s+(?:and|with|for|under|below|max|min|budget)|\.|,|$)",
    )
    .expect("valid location regex")
});

/// Extract structured search intent from free text.
///
/// Never fails. Empty or unrecognizable input gives the all-absent default.
///
/// # Example
///
/// ```
/// use propsearch::{parse_query, Amenity};
///
/// let parsed = parse_query("2BHK under 40k near Pine Street with parking");
/// assert_eq!(parsed.bedrooms, Some(2));
/// assert_eq!(parsed.max_price, Some(40_000));
/// assert_eq!(parsed.location.as_deref(), Some("Pine Street"));
/// assert!(parsed.amenities.contains(&Amenity::Parking));
/// ```
pub fn parse_query(text: &str) -> ParsedQuery {
    let lower = text.to_lowercase();
    let prices = expand_thousands(&lower);

    let parsed = ParsedQuery {
        location: extract_location(&lower),
        max_price: capture_number(&MAX_PRICE, &prices),
        min_price: capture_number(&MIN_PRICE, &prices),
        bedrooms: capture_number(&BEDROOMS, &lower),
        amenities: AMENITY_KEYWORDS
            .iter()
            .filter(|(_, synonyms)| contains_any(&lower, synonyms))
            .map(|(amenity, _)| *amenity)
            .collect(),
        prefer_nearby_school: contains_any(&lower, SCHOOL_KEYWORDS),
        prefer_nearby_hospital: contains_any(&lower, HOSPITAL_KEYWORDS),
        prefer_nearby_transit: contains_any(&lower, TRANSIT_KEYWORDS),
    };

    tracing::debug!(query = text, ?parsed, "parsed query");
    parsed
}

/// Rewrite `40k` as `40000` everywhere in the text.
pub fn expand_thousands(text: &str) -> String {
    THOUSANDS_SUFFIX.replace_all(text, "${1}000").into_owned()
}

/// First capture group of the first match, parsed as a number.
///
/// Numbers too large for the target type count as "not found".
fn capture_number<T: std::str::FromStr>(pattern: &Regex, text: &str) -> Option<T> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn extract_location(lower: &str) -> Option<String> {
    let caps = LOCATION.captures(lower)?;
    let phrase = caps.get(1)?.as_str().trim();

    if phrase.is_empty() || LOCATION_STOP_WORDS.contains(&phrase) {
        return None;
    }
    Some(title_case(phrase))
}

/// Capitalize the first letter of every word, keeping the spacing as-is.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
