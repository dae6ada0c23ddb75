// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the propsearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `PROPSEARCH_THEME` if set, then `COLORFGBG`, then defaults to dark. Colors
//! are dropped entirely under `NO_COLOR` or when stdout is not a TTY, so piped
//! output stays plain.

use std::sync::OnceLock;

use propsearch::{Explanation, ParsedQuery, Property, RankingWeights, SearchResponse};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 78;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("PROPSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never under `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// Visible length, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to at most `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("├"),
        label_part,
        border(&format!("{}┤", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Final score, colored by strength.
pub fn score_value(score: f64) -> String {
    let text = format!("{:.4}", score);
    if score >= 0.75 {
        themed(BRIGHT_GREEN, &[BOLD], &text)
    } else if score >= 0.5 {
        themed(GREEN, &[], &text)
    } else if score >= 0.25 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// A boost component: highlighted when it contributed, dimmed when zero.
pub fn boost_value(value: f64) -> String {
    let text = format!("{:+.4}", value);
    if value > 0.0 {
        themed(GREEN, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Render a price with thousands separators.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| themed(GRAY, &[], "—"), |v| v.to_string())
}

fn flag(value: bool) -> String {
    if value {
        themed(GREEN, &[BOLD], "yes")
    } else {
        themed(GRAY, &[], "no")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SCREENS
// ═══════════════════════════════════════════════════════════════════════════

fn parsed_query_rows(parsed: &ParsedQuery) {
    let amenities = if parsed.amenities.is_empty() {
        themed(GRAY, &[], "—")
    } else {
        parsed
            .amenities
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    row(&format!(" Location   {}", optional(parsed.location.as_deref())));
    row(&format!(" Max price  {}", optional(parsed.max_price.map(format_price))));
    row(&format!(" Min price  {}", optional(parsed.min_price.map(format_price))));
    row(&format!(" Bedrooms   {}", optional(parsed.bedrooms)));
    row(&format!(" Amenities  {}", amenities));
    row(&format!(
        " Nearby     school {}  hospital {}  transit {}",
        flag(parsed.prefer_nearby_school),
        flag(parsed.prefer_nearby_hospital),
        flag(parsed.prefer_nearby_transit)
    ));
}

pub fn print_parsed_query(query_text: &str, parsed: &ParsedQuery) {
    section_top("QUERY");
    row(&format!(" {}", truncate(query_text, BOX_WIDTH - 2)));
    section_mid("PARSED");
    parsed_query_rows(parsed);
    section_bot();
}

fn explanation_row(explanation: &Explanation) {
    row(&format!(
        "   sim {:.4}  loc {}  amen {}  price {}  bed {}  near {}",
        explanation.semantic_similarity,
        boost_value(explanation.location_boost),
        boost_value(explanation.amenity_match),
        boost_value(explanation.price_match),
        boost_value(explanation.bedroom_match),
        boost_value(explanation.nearby_bonus),
    ));
}

fn property_row(property: &Property) {
    let summary = format!(
        "{} · {} bd · {} · {}",
        property.neighborhood,
        property.bedrooms,
        format_price(property.price),
        property.address
    );
    row(&format!("   {}", themed(GRAY, &[], &truncate(&summary, BOX_WIDTH - 4))));
}

pub fn print_results(query_text: &str, response: &SearchResponse) {
    print_parsed_query(query_text, &response.parsed_query);

    section_top(&format!("RESULTS ({})", response.results.len()));
    if response.results.is_empty() {
        row(&themed(GRAY, &[], " No listings matched the constraints."));
    }
    for (position, result) in response.results.iter().enumerate() {
        if position > 0 {
            row("");
        }
        let head = format!(
            " {:>2}. {}  {}",
            position + 1,
            score_value(result.score),
            truncate(&result.title, BOX_WIDTH - 18)
        );
        row(&head);
        property_row(&result.metadata);
        explanation_row(&result.explanation);
    }
    section_bot();
}

pub fn print_check(property_count: usize, weights: &RankingWeights) {
    section_top("CATALOG");
    row(&format!(" {} properties, all valid", property_count));
    section_mid("WEIGHTS");
    row(&format!(
        " semantic {:.2}  location {:.2}  amenity {:.2}  price {:.2}  bedroom {:.2}",
        weights.semantic, weights.location, weights.amenity, weights.price, weights.bedroom
    ));
    row(&format!(
        " school +{:.2} ≤{}m  hospital +{:.2} <{}m  transit +{:.2} <{}m",
        weights.school_bonus,
        weights.school_radius_m,
        weights.hospital_bonus,
        weights.hospital_radius_m,
        weights.transit_bonus,
        weights.transit_radius_m
    ));
    section_bot();
}
