//! Shared title and duration extraction
//!
//!     Both helpers are total: they return a best-effort value or nothing, never an
//!     error. Durations are always normalized to the literal form "N minutes"
//!     regardless of how the source spelled the unit.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::plan::markdown;

/// "**Activity N: Title**", capturing up to the first "(" or closing bold.
static BOLD_ACTIVITY_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\*\*\s*activity\s*\d*\s*:?\s*([^(*]+)").unwrap());
/// Bare "**Title**".
static BOLD_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*(]+)").unwrap());
/// "#### Activity N: Title" heading, capturing up to the first "(".
static HEADING_ACTIVITY_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#{3,5}\s*activity\s*\d*\s*:?\s*([^(\n]+)").unwrap());

/// "Duration: N min..." label, tolerating bold markers around the label.
static DURATION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)duration\D{0,10}?(\d+)").unwrap());
/// "(N minutes)"-style parenthetical; accepts min/mins/minute/minutes.
static DURATION_PARENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(\s*(\d+)\s*min[a-z]*\.?\s*\)").unwrap());
/// Last resort: any digit run. Misreads unrelated numbers ("Grade 5") as a
/// duration; inherited behavior, kept for compatibility with existing records.
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Extract an activity title from a line. Patterns are tried in order: labelled
/// bold, bare bold, then the heading form, so incidental bold inside a heading
/// line wins over the heading's own text. Never returns an empty string for a
/// non-blank line: the last fallback is the first few words of the line itself.
pub fn extract_title(line: &str) -> String {
    for pattern in [&BOLD_ACTIVITY_TITLE, &BOLD_TITLE, &HEADING_ACTIVITY_TITLE] {
        if let Some(caps) = pattern.captures(line) {
            let title = markdown::clean(&caps[1]);
            let title = title.trim_end_matches(':').trim();
            if !title.is_empty() {
                return title.to_string();
            }
        }
    }
    let before_paren = line.split('(').next().unwrap_or(line);
    let cleaned = markdown::clean(before_paren);
    let cleaned = cleaned.trim_end_matches(':').trim();
    if !cleaned.is_empty() {
        return first_words(cleaned, 6);
    }
    first_words(&markdown::clean(line), 6)
}

/// Extract a duration from text, normalized to "N minutes". Tried in order:
/// explicit "Duration:" label, "(N minutes)" parenthetical, then any bare digit
/// run. Absent when the text has no digits.
pub fn extract_duration(text: &str) -> Option<String> {
    for pattern in [&DURATION_LABEL, &DURATION_PARENS, &DIGIT_RUN] {
        if let Some(caps) = pattern.captures(text) {
            let digits = caps.get(caps.len() - 1)?.as_str();
            return Some(format!("{} minutes", digits));
        }
    }
    None
}

/// Duration from a "(N minutes)"-style parenthetical only, normalized to
/// "N minutes". Used where the digit fallback would misfire on run numbering.
pub fn parenthesized_duration(text: &str) -> Option<String> {
    DURATION_PARENS
        .captures(text)
        .map(|caps| format!("{} minutes", &caps[1]))
}

fn first_words(text: &str, count: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().take(count).collect();
    if words.is_empty() {
        "Activity".to_string()
    } else {
        words.join(" ")
    }
}
