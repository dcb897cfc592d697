//! Known-title lookup extraction strategy
//!
//!     Last resort for prose-like output: scan for "Title:" or "Title (...):"
//!     occurrences of a fixed list of common section names, using the other known
//!     titles as stop conditions. Longer names come before their prefixes in the
//!     alternation ("Main Activities" before "Activities", "Closure" before
//!     "Close") so the leftmost match picks the most specific name.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::plan::model::ExtractedSection;
use crate::plan::sections::content_items;

/// Common section names, most specific first.
const KNOWN_TITLES: &[&str] = &[
    "Learning Objectives",
    "Materials and Resources",
    "Introduction/Hook",
    "Main Activities",
    "Activities",
    "Assessment Strategies",
    "Differentiation Strategies",
    "Closure",
    "Close",
];

static TITLE_LABEL: Lazy<Regex> = Lazy::new(|| {
    let names = KNOWN_TITLES
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)({names})\s*(?:\([^)]*\))?\s*:")).unwrap()
});

pub fn extract(source: &str) -> Vec<ExtractedSection> {
    let labels: Vec<(usize, usize, String)> = TITLE_LABEL
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str().to_string();
            Some((whole.start(), whole.end(), name))
        })
        .collect();

    let mut sections = Vec::with_capacity(labels.len());
    for (i, (start, label_end, title)) in labels.iter().enumerate() {
        let block_end = labels
            .get(i + 1)
            .map(|(next_start, _, _)| *next_start)
            .unwrap_or(source.len());
        let raw = &source[*label_end..block_end];
        sections.push(ExtractedSection {
            title: title.clone(),
            content: content_items(raw),
            markdown_content: raw.to_string(),
            start_index: *start,
            end_index: block_end,
        });
    }
    sections
}
