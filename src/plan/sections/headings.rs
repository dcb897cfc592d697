//! Markdown-heading extraction strategy
//!
//!     The primary strategy, matching generator output that uses markdown headers
//!     such as "### 1. Learning Objectives" or "## Assessment Strategies (10
//!     minutes)". A heading is 1 to 4 leading `#` characters, optional "N."
//!     numbering, then title text. Five-hash lines never match (the hash run may
//!     not be followed by another `#`), and a 4-hash heading whose title begins
//!     with "Activity" is an activity boundary, not a section boundary: it must
//!     stay inside its parent block so the activity cascade can re-parse it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::plan::model::ExtractedSection;
use crate::plan::sections::{clean_title, content_items};

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(#{1,4})[ \t]*((?:\d+\.)?[ \t]*[^#\s].*?)[ \t\r]*$").unwrap());

pub fn extract(source: &str) -> Vec<ExtractedSection> {
    let boundaries: Vec<(usize, usize, String)> = HEADING
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let hashes = caps.get(1).map(|m| m.as_str().len()).unwrap_or(0);
            let raw_title = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            if is_activity_heading(hashes, raw_title) {
                return None;
            }
            let title = clean_title(raw_title);
            if title.is_empty() {
                return None;
            }
            Some((whole.start(), whole.end(), title))
        })
        .collect();

    let mut sections = Vec::with_capacity(boundaries.len());
    for (i, (start, line_end, title)) in boundaries.iter().enumerate() {
        let block_end = boundaries
            .get(i + 1)
            .map(|(next_start, _, _)| *next_start)
            .unwrap_or(source.len());
        let raw = &source[*line_end..block_end];
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

fn is_activity_heading(hashes: usize, raw_title: &str) -> bool {
    hashes == 4
        && raw_title
            .trim_start()
            .to_lowercase()
            .starts_with("activity")
}
