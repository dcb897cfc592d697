//! Heuristic line-based extraction strategy
//!
//!     Fallback for output with no markdown headings at all. A line opens a new
//!     section when it looks like a title: a short capitalized phrase (optionally
//!     with a duration parenthetical and a trailing colon), a "N. Capitalized"
//!     line, or a line fully wrapped in bold markers. Everything between one
//!     recognized title and the next accumulates as that section's content,
//!     trimmed, with blank lines skipped. Text before the first recognized title
//!     is preamble and is dropped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::plan::model::ExtractedSection;
use crate::plan::sections::{clean_title, content_items};

/// Capitalized phrase, optional "(N minutes)", trailing colon.
static TITLE_WITH_COLON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Za-z&/'\- ]{1,60}(?:\(\s*\d+[^)]*\))?\s*:$").unwrap()
});
/// Capitalized phrase alone on its line.
static TITLE_ALONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z&/'\- ]{2,48}$").unwrap());
/// "N. " followed by a capital letter.
static TITLE_NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+[A-Z]").unwrap());
/// Line fully wrapped in bold markers, optional trailing colon.
static TITLE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*[^*]+\*\*:?$").unwrap());

/// Bare capitalized phrases are only titles when they are short; full sentences
/// tend to run longer than this.
const MAX_TITLE_WORDS: usize = 5;

pub fn extract(source: &str) -> Vec<ExtractedSection> {
    let mut boundaries: Vec<(usize, usize, String)> = Vec::new();

    let mut offset = 0;
    for raw_line in source.split_inclusive('\n') {
        let line = raw_line.trim_end_matches(['\n', '\r']);
        let trimmed = line.trim();
        if is_title_line(trimmed) {
            boundaries.push((offset, offset + raw_line.len(), clean_title(trimmed)));
        }
        offset += raw_line.len();
    }

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

fn is_title_line(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }
    if TITLE_WITH_COLON.is_match(line) || TITLE_NUMBERED.is_match(line) || TITLE_BOLD.is_match(line)
    {
        return true;
    }
    TITLE_ALONE.is_match(line) && line.split_whitespace().count() <= MAX_TITLE_WORDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colon_titles_open_sections() {
        let source = "Learning Objectives:\nUnderstand argument structure.\n\nMaterials and Resources:\nWhiteboard and markers.\n";
        let sections = extract(source);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Learning Objectives");
        assert_eq!(sections[0].content, vec!["Understand argument structure."]);
    }

    #[test]
    fn bare_capitalized_phrases_open_sections() {
        let source = "Assessment Strategies\nExit ticket with two questions.\n";
        let sections = extract(source);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Assessment Strategies");
    }

    #[test]
    fn long_sentences_are_content_not_titles() {
        let source = "Closure:\nStudents summarize what they learned about counterarguments today.\n";
        let sections = extract(source);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content.len(), 1);
    }

    #[test]
    fn bold_wrapped_lines_open_sections() {
        let source = "**Differentiation Strategies**:\nProvide sentence starters.\n";
        let sections = extract(source);
        assert_eq!(sections[0].title, "Differentiation Strategies");
    }

    #[test]
    fn numbered_capitalized_lines_open_sections() {
        let source = "1. Learning Objectives\nname the parts of an argument\n";
        let sections = extract(source);
        assert_eq!(sections[0].title, "Learning Objectives");
    }

    #[test]
    fn preamble_before_first_title_is_dropped() {
        let source = "here is your lesson plan\n\nClosure:\nRecap the lesson.\n";
        let sections = extract(source);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Closure");
    }
}
