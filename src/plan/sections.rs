//! Section extraction
//!
//!     Splits the raw lesson-plan text into an ordered list of titled blocks. The
//!     input format is adversarial: different generations use markdown headings,
//!     bare capitalized title lines, or prose with "Title:" labels. Extraction is
//!     therefore an ordered table of independent strategies, each a pure
//!     `&str -> Vec<ExtractedSection>`, tried in fixed fallback order; the first
//!     strategy producing at least one section wins.
//!
//!     Strategy order (from most to least structured input):
//!         1. markdown-headings   "### 1. Learning Objectives" style
//!         2. heuristic-lines     bare capitalized / numbered / bolded title lines
//!         3. known-titles        "Learning Objectives:" labels inside prose
//!
//!     Empty input is rejected before any strategy runs; all strategies coming up
//!     empty is `ExtractionFailed`, which is fatal for the document.

pub mod headings;
pub mod heuristic;
pub mod known_titles;

use crate::plan::error::ParseError;
use crate::plan::markdown;
use crate::plan::model::ExtractedSection;
use crate::plan::trace::ParseTrace;
use once_cell::sync::Lazy;
use regex::Regex;

type SectionStrategy = fn(&str) -> Vec<ExtractedSection>;

/// Extraction strategies in fallback order. First non-empty result wins.
const STRATEGIES: &[(&str, SectionStrategy)] = &[
    ("markdown-headings", headings::extract),
    ("heuristic-lines", heuristic::extract),
    ("known-titles", known_titles::extract),
];

/// Split raw text into ordered titled blocks.
///
/// Fails with [`ParseError::EmptyInput`] for empty or whitespace-only input and
/// with [`ParseError::ExtractionFailed`] when no strategy recognizes a heading.
pub fn extract_sections(
    source: &str,
    trace: &mut dyn ParseTrace,
) -> Result<Vec<ExtractedSection>, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    for (name, strategy) in STRATEGIES {
        let sections = strategy(source);
        if !sections.is_empty() {
            trace.section_strategy_selected(name, sections.len());
            return Ok(sections);
        }
    }
    Err(ParseError::ExtractionFailed)
}

/// Content rule shared by all strategies: blocks whose raw text carries markdown
/// markers are kept as a single content item so later re-parsing sees the intact
/// structure; plain blocks split into trimmed non-empty lines.
pub(crate) fn content_items(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if has_markdown_markers(trimmed) {
        vec![trimmed.to_string()]
    } else {
        trimmed
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());
static TRAILING_DURATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(\s*\d+[^)]*\)\s*$").unwrap());

/// Title cleanup shared by the strategies: strip markup, leading "N." numbering,
/// a trailing colon and a trailing duration parenthetical like "(25 minutes)".
pub(crate) fn clean_title(raw: &str) -> String {
    let cleaned = markdown::clean(raw);
    let without_number = LEADING_NUMBER.replace(&cleaned, "");
    let without_colon = without_number.trim().trim_end_matches(':');
    TRAILING_DURATION
        .replace(without_colon, "")
        .trim()
        .to_string()
}

fn has_markdown_markers(text: &str) -> bool {
    text.contains("**")
        || text.contains('#')
        || text.contains('`')
        || text
            .lines()
            .any(|line| line.trim_start().starts_with("- "))
}
