//! Markdown cleaning for extracted text fragments
//!
//!     Extracted titles and steps may carry inline emphasis (`*`, `_`, backticks)
//!     and leading heading markers. Cleaning strips those without touching the
//!     semantic content. The operation is idempotent: cleaning already-clean text
//!     is a no-op, which lets callers clean defensively at every seam.

use once_cell::sync::Lazy;
use regex::Regex;

/// One or more leading heading-marker runs ("## ", possibly stacked after an
/// earlier strip exposed another run).
static HEADING_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:#{1,6}\s+)+").unwrap());

/// Remove emphasis markers and leading heading markers from a text fragment.
///
/// Emphasis characters are removed first so that markers hidden inside bold
/// wrapping (for example `**## Title**`) are fully cleaned in a single pass,
/// which is what makes the function idempotent.
pub fn clean(text: &str) -> String {
    let without_emphasis: String = text
        .chars()
        .filter(|c| !matches!(c, '*' | '_' | '`'))
        .collect();
    let trimmed = without_emphasis.trim();
    HEADING_PREFIX.replace(trimmed, "").trim().to_string()
}

/// Clean an optional fragment; absent input yields an empty string rather than
/// an error.
pub fn clean_opt(text: Option<&str>) -> String {
    text.map(clean).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_emphasis_and_headings() {
        assert_eq!(clean("**Learning Objectives**"), "Learning Objectives");
        assert_eq!(clean("### Materials"), "Materials");
        assert_eq!(clean("`code` and _underscore_"), "code and underscore");
    }

    #[test]
    fn strips_stacked_heading_runs() {
        assert_eq!(clean("  ## # Title"), "Title");
        assert_eq!(clean("**## Title**"), "Title");
    }

    #[test]
    fn leaves_mid_line_hashes_alone() {
        assert_eq!(clean("Grade 5 # advanced"), "Grade 5 # advanced");
    }

    #[test]
    fn is_idempotent() {
        for s in ["**bold**", "### # x", "plain", "", "   ", "#nospace"] {
            let once = clean(s);
            assert_eq!(clean(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn empty_and_absent_inputs() {
        assert_eq!(clean(""), "");
        assert_eq!(clean_opt(None), "");
        assert_eq!(clean_opt(Some(" **x** ")), "x");
    }
}
