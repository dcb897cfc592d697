//! Data model for parsed lesson plans
//!
//!     All model values are created fresh on every parse invocation; nothing is
//!     shared or mutated across calls. `ExtractedSection` carries byte offsets into
//!     the source document so the raw block text can always be recovered losslessly,
//!     mirroring how the rest of the pipeline keeps `markdown_content` untouched for
//!     re-parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven fixed lesson-plan categories.
///
/// Order is significant in two places: classification tries kinds in declaration
/// order (first keyword match wins), and completion appends synthesized sections in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    LearningObjectives,
    MaterialsResources,
    IntroductionHook,
    Activities,
    AssessmentStrategies,
    DifferentiationStrategies,
    Close,
}

impl SectionKind {
    /// All canonical kinds, in canonical order.
    pub const ALL: [SectionKind; 7] = [
        SectionKind::LearningObjectives,
        SectionKind::MaterialsResources,
        SectionKind::IntroductionHook,
        SectionKind::Activities,
        SectionKind::AssessmentStrategies,
        SectionKind::DifferentiationStrategies,
        SectionKind::Close,
    ];

    /// Stable storage key for this kind (matches the persistence schema).
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::LearningObjectives => "learning_objectives",
            SectionKind::MaterialsResources => "materials_resources",
            SectionKind::IntroductionHook => "introduction_hook",
            SectionKind::Activities => "activities",
            SectionKind::AssessmentStrategies => "assessment_strategies",
            SectionKind::DifferentiationStrategies => "differentiation_strategies",
            SectionKind::Close => "close",
        }
    }

    /// Human-readable display name, used for section titles and error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            SectionKind::LearningObjectives => "Learning Objectives",
            SectionKind::MaterialsResources => "Materials & Resources",
            SectionKind::IntroductionHook => "Introduction & Hook",
            SectionKind::Activities => "Activities",
            SectionKind::AssessmentStrategies => "Assessment Strategies",
            SectionKind::DifferentiationStrategies => "Differentiation Strategies",
            SectionKind::Close => "Close",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Result of classifying a free-text section title.
///
/// Classification is total: titles that match no keyword list pass through as
/// [`SectionType::Other`] with the lowercased original, never as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionType {
    Known(SectionKind),
    Other(String),
}

impl SectionType {
    /// The storage/lookup key: canonical key for known kinds, the lowercased
    /// original title otherwise.
    pub fn key(&self) -> &str {
        match self {
            SectionType::Known(kind) => kind.key(),
            SectionType::Other(title) => title,
        }
    }

    pub fn as_known(&self) -> Option<SectionKind> {
        match self {
            SectionType::Known(kind) => Some(*kind),
            SectionType::Other(_) => None,
        }
    }
}

/// A titled block of source text produced by section extraction, before
/// classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSection {
    /// Free-text heading as found in the source (cleaned of markup and numbering,
    /// not yet canonicalized).
    pub title: String,
    /// Content items for display. Blocks containing markdown markers are kept as a
    /// single item to avoid destroying structure; plain blocks are split into
    /// trimmed non-empty lines.
    pub content: Vec<String>,
    /// The untouched raw substring for this block, used for re-parsing activities
    /// and for lossless display.
    pub markdown_content: String,
    /// Byte offset of the block start in the source document.
    pub start_index: usize,
    /// Byte offset one past the block end (half-open); the last section ends at
    /// document length.
    pub end_index: usize,
}

/// A classified section carrying its canonical (or pass-through) type.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalSection {
    pub kind: SectionType,
    /// Display title.
    pub title: String,
    pub content: Vec<String>,
    pub markdown_content: String,
    /// Populated only for the Activities section; `Some(vec![])` means the section
    /// was present but none of the activity formats matched.
    pub activities: Option<Vec<Activity>>,
}

impl CanonicalSection {
    /// True when the section carries no usable content at all.
    pub fn is_empty(&self) -> bool {
        self.content.iter().all(|line| line.trim().is_empty())
            && self.markdown_content.trim().is_empty()
    }
}

/// A titled, timed sub-unit of the Activities section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Never empty after extraction; when no title pattern matches, the fallback is
    /// the first few words of the raw line.
    pub title: String,
    /// Normalized to the literal form "N minutes"; empty when no duration could be
    /// discovered.
    pub duration: String,
    /// Ordered instructional steps, markdown-stripped. Empty is permitted.
    pub steps: Vec<String>,
}

/// Result of the lenient parse path: all seven canonical sections are guaranteed
/// present, with `synthesized` recording which ones had to be fabricated.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPlan {
    pub sections: Vec<CanonicalSection>,
    pub synthesized: Vec<SectionKind>,
}

impl ParsedPlan {
    /// Look up a canonical section by kind.
    pub fn section(&self, kind: SectionKind) -> Option<&CanonicalSection> {
        self.sections
            .iter()
            .find(|s| s.kind == SectionType::Known(kind))
    }

    /// The parsed activities, if the Activities section carries any.
    pub fn activities(&self) -> &[Activity] {
        self.section(SectionKind::Activities)
            .and_then(|s| s.activities.as_deref())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_keys_are_stable() {
        assert_eq!(SectionKind::LearningObjectives.key(), "learning_objectives");
        assert_eq!(SectionKind::Close.key(), "close");
        assert_eq!(SectionKind::ALL.len(), 7);
    }

    #[test]
    fn section_type_key_passes_through() {
        let other = SectionType::Other("homework".to_string());
        assert_eq!(other.key(), "homework");
        assert_eq!(other.as_known(), None);
        assert_eq!(
            SectionType::Known(SectionKind::Activities).as_known(),
            Some(SectionKind::Activities)
        );
    }

    #[test]
    fn empty_section_detection() {
        let section = CanonicalSection {
            kind: SectionType::Known(SectionKind::Close),
            title: "Close".to_string(),
            content: vec!["   ".to_string()],
            markdown_content: String::new(),
            activities: None,
        };
        assert!(section.is_empty());
    }
}
