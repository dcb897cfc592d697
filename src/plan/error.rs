//! Error types for lesson-plan parsing
//!
//!     The taxonomy distinguishes the two paths: the lenient path only ever raises
//!     `EmptyInput` and `ExtractionFailed`; the strict storage path additionally
//!     raises `MissingRequiredFields` and `NoActivitiesFound`. None of these are
//!     retryable: the input is fixed once generated, so the caller's only decision
//!     is whether to roll back a speculatively created parent record.

use crate::plan::model::SectionKind;
use std::fmt;

/// Errors produced by the lesson-plan parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The raw text was empty or whitespace-only. Rejected before any extraction
    /// strategy runs.
    EmptyInput,
    /// No section-boundary strategy recognized any heading in the text.
    ExtractionFailed,
    /// One or more mandatory canonical sections ended up empty after extraction
    /// and classification (strict storage path only). Carries display names in
    /// canonical order.
    MissingRequiredFields { fields: Vec<String> },
    /// The Activities section extracted to zero activities (strict storage path
    /// only); kept distinct from `MissingRequiredFields`.
    NoActivitiesFound,
}

impl ParseError {
    pub(crate) fn missing_fields(kinds: &[SectionKind]) -> Self {
        ParseError::MissingRequiredFields {
            fields: kinds.iter().map(|k| k.display_name().to_string()).collect(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => {
                write!(f, "The generated lesson plan text is empty")
            }
            ParseError::ExtractionFailed => {
                write!(
                    f,
                    "No lesson plan sections could be recognized in the generated text"
                )
            }
            ParseError::MissingRequiredFields { fields } => {
                write!(
                    f,
                    "The generated lesson plan is missing required sections: {}",
                    fields.join(", ")
                )
            }
            ParseError::NoActivitiesFound => {
                write!(
                    f,
                    "No activities could be parsed from the Activities section"
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_names_display_names() {
        let err = ParseError::missing_fields(&[
            SectionKind::LearningObjectives,
            SectionKind::Close,
        ]);
        assert_eq!(
            err.to_string(),
            "The generated lesson plan is missing required sections: Learning Objectives, Close"
        );
    }

    #[test]
    fn error_kinds_are_distinguishable() {
        assert_ne!(
            ParseError::NoActivitiesFound,
            ParseError::MissingRequiredFields { fields: vec![] }
        );
    }
}
