//! Section title classification
//!
//!     Maps a free-text section title onto one of the seven canonical kinds by
//!     case-insensitive substring matching against a fixed keyword table. The table
//!     is tried in declaration order and the first matching kind wins, so the order
//!     below is part of the contract. Unmatched titles pass through lowercased;
//!     classification never fails.

use crate::plan::model::{SectionKind, SectionType};

/// Keyword lists per canonical kind, in canonical order.
/// Order matters: kinds are tried in declaration order for determinism.
const KEYWORDS: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::LearningObjectives,
        &["learning objectives", "objectives", "objective"],
    ),
    (
        SectionKind::MaterialsResources,
        &["materials", "resources"],
    ),
    (
        SectionKind::IntroductionHook,
        &["introduction", "hook"],
    ),
    (
        SectionKind::Activities,
        &["main activities", "learning activities", "activit"],
    ),
    (
        SectionKind::AssessmentStrategies,
        &["assessment", "evaluation"],
    ),
    (
        SectionKind::DifferentiationStrategies,
        &["differentiation", "differentiated"],
    ),
    (
        SectionKind::Close,
        &["closure", "closing", "close", "conclusion", "wrap-up", "wrap up"],
    ),
];

/// Classify a free-text title. Total and deterministic: canonical kind on a
/// keyword hit, lowercased pass-through otherwise.
pub fn classify_title(title: &str) -> SectionType {
    let normalized = title.trim().to_lowercase();
    for (kind, keywords) in KEYWORDS {
        if keywords.iter().any(|keyword| normalized.contains(keyword)) {
            return SectionType::Known(*kind);
        }
    }
    SectionType::Other(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_kind_wins() {
        // "Objectives of the Main Activities" contains keywords for two kinds;
        // table order decides.
        assert_eq!(
            classify_title("Objectives of the Main Activities"),
            SectionType::Known(SectionKind::LearningObjectives)
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            classify_title("ASSESSMENT STRATEGIES"),
            SectionType::Known(SectionKind::AssessmentStrategies)
        );
    }

    #[test]
    fn unmatched_titles_pass_through_lowercased() {
        assert_eq!(
            classify_title("Homework Ideas"),
            SectionType::Other("homework ideas".to_string())
        );
    }

    #[test]
    fn partial_stem_matches_activities() {
        assert_eq!(
            classify_title("Activity Overview"),
            SectionType::Known(SectionKind::Activities)
        );
    }
}
