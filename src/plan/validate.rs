//! Completeness validation
//!
//!     Two deliberately separate operations with categorically different failure
//!     semantics, kept as two named functions rather than one configurable one:
//!
//!     - [`complete_sections`] (lenient, display path): synthesizes a placeholder
//!       for every missing canonical kind and never fails, so downstream display
//!       code never checks for absence.
//!     - [`validate_for_storage`] (strict, persistence path): refuses to produce a
//!       record with empty mandatory fields or zero activities, so persisted data
//!       never silently contains synthesized filler.

use crate::plan::error::ParseError;
use crate::plan::model::{CanonicalSection, SectionKind, SectionType};
use crate::plan::output::{ActivityRecord, StorageRecord};
use crate::plan::trace::ParseTrace;

/// Guarantee all seven canonical kinds are present, synthesizing placeholders for
/// missing ones. Returns the completed list and the kinds that had to be
/// synthesized, in canonical order. Never fails.
pub fn complete_sections(
    mut sections: Vec<CanonicalSection>,
    trace: &mut dyn ParseTrace,
) -> (Vec<CanonicalSection>, Vec<SectionKind>) {
    let mut synthesized = Vec::new();
    for kind in SectionKind::ALL {
        let present = sections
            .iter()
            .any(|section| section.kind == SectionType::Known(kind));
        if !present {
            trace.section_synthesized(kind);
            sections.push(placeholder(kind));
            synthesized.push(kind);
        }
    }
    (sections, synthesized)
}

fn placeholder(kind: SectionKind) -> CanonicalSection {
    let line = format!(
        "No {} section was found in the generated lesson plan.",
        kind.display_name()
    );
    CanonicalSection {
        kind: SectionType::Known(kind),
        title: kind.display_name().to_string(),
        content: vec![line.clone()],
        markdown_content: line,
        activities: match kind {
            SectionKind::Activities => Some(Vec::new()),
            _ => None,
        },
    }
}

/// Strict storage-path validation. All canonical kinds except Activities are
/// mandatory and must be non-empty; a missing or unparseable Activities section is
/// its own error, distinct from missing fields.
pub fn validate_for_storage(sections: &[CanonicalSection]) -> Result<StorageRecord, ParseError> {
    let find = |kind: SectionKind| {
        sections
            .iter()
            .find(|section| section.kind == SectionType::Known(kind))
    };

    let missing: Vec<SectionKind> = SectionKind::ALL
        .into_iter()
        .filter(|kind| *kind != SectionKind::Activities)
        .filter(|kind| find(*kind).map_or(true, CanonicalSection::is_empty))
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::missing_fields(&missing));
    }

    let activities = find(SectionKind::Activities)
        .and_then(|section| section.activities.as_deref())
        .filter(|activities| !activities.is_empty())
        .ok_or(ParseError::NoActivitiesFound)?;

    let field = |kind: SectionKind| {
        find(kind)
            .map(|section| section.content.join("\n"))
            .unwrap_or_default()
    };
    Ok(StorageRecord {
        learning_objectives: field(SectionKind::LearningObjectives),
        materials_resources: field(SectionKind::MaterialsResources),
        introduction_hook: field(SectionKind::IntroductionHook),
        assessment_strategies: field(SectionKind::AssessmentStrategies),
        differentiation_strategies: field(SectionKind::DifferentiationStrategies),
        close: field(SectionKind::Close),
        activities: activities.iter().map(ActivityRecord::from).collect(),
    })
}
