//! End-to-end parse entry points
//!
//!     The pipeline is a pure function over the input string, invoked once per
//!     lesson-plan creation or reparse; there is no shared state between calls and
//!     no I/O. Two entry points share the extraction and classification stages and
//!     diverge only at validation:
//!
//!         parse             lenient: missing sections are synthesized
//!         parse_for_storage strict: missing fields and zero activities are fatal
//!
//!     The caller persists only after a successful strict parse; on failure it is
//!     responsible for compensating cleanup of any record it created speculatively.

use crate::plan::activities;
use crate::plan::classify;
use crate::plan::error::ParseError;
use crate::plan::model::{CanonicalSection, ParsedPlan, SectionKind, SectionType};
use crate::plan::output::StorageRecord;
use crate::plan::sections;
use crate::plan::trace::{NullTrace, ParseTrace};
use crate::plan::validate;

/// Lenient parse: all seven canonical sections are guaranteed present in the
/// result, with `synthesized` listing the ones that had to be fabricated.
pub fn parse(source: &str) -> Result<ParsedPlan, ParseError> {
    parse_with_trace(source, &mut NullTrace)
}

pub fn parse_with_trace(
    source: &str,
    trace: &mut dyn ParseTrace,
) -> Result<ParsedPlan, ParseError> {
    let classified = extract_and_classify(source, trace)?;
    let (sections, synthesized) = validate::complete_sections(classified, trace);
    Ok(ParsedPlan {
        sections,
        synthesized,
    })
}

/// Strict parse for the persistence path: fails rather than filling gaps.
pub fn parse_for_storage(source: &str) -> Result<StorageRecord, ParseError> {
    parse_for_storage_with_trace(source, &mut NullTrace)
}

pub fn parse_for_storage_with_trace(
    source: &str,
    trace: &mut dyn ParseTrace,
) -> Result<StorageRecord, ParseError> {
    let classified = extract_and_classify(source, trace)?;
    validate::validate_for_storage(&classified)
}

/// Shared front half of both paths: extract sections, classify titles, and run
/// the activity cascade on the Activities section.
fn extract_and_classify(
    source: &str,
    trace: &mut dyn ParseTrace,
) -> Result<Vec<CanonicalSection>, ParseError> {
    let extracted = sections::extract_sections(source, trace)?;
    let mut classified = Vec::with_capacity(extracted.len());
    for section in extracted {
        let kind = classify::classify_title(&section.title);
        trace.title_classified(&section.title, &kind);
        let activities = match kind {
            SectionType::Known(SectionKind::Activities) => Some(
                activities::extract_activities(&section.markdown_content, trace),
            ),
            _ => None,
        };
        let title = match &kind {
            SectionType::Known(known) => known.display_name().to_string(),
            SectionType::Other(_) => section.title.clone(),
        };
        classified.push(CanonicalSection {
            kind,
            title,
            content: section.content,
            markdown_content: section.markdown_content,
            activities,
        });
    }
    Ok(classified)
}
