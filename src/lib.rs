//! # plan-parser
//!
//! A parser for free-text lesson plans.
//!
//! Lesson-plan text arrives as a single unstructured block produced by an external
//! text generator. It loosely follows a seven-part convention (objectives, materials,
//! introduction, activities, assessment, differentiation, closing) but guarantees no
//! delimiter syntax: heading styles, numbering schemes, bullet markers and duration
//! annotations all vary between documents. This crate decomposes that text into the
//! seven canonical sections and, within the Activities section, into structured
//! activities (title, duration, ordered steps), degrading gracefully instead of
//! failing outright.
//!
//! Two consumption paths exist with deliberately different failure semantics:
//!
//! - the lenient path ([`parse`](plan::pipeline::parse)) synthesizes placeholder
//!   sections for anything missing, so display code never checks for absence;
//! - the strict path ([`parse_for_storage`](plan::pipeline::parse_for_storage))
//!   refuses to produce a record with empty mandatory fields or zero activities,
//!   so persisted data never contains synthesized filler.
//!
//! For testing guidelines, see the [testing module](plan::testing). Parser tests
//! use the curated sample texts there rather than ad-hoc strings.

pub mod plan;

pub use plan::error::ParseError;
pub use plan::model::{Activity, CanonicalSection, ExtractedSection, ParsedPlan, SectionKind, SectionType};
pub use plan::output::{ActivityRecord, FlatRecord, StorageRecord};
pub use plan::pipeline::{parse, parse_for_storage, parse_for_storage_with_trace, parse_with_trace};
pub use plan::trace::{LogTrace, NullTrace, ParseTrace, RecordingTrace, TraceEvent};
