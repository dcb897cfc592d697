//! Parse telemetry
//!
//!     Parsing used to log straight to the console, which made telemetry invisible
//!     to tests. Diagnostics now flow through an injectable observer: the pipeline
//!     reports which strategy won each stage, how every title classified, and what
//!     had to be synthesized. `NullTrace` drops everything, `RecordingTrace`
//!     collects events for assertions, `LogTrace` forwards to the `tracing`
//!     facade.

use crate::plan::model::{SectionKind, SectionType};

/// Observer for parse diagnostics. All methods have no-op defaults so
/// implementations only override what they care about.
pub trait ParseTrace {
    /// A section-extraction strategy produced the winning result.
    fn section_strategy_selected(&mut self, strategy: &str, sections: usize) {
        let _ = (strategy, sections);
    }

    /// A section title was classified.
    fn title_classified(&mut self, title: &str, result: &SectionType) {
        let _ = (title, result);
    }

    /// An activity-extraction strategy produced the winning result, or no
    /// strategy matched (`strategy` is `None`).
    fn activity_strategy_selected(&mut self, strategy: Option<&str>, activities: usize) {
        let _ = (strategy, activities);
    }

    /// A placeholder section was synthesized for a missing canonical kind.
    fn section_synthesized(&mut self, kind: SectionKind) {
        let _ = kind;
    }
}

/// Discards all telemetry. The default for the convenience entry points.
pub struct NullTrace;

impl ParseTrace for NullTrace {}

/// One recorded telemetry event.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    SectionStrategy { strategy: String, sections: usize },
    Classified { title: String, key: String },
    ActivityStrategy { strategy: Option<String>, activities: usize },
    Synthesized { kind: SectionKind },
}

/// Collects events in order, for test assertions on parse telemetry.
#[derive(Debug, Default)]
pub struct RecordingTrace {
    pub events: Vec<TraceEvent>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// The kinds synthesized during completion, in the order reported.
    pub fn synthesized(&self) -> Vec<SectionKind> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Synthesized { kind } => Some(*kind),
                _ => None,
            })
            .collect()
    }
}

impl ParseTrace for RecordingTrace {
    fn section_strategy_selected(&mut self, strategy: &str, sections: usize) {
        self.events.push(TraceEvent::SectionStrategy {
            strategy: strategy.to_string(),
            sections,
        });
    }

    fn title_classified(&mut self, title: &str, result: &SectionType) {
        self.events.push(TraceEvent::Classified {
            title: title.to_string(),
            key: result.key().to_string(),
        });
    }

    fn activity_strategy_selected(&mut self, strategy: Option<&str>, activities: usize) {
        self.events.push(TraceEvent::ActivityStrategy {
            strategy: strategy.map(str::to_string),
            activities,
        });
    }

    fn section_synthesized(&mut self, kind: SectionKind) {
        self.events.push(TraceEvent::Synthesized { kind });
    }
}

/// Forwards telemetry to the `tracing` facade at debug level.
pub struct LogTrace;

impl ParseTrace for LogTrace {
    fn section_strategy_selected(&mut self, strategy: &str, sections: usize) {
        tracing::debug!(strategy, sections, "section extraction strategy selected");
    }

    fn title_classified(&mut self, title: &str, result: &SectionType) {
        tracing::debug!(title, key = result.key(), "section title classified");
    }

    fn activity_strategy_selected(&mut self, strategy: Option<&str>, activities: usize) {
        tracing::debug!(?strategy, activities, "activity extraction strategy selected");
    }

    fn section_synthesized(&mut self, kind: SectionKind) {
        tracing::debug!(kind = kind.key(), "synthesized placeholder section");
    }
}
