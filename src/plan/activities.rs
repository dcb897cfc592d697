//! Activity extraction
//!
//!     Decomposes the Activities section's raw markdown into discrete activities.
//!     Like section extraction, this is an ordered cascade of independent format
//!     strategies; the first one producing at least one activity wins and results
//!     are never merged across strategies:
//!
//!         1. explicit-steps    "#### Activity" headings with "##### Step" /
//!                              "N. **Step N**:" step markers
//!         2. numbered-steps    "#### Activity" headings with plain numbered lines
//!         3. bullet-list       top-level bold bullets with indented sub-bullets
//!         4. inline-numbered   "Activity N:" / "N. Capitalized" runs in plain text
//!
//!     Extraction never fails: when no format matches, the result is an empty list
//!     and callers treat that as "Activities present but unparseable". Only the
//!     strict storage path turns an empty list into an error.

pub mod bullets;
pub mod explicit_steps;
pub mod helpers;
pub mod inline_numbered;
pub mod numbered_steps;

use crate::plan::model::Activity;
use crate::plan::trace::ParseTrace;

type ActivityStrategy = fn(&str) -> Vec<Activity>;

/// Format strategies in cascade order. First non-empty result wins.
const STRATEGIES: &[(&str, ActivityStrategy)] = &[
    ("explicit-steps", explicit_steps::extract),
    ("numbered-steps", numbered_steps::extract),
    ("bullet-list", bullets::extract),
    ("inline-numbered", inline_numbered::extract),
];

/// Extract activities from the Activities section's raw markdown. Total: returns
/// an empty list when no strategy recognizes the format.
pub fn extract_activities(markdown: &str, trace: &mut dyn ParseTrace) -> Vec<Activity> {
    for (name, strategy) in STRATEGIES {
        let activities = strategy(markdown);
        if !activities.is_empty() {
            trace.activity_strategy_selected(Some(name), activities.len());
            return activities;
        }
    }
    trace.activity_strategy_selected(None, 0);
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::trace::{RecordingTrace, TraceEvent};

    #[test]
    fn unparseable_content_yields_empty_list() {
        let mut trace = RecordingTrace::new();
        let activities = extract_activities(
            "Students will work in groups to develop their skills.\n",
            &mut trace,
        );
        assert!(activities.is_empty());
        assert_eq!(
            trace.events,
            vec![TraceEvent::ActivityStrategy {
                strategy: None,
                activities: 0,
            }]
        );
    }

    #[test]
    fn winning_strategy_is_reported() {
        let mut trace = RecordingTrace::new();
        let markdown = "- **Activity 1: Warm-up** (5 minutes)\n  - Greet the class.\n";
        let activities = extract_activities(markdown, &mut trace);
        assert_eq!(activities.len(), 1);
        assert_eq!(
            trace.events,
            vec![TraceEvent::ActivityStrategy {
                strategy: Some("bullet-list".to_string()),
                activities: 1,
            }]
        );
    }
}
