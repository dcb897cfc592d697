//! Numbered-steps-under-heading format
//!
//!     Same "#### Activity" boundaries as the explicit-step format, but the step
//!     content carries no "##### Step" markers: every non-Duration line under the
//!     heading is collected and the block is re-parsed one step per "N." line,
//!     with an optional bolded "**Step N**:" label stripped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::plan::activities::helpers::{extract_duration, extract_title};
use crate::plan::markdown;
use crate::plan::model::Activity;

static ACTIVITY_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^####\s*activity\b").unwrap());
static DURATION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:#{1,6}\s*)?\**\s*duration\b").unwrap());
static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\d+\.\s*(?:\*\*\s*step\s*\d+\s*\*\*\s*:?\s*)?(.+)$").unwrap()
});

pub fn extract(markdown_text: &str) -> Vec<Activity> {
    let mut activities: Vec<Activity> = Vec::new();
    let mut block: Vec<String> = Vec::new();

    for raw_line in markdown_text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if ACTIVITY_HEADING.is_match(line) {
            if let Some(activity) = activities.last_mut() {
                apply_block(activity, &block);
            }
            block.clear();
            activities.push(Activity {
                title: extract_title(line),
                duration: extract_duration(line).unwrap_or_default(),
                steps: Vec::new(),
            });
        } else if !activities.is_empty() {
            block.push(line.to_string());
        }
    }
    if let Some(activity) = activities.last_mut() {
        apply_block(activity, &block);
    }
    activities
}

fn apply_block(activity: &mut Activity, block: &[String]) {
    for line in block {
        if DURATION_LINE.is_match(line) {
            if let Some(duration) = extract_duration(line) {
                activity.duration = duration;
            }
        } else if let Some(caps) = NUMBERED_LINE.captures(line) {
            let step = markdown::clean(&caps[1]);
            if !step.is_empty() {
                activity.steps.push(step);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbered_lines_become_steps() {
        let markdown = "\
#### Activity 1: Warm-up (5 minutes)
1. Greet the class.
2. Pose the opening question.

#### Activity 2: Practice (10 minutes)
Duration: 10 minutes
1. **Step 1**: Hand out the worksheet.
2. Work through the first item together.
";
        let activities = extract(markdown);
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].title, "Warm-up");
        assert_eq!(
            activities[0].steps,
            vec!["Greet the class.", "Pose the opening question."]
        );
        assert_eq!(
            activities[1].steps,
            vec![
                "Hand out the worksheet.",
                "Work through the first item together."
            ]
        );
    }

    #[test]
    fn duration_lines_are_not_steps() {
        let markdown = "\
#### Activity 1: Review
**Duration**: 8 minutes
1. Revisit yesterday's claims.
";
        let activities = extract(markdown);
        assert_eq!(activities[0].duration, "8 minutes");
        assert_eq!(activities[0].steps, vec!["Revisit yesterday's claims."]);
    }

    #[test]
    fn no_activity_headings_means_no_match() {
        assert!(extract("1. First point.\n2. Second point.\n").is_empty());
    }
}
