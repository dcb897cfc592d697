//! Explicit-step heading format
//!
//!     The most structured activity format:
//!
//!         #### Activity 1: Title (15 minutes)
//!         ##### Duration: 15 minutes
//!         ##### Step 1: Hand out the worksheet
//!         Additional lines accumulate into the open step.
//!         1. **Step 1**: Or steps arrive fully formed on one numbered line.
//!
//!     A "#### Activity" heading bounds each activity; a "##### Duration:" heading
//!     overrides the duration taken from the activity heading; a "##### Step"
//!     heading opens a step whose body accumulates subsequent non-heading lines.
//!     This strategy only applies when explicit step markers are present at all;
//!     otherwise headings with plain numbered lines belong to the numbered-steps
//!     strategy.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::plan::activities::helpers::{extract_duration, extract_title};
use crate::plan::markdown;
use crate::plan::model::Activity;

static ACTIVITY_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^####\s*activity\b").unwrap());
static STEP_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#####\s*step\s*\d*\s*:?\s*(.*)$").unwrap());
static DURATION_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#####\s*duration\b").unwrap());
static NUMBERED_BOLD_STEP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\d+\.\s*\*\*\s*step\s*\d+\s*\*\*\s*:?\s*(.+)$").unwrap());

pub fn extract(markdown_text: &str) -> Vec<Activity> {
    if !has_step_markers(markdown_text) {
        return Vec::new();
    }

    let mut activities: Vec<Activity> = Vec::new();
    let mut current: Option<Activity> = None;
    let mut open_step: Option<String> = None;

    for raw_line in markdown_text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if ACTIVITY_HEADING.is_match(line) {
            close_step(&mut current, &mut open_step);
            if let Some(done) = current.take() {
                activities.push(done);
            }
            current = Some(Activity {
                title: extract_title(line),
                duration: extract_duration(line).unwrap_or_default(),
                steps: Vec::new(),
            });
        } else if DURATION_HEADING.is_match(line) {
            close_step(&mut current, &mut open_step);
            if let (Some(activity), Some(duration)) = (current.as_mut(), extract_duration(line)) {
                activity.duration = duration;
            }
        } else if let Some(caps) = STEP_HEADING.captures(line) {
            close_step(&mut current, &mut open_step);
            if current.is_some() {
                open_step = Some(markdown::clean(&caps[1]));
            }
        } else if let Some(caps) = NUMBERED_BOLD_STEP.captures(line) {
            close_step(&mut current, &mut open_step);
            if let Some(activity) = current.as_mut() {
                activity.steps.push(markdown::clean(&caps[1]));
            }
        } else if line.starts_with('#') {
            // Unrelated heading ends the open step body.
            close_step(&mut current, &mut open_step);
        } else if let Some(step) = open_step.as_mut() {
            let cleaned = markdown::clean(line);
            if !cleaned.is_empty() {
                if step.is_empty() {
                    *step = cleaned;
                } else {
                    step.push(' ');
                    step.push_str(&cleaned);
                }
            }
        }
    }
    close_step(&mut current, &mut open_step);
    if let Some(done) = current.take() {
        activities.push(done);
    }
    activities
}

fn has_step_markers(text: &str) -> bool {
    text.lines().any(|line| {
        let line = line.trim();
        STEP_HEADING.is_match(line) || NUMBERED_BOLD_STEP.is_match(line)
    })
}

fn close_step(current: &mut Option<Activity>, open_step: &mut Option<String>) {
    if let Some(step) = open_step.take() {
        let step = step.trim().to_string();
        if let Some(activity) = current.as_mut() {
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
    fn numbered_bold_steps_on_one_line() {
        let markdown = "\
#### Activity 1: Introduction to Topic (15 minutes)
##### Duration: 15 minutes
1. **Step 1**: Introduce the topic to the class.
2. **Step 2**: Show an example on the board.
3. **Step 3**: Answer initial questions.
";
        let activities = extract(markdown);
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].title, "Introduction to Topic");
        assert_eq!(activities[0].duration, "15 minutes");
        assert_eq!(
            activities[0].steps,
            vec![
                "Introduce the topic to the class.",
                "Show an example on the board.",
                "Answer initial questions.",
            ]
        );
    }

    #[test]
    fn step_headings_accumulate_body_lines() {
        let markdown = "\
#### Activity 1: Stations (20 minutes)
##### Step 1: Set up
Arrange desks into three stations.
Place one prompt card at each station.
##### Step 2: Rotate
Groups rotate every five minutes.
";
        let activities = extract(markdown);
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].steps.len(), 2);
        assert_eq!(
            activities[0].steps[0],
            "Set up Arrange desks into three stations. Place one prompt card at each station."
        );
    }

    #[test]
    fn duration_heading_overrides_heading_parenthetical() {
        let markdown = "\
#### Activity 1: Warm-up (5 minutes)
##### Duration: 10 minutes
##### Step 1: Begin
";
        let activities = extract(markdown);
        assert_eq!(activities[0].duration, "10 minutes");
    }

    #[test]
    fn requires_explicit_step_markers() {
        let markdown = "\
#### Activity 1: Warm-up (5 minutes)
1. Greet the class.
2. Pose the opening question.
";
        assert!(extract(markdown).is_empty());
    }
}
