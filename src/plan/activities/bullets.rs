//! Bullet-list format
//!
//!     Activities arrive as top-level bold bullets with indented sub-bullets as
//!     steps:
//!
//!         - **Activity 1: Understanding Arguments** (10 minutes)
//!           - Review the structure of an argument with the class.
//!           - Identify claims and evidence in two sample passages.
//!
//!     A top-level bullet opens an activity when it carries bold markup and either
//!     the word "Activity" or a "**Title** (duration" pattern. Indented bullets
//!     attach to the most recently opened activity; anything else is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::plan::activities::helpers::{extract_duration, extract_title};
use crate::plan::markdown;
use crate::plan::model::Activity;

static TOP_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-\s+(.+)$").unwrap());
static STEP_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s{2,}-\s+(.+)$").unwrap());
static BOLD_TITLE_WITH_DURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*[^*]+\*\*\s*\(").unwrap());

pub fn extract(markdown_text: &str) -> Vec<Activity> {
    let mut activities: Vec<Activity> = Vec::new();

    for raw_line in markdown_text.lines() {
        let line = raw_line.trim_end();
        if let Some(caps) = STEP_BULLET.captures(line) {
            if let Some(activity) = activities.last_mut() {
                let step = markdown::clean(&caps[1]);
                if !step.is_empty() {
                    activity.steps.push(step);
                }
            }
        } else if let Some(caps) = TOP_BULLET.captures(line) {
            let body = &caps[1];
            if is_activity_bullet(body) {
                activities.push(Activity {
                    title: extract_title(body),
                    duration: extract_duration(body).unwrap_or_default(),
                    steps: Vec::new(),
                });
            }
        }
    }
    activities
}

fn is_activity_bullet(body: &str) -> bool {
    body.contains("**")
        && (body.to_lowercase().contains("activity") || BOLD_TITLE_WITH_DURATION.is_match(body))
}
