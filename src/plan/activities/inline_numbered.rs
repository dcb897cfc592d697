//! Inline-numbered format
//!
//!     The loosest format: activities appear as plain-text runs introduced by
//!     "Activity N:" or "N. CapitalizedPhrase", with everything up to the next run
//!     as the body:
//!
//!         Activity 1: Warm-up (5 minutes). Greet the class. Pose a question.
//!         2. Brainstorm (10 minutes). Collect ideas on the board.
//!
//!     The title is the text before a parenthesis or colon, the duration comes from
//!     the "(N minutes)" parenthetical, and the body splits into steps on naive
//!     period-plus-whitespace boundaries. The naive split mis-handles abbreviations
//!     ("Dr. Smith") and decimals; that behavior is kept for compatibility with
//!     existing parsed records.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::plan::activities::helpers::parenthesized_duration;
use crate::plan::markdown;
use crate::plan::model::Activity;

static ACTIVITY_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^activity\s*\d+\s*:\s*").unwrap());
static NUMBERED_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+").unwrap());
static NUMBERED_CAPITALIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+[A-Z]").unwrap());
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s+").unwrap());

pub fn extract(markdown_text: &str) -> Vec<Activity> {
    let mut activities: Vec<Activity> = Vec::new();
    let mut body = String::new();

    for raw_line in markdown_text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = strip_run_label(line) {
            if let Some(activity) = activities.last_mut() {
                activity.steps = split_steps(&body);
            }
            body.clear();
            let (title, head_remainder) = split_head(rest);
            body.push_str(head_remainder);
            activities.push(Activity {
                title,
                duration: parenthesized_duration(rest).unwrap_or_default(),
                steps: Vec::new(),
            });
        } else if !activities.is_empty() {
            if !body.is_empty() {
                body.push(' ');
            }
            body.push_str(line);
        }
    }
    if let Some(activity) = activities.last_mut() {
        activity.steps = split_steps(&body);
    }
    activities
}

fn strip_run_label(line: &str) -> Option<&str> {
    if let Some(found) = ACTIVITY_LABEL.find(line) {
        return Some(&line[found.end()..]);
    }
    if NUMBERED_CAPITALIZED.is_match(line) {
        if let Some(found) = NUMBERED_LABEL.find(line) {
            return Some(&line[found.end()..]);
        }
    }
    None
}

/// Split a run head into (title, remainder-after-head). The title is the text
/// before the first parenthesis, colon or sentence end; the remainder starts
/// after the closing parenthesis or the punctuation mark.
fn split_head(rest: &str) -> (String, &str) {
    let cut = rest.find(['(', ':', '.']).unwrap_or(rest.len());
    let raw_title = &rest[..cut];
    let title = markdown::clean(raw_title);
    let title = if title.is_empty() {
        markdown::clean(rest)
            .split_whitespace()
            .take(6)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        title
    };

    let tail = &rest[cut..];
    let remainder = if tail.starts_with('(') {
        tail.find(')').map(|i| &tail[i + 1..]).unwrap_or("")
    } else if let Some(after_punct) = tail.strip_prefix([':', '.']) {
        after_punct
    } else {
        ""
    };
    (title, remainder)
}

/// Naive sentence split: period followed by whitespace. Multiple sentences become
/// one step each; a single sentence stays one step.
fn split_steps(body: &str) -> Vec<String> {
    let cleaned = markdown::clean(body);
    let cleaned = cleaned.trim_start_matches(['.', ',', ';', '-', ' ']).trim();
    if cleaned.is_empty() {
        return Vec::new();
    }
    let parts: Vec<&str> = SENTENCE_BOUNDARY
        .split(cleaned)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() > 1 {
        parts
            .into_iter()
            .map(|part| {
                if part.ends_with(['.', '!', '?']) {
                    part.to_string()
                } else {
                    format!("{part}.")
                }
            })
            .collect()
    } else {
        vec![cleaned.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_label_runs() {
        let markdown = "\
Activity 1: Warm-up (5 minutes). Greet the class. Pose an opening question.
Activity 2: Brainstorm (10 minutes). Collect ideas on the board.
";
        let activities = extract(markdown);
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].title, "Warm-up");
        assert_eq!(activities[0].duration, "5 minutes");
        assert_eq!(
            activities[0].steps,
            vec!["Greet the class.", "Pose an opening question."]
        );
        assert_eq!(
            activities[1].steps,
            vec!["Collect ideas on the board."]
        );
    }

    #[test]
    fn numbered_capitalized_runs() {
        let markdown = "1. Silent Reading (10 minutes). Read the assigned passage.\n2. Pair Share. Compare notes with a partner. Agree on one question.\n";
        let activities = extract(markdown);
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].title, "Silent Reading");
        assert_eq!(activities[1].title, "Pair Share");
        assert_eq!(activities[1].duration, "");
        assert_eq!(activities[1].steps.len(), 2);
    }

    #[test]
    fn body_continues_on_following_lines() {
        let markdown = "Activity 1: Debate: hold a structured debate.\nEach side gets two minutes.\n";
        let activities = extract(markdown);
        assert_eq!(activities[0].title, "Debate");
        assert_eq!(
            activities[0].steps,
            vec!["hold a structured debate.", "Each side gets two minutes."]
        );
    }

    #[test]
    fn naive_sentence_split_breaks_abbreviations() {
        // Known limitation, deliberately preserved: "Dr. Smith" splits mid-name.
        let markdown = "Activity 1: Guest Talk (10 minutes). Introduce Dr. Smith to the class.\n";
        let activities = extract(markdown);
        assert_eq!(
            activities[0].steps,
            vec!["Introduce Dr.", "Smith to the class."]
        );
    }

    #[test]
    fn lowercase_numbered_lines_are_not_runs() {
        assert!(extract("1. first idea\n2. second idea\n").is_empty());
    }
}
