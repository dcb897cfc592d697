//! Storage-bound output shapes
//!
//!     The storage schema appears in two forms in the surrounding system: one where
//!     activities are a structured list, and one where the whole Activities section
//!     is flattened back into a single markdown string field. Both shapes are
//!     supported; the six section fields are identical between them.

use serde::{Deserialize, Serialize};

use crate::plan::model::Activity;

/// One activity in the structured storage shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub activity_name: String,
    pub duration: String,
    pub steps: Vec<String>,
}

impl From<&Activity> for ActivityRecord {
    fn from(activity: &Activity) -> Self {
        ActivityRecord {
            activity_name: activity.title.clone(),
            duration: activity.duration.clone(),
            steps: activity.steps.clone(),
        }
    }
}

/// Strict-path output with a structured activities list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRecord {
    pub learning_objectives: String,
    pub materials_resources: String,
    pub introduction_hook: String,
    pub assessment_strategies: String,
    pub differentiation_strategies: String,
    pub close: String,
    pub activities: Vec<ActivityRecord>,
}

impl StorageRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// The alternate storage shape: activities flattened back into one markdown
    /// string field.
    pub fn flatten(&self) -> FlatRecord {
        FlatRecord {
            learning_objectives: self.learning_objectives.clone(),
            materials_resources: self.materials_resources.clone(),
            introduction_hook: self.introduction_hook.clone(),
            assessment_strategies: self.assessment_strategies.clone(),
            differentiation_strategies: self.differentiation_strategies.clone(),
            close: self.close.clone(),
            activities: flatten_activities(&self.activities),
        }
    }
}

/// Alternate storage shape with the Activities section as one markdown string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRecord {
    pub learning_objectives: String,
    pub materials_resources: String,
    pub introduction_hook: String,
    pub assessment_strategies: String,
    pub differentiation_strategies: String,
    pub close: String,
    pub activities: String,
}

impl FlatRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn flatten_activities(activities: &[ActivityRecord]) -> String {
    let blocks: Vec<String> = activities
        .iter()
        .enumerate()
        .map(|(index, activity)| {
            let mut block = if activity.duration.is_empty() {
                format!("### Activity {}: {}", index + 1, activity.activity_name)
            } else {
                format!(
                    "### Activity {}: {} ({})",
                    index + 1,
                    activity.activity_name,
                    activity.duration
                )
            };
            for step in &activity.steps {
                block.push_str("\n- ");
                block.push_str(step);
            }
            block
        })
        .collect();
    blocks.join("\n\n")
}
