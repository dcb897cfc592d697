//! Classification contract tests
//!
//! Any title containing one of a kind's keywords (case-insensitively) must map to
//! that kind; titles with no matching keyword must pass through lowercased and
//! unchanged. Classification never fails.

use plan_parser::plan::classify::classify_title;
use plan_parser::{SectionKind, SectionType};
use rstest::rstest;

#[rstest]
#[case("Learning Objectives", SectionKind::LearningObjectives)]
#[case("1. LEARNING OBJECTIVES", SectionKind::LearningObjectives)]
#[case("Objectives for Today", SectionKind::LearningObjectives)]
#[case("Materials and Resources", SectionKind::MaterialsResources)]
#[case("Required Materials", SectionKind::MaterialsResources)]
#[case("Resources Needed", SectionKind::MaterialsResources)]
#[case("Introduction and Hook", SectionKind::IntroductionHook)]
#[case("Introduction/Hook", SectionKind::IntroductionHook)]
#[case("The Hook", SectionKind::IntroductionHook)]
#[case("Main Activities", SectionKind::Activities)]
#[case("Learning Activities", SectionKind::Activities)]
#[case("Activities", SectionKind::Activities)]
#[case("Activity Stations", SectionKind::Activities)]
#[case("Assessment Strategies", SectionKind::AssessmentStrategies)]
#[case("Assessment", SectionKind::AssessmentStrategies)]
#[case("Evaluation Methods", SectionKind::AssessmentStrategies)]
#[case("Differentiation Strategies", SectionKind::DifferentiationStrategies)]
#[case("Differentiation", SectionKind::DifferentiationStrategies)]
#[case("Closure", SectionKind::Close)]
#[case("Close", SectionKind::Close)]
#[case("Closing Thoughts", SectionKind::Close)]
#[case("Conclusion", SectionKind::Close)]
fn keyword_titles_map_to_their_kind(#[case] title: &str, #[case] expected: SectionKind) {
    assert_eq!(classify_title(title), SectionType::Known(expected));
}

#[rstest]
#[case("Homework", "homework")]
#[case("Extension Ideas", "extension ideas")]
#[case("Vocabulary", "vocabulary")]
fn unmatched_titles_pass_through_lowercased(#[case] title: &str, #[case] expected: &str) {
    assert_eq!(
        classify_title(title),
        SectionType::Other(expected.to_string())
    );
}

#[test]
fn classification_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(
            classify_title("Main Activities"),
            SectionType::Known(SectionKind::Activities)
        );
    }
}

#[test]
fn table_order_decides_multi_keyword_titles() {
    // Contains keywords for both LearningObjectives and Activities; the earlier
    // table entry wins.
    assert_eq!(
        classify_title("Objectives and Activities"),
        SectionType::Known(SectionKind::LearningObjectives)
    );
}
