//! Testing utilities and curated sample texts
//!
//!     Generator output is easy to get subtly wrong when invented ad hoc inside a
//!     test: one stray marker and the test pins the parser to a format no generator
//!     produces. All parser tests therefore use the curated samples below, each one
//!     exercising a specific extraction strategy, instead of scattering lesson-plan
//!     strings across test files. When a format changes, the sample changes in one
//!     place.

/// Curated lesson-plan sample texts.
pub mod samples {
    /// Full seven-section markdown document whose Activities section uses the
    /// bullet-list format: four activities with [2, 2, 2, 1] steps.
    pub const REFUTING_ARGUMENTS: &str = "\
### 1. Learning Objectives
- Students will be able to identify the claim and evidence in an argument.
- Students will construct a rebuttal supported by evidence.

### 2. Materials and Resources
- Printed argument passages
- Whiteboard and markers
- Research worksheet

### 3. Introduction and Hook (5 minutes)
Open with a short provocative claim and ask the class to react.

### 4. Main Activities (40 minutes)
- **Activity 1: Understanding Arguments** (10 minutes)
  - Review the structure of an argument with the class.
  - Identify claims and evidence in two sample passages.
- **Activity 2: Research and Evidence** (15 minutes)
  - Pairs gather evidence that challenges the sample claims.
  - Record sources and page numbers on the worksheet.
- **Activity 3: Group Discussion** (10 minutes)
  - Groups compare the counter-evidence they collected.
  - Agree on the strongest rebuttal for each claim.
- **Activity 4: Presentations** (5 minutes)
  - Each group presents its strongest rebuttal to the class.

### 5. Assessment Strategies
Exit ticket: students write one claim and one rebuttal.

### 6. Differentiation Strategies
Provide sentence starters for students who need them.

### 7. Closure
Summarize the parts of a strong rebuttal as a class.
";

    /// Activities-section markdown in the explicit-step format: two activities,
    /// each with a Duration heading and three one-line bold-labelled steps.
    pub const EXPLICIT_STEPS: &str = "\
#### Activity 1: Introduction to Fractions (15 minutes)
##### Duration: 15 minutes
1. **Step 1**: Draw a circle on the board and shade one half.
2. **Step 2**: Ask students to name the shaded part.
3. **Step 3**: Introduce the terms numerator and denominator.

#### Activity 2: Fraction Strips (15 minutes)
##### Duration: 15 minutes
1. **Step 1**: Hand out paper strips to each pair.
2. **Step 2**: Fold the strips into halves, then quarters.
3. **Step 3**: Label each fold with its fraction.
";

    /// Full seven-section document whose Activities content matches none of the
    /// activity formats.
    pub const UNPARSEABLE_ACTIVITIES: &str = "\
### Learning Objectives
Students will practice summarizing a text.

### Materials and Resources
Copies of the article, notebooks.

### Introduction and Hook
Read the headline aloud and collect predictions.

### Activities
Students will work through the article together in small groups, pausing to summarize as they go.

### Assessment Strategies
Collect the group summaries.

### Differentiation Strategies
Offer a partially completed summary frame.

### Closure
One volunteer per group shares their summary.
";

    /// Plain text with no markdown at all: colon-terminated title lines and
    /// inline-numbered activity runs.
    pub const PLAIN_TITLES: &str = "\
Learning Objectives:
identify the main idea of a paragraph.

Materials and Resources:
article copies, highlighters.

Introduction and Hook:
show the cover image and ask for predictions.

Main Activities:
Activity 1: First Read (10 minutes). Read the article silently. Mark unfamiliar words.
Activity 2: Second Read (15 minutes). Reread with a partner. Highlight the main idea of each paragraph.

Assessment Strategies:
collect the highlighted articles.

Differentiation Strategies:
provide an audio recording of the article.

Closure:
discuss the main idea as a whole class.
";

    /// Prose with embedded known-title labels and no recognizable title lines;
    /// only the known-title lookup strategy can split it.
    pub const PROSE_LABELS: &str = "\
here is a lesson plan for today. learning objectives: students compare two \
characters from the novel. materials and resources: novels, venn diagram \
handout. introduction/hook: show two portraits and ask how they differ. main \
activities: in pairs, students fill the venn diagram, then each pair joins \
another to merge diagrams. assessment strategies: collect the merged diagrams. \
differentiation strategies: offer a word bank. closure: volunteers share one \
similarity and one difference.
";

    /// Markdown document that is missing the assessment, differentiation and
    /// close sections, with parseable bullet activities.
    pub const MISSING_TAIL_SECTIONS: &str = "\
### Learning Objectives
- Use transition words in a paragraph.

### Materials and Resources
- Transition word list

### Introduction and Hook
Read a choppy paragraph aloud and ask what sounds wrong.

### Activities
- **Activity 1: Rewrite** (15 minutes)
  - Rewrite the choppy paragraph using transition words.
";
}
