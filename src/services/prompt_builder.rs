//! Pure prompt construction for the two model calls.
//!
//! Caller content is embedded verbatim between `---` lines so the model can
//! tell instructions from material.

use crate::constants::prompts::{
    PERFORMANCE_ANALYSIS_PREAMBLE, PERFORMANCE_ANALYSIS_PROMPT, SUMMARY_AND_QUIZ_PROMPT,
};
use crate::models::domain::{alignment_record, AnswerSet, QuizQuestion};

const SECTION_DELIMITER: &str = "---";

pub fn build_summary_and_quiz_prompt(document_text: &str) -> String {
    format!(
        "{SUMMARY_AND_QUIZ_PROMPT}\n\nHere is the text:\n{SECTION_DELIMITER}\n{document_text}\n{SECTION_DELIMITER}\n"
    )
}

/// Embeds the per-question alignment records as pretty-printed JSON.
pub fn build_analysis_prompt(
    questions: &[QuizQuestion],
    answers: &AnswerSet,
) -> serde_json::Result<String> {
    let records = alignment_record::align(questions, answers);
    let alignment = serde_json::to_string_pretty(&records)?;

    Ok(format!(
        "{PERFORMANCE_ANALYSIS_PREAMBLE}\n\n{alignment}\n\n{PERFORMANCE_ANALYSIS_PROMPT}\n"
    ))
}
