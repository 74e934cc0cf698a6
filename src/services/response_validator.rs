//! Schema-checked decoding of completion text.
//!
//! Every completion is rejected as a whole when it breaks the contract. Keys
//! are never invented and defaults are never filled in.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::domain::{
    quiz_question::OPTIONS_PER_QUESTION, quiz_result::EXPECTED_QUESTION_COUNT, PerformanceAnalysis,
    QuizResult,
};

const QUIZ_RESULT_KEYS: [&str; 2] = ["summary", "questions"];
const ANALYSIS_KEYS: [&str; 3] = ["strong_areas", "weak_areas", "feedback"];

#[derive(Debug, Error)]
pub enum ContractViolation {
    #[error("completion is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("completion is not a JSON object")]
    NotAnObject,

    #[error("completion is missing the '{0}' key")]
    MissingKey(&'static str),

    #[error("completion does not match the expected schema: {0}")]
    InvalidShape(#[source] serde_json::Error),

    #[error("question {index} has {found} options, expected {}", OPTIONS_PER_QUESTION)]
    OptionCount { index: usize, found: usize },

    #[error("question {index} has an answer that matches none of its options")]
    AnswerNotInOptions { index: usize },
}

fn decode_object<T: DeserializeOwned>(
    text: &str,
    required_keys: &[&'static str],
) -> Result<T, ContractViolation> {
    let value: Value = serde_json::from_str(text).map_err(ContractViolation::InvalidJson)?;
    let object = value.as_object().ok_or(ContractViolation::NotAnObject)?;

    if let Some(missing) = required_keys
        .iter()
        .copied()
        .find(|key| !object.contains_key(*key))
    {
        return Err(ContractViolation::MissingKey(missing));
    }

    serde_json::from_value(value).map_err(ContractViolation::InvalidShape)
}

/// Decodes the summary-and-quiz completion.
///
/// Each question must carry exactly four options and an answer equal to one
/// of them up to surrounding whitespace; the accepted answer is replaced by
/// that option's exact text. A question count other than the requested one
/// is only logged.
pub fn parse_quiz_result(text: &str) -> Result<QuizResult, ContractViolation> {
    let mut result: QuizResult = decode_object(text, &QUIZ_RESULT_KEYS)?;

    for (index, question) in result.questions.iter_mut().enumerate() {
        if !question.has_expected_option_count() {
            return Err(ContractViolation::OptionCount {
                index,
                found: question.options.len(),
            });
        }
        let Some(matched) = question.answer_index() else {
            return Err(ContractViolation::AnswerNotInOptions { index });
        };
        // Clients grade by exact comparison against the chosen option.
        question.answer = question.options[matched].clone();
    }

    if result.questions.len() != EXPECTED_QUESTION_COUNT {
        log::warn!(
            "Model returned {} questions, expected {}",
            result.questions.len(),
            EXPECTED_QUESTION_COUNT
        );
    }

    Ok(result)
}

pub fn parse_performance_analysis(text: &str) -> Result<PerformanceAnalysis, ContractViolation> {
    let analysis: PerformanceAnalysis = decode_object(text, &ANALYSIS_KEYS)?;
    Ok(analysis.dedup_topics())
}
