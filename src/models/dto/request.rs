use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{AnswerSet, QuizQuestion};

/// Body of `POST /analyze`.
///
/// Both fields are optional at the decode step so that an absent field maps to
/// `AppError::MissingData` rather than a serde rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub questions: Option<Vec<QuizQuestion>>,

    #[serde(default, rename = "userAnswers")]
    pub user_answers: Option<AnswerSet>,
}

impl AnalyzeRequest {
    pub fn from_slice(body: &[u8]) -> AppResult<Self> {
        serde_json::from_slice(body).map_err(|err| {
            log::debug!("Rejecting analyze body: {}", err);
            AppError::MissingData
        })
    }

    /// Splits the request into its parts, checking that every answer key names
    /// an existing question.
    pub fn into_parts(self) -> AppResult<(Vec<QuizQuestion>, AnswerSet)> {
        let (Some(questions), Some(answers)) = (self.questions, self.user_answers) else {
            return Err(AppError::MissingData);
        };

        if let Some(key) = answers.invalid_keys(questions.len()).first() {
            return Err(AppError::InvalidInput(format!("Invalid answer index: {}", key)));
        }

        Ok((questions, answers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_QUESTION: &str =
        r#"[{"question":"Q1","options":["a) 1","b) 2","c) 3","d) 4"],"answer":"a) 1"}]"#;

    #[test]
    fn empty_object_is_missing_data() {
        let request = AnalyzeRequest::from_slice(b"{}").expect("empty object should decode");
        assert!(matches!(request.into_parts(), Err(AppError::MissingData)));
    }

    #[test]
    fn missing_user_answers_is_missing_data() {
        let body = format!(r#"{{"questions": {}}}"#, ONE_QUESTION);
        let request = AnalyzeRequest::from_slice(body.as_bytes()).expect("body should decode");
        assert!(matches!(request.into_parts(), Err(AppError::MissingData)));
    }

    #[test]
    fn non_json_body_is_missing_data() {
        assert!(matches!(
            AnalyzeRequest::from_slice(b"not json"),
            Err(AppError::MissingData)
        ));
        assert!(matches!(
            AnalyzeRequest::from_slice(b""),
            Err(AppError::MissingData)
        ));
    }

    #[test]
    fn out_of_range_answer_key_is_rejected() {
        let body = format!(
            r#"{{"questions": {}, "userAnswers": {{"0": "a) 1", "5": "b) 2"}}}}"#,
            ONE_QUESTION
        );
        let request = AnalyzeRequest::from_slice(body.as_bytes()).expect("body should decode");

        match request.into_parts() {
            Err(AppError::InvalidInput(message)) => {
                assert_eq!(message, "Invalid answer index: 5")
            }
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn well_formed_request_splits_into_parts() {
        let body = format!(
            r#"{{"questions": {}, "userAnswers": {{"0": "b) 2"}}}}"#,
            ONE_QUESTION
        );
        let (questions, answers) = AnalyzeRequest::from_slice(body.as_bytes())
            .and_then(AnalyzeRequest::into_parts)
            .expect("request should be accepted");

        assert_eq!(questions.len(), 1);
        assert_eq!(answers.answer_for(0), Some("b) 2"));
    }
}
