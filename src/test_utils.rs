use crate::models::domain::QuizQuestion;
use crate::services::pdf_extractor::{ExtractedDocument, ExtractionError, TextExtractor};

#[cfg(test)]
#[path = "../tests/common/fixtures.rs"]
mod shared;

#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    use super::*;

    pub use super::shared::{
        build_encrypted_pdf, build_pdf, multipart_body, multipart_content_type,
        MULTIPART_BOUNDARY,
    };

    /// Creates the single question used across analysis tests
    pub fn sample_question() -> QuizQuestion {
        QuizQuestion::new("Q1", ["a) 1", "b) 2", "c) 3", "d) 4"], "a) 1")
    }

    /// A well-formed summary-and-quiz completion with `count` questions
    pub fn sample_quiz_json(count: usize) -> String {
        let questions: Vec<_> = (0..count)
            .map(|i| {
                json!({
                    "question": format!("Question {}?", i),
                    "options": [
                        format!("a) Option {}a", i),
                        format!("b) Option {}b", i),
                        format!("c) Option {}c", i),
                        format!("d) Option {}d", i),
                    ],
                    "answer": format!("b) Option {}b", i),
                })
            })
            .collect();

        json!({
            "summary": "A detailed summary of the document.",
            "questions": questions,
        })
        .to_string()
    }

    /// A well-formed analysis completion with one repeated weak topic
    pub fn sample_analysis_json() -> String {
        json!({
            "strong_areas": ["Photosynthesis", "Photosynthesis"],
            "weak_areas": ["Cell division", "Genetics", "Cell division"],
            "feedback": "Review cell division.",
        })
        .to_string()
    }

    /// Extractor that returns a fixed outcome without parsing the upload
    pub struct StaticExtractor {
        outcome: Result<ExtractedDocument, ExtractionError>,
    }

    impl StaticExtractor {
        pub fn pages(pages: &[&str]) -> Self {
            Self {
                outcome: Ok(ExtractedDocument {
                    pages: pages.iter().map(|page| page.to_string()).collect(),
                }),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                outcome: Err(ExtractionError::Unreadable(message.to_string())),
            }
        }
    }

    impl TextExtractor for StaticExtractor {
        fn extract(&self, _pdf: &[u8]) -> Result<ExtractedDocument, ExtractionError> {
            self.outcome.clone()
        }
    }

    /// Extractor that fails the test if the handler ever reaches extraction
    pub struct UnreachableExtractor;

    impl TextExtractor for UnreachableExtractor {
        fn extract(&self, _pdf: &[u8]) -> Result<ExtractedDocument, ExtractionError> {
            panic!("extraction should not run for this request");
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::response_validator::parse_quiz_result;

    #[test]
    fn test_fixtures_sample_quiz_is_valid() {
        let result = parse_quiz_result(&sample_quiz_json(10)).expect("fixture should validate");
        assert_eq!(result.questions.len(), 10);
    }

    #[test]
    fn test_fixtures_multipart_body_frames_field() {
        let body = multipart_body("pdf", "doc.pdf", b"%PDF-1.5");
        let text = String::from_utf8(body).expect("body should be utf-8");

        assert!(text.starts_with(&format!("--{}\r\n", MULTIPART_BOUNDARY)));
        assert!(text.contains("name=\"pdf\"; filename=\"doc.pdf\""));
        assert!(text.ends_with(&format!("--{}--\r\n", MULTIPART_BOUNDARY)));
    }
}
