use std::sync::Arc;

use crate::{
    constants::messages,
    errors::{AppError, AppResult},
    models::domain::{AnswerSet, PerformanceAnalysis, QuizQuestion, QuizResult},
    services::{
        model_service::ModelService, pdf_extractor::TextExtractor, prompt_builder,
        response_validator,
    },
};

pub struct QuizService {
    extractor: Arc<dyn TextExtractor>,
    model_service: Arc<ModelService>,
}

impl QuizService {
    pub fn new(extractor: Arc<dyn TextExtractor>, model_service: Arc<ModelService>) -> Self {
        Self {
            extractor,
            model_service,
        }
    }

    /// Extracts the document text and asks the model for a summary and quiz.
    pub async fn generate_quiz(&self, pdf: Vec<u8>, request_id: &str) -> AppResult<QuizResult> {
        let extractor = Arc::clone(&self.extractor);
        let document = tokio::task::spawn_blocking(move || extractor.extract(&pdf))
            .await
            .map_err(|e| AppError::InternalError(format!("Extraction task failed: {}", e)))?
            .inspect_err(|e| log::warn!("[{}] PDF extraction failed: {}", request_id, e))?;

        let text = document.full_text();
        log::info!(
            "[{}] Extracted {} pages ({} chars)",
            request_id,
            document.page_count(),
            text.len()
        );

        let prompt = prompt_builder::build_summary_and_quiz_prompt(&text);
        let completion = self
            .model_service
            .complete(&prompt, request_id)
            .await
            .map_err(|failure| failure.into_app_error(messages::UPLOAD_AI_UNAVAILABLE))?;

        let result = response_validator::parse_quiz_result(&completion).map_err(|violation| {
            log::error!("[{}] Failed to parse JSON from AI: {}", request_id, violation);
            log::error!("[{}] AI response was:\n{}", request_id, completion);
            AppError::ContractViolation(messages::UPLOAD_AI_MALFORMED)
        })?;

        log::info!(
            "[{}] Generated quiz with {} questions",
            request_id,
            result.questions.len()
        );
        Ok(result)
    }

    pub async fn analyze_performance(
        &self,
        questions: &[QuizQuestion],
        answers: &AnswerSet,
        request_id: &str,
    ) -> AppResult<PerformanceAnalysis> {
        log::info!(
            "[{}] Analyzing attempt: {} questions, {} answers",
            request_id,
            questions.len(),
            answers.len()
        );

        let prompt = prompt_builder::build_analysis_prompt(questions, answers)?;
        let completion = self
            .model_service
            .complete(&prompt, request_id)
            .await
            .map_err(|failure| failure.into_app_error(messages::ANALYSIS_AI_UNAVAILABLE))?;

        response_validator::parse_performance_analysis(&completion).map_err(|violation| {
            log::error!(
                "[{}] Failed to parse analysis JSON from AI: {}",
                request_id,
                violation
            );
            log::error!("[{}] AI response was:\n{}", request_id, completion);
            AppError::ContractViolation(messages::ANALYSIS_AI_MALFORMED)
        })
    }
}
