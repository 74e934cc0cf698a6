use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        completion_client::{CompletionClient, OpenAiCompletionClient},
        model_service::ModelService,
        pdf_extractor::{LopdfExtractor, TextExtractor},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let completion_client = Arc::new(OpenAiCompletionClient::new(&config));
        Self::with_components(config, completion_client, Arc::new(LopdfExtractor))
    }

    /// Wires the services around the given collaborators.
    pub fn with_components(
        config: Config,
        completion_client: Arc<dyn CompletionClient>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        let model_service = Arc::new(ModelService::new(completion_client, config.ai_timeout()));
        let quiz_service = Arc::new(QuizService::new(extractor, model_service));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
