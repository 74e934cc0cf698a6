pub mod completion_client;
pub mod model_service;
pub mod pdf_extractor;
pub mod prompt_builder;
pub mod quiz_service;
pub mod response_validator;
