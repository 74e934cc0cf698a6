use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::services::pdf_extractor::ExtractionError;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("No PDF file provided")]
    MissingFile,

    #[error("Missing data")]
    MissingData,

    #[error("{0}")]
    InvalidInput(String),

    #[error("PDF exceeds the maximum upload size of {0} bytes")]
    UploadTooLarge(usize),

    #[error("Request body exceeds the maximum size of {0} bytes")]
    BodyTooLarge(usize),

    #[error("Failed to process PDF: {0}")]
    Extraction(String),

    #[error("{0}")]
    UpstreamUnavailable(&'static str),

    #[error("AI service timed out")]
    UpstreamTimeout,

    #[error("{0}")]
    ContractViolation(&'static str),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFile | AppError::MissingData | AppError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UploadTooLarge(_) | AppError::BodyTooLarge(_) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            AppError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Extraction(_)
            | AppError::UpstreamUnavailable(_)
            | AppError::ContractViolation(_)
            | AppError::Configuration(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        AppError::Extraction(err.to_string())
    }
}

impl From<actix_multipart::MultipartError> for AppError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        AppError::InvalidInput(format!("Malformed upload: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
