use actix_multipart::Multipart;
use actix_web::{http::header, post, web, HttpRequest, HttpResponse};
use futures::TryStreamExt as _;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    middleware::get_request_id,
    models::dto::request::AnalyzeRequest,
};

const PDF_FIELD: &str = "pdf";

/// Largest `/analyze` body accepted; a ten-question attempt is a few KiB.
pub const MAX_ANALYZE_BODY_BYTES: usize = 256 * 1024;

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with("multipart/form-data"))
}

/// Reads the `pdf` field into memory, or returns `None` if the form has no
/// such field. Other fields are skipped.
async fn read_pdf_field(mut multipart: Multipart, max_bytes: usize) -> AppResult<Option<Vec<u8>>> {
    while let Some(mut field) = multipart.try_next().await? {
        if field.name() != Some(PDF_FIELD) {
            continue;
        }

        let mut pdf = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if pdf.len() + chunk.len() > max_bytes {
                return Err(AppError::UploadTooLarge(max_bytes));
            }
            pdf.extend_from_slice(&chunk);
        }
        return Ok(Some(pdf));
    }

    Ok(None)
}

#[post("/upload")]
pub async fn upload_pdf(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Payload,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_else(|| "-".to_string());

    if !is_multipart(&req) {
        return Err(AppError::MissingFile);
    }

    let multipart = Multipart::new(req.headers(), payload);
    let pdf = read_pdf_field(multipart, state.config.max_upload_bytes)
        .await?
        .ok_or(AppError::MissingFile)?;

    log::info!("[{}] Received PDF upload ({} bytes)", request_id, pdf.len());

    let result = state.quiz_service.generate_quiz(pdf, &request_id).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/analyze")]
pub async fn analyze_performance(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Payload,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_else(|| "-".to_string());

    let body = payload
        .to_bytes_limited(MAX_ANALYZE_BODY_BYTES)
        .await
        .map_err(|_| AppError::BodyTooLarge(MAX_ANALYZE_BODY_BYTES))?
        .map_err(|e| AppError::InvalidInput(format!("Malformed request body: {}", e)))?;

    let (questions, answers) = AnalyzeRequest::from_slice(&body)?.into_parts()?;

    let analysis = state
        .quiz_service
        .analyze_performance(&questions, &answers, &request_id)
        .await?;
    Ok(HttpResponse::Ok().json(analysis))
}
