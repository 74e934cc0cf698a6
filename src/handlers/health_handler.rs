use actix_web::{get, HttpResponse};

use crate::models::dto::response::HealthResponse;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy())
}
