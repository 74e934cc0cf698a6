pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

pub use health_handler::health_check;
pub use quiz_handler::{analyze_performance, upload_pdf};

/// Registers every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_pdf)
        .service(analyze_performance)
        .service(health_check);
}
