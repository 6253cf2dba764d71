//! Welcome, liveness and fallback handlers.

use actix_web::{get, http::header, HttpRequest, HttpResponse};
use serde_json::json;

use crate::error::ErrorKind;
use crate::server::ErrorBody;

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Welcome to the FPL league hub API" }))
}

/// Liveness probe; the process is up if it can answer.
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(json!({ "status": "ok" }))
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new(
        ErrorKind::NotFound,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}
