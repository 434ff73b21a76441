use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

/// Liveness probe. Answers without touching the database or the token codec,
/// so a healthy listener over a dead store still reports OK.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "OK" }))
}
