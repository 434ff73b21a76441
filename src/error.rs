//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the application.
//! It centralizes error management, providing a consistent way to handle and represent
//! the error conditions that can occur, from malformed input to database failures.
//!
//! `AppError` implements `actix_web::error::ResponseError` to seamlessly convert
//! application errors into appropriate HTTP responses with JSON bodies of the shape
//! `{"error": "<message>"}`. It also provides `From` trait implementations for
//! `sqlx::Error`, `jsonwebtoken::errors::Error`, and `bcrypt::BcryptError`, allowing
//! handlers to use the `?` operator.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;

/// Represents all possible errors that can occur within the application.
///
/// Each variant carries the message returned to the client. Internal detail
/// (database error strings, token parse errors) is logged, never sent.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing input (HTTP 400).
    BadRequest(String),
    /// Bad credentials or an invalid/expired/missing token (HTTP 401).
    /// Credential failures and token failures deliberately share this variant
    /// so callers cannot distinguish them.
    Unauthorized(String),
    /// A uniqueness violation, e.g. signup with an already-registered email (HTTP 409).
    Conflict(String),
    /// A requested resource was not found (HTTP 404).
    NotFound(String),
    /// Storage failure or any unexpected server-side error (HTTP 500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// This implementation allows Actix Web to automatically translate `AppError`
/// results from handlers into the correct HTTP status codes and JSON error responses.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::Conflict(msg) => HttpResponse::Conflict().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::Internal(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
        }
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// Unique-constraint violations (Postgres code 23505) map to `Conflict`, which
/// backstops the non-atomic existence check in signup. Everything else is logged
/// and surfaced as a generic `Internal` error so no database detail leaks.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        if let sqlx::Error::Database(ref db_err) = error {
            if db_err.code().as_deref() == Some("23505") {
                return AppError::Conflict("User already exists".into());
            }
        }
        log::error!("database error: {}", error);
        AppError::Internal("Internal server error".into())
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::Unauthorized`.
///
/// Expired, malformed, and badly-signed tokens all collapse into the same
/// client-facing message.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(_: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized("Invalid or expired token".into())
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::Internal`.
///
/// This handles errors during password hashing or verification.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        log::error!("bcrypt error: {}", error);
        AppError::Internal("Internal server error".into())
    }
}
