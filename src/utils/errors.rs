use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::pet::validation::Violation;

#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<Violation>),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Conflict(message) => {
                HttpResponse::Conflict().json(serde_json::json!({
                    "error": message,
                    "code": 409
                }))
            },
            ApiError::BadRequest(message) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": message,
                    "code": 400
                }))
            },
            ApiError::Validation(violations) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "Invalid pet data",
                    "code": 400,
                    "violations": violations
                }))
            },
            ApiError::InternalServerError(message) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": message,
                    "code": 500
                }))
            },
            ApiError::Repository(message) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Storage error",
                    "code": 500,
                    "details": message
                }))
            }
        }
    }
}

// ----------------------------- TESTS --------------------------------
