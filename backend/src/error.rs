use std::fmt;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    Config(String),
    VocabularyUnavailable(String),
    InvalidVocabulary(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "configuration error: {}", msg),
            AppError::VocabularyUnavailable(msg) => write!(f, "vocabulary unavailable: {}", msg),
            AppError::InvalidVocabulary(msg) => write!(f, "invalid vocabulary: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server misconfigured"),
            AppError::VocabularyUnavailable(_) => (StatusCode::NOT_FOUND, "Vocabulary not found"),
            AppError::InvalidVocabulary(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Vocabulary is invalid"),
        };
        tracing::warn!("{} -> {}", self, status);

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            json!({ "error": message }).to_string(),
        )
            .into_response()
    }
}
