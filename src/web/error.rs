use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use super::render;

#[derive(Debug)]
pub enum WebError {
    NotFound(String),

    DatabaseError(String),

    ValidationError(String),

    InternalError(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NotFound(msg) => write!(f, "Not found: {}", msg),
            WebError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            WebError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            WebError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for WebError {}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            WebError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            WebError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            WebError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Html(render::error_body(&error_message))).into_response()
    }
}

impl From<anyhow::Error> for WebError {
    fn from(err: anyhow::Error) -> Self {
        WebError::DatabaseError(err.to_string())
    }
}

impl WebError {
    pub fn anime_not_found(id: i32) -> Self {
        WebError::NotFound(format!("Anime {} not found", id))
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        WebError::ValidationError(msg.into())
    }
}
