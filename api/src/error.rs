//! Unified error types for the Courseboard API
//!
//! This module defines error types for each layer:
//! - `DomainError`: the closed set of business and storage error kinds
//! - `AppError`: application layer error (classifies domain errors for HTTP
//!   responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::CourseId;

/// Domain layer errors, matched by kind
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid start date")]
    InvalidStartDate,

    #[error("invalid end date")]
    InvalidEndDate,

    #[error("end date mustn't be lesser than start date")]
    EndBeforeStart,

    #[error("name is required")]
    NameRequired,

    #[error("start date is required")]
    StartDateRequired,

    #[error("end date is required")]
    EndDateRequired,

    #[error("course with id '{0}' not found or doesn't exist")]
    NotFound(CourseId),

    #[error("database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Domain(err) = self;

        let (status, error, details) = match &err {
            DomainError::InvalidStartDate
            | DomainError::InvalidEndDate
            | DomainError::EndBeforeStart
            | DomainError::NameRequired
            | DomainError::StartDateRequired
            | DomainError::EndDateRequired => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(err.to_string()))
            }
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found", Some(err.to_string())),
            DomainError::Database(msg) => {
                // The underlying cause stays in the server log only.
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
