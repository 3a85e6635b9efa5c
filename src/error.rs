//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Field name mapped to the list of violated-rule messages for that field.
/// Serialized as-is into the body of a validation-problem response.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

#[derive(Error, Debug)]
pub enum AppError {
    /// One or more field rules violated on a write payload. Never reaches
    /// the store.
    #[error("validation failed")]
    Validation(ValidationErrors),
    /// The referenced supplier id does not exist.
    #[error("not found")]
    NotFound,
    /// A commit reported zero affected rows for a staged change.
    #[error("there was a problem saving the supplier")]
    SaveFailed,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            // A validation problem enumerates each failing field; the map is
            // the whole body.
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            // 404 carries no body.
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::SaveFailed => {
                error_response(StatusCode::BAD_REQUEST, "save_failed", message)
            }
            AppError::Db(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "database_error", message)
            }
        }
    }
}

fn error_response(status: StatusCode, code: &str, message: String) -> Response {
    let body = ErrorBody {
        error: ErrorDetail {
            code: code.to_string(),
            message,
        },
    };
    (status, Json(body)).into_response()
}
