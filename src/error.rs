use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use utoipa::ToSchema;

use crate::translate::TranslateError;

/// Body of a request rejected before reaching the model
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    pub status_code: u16,
    pub message: String,
    pub errors: Vec<ValidationIssue>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationIssue {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerErrorResponse {
    pub status_code: u16,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Body could not be read at all, e.g. over the size limit
    #[error("Request body rejected ({0}): {1}")]
    Rejected(StatusCode, String),

    #[error(transparent)]
    Translate(#[from] TranslateError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::BytesRejection(_) => {
                ApiError::Rejected(rejection.status(), rejection.body_text())
            }
            _ => ApiError::Validation(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(detail) => {
                warn!("Rejected request body: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse {
                        status_code: StatusCode::BAD_REQUEST.as_u16(),
                        message: "Validation failed".to_string(),
                        errors: vec![ValidationIssue { message: detail }],
                    }),
                )
                    .into_response()
            }
            ApiError::Rejected(status, detail) => {
                warn!("Rejected request body: {}", detail);
                (
                    status,
                    Json(ServerErrorResponse {
                        status_code: status.as_u16(),
                        message: detail,
                    }),
                )
                    .into_response()
            }
            ApiError::Translate(TranslateError::Denied(denied)) => {
                (StatusCode::BAD_REQUEST, Json(denied)).into_response()
            }
            ApiError::Translate(_) => {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ServerErrorResponse {
                        status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// `Json` extractor whose rejections use the validation error body
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ValidatedJson<T>(pub T);
