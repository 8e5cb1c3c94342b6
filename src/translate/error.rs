use thiserror::Error;

use super::interface::TranslationDeniedResponse;
use crate::llm::LLMError;

/// Failure at one step of the model reply decoding chain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Reply body is not valid UTF-8: {0}")]
    Utf8(String),

    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error("Unexpected reply envelope: {0}")]
    Envelope(String),

    #[error("Reply envelope has no content")]
    EmptyContent,

    #[error("Model reply matches neither translation nor denial shape: {0}")]
    UnrecognizedReply(String),
}

#[derive(Error, Debug)]
pub enum TranslateError {
    /// The model explicitly declined; carries its message for the client.
    #[error("Translation request denied: {}", .0.message)]
    Denied(TranslationDeniedResponse),

    #[error("Model backend error: {0}")]
    Backend(#[from] LLMError),

    #[error("Malformed model output: {0}")]
    Validation(#[from] ValidationError),
}

impl TranslateError {
    pub fn is_denial(&self) -> bool {
        matches!(self, TranslateError::Denied(_))
    }
}
