//! Decoding chain for model replies
//!
//! The model endpoint answers with a byte buffer holding a JSON envelope whose
//! first content block carries the model's own reply, itself JSON encoded as a
//! string. Each step either narrows the value or fails with a
//! [`ValidationError`]:
//!
//! 1. bytes → UTF-8 string ([`decode_utf8`])
//! 2. string → generic JSON ([`parse_json`])
//! 3. JSON → envelope → `content[0].text` ([`extract_reply_text`])
//! 4. text → JSON → translation or denial ([`parse_json`], [`classify_reply`])
//!
//! Validation is structural only. Unknown fields are ignored at every step.

use serde::Deserialize;
use serde_json::Value;

use super::error::ValidationError;
use super::interface::{ModelReply, TranslationDeniedResponse, TranslationResponse};

/// Reply envelope of the Claude messages API
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeResponse {
    pub content: Vec<ClaudeResponseContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeResponseContent {
    pub text: String,
}

pub fn decode_utf8(bytes: Vec<u8>) -> Result<String, ValidationError> {
    String::from_utf8(bytes).map_err(|e| ValidationError::Utf8(e.utf8_error().to_string()))
}

pub fn parse_json(text: &str) -> Result<Value, ValidationError> {
    serde_json::from_str(text).map_err(|e| ValidationError::Json(e.to_string()))
}

/// Narrow the envelope and take the text of its first content block.
pub fn extract_reply_text(envelope: Value) -> Result<String, ValidationError> {
    let response: ClaudeResponse =
        serde_json::from_value(envelope).map_err(|e| ValidationError::Envelope(e.to_string()))?;

    response
        .content
        .into_iter()
        .next()
        .map(|block| block.text)
        .ok_or(ValidationError::EmptyContent)
}

/// Success shape first, denial shape second, anything else is an error.
pub fn classify_reply(message: Value) -> Result<ModelReply, ValidationError> {
    if let Ok(response) = TranslationResponse::deserialize(&message) {
        return Ok(ModelReply::Translated(response));
    }

    TranslationDeniedResponse::deserialize(&message)
        .map(ModelReply::Denied)
        .map_err(|_| ValidationError::UnrecognizedReply(message.to_string()))
}
