//! Messages exchanged between the web client, the API and the model reply

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Translation request as accepted by `POST /translation`.
///
/// Field order matters: the request is serialized verbatim into the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslationRequest {
    /// Text to translate
    pub input: String,
    /// Input language in RFC 5646, detected by the model if omitted
    #[serde(default, deserialize_with = "present_string", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Output language in RFC 5646
    pub to: String,
    /// Description of the output writing style in English
    #[serde(default, deserialize_with = "present_string", skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Language of API messages (denials) in RFC 5646
    pub api: String,
}

/// Successful translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslationResponse {
    pub output: String,
    /// Detected input language in RFC 5646
    #[serde(default, deserialize_with = "present_string", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// Returned when the model declines the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslationDeniedResponse {
    pub message: String,
}

/// Optional string field: may be left out, but `null` is rejected.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

/// Outcome of a model reply that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    Translated(TranslationResponse),
    Denied(TranslationDeniedResponse),
}
