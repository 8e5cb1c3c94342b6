use std::sync::Arc;
use tracing::{debug, error, warn};

use super::error::TranslateError;
use super::interface::{ModelReply, TranslationRequest, TranslationResponse};
use super::prompt::build_prompt;
use super::validation::{classify_reply, decode_utf8, extract_reply_text, parse_json};
use crate::llm::StatelessLLMInterface;

/// Runs one translation: prompt, model call, reply validation.
pub struct TranslationService {
    llm: Arc<dyn StatelessLLMInterface>,
}

impl TranslationService {
    pub fn new(llm: Arc<dyn StatelessLLMInterface>) -> Self {
        Self { llm }
    }

    pub async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResponse, TranslateError> {
        let result = self.run(&request).await;
        if let Err(e) = &result {
            if !e.is_denial() {
                error!("Translation failed for {:?}: {}", request, e);
            }
        }
        result
    }

    async fn run(&self, request: &TranslationRequest) -> Result<TranslationResponse, TranslateError> {
        let prompt = build_prompt(request);
        debug!("Request message: {}", prompt);

        let body = self.llm.invoke(&prompt).await?;

        let text = decode_utf8(body)?;
        debug!("Response body: {}", text);

        let envelope = parse_json(&text)?;
        let message = parse_json(&extract_reply_text(envelope)?)?;
        debug!("Response message: {}", message);

        match classify_reply(message)? {
            ModelReply::Translated(response) => Ok(response),
            ModelReply::Denied(denied) => {
                warn!("Translation request denied: {:?}", denied);
                Err(TranslateError::Denied(denied))
            }
        }
    }

    pub fn provider_name(&self) -> &str {
        self.llm.provider_name()
    }
}
