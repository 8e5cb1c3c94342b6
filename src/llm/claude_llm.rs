use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use serde::Serialize;
use tracing::{debug, info};

use super::stateless_llm_interface::{LLMError, StatelessLLMInterface};
use crate::config::Config;

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
pub const MAX_TOKENS: u32 = 1000;

/// Request body of the Claude messages API on Bedrock
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaudeRequest {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub messages: Vec<ClaudeMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaudeMessage {
    pub role: String,
    pub content: Vec<ClaudeContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaudeContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ClaudeRequest {
    /// Single user message holding the prompt as one text block
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION.to_string(),
            max_tokens: MAX_TOKENS,
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: vec![ClaudeContent {
                    content_type: "text".to_string(),
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// Claude served through AWS Bedrock `InvokeModel`
pub struct ClaudeLLM {
    client: Client,
    model_id: String,
}

impl ClaudeLLM {
    pub fn new(client: Client, model_id: String) -> Self {
        info!("Initialized ClaudeLLM: model={}", model_id);
        Self { client, model_id }
    }

    /// Build a Bedrock client from the default AWS provider chain, with the
    /// configured region when there is one. SDK retries are disabled.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .retry_config(aws_config::retry::RetryConfig::disabled());
        if let Some(region) = &config.aws_region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config), config.model_id.clone())
    }
}

#[async_trait]
impl StatelessLLMInterface for ClaudeLLM {
    async fn invoke(&self, prompt: &str) -> Result<Vec<u8>, LLMError> {
        let request = ClaudeRequest::from_prompt(prompt);
        debug!("Request body: {:?}", request);
        let body = serde_json::to_vec(&request)?;

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| LLMError::Invoke(DisplayErrorContext(&e).to_string()))?;

        debug!(
            "Bedrock response: content_type={}, {} bytes",
            response.content_type(),
            response.body().as_ref().len()
        );
        Ok(response.body().as_ref().to_vec())
    }

    fn provider_name(&self) -> &str {
        "Claude (Bedrock)"
    }
}
