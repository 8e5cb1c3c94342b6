//! Deterministic model backend for tests
//!
//! Replies without network access and records every prompt it receives, so
//! tests can assert both on the outcome and on whether the backend was reached.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;

use super::stateless_llm_interface::{LLMError, StatelessLLMInterface};

#[derive(Debug, Clone)]
pub enum MockMode {
    /// Wrap the given text as the first content block of a Claude envelope
    Reply(String),
    /// Return these bytes as the raw reply body
    RawBody(Vec<u8>),
    /// Fail as if the remote call had failed
    Error(String),
}

#[derive(Debug)]
pub struct MockLLM {
    mode: MockMode,
    prompts: Mutex<Vec<String>>,
}

impl MockLLM {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(MockMode::Reply(text.to_string()))
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl StatelessLLMInterface for MockLLM {
    async fn invoke(&self, prompt: &str) -> Result<Vec<u8>, LLMError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.mode {
            MockMode::Reply(text) => Ok(json!({
                "id": "msg_mock",
                "type": "message",
                "role": "assistant",
                "content": [{ "type": "text", "text": text }],
                "stop_reason": "end_turn"
            })
            .to_string()
            .into_bytes()),
            MockMode::RawBody(bytes) => Ok(bytes.clone()),
            MockMode::Error(msg) => Err(LLMError::Invoke(msg.clone())),
        }
    }

    fn provider_name(&self) -> &str {
        "Mock LLM"
    }
}
