use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Failed to encode model request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Model invocation failed: {0}")]
    Invoke(String),
}

/// Interface for a stateless language model backend
/// Stateless means every call is a single prompt with no memory of earlier calls
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Send one prompt to the model and return the raw reply body
    async fn invoke(&self, prompt: &str) -> Result<Vec<u8>, LLMError>;

    fn provider_name(&self) -> &str;
}
