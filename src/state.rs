use std::sync::Arc;

use crate::config::Config;
use crate::llm::{ClaudeLLM, StatelessLLMInterface};
use crate::translate::TranslationService;

#[derive(Clone)]
pub struct AppState {
    pub translation_service: Arc<TranslationService>,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let llm = Arc::new(ClaudeLLM::from_config(config).await);
        Ok(Self::with_llm(llm))
    }

    pub fn with_llm(llm: Arc<dyn StatelessLLMInterface>) -> Self {
        Self {
            translation_service: Arc::new(TranslationService::new(llm)),
        }
    }
}
