pub mod stateless_llm_interface;
pub mod claude_llm;
#[cfg(test)]
pub mod mock_llm;

pub use stateless_llm_interface::*;
pub use claude_llm::ClaudeLLM;
