pub mod interface;
pub mod error;
pub mod prompt;
pub mod validation;
pub mod service;

pub use interface::{TranslationDeniedResponse, TranslationRequest, TranslationResponse};
pub use error::TranslateError;
pub use service::TranslationService;
