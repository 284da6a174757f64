mod client;
mod error;
mod prompt;
mod schema;
mod translator;

pub use client::{DEFAULT_BASE_URL, GeminiClient};
pub use error::{TranslateError, UNKNOWN_ERROR};
pub use prompt::{PROMPT_TEMPLATE, build_prompt};
pub use schema::{Definition, TranslationResult, VocabularyEntry, response_schema};
pub use translator::Translator;
