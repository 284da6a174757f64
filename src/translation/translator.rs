use tracing::error;

use super::client::{DEFAULT_BASE_URL, GeminiClient};
use super::error::TranslateError;
use super::prompt::build_prompt;
use crate::config::{ConfigRecord, ConfigStore, Persistence};

/// Entry point for hosts: translation plus configuration access.
///
/// Every call to [`Translator::translate`] reads the configuration once and
/// sends exactly one request. Nothing is cached and nothing is retried.
pub struct Translator<P> {
    store: ConfigStore<P>,
    base_url: String,
}

impl<P: Persistence> Translator<P> {
    pub fn new(store: ConfigStore<P>) -> Self {
        Self {
            store,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points requests at a different API root (used by tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub const fn store(&self) -> &ConfigStore<P> {
        &self.store
    }

    /// Translates `text` using the stored configuration.
    ///
    /// Returns the raw JSON payload produced by the model; parsing it is up
    /// to the caller (see [`super::TranslationResult::parse`]).
    pub async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let config = self.store.get_config();
        self.translate_with(&config, text).await
    }

    /// Translates `text` using an explicit, already-resolved configuration.
    pub async fn translate_with(
        &self,
        config: &ConfigRecord,
        text: &str,
    ) -> Result<String, TranslateError> {
        if !config.has_api_key() {
            return Err(TranslateError::MissingApiKey);
        }

        let prompt = build_prompt(text);
        let client = GeminiClient::new(&self.base_url, config.proxy_url())?;

        client
            .generate(&config.model, &config.api_key, &prompt)
            .await
            .inspect_err(|e| error!("Gemini API call failed: {e}"))
    }

    /// Replaces the API key, proxy and model together.
    pub fn update_config(&self, api_key: &str, proxy: &str, model: &str) -> bool {
        self.store.update_config(api_key, proxy, model)
    }

    pub fn current_config(&self) -> ConfigRecord {
        self.store.get_current_config()
    }
}
