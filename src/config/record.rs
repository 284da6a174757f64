use serde::{Deserialize, Serialize};

/// Fixed identifier of the singleton configuration record.
pub const CONFIG_ID: &str = "gemini-translate/config";

/// Model used when no configuration has been saved yet.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini models offered by `gtl configure`. Any other model name is accepted.
pub const KNOWN_MODELS: &[&str] = &[
    "gemini-2.0-flash",
    "gemini-2.0-flash-lite",
    "gemini-2.5-flash",
    "gemini-2.5-flash-lite",
    "gemini-2.5-pro",
];

/// The persisted user configuration.
///
/// Serialized as a JSON document keyed by `_id`, with the backend-assigned
/// revision surfaced as `_rev`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// Document key; always [`CONFIG_ID`] for records produced by this crate.
    #[serde(rename = "_id")]
    pub id: String,
    /// Gemini API key. Empty means "not configured".
    #[serde(rename = "apiKey", default)]
    pub api_key: String,
    /// Outbound proxy URL. Empty means a direct connection.
    #[serde(default)]
    pub proxy: String,
    /// Remote model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Revision token assigned by the persistence layer on the last write.
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Returns the record used when nothing has been persisted yet.
pub fn default_config() -> ConfigRecord {
    ConfigRecord {
        id: CONFIG_ID.to_string(),
        api_key: String::new(),
        proxy: String::new(),
        model: default_model(),
        rev: None,
    }
}

impl Default for ConfigRecord {
    fn default() -> Self {
        default_config()
    }
}

impl ConfigRecord {
    /// Returns `true` if an API key has been configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Returns the proxy URL, or `None` for a direct connection.
    pub fn proxy_url(&self) -> Option<&str> {
        let proxy = self.proxy.trim();
        if proxy.is_empty() { None } else { Some(proxy) }
    }

    /// The API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.is_empty() {
            return String::new();
        }
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{visible}", "*".repeat(chars.len() - 4))
    }

    /// The document body written by persistence backends (no revision).
    pub(crate) fn body(&self) -> serde_json::Result<String> {
        let mut doc = self.clone();
        doc.rev = None;
        serde_json::to_string(&doc)
    }
}

/// CLI overrides applied on top of the stored record.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Model name override.
    pub model: Option<String>,
    /// Proxy URL override. An empty string forces a direct connection.
    pub proxy: Option<String>,
}

/// Merges CLI options over the stored record. CLI options take precedence.
pub fn resolve_config(options: &ResolveOptions, stored: &ConfigRecord) -> ConfigRecord {
    let mut resolved = stored.clone();
    if let Some(model) = options.model.as_ref().filter(|m| !m.trim().is_empty()) {
        resolved.model = model.trim().to_string();
    }
    if let Some(proxy) = &options.proxy {
        resolved.proxy = proxy.trim().to_string();
    }
    resolved
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.id, CONFIG_ID);
        assert_eq!(config.api_key, "");
        assert_eq!(config.proxy, "");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert!(config.rev.is_none());
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_serialized_field_names() {
        let mut config = default_config();
        config.api_key = "key".to_string();
        config.rev = Some("1-abc".to_string());

        let json: serde_json::Value = serde_json::to_value(&config).unwrap();
        assert_eq!(json["_id"], "gemini-translate/config");
        assert_eq!(json["apiKey"], "key");
        assert_eq!(json["model"], "gemini-2.0-flash");
        assert_eq!(json["_rev"], "1-abc");
    }

    #[test]
    fn test_body_omits_revision() {
        let mut config = default_config();
        config.rev = Some("3-deadbeef".to_string());

        let body = config.body().unwrap();
        assert!(!body.contains("_rev"));
        assert!(body.contains("\"_id\":\"gemini-translate/config\""));
    }

    #[test]
    fn test_missing_model_deserializes_to_default() {
        let config: ConfigRecord =
            serde_json::from_str(r#"{"_id":"gemini-translate/config","apiKey":"k"}"#).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.proxy, "");
    }

    #[test]
    fn test_proxy_url() {
        let mut config = default_config();
        assert_eq!(config.proxy_url(), None);

        config.proxy = "   ".to_string();
        assert_eq!(config.proxy_url(), None);

        config.proxy = "http://127.0.0.1:7890".to_string();
        assert_eq!(config.proxy_url(), Some("http://127.0.0.1:7890"));
    }

    #[test]
    fn test_masked_api_key() {
        let mut config = default_config();
        assert_eq!(config.masked_api_key(), "");

        config.api_key = "abc".to_string();
        assert_eq!(config.masked_api_key(), "***");

        config.api_key = "AIzaSyExample1234".to_string();
        assert_eq!(config.masked_api_key(), "*************1234");
    }

    #[test]
    fn test_resolve_config_overrides() {
        let mut stored = default_config();
        stored.proxy = "http://proxy.local:8080".to_string();

        let options = ResolveOptions {
            model: Some("gemini-2.5-pro".to_string()),
            proxy: Some(String::new()),
        };
        let resolved = resolve_config(&options, &stored);

        assert_eq!(resolved.model, "gemini-2.5-pro");
        assert_eq!(resolved.proxy, "");
        assert_eq!(stored.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_resolve_config_falls_back_to_stored() {
        let mut stored = default_config();
        stored.model = "gemini-2.5-flash".to_string();
        stored.proxy = "socks5://127.0.0.1:1080".to_string();

        let resolved = resolve_config(&ResolveOptions::default(), &stored);
        assert_eq!(resolved, stored);
    }

    #[test]
    fn test_resolve_config_ignores_blank_model() {
        let stored = default_config();
        let options = ResolveOptions {
            model: Some("  ".to_string()),
            proxy: None,
        };
        assert_eq!(resolve_config(&options, &stored).model, DEFAULT_MODEL);
    }
}
