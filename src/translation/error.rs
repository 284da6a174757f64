use thiserror::Error;

/// Failure of a single translation attempt.
#[derive(Error, Debug)]
pub enum TranslateError {
    /// No API key is configured; nothing was sent.
    #[error("API key is not configured. Run 'gtl configure' to set your Gemini API key.")]
    MissingApiKey,

    /// The request failed in transport or was rejected by the service.
    #[error("API request failed: {message}")]
    Request { message: String },
}

/// Placeholder used when neither the service nor the transport says why.
pub const UNKNOWN_ERROR: &str = "unknown error";

impl TranslateError {
    /// Builds a request error, preferring the service's own message over the
    /// transport-level one.
    pub fn request(remote: Option<String>, transport: Option<String>) -> Self {
        let message = [remote, transport]
            .into_iter()
            .flatten()
            .map(|m| m.trim().to_string())
            .find(|m| !m.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

        Self::Request { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: &TranslateError) -> &str {
        match err {
            TranslateError::Request { message } => message,
            TranslateError::MissingApiKey => panic!("expected a request error"),
        }
    }

    #[test]
    fn test_remote_message_wins() {
        let err = TranslateError::request(
            Some("quota exceeded".to_string()),
            Some("request failed with status code 429".to_string()),
        );
        assert_eq!(message(&err), "quota exceeded");
        assert_eq!(err.to_string(), "API request failed: quota exceeded");
    }

    #[test]
    fn test_transport_message_fallback() {
        let err = TranslateError::request(None, Some("connection refused".to_string()));
        assert_eq!(message(&err), "connection refused");

        let err = TranslateError::request(Some("  ".to_string()), Some("timed out".to_string()));
        assert_eq!(message(&err), "timed out");
    }

    #[test]
    fn test_unknown_error_fallback() {
        let err = TranslateError::request(None, None);
        assert_eq!(message(&err), UNKNOWN_ERROR);

        let err = TranslateError::request(Some(String::new()), Some(String::new()));
        assert_eq!(message(&err), UNKNOWN_ERROR);
    }

    #[test]
    fn test_missing_api_key_message() {
        let msg = TranslateError::MissingApiKey.to_string();
        assert!(msg.contains("API key"));
        assert!(msg.contains("gtl configure"));
    }
}
