use reqwest::{Client, Proxy, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error as _;
use tracing::debug;

use super::error::TranslateError;
use super::schema::response_schema;

/// Base URL of the Generative Language REST API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

/// A `generateContent` client bound to one base URL and proxy setting.
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    /// Builds a client that connects through `proxy`, or directly when `None`.
    ///
    /// Proxy settings from the environment are never consulted.
    pub fn new(base_url: &str, proxy: Option<&str>) -> Result<Self, TranslateError> {
        let builder = match proxy {
            Some(url) => Client::builder().proxy(Proxy::all(url).map_err(|e| {
                TranslateError::request(None, Some(format!("Invalid proxy '{url}': {e}")))
            })?),
            None => Client::builder().no_proxy(),
        };

        let client = builder
            .build()
            .map_err(|e| TranslateError::request(None, Some(transport_message(e))))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends `prompt` to `model` and returns the first candidate's text.
    pub async fn generate(
        &self,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, TranslateError> {
        let url = self.endpoint_url(model, api_key)?;
        let request = GenerateContentRequest::new(prompt);

        debug!(model, prompt_len = prompt.len(), "Sending generateContent request");

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslateError::request(None, Some(transport_message(e))))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::request(None, Some(transport_message(e))))?;

        debug!(status = status.as_u16(), body_len = body.len(), "Received response");

        if !status.is_success() {
            return Err(TranslateError::request(
                remote_error_message(&body),
                Some(format!(
                    "Request failed with status code {}",
                    status.as_u16()
                )),
            ));
        }

        extract_text(&body)
    }

    fn endpoint_url(&self, model: &str, api_key: &str) -> Result<Url, TranslateError> {
        let model = model.trim();
        let model = model.strip_prefix("models/").unwrap_or(model);

        let mut url = Url::parse(&format!("{}/models/{model}:generateContent", self.base_url))
            .map_err(|e| {
                TranslateError::request(None, Some(format!("Invalid endpoint URL: {e}")))
            })?;
        url.query_pairs_mut().append_pair("key", api_key);

        Ok(url)
    }
}

/// Pulls `candidates[0].content.parts[0].text` out of a success body.
fn extract_text(body: &str) -> Result<String, TranslateError> {
    let response: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        TranslateError::request(
            remote_error_message(body),
            Some(format!("Malformed response body: {e}")),
        )
    })?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| {
            TranslateError::request(
                remote_error_message(body),
                Some("Response contained no generated content".to_string()),
            )
        })
}

/// The service's own `error.message`, if the body carries one.
fn remote_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.error.message)
}

/// Renders a transport error with its causes, minus the URL (which holds the key).
fn transport_message(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut message = err.to_string();

    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request_message(result: Result<String, TranslateError>) -> String {
        match result {
            Err(TranslateError::Request { message }) => message,
            other => panic!("expected a request error, got {other:?}"),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest::new("translate me");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "translate me");
        assert_eq!(json["contents"].as_array().unwrap().len(), 1);
        assert_eq!(json["contents"][0]["parts"].as_array().unwrap().len(), 1);
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["generationConfig"]["responseSchema"], response_schema());
    }

    #[test]
    fn test_endpoint_url() {
        let client = GeminiClient::new("https://example.test/v1beta/", None).unwrap();
        let url = client.endpoint_url("gemini-2.0-flash", "my key").unwrap();

        assert_eq!(
            url.as_str(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent?key=my+key"
        );
    }

    #[test]
    fn test_endpoint_url_strips_models_prefix() {
        let client = GeminiClient::new(DEFAULT_BASE_URL, None).unwrap();
        let url = client.endpoint_url("models/gemini-2.5-pro", "k").unwrap();

        assert_eq!(url.path(), "/v1beta/models/gemini-2.5-pro:generateContent");
    }

    #[test]
    fn test_invalid_proxy_is_request_error() {
        let result = GeminiClient::new(DEFAULT_BASE_URL, Some("::not a url::"));
        assert!(matches!(result, Err(TranslateError::Request { .. })));
    }

    #[test]
    fn test_extract_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"text\":\"hi\",\"translation\":\"嗨\"}"}]}}]}"#;
        assert_eq!(
            extract_text(body).unwrap(),
            r#"{"text":"hi","translation":"嗨"}"#
        );
    }

    #[test]
    fn test_extract_text_uses_first_candidate_and_part() {
        let body = r#"{"candidates":[
            {"content":{"parts":[{"text":"first"},{"text":"second"}]}},
            {"content":{"parts":[{"text":"other"}]}}
        ]}"#;
        assert_eq!(extract_text(body).unwrap(), "first");
    }

    #[test]
    fn test_extract_text_missing_candidates() {
        let message = request_message(extract_text(r#"{"promptFeedback":{}}"#));
        assert!(message.contains("no generated content"));
    }

    #[test]
    fn test_extract_text_empty_parts() {
        let body = r#"{"candidates":[{"content":{"parts":[]}}]}"#;
        assert!(extract_text(body).is_err());

        let body = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        assert!(extract_text(body).is_err());
    }

    #[test]
    fn test_extract_text_malformed_body() {
        let message = request_message(extract_text("<html>bad gateway</html>"));
        assert!(message.contains("Malformed response body"));
    }

    #[test]
    fn test_extract_text_prefers_embedded_error_message() {
        let message = request_message(extract_text(r#"{"error":{"message":"quota exceeded"}}"#));
        assert_eq!(message, "quota exceeded");
    }

    #[test]
    fn test_remote_error_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            remote_error_message(body),
            Some("API key not valid.".to_string())
        );
        assert_eq!(remote_error_message("not json"), None);
        assert_eq!(remote_error_message(r#"{"error":{}}"#), None);
    }
}
