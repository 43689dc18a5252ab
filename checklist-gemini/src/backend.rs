//! Completion backends: the seam between script generation and a provider.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;

/// Anything that turns a prompt into text.
#[allow(async_fn_in_trait)]
pub trait CompletionBackend {
    async fn complete(&self, prompt: &str) -> Result<String, GeneratorError>;
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        Some(text)
    }
}

/// Google Gemini `generateContent` over HTTPS.
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    config: GeneratorConfig,
}

impl GeminiBackend {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            client: build_client(&config),
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &GeneratorConfig) -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default HTTP client");
            Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_client(_config: &GeneratorConfig) -> Client {
    Client::new()
}

impl CompletionBackend for GeminiBackend {
    async fn complete(&self, prompt: &str) -> Result<String, GeneratorError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(GeneratorError::MissingCredential)?;

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.config.model, "requesting script from Gemini");

        let response = self
            .client
            .post(self.config.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        parse_response(&raw)
    }
}

fn parse_response(raw: &str) -> Result<String, GeneratorError> {
    let parsed: GenerateContentResponse = serde_json::from_str(raw)?;
    parsed
        .into_text()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(GeneratorError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hello" }],
            }],
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"contents":[{"parts":[{"text":"hello"}]}]}"#
        );
    }

    #[test]
    fn first_candidate_text_is_trimmed() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "  I have noticed "}, {"text": "some bleeding.\n"}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        assert_eq!(parse_response(raw).unwrap(), "I have noticed some bleeding.");
    }

    #[test]
    fn blocked_response_is_empty() {
        let raw = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        assert!(matches!(
            parse_response(raw),
            Err(GeneratorError::EmptyResponse)
        ));
    }

    #[test]
    fn backend_keeps_its_config() {
        let config = GeneratorConfig {
            model: "gemini-test".to_string(),
            ..GeneratorConfig::default()
        }
        .with_api_key("secret");
        let backend = GeminiBackend::new(config.clone());
        assert_eq!(backend.config(), &config);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            parse_response("<html>"),
            Err(GeneratorError::ResponseParse(_))
        ));
    }
}
