use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const ENDPOINT_VAR: &str = "GEMINI_ENDPOINT";

/// Settings for the remote script generator.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Credential sent as `x-goog-api-key`. Without it every call falls back.
    #[serde(default)]
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    /// Request timeout in seconds (ignored on wasm32, where fetch has none).
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 20,
        }
    }
}

impl GeneratorConfig {
    /// Defaults overridden by `GEMINI_API_KEY`, `GEMINI_MODEL` and
    /// `GEMINI_ENDPOINT` when set and non-empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(key) = non_empty_var(API_KEY_VAR) {
            config.api_key = Some(key);
        }
        if let Some(model) = non_empty_var(MODEL_VAR) {
            config.model = model;
        }
        if let Some(endpoint) = non_empty_var(ENDPOINT_VAR) {
            config.endpoint = endpoint;
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// `generateContent` URL for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

// The key is never printed.
impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
