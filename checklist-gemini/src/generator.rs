//! Script generation with a guaranteed answer.

use checklist_core::{compose_script, GENERIC_FALLBACK_SCRIPT};

use crate::backend::{CompletionBackend, GeminiBackend};
use crate::config::GeneratorConfig;
use crate::prompt::build_prompt;

/// Returned whenever the provider cannot produce a script.
pub const GENERATOR_FALLBACK: &str = GENERIC_FALLBACK_SCRIPT;

/// Wraps a backend and hides its failures behind [`GENERATOR_FALLBACK`].
#[derive(Clone)]
pub struct ScriptGenerator<B> {
    backend: B,
}

impl<B: CompletionBackend> ScriptGenerator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Ask the backend for a script. Never fails.
    pub async fn generate<S: AsRef<str>>(&self, labels: &[S]) -> String {
        let prompt = build_prompt(labels);
        match self.backend.complete(&prompt).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    tracing::warn!("provider returned blank script, using fallback");
                    GENERATOR_FALLBACK.to_string()
                } else {
                    text.to_string()
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "script generation failed, using fallback");
                GENERATOR_FALLBACK.to_string()
            }
        }
    }
}

impl ScriptGenerator<GeminiBackend> {
    pub fn gemini(config: GeneratorConfig) -> Self {
        Self::new(GeminiBackend::new(config))
    }
}

/// Where scripts come from: the offline templates or a remote generator.
#[derive(Clone)]
pub enum ScriptEngine {
    Template,
    Remote(ScriptGenerator<GeminiBackend>),
}

impl ScriptEngine {
    /// Remote when a key is configured, templates otherwise.
    pub fn from_config(config: GeneratorConfig) -> Self {
        if config.api_key.is_some() {
            ScriptEngine::Remote(ScriptGenerator::gemini(config))
        } else {
            ScriptEngine::Template
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ScriptEngine::Remote(_))
    }

    pub async fn script<S: AsRef<str>>(&self, labels: &[S]) -> String {
        match self {
            ScriptEngine::Template => compose_script(labels),
            ScriptEngine::Remote(generator) => generator.generate(labels).await,
        }
    }
}
