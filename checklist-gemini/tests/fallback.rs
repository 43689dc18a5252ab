use std::cell::RefCell;

use checklist_core::compose_script;
use checklist_gemini::{
    CompletionBackend, GeminiBackend, GeneratorConfig, GeneratorError, ScriptEngine,
    ScriptGenerator, GENERATOR_FALLBACK,
};

struct FailingBackend;

impl CompletionBackend for FailingBackend {
    async fn complete(&self, _prompt: &str) -> Result<String, GeneratorError> {
        Err(GeneratorError::Status {
            status: 403,
            body: "API key not valid".to_string(),
        })
    }
}

/// Replies with a fixed text and remembers the prompts it saw.
struct CannedBackend {
    reply: &'static str,
    prompts: RefCell<Vec<String>>,
}

impl CannedBackend {
    fn new(reply: &'static str) -> Self {
        Self {
            reply,
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl CompletionBackend for CannedBackend {
    async fn complete(&self, prompt: &str) -> Result<String, GeneratorError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.reply.to_string())
    }
}

#[tokio::test]
async fn provider_error_becomes_fallback() {
    let generator = ScriptGenerator::new(FailingBackend);
    assert_eq!(generator.generate(&["History of HPV"]).await, GENERATOR_FALLBACK);
    assert_eq!(generator.generate::<&str>(&[]).await, GENERATOR_FALLBACK);
}

#[tokio::test]
async fn reply_is_trimmed_and_prompt_lists_labels() {
    let generator = ScriptGenerator::new(CannedBackend::new(
        "\n  I've noticed some changes and would like an Anal Pap.  \n",
    ));
    let script = generator
        .generate(&["Changes in Bowel Habits", "Persistent Itching"])
        .await;

    assert_eq!(script, "I've noticed some changes and would like an Anal Pap.");

    let prompts = generator.backend().prompts.borrow();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Changes in Bowel Habits and Persistent Itching"));
}

#[tokio::test]
async fn blank_reply_becomes_fallback() {
    let generator = ScriptGenerator::new(CannedBackend::new("   "));
    assert_eq!(generator.generate(&["History of HPV"]).await, GENERATOR_FALLBACK);
}

#[tokio::test]
async fn missing_key_never_reaches_the_network() {
    let generator = ScriptGenerator::new(GeminiBackend::new(GeneratorConfig::default()));
    assert_eq!(
        generator.generate(&["Persistent Itching"]).await,
        GENERATOR_FALLBACK
    );
}

#[tokio::test]
async fn unreachable_provider_becomes_fallback() {
    let config = GeneratorConfig {
        endpoint: "http://127.0.0.1:9/v1beta".to_string(),
        timeout_secs: 2,
        ..GeneratorConfig::default()
    }
    .with_api_key("test-key");

    let generator = ScriptGenerator::gemini(config);
    assert_eq!(
        generator.generate(&["Persistent Itching"]).await,
        GENERATOR_FALLBACK
    );
}

#[tokio::test]
async fn engine_without_key_uses_templates() {
    let engine = ScriptEngine::from_config(GeneratorConfig::default());
    assert!(!engine.is_remote());

    let labels = ["Bleeding (Thought it was hemorrhoids?)"];
    assert_eq!(engine.script(&labels).await, compose_script(&labels));
}
