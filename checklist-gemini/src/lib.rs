//! Optional AI path of the script generator, backed by Google Gemini.
//!
//! Callers always get a script back: provider failures are logged and
//! replaced by [`GENERATOR_FALLBACK`].

pub mod backend;
pub mod config;
pub mod error;
pub mod generator;
pub mod prompt;

pub use backend::{CompletionBackend, GeminiBackend};
pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use generator::{ScriptEngine, ScriptGenerator, GENERATOR_FALLBACK};
pub use prompt::build_prompt;
