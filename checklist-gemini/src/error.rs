use thiserror::Error;

/// Failures of the remote script call. None of these reach the user; the
/// generator turns every one of them into the fallback script.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("no API key configured")]
    MissingCredential,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider response contained no text")]
    EmptyResponse,

    #[error("response parsing failed: {0}")]
    ResponseParse(#[from] serde_json::Error),
}
