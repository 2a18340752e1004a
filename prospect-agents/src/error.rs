use thiserror::Error;

/// Failures surfaced by the external search and completion providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Completion contained no text content")]
    EmptyCompletion,
}
