use thiserror::Error;

/// Failure talking to the recipe catalog
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Catalog returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Recipe not found: {0}")]
    NotFound(String),
}
