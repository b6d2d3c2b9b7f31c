use thiserror::Error;

/// Why a fetch cycle failed. Only logged; users see [`crate::LISTING_FETCH_FAILED`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("service returned status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
