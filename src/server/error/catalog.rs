use thiserror::Error;

/// Errors from the upstream character catalog.
///
/// A catalog that answers "no such character" is not an error; lookups return `None`
/// for that case.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Failed to make catalog request: {0}")]
    Request(#[from] reqwest::Error),
    /// The catalog answered with a non-success status code.
    #[error("The character catalog returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The catalog answered with a payload that is not the expected JSON shape.
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The configured catalog base URL cannot be used to build request URLs.
    #[error("Invalid catalog base URL {0:?}")]
    InvalidBaseUrl(String),
}
