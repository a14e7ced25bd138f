//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or client setup).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API returned a success status but the body was not the expected
    /// JSON shape.
    #[error("Response body was malformed")]
    MalformedBody,
    /// The API returned an explicit error envelope.
    #[error("Upstream error: {message}")]
    Upstream { message: String, code: Option<i64> },
}
