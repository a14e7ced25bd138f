//! Error types for the pagination layer.

/// Failures surfaced by [`Paginator::fetch_page`](crate::Paginator::fetch_page).
///
/// Nothing is retried or swallowed here; every failure is returned to the
/// caller, which owns retry policy.
#[derive(thiserror::Error, Debug)]
pub enum PaginationError {
    /// The `after` token did not decode to a valid pagination state.
    #[error("An invalid 'after' cursor was provided: {cursor}")]
    InvalidCursor { cursor: String },
    /// The upstream reported an error, or its response was not a page.
    /// Message and code are the upstream's own diagnostics where it
    /// supplied them.
    #[error("Upstream error: {message}")]
    Upstream { message: String, code: Option<i64> },
    /// A transport-level fault below this layer, propagated unclassified.
    #[error(transparent)]
    Transport(#[from] mediagraph_api::Error),
}
