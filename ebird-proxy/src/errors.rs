use http::StatusCode;
use thiserror::Error;

/// Errors that can stop the server itself
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while handling a fetch-birds request
///
/// `MissingParams` is rejected before any upstream call and maps to a 400;
/// every other variant maps to the same 500 envelope at the HTTP boundary,
/// so callers cannot tell a configuration failure from an upstream outage.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Missing required parameters: lat, lng")]
    MissingParams,

    #[error("eBird API key not configured")]
    MissingApiKey,

    /// Upstream replied with a non-success status; its body is discarded
    #[error("eBird API error: {status}")]
    UpstreamStatus { status: StatusCode },

    #[error("eBird request failed: {0}")]
    Request(#[from] reqwest::Error),
}
