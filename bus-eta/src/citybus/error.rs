//! Citybus client error types.

/// Errors from building a request out of user parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Neither a route nor a stop ID was given.
    #[error("Please specify --route or --stop-id")]
    MissingTarget,

    /// Listing stops was requested without a route.
    #[error("Please specify --route to list its stops")]
    MissingRoute,
}

/// Errors from the Citybus HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum EtaError {
    /// HTTP request failed (DNS, connection refused, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON envelope
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The operator has no route by this name
    #[error("route {route} not found")]
    RouteNotFound { route: String },
}
