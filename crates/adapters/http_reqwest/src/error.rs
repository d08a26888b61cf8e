//! HTTP adapter error types.

/// Errors raised while building the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid bridge base URL")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The base URL cannot carry a path (e.g. `mailto:`).
    #[error("bridge base URL must be an http(s) URL")]
    UnsupportedBaseUrl,

    /// `reqwest` failed to build its client (TLS backend, …).
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}
