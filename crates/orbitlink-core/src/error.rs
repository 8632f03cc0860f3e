//! Error types for Orbitlink

use thiserror::Error;

/// Main error type for Orbitlink operations
///
/// Nothing in the site is fatal: callers log these and degrade the
/// affected feature while the rest of the page keeps working.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Content document could not be parsed
    #[error("Content parse error: {0}")]
    ContentParse(#[from] serde_json::Error),

    /// A node was declared without an id
    #[error("Content node at {path} has an empty id")]
    EmptyNodeId { path: String },

    /// Two nodes share the same id
    #[error("Duplicate content node id: {0}")]
    DuplicateNodeId(String),

    /// Site configuration is unusable
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Fetching a markup fragment failed
    #[error("Template fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Email address rejected by the newsletter form
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// URL could not be parsed or resolved
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Preference storage refused a read or write
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Failure while fetching a markup fragment.
///
/// Cloneable so a single in-flight fetch can be shared by every widget
/// waiting on the same URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),

    /// Request never completed (network down, CORS, aborted)
    #[error("{0}")]
    Transport(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
