//! Listing decode error types.

use thiserror::Error;

/// Errors that can occur while decoding a repository listing.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The API answered with an error object instead of a listing.
    #[error("GitHub API returned an error: {message}")]
    Api { message: String },

    /// The body is not JSON, or the records lack `full_name`/`created_at`.
    #[error("Malformed listing body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The body is JSON but neither a listing nor an error object.
    #[error("Expected a JSON array of repositories, got {kind}")]
    UnexpectedShape { kind: &'static str },

    /// A `full_name` without an owner prefix.
    #[error("Repository full name '{full_name}' has no owner prefix")]
    MissingOwner { full_name: String },
}
