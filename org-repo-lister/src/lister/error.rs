//! Lister error types.

use crate::config::ConfigError;
use crate::listing::ListingError;
use crate::source::SourceError;

/// Errors that abort a listing run.
#[derive(Debug, thiserror::Error)]
pub enum ListerError {
    /// Invalid organization list.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The listing for an organization could not be fetched.
    #[error("Failed to fetch repositories of '{organization}': {source}")]
    Fetch {
        organization: String,
        #[source]
        source: SourceError,
    },

    /// The listing for an organization could not be decoded.
    #[error("Failed to decode repositories of '{organization}': {source}")]
    Decode {
        organization: String,
        #[source]
        source: ListingError,
    },

    /// Writing an output line failed.
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}
