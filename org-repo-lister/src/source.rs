//! Fetching repository listings over HTTP.
//!
//! [`RepositorySource`] hands back the raw listing body for one organization.
//! [`GitHubSource`] is the production implementation on top of `octocrab`;
//! tests substitute canned bodies.

use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Errors that can occur while fetching a listing.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The HTTP client could not be built.
    #[error("Failed to build GitHub client: {0}")]
    Client(#[source] octocrab::Error),

    /// The request could not be sent or no response was received.
    #[error("Request failed: {0}")]
    Request(#[source] octocrab::Error),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[source] octocrab::Error),
}

/// Something that can produce the listing body for an organization.
#[allow(async_fn_in_trait)]
pub trait RepositorySource {
    /// Fetches the raw body of the repository listing for `organization`.
    ///
    /// Implementations make exactly one request per call and do not cache.
    async fn fetch_listing(&self, organization: &str) -> Result<String, SourceError>;
}

/// Builds the listing route for an organization.
///
/// Format: `/orgs/{organization}/repos?per_page={per_page}`
#[must_use]
pub fn listing_route(organization: &str, per_page: u8) -> String {
    format!("/orgs/{organization}/repos?per_page={per_page}")
}

/// Unauthenticated GitHub REST API source.
#[derive(Clone)]
pub struct GitHubSource {
    octocrab: Octocrab,
    per_page: u8,
}

impl GitHubSource {
    /// Builds a source talking to `api_url`, requesting `per_page` records.
    ///
    /// Retries are disabled; every listing costs exactly one request.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Client`] if the client cannot be built.
    pub fn new(api_url: &Url, per_page: u8) -> Result<Self, SourceError> {
        let octocrab = Octocrab::builder()
            .base_uri(api_url.as_str())
            .map_err(SourceError::Client)?
            .add_retry_config(RetryConfig::None)
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self { octocrab, per_page })
    }
}

impl RepositorySource for GitHubSource {
    async fn fetch_listing(&self, organization: &str) -> Result<String, SourceError> {
        let route = listing_route(organization, self.per_page);
        debug!(route = %route, "Requesting repository listing");

        // Raw request: the body is decoded whatever the status turns out to be.
        let response = self
            .octocrab
            ._get(route)
            .await
            .map_err(SourceError::Request)?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Listing received");
        } else {
            warn!(status = status.as_u16(), "Listing request was not successful");
        }

        self.octocrab
            .body_to_string(response)
            .await
            .map_err(SourceError::Body)
    }
}
