//! Lister configuration.

use crate::organizations::default_organizations;
use url::Url;

/// GitHub REST API root used when none is configured.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Records requested per listing. Only this one page is ever fetched.
pub const DEFAULT_PER_PAGE: u8 = 200;

/// Most records GitHub puts in one page, whatever `per_page` asks for.
pub const GITHUB_MAX_PER_PAGE: u8 = 100;

/// Configuration for a listing run.
#[derive(Debug, Clone)]
pub struct ListerConfig {
    /// Organizations to list, in output order.
    organizations: Vec<String>,
    /// Records requested per organization.
    per_page: u8,
    /// Root of the GitHub REST API.
    api_url: Url,
}

impl ListerConfig {
    /// Creates a configuration for the given organizations with default
    /// page size and API root.
    pub fn new(organizations: Vec<String>) -> Self {
        Self {
            organizations,
            ..Self::default()
        }
    }

    /// Sets the number of records requested per organization.
    pub fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page;
        self
    }

    /// Sets a custom API root (e.g. a GitHub Enterprise host).
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }

    /// Returns the organizations to list.
    pub fn organizations(&self) -> &[String] {
        &self.organizations
    }

    /// Returns the number of records requested per organization.
    pub fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns the API root.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            organizations: default_organizations(),
            per_page: DEFAULT_PER_PAGE,
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
        }
    }
}
