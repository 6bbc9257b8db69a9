//! Run summary.

use crate::lister::GITHUB_MAX_PER_PAGE;

/// Counts gathered over one listing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingSummary {
    /// Number of organizations whose listing was printed.
    pub organizations_listed: usize,

    /// Number of repository lines written.
    pub repositories_printed: usize,

    /// Lines written per organization, in processing order.
    pub per_organization: Vec<(String, usize)>,
}

impl ListingSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fully printed organization.
    pub fn record_organization(&mut self, organization: &str, repositories: usize) {
        self.organizations_listed += 1;
        self.repositories_printed += repositories;
        self.per_organization
            .push((organization.to_string(), repositories));
    }

    /// Returns the organizations that had no repositories on their page.
    pub fn empty_organizations(&self) -> impl Iterator<Item = &str> {
        self.per_organization
            .iter()
            .filter(|(_, count)| *count == 0)
            .map(|(org, _)| org.as_str())
    }

    /// Returns the organizations whose listing filled a whole page, so later
    /// repositories were probably left out.
    ///
    /// The page size is `requested_per_page` capped at [`GITHUB_MAX_PER_PAGE`].
    pub fn full_page_organizations(&self, requested_per_page: u8) -> impl Iterator<Item = &str> {
        let page = usize::from(requested_per_page.min(GITHUB_MAX_PER_PAGE));
        self.per_organization
            .iter()
            .filter(move |(_, count)| *count > 0 && *count >= page)
            .map(|(org, _)| org.as_str())
    }
}
