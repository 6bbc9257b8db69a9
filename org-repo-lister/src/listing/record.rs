//! Repository records as returned by the listing endpoint.

use super::ListingError;
use serde::Deserialize;

/// One element of the listing array. Fields other than these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Creation timestamp, echoed verbatim.
    pub created_at: String,
}

impl RepositoryRecord {
    /// Returns the repository name with the owner prefix removed.
    ///
    /// Only the first `/` separates the owner, so `org/team/repo` yields
    /// `team/repo`.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::MissingOwner`] if `full_name` contains no `/`.
    pub fn short_name(&self) -> Result<&str, ListingError> {
        self.full_name
            .split_once('/')
            .map(|(_, name)| name)
            .ok_or_else(|| ListingError::MissingOwner {
                full_name: self.full_name.clone(),
            })
    }
}
