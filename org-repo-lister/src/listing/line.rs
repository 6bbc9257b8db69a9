//! Output lines.

use super::{ListingError, RepositoryRecord};
use std::fmt;

/// A printed line: `{organization}/{short_name}, {created_at}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLine {
    /// The queried organization, not the owner reported by the API.
    pub organization: String,

    /// Repository name without its owner prefix.
    pub short_name: String,

    /// Creation timestamp as returned by the API.
    pub created_at: String,
}

impl RepositoryLine {
    /// Builds the line for `record`, listed under `organization`.
    ///
    /// # Errors
    ///
    /// Propagates [`ListingError::MissingOwner`] from the record's short name.
    pub fn from_record(
        organization: &str,
        record: &RepositoryRecord,
    ) -> Result<Self, ListingError> {
        Ok(Self {
            organization: organization.to_string(),
            short_name: record.short_name()?.to_string(),
            created_at: record.created_at.clone(),
        })
    }
}

impl fmt::Display for RepositoryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}, {}",
            self.organization, self.short_name, self.created_at
        )
    }
}
