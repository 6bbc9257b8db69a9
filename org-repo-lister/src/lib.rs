#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod lister;
pub mod listing;
pub mod organizations;
pub mod source;
pub mod summary;

pub use config::{load_organizations, validate_organizations, ConfigError};
pub use lister::{list_and_print, Lister, ListerConfig, ListerError};
pub use listing::{decode_listing, ListingError, RepositoryLine, RepositoryRecord};
pub use organizations::{default_organizations, DEFAULT_ORGANIZATIONS};
pub use source::{listing_route, GitHubSource, RepositorySource, SourceError};
pub use summary::ListingSummary;
