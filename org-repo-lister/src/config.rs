//! Organization list configuration.
//!
//! The built-in list can be replaced by a TOML file of the form:
//!
//! ```toml
//! organizations = ["kubernetes", "kubernetes-sigs"]
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading the organization list.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse organizations file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in the organization list.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OrganizationsFile {
    organizations: Vec<String>,
}

/// Loads the organization list from a TOML file, keeping its order.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed, or if the
/// list fails [`validate_organizations`].
pub fn load_organizations(path: &Path) -> Result<Vec<String>, ConfigError> {
    debug!(path = %path.display(), "Loading organizations");

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: OrganizationsFile =
        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

    validate_organizations(&file.organizations, &path.display().to_string())?;
    Ok(file.organizations)
}

/// Validates an organization list.
///
/// `origin` names where the list came from and is only used in errors.
///
/// # Errors
///
/// Returns [`ConfigError::ValidationError`] if the list is empty or a name
/// could not be used as a path segment of the listing route.
pub fn validate_organizations(organizations: &[String], origin: &str) -> Result<(), ConfigError> {
    if organizations.is_empty() {
        return Err(ConfigError::ValidationError {
            path: origin.to_string(),
            message: "organization list must not be empty".to_string(),
        });
    }

    for org in organizations {
        if org.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                path: origin.to_string(),
                message: "organization names must not be empty".to_string(),
            });
        }

        if let Some(c) = org
            .chars()
            .find(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace())
        {
            return Err(ConfigError::ValidationError {
                path: origin.to_string(),
                message: format!("organization '{org}' contains invalid character {c:?}"),
            });
        }
    }

    Ok(())
}
