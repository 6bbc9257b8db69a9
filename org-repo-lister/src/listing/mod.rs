//! Repository listing decoding.
//!
//! Turns the raw body of `GET /orgs/{org}/repos` into repository records and
//! the lines printed for them. Decoding is the only place where a response is
//! judged: an array of records is a success, everything else is a fault.

mod error;
mod line;
mod record;

pub use error::ListingError;
pub use line::RepositoryLine;
pub use record::RepositoryRecord;

use serde::Deserialize;
use serde_json::Value;

/// Error body returned by the GitHub API (not found, rate limited, ...).
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Decodes a listing response body into records, preserving array order.
///
/// An empty array is a valid, empty listing.
///
/// # Errors
///
/// Returns [`ListingError::Api`] when the body is a GitHub error object,
/// [`ListingError::Malformed`] when it is not valid JSON or the records lack
/// the expected fields, and [`ListingError::UnexpectedShape`] for any other
/// top-level JSON value.
pub fn decode_listing(body: &str) -> Result<Vec<RepositoryRecord>, ListingError> {
    let value: Value = serde_json::from_str(body)?;

    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(_) if value.get("message").is_some() => {
            let error: ApiErrorBody = serde_json::from_value(value)?;
            Err(ListingError::Api {
                message: error.message,
            })
        }
        other => Err(ListingError::UnexpectedShape {
            kind: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
