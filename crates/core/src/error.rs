//! Error types for citation formatting.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while formatting citations or expanding dates.
///
/// Ordinary variability in post content (no translation, empty title) is
/// never an error; only structurally invalid input is.
#[derive(Error, Debug)]
pub enum Error {
    /// The month abbreviation is not in the month table.
    #[error("Unknown month abbreviation: {0:?}")]
    UnknownMonth(String),

    /// The timestamp does not have the expected token layout.
    #[error("Malformed timestamp: {0:?}")]
    MalformedTimestamp(String),

    /// A date is not in the expected month-day-year or ISO form.
    #[error("Malformed date: {0:?}")]
    MalformedDate(String),

    /// User handle or post number rejected by strict validation.
    #[error("Malformed citation input: {0}")]
    MalformedInput(String),

    /// The path is not a `/<user>/status/<number>` post path.
    #[error("Not a post status path: {0:?}")]
    MalformedStatusPath(String),

    /// The URL is not a Wayback Machine snapshot URL.
    #[error("Not a Wayback Machine snapshot URL: {0:?}")]
    MalformedArchiveUrl(String),

    /// Configuration could not be parsed or is inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be deserialized.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
