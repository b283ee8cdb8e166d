//! Error types for the textual coordinate boundary.

use thiserror::Error;

/// Errors produced when parsing a `"<lat>, <lon>"` pair.
///
/// Parsing only happens at configuration boundaries (CLI flags). The
/// [`crate::LocationStore`] itself treats values as opaque text and never
/// parses or validates them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePositionError {
    /// Input did not contain a comma separator.
    #[error("expected `<lat>,<lon>`, got `{0}`")]
    MissingSeparator(String),

    /// The latitude component was not a decimal number.
    #[error("invalid latitude `{0}`")]
    InvalidLatitude(String),

    /// The longitude component was not a decimal number.
    #[error("invalid longitude `{0}`")]
    InvalidLongitude(String),
}
