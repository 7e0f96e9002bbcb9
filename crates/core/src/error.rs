//! Error types for presentation conversion.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting or formatting slides.
///
/// Every variant is fatal for the conversion that raised it. Extraction is a
/// deterministic function of its input, so nothing here is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The input is not a presentation package this crate understands.
    #[error("Unsupported or unrecognized file format: {0}")]
    UnsupportedFormat(String),

    /// The package could not be opened, or a slide reference resolves to no content.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A title, subtitle or body shape has no usable text body.
    #[error("Malformed shape '{shape}': {reason}")]
    MalformedShape { shape: String, reason: String },

    /// A picture relationship could not be resolved to resource bytes.
    #[error("Unresolved resource '{rel_id}': {reason}")]
    UnresolvedResource { rel_id: String, reason: String },

    /// ZIP archive error.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    XmlError(String),
}

impl Error {
    /// Build a [`Error::MalformedShape`] for the named shape.
    pub fn malformed_shape(shape: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedShape {
            shape: shape.into(),
            reason: reason.into(),
        }
    }

    /// Build an [`Error::UnresolvedResource`] for a relationship id.
    pub fn unresolved(rel_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnresolvedResource {
            rel_id: rel_id.into(),
            reason: reason.into(),
        }
    }
}
