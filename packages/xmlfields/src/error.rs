//! Error types for document handling and the command-line tool.
//!
//! The typed accessors in [`crate::fields`] never fail; they report absence
//! through `Option`. Errors only arise when parsing, loading or saving a
//! document, and when the CLI cannot satisfy a request.

use thiserror::Error;

/// Main error type for the xmlfields library.
#[derive(Debug, Error)]
pub enum XmlFieldsError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// XML serialization failed.
    #[error("XML serialization failed: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    /// Serialized output was not valid UTF-8.
    #[error("Serialized XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// An element on the requested parent path does not exist.
    #[error("Missing XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// The requested field is absent or could not be read as the requested kind.
    #[error("No {kind} value found for <{tag}>")]
    FieldNotFound { tag: String, kind: String },

    /// A value supplied for writing does not match the requested kind.
    #[error("Invalid {kind} value: '{value}'")]
    InvalidValue { kind: String, value: String },

    /// `--min`/`--max` were given for a kind that is not read with bounds.
    #[error("Bounds are only supported for int, uint and float values, not {kind}")]
    UnsupportedBounds { kind: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for xmlfields operations.
pub type Result<T> = std::result::Result<T, XmlFieldsError>;
