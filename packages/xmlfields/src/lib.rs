//! xmlfields - Typed accessors for named child elements of an XML tree.
//!
//! Settings files are commonly written as flat lists of child elements
//! (`<volume>80</volume>`, `<enabled>true</enabled>`). This crate reads and
//! writes such fields as integers, floats, booleans, hex values, dates,
//! strings, paths, string arrays and additive strings.
//!
//! # Example
//!
//! ```
//! use xmlfields::fields;
//! use xmlfields::xml::Document;
//!
//! let doc = Document::parse("<settings><delay>0x1F</delay></settings>").unwrap();
//! assert_eq!(fields::get_hex(doc.root(), "delay"), Some(31));
//! assert_eq!(fields::get_int(doc.root(), "missing"), None);
//! ```
//!
//! # Architecture
//!
//! - [`fields`]: Typed getters and setters
//! - [`value`]: Text conversions for each supported type
//! - [`xml`]: DOM capability traits, owned element tree and lookup helpers
//! - [`config`]: Attribute vocabulary and formats
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod fields;
pub mod value;
pub mod xml;

// Re-export commonly used items
pub use error::{Result, XmlFieldsError};
pub use value::{FieldValue, Hex};
pub use xml::{Document, Element, XmlNode, XmlNodeMut};
