//! Command-line interface for reading and writing typed fields.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};

use crate::error::{Result, XmlFieldsError};
use crate::fields;
use crate::value::{FieldValue, Hex};
use crate::xml::{find_by_path, Document, Element, XmlNode};

/// xmlfields - Read and write typed values in XML settings files.
#[derive(Parser)]
#[command(name = "xmlfields")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value of a child element.
    Get {
        /// XML file to read
        file: PathBuf,

        /// Slash-separated path to the parent element, relative to the root ("." for the root)
        parent: String,

        /// Tag name of the child element
        tag: String,

        /// How to interpret the element text
        #[arg(short, long, value_enum, default_value_t = FieldKind::String)]
        kind: FieldKind,

        /// Separator for additive strings
        #[arg(short, long, default_value = ",")]
        separator: String,

        /// Inclusive lower bound for int, uint and float values
        #[arg(long)]
        min: Option<String>,

        /// Inclusive upper bound for int, uint and float values
        #[arg(long)]
        max: Option<String>,
    },

    /// Write the value of a child element and save the file.
    Set {
        /// XML file to modify
        file: PathBuf,

        /// Slash-separated path to the parent element, relative to the root ("." for the root)
        parent: String,

        /// Tag name of the child element
        tag: String,

        /// Value to write
        value: String,

        /// How to interpret the value
        #[arg(short, long, value_enum, default_value_t = FieldKind::String)]
        kind: FieldKind,

        /// Separator for arrays and additive strings
        #[arg(short, long, default_value = ",")]
        separator: String,
    },
}

/// Supported field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldKind {
    Int,
    Uint,
    Long,
    Hex,
    Float,
    Double,
    Bool,
    String,
    Path,
    Date,
    DateTime,
    Array,
    Additive,
}

impl FieldKind {
    /// Name used in error messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => i32::KIND,
            Self::Uint => u32::KIND,
            Self::Long => i64::KIND,
            Self::Hex => Hex::KIND,
            Self::Float => f32::KIND,
            Self::Double => f64::KIND,
            Self::Bool => bool::KIND,
            Self::String => String::KIND,
            Self::Path => "path",
            Self::Date => NaiveDate::KIND,
            Self::DateTime => NaiveDateTime::KIND,
            Self::Array => "array",
            Self::Additive => "additive",
        }
    }
}

/// Optional inclusive bounds for clamped reads, still in text form.
#[derive(Debug, Clone, Default)]
pub struct Bounds {
    pub min: Option<String>,
    pub max: Option<String>,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            file,
            parent,
            tag,
            kind,
            separator,
            min,
            max,
        } => {
            let bounds = Bounds { min, max };
            for line in get_command(&file, &parent, &tag, kind, &separator, &bounds)? {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Set {
            file,
            parent,
            tag,
            value,
            kind,
            separator,
        } => set_command(&file, &parent, &tag, &value, kind, &separator),
    }
}

/// Execute the get command, returning the output lines.
fn get_command(
    file: &Path,
    parent: &str,
    tag: &str,
    kind: FieldKind,
    separator: &str,
    bounds: &Bounds,
) -> Result<Vec<String>> {
    let doc = Document::load(file)?;
    let root = doc.root();
    let node = find_by_path(root, parent).ok_or_else(|| XmlFieldsError::MissingElement {
        element: parent.to_string(),
        context: root.name.clone(),
    })?;

    read_field(node, tag, kind, separator, bounds)?.ok_or_else(|| {
        XmlFieldsError::FieldNotFound {
            tag: tag.to_string(),
            kind: kind.as_str().to_string(),
        }
    })
}

/// Read one field as text lines. Arrays produce one line per entry.
///
/// Bounds are rejected for kinds other than int, uint and float.
pub fn read_field<'a, N: XmlNode<'a>>(
    node: N,
    tag: &str,
    kind: FieldKind,
    separator: &str,
    bounds: &Bounds,
) -> Result<Option<Vec<String>>> {
    let text = |value: Option<String>| -> Result<Option<Vec<String>>> { Ok(value.map(|v| vec![v])) };

    let bounded = matches!(kind, FieldKind::Int | FieldKind::Uint | FieldKind::Float);
    if !bounded && (bounds.min.is_some() || bounds.max.is_some()) {
        return Err(XmlFieldsError::UnsupportedBounds {
            kind: kind.as_str().to_string(),
        });
    }

    match kind {
        FieldKind::Int => {
            let range = parse_bound(bounds.min.as_deref(), kind, i32::MIN)?
                ..=parse_bound(bounds.max.as_deref(), kind, i32::MAX)?;
            text(fields::get_int_clamped(node, tag, range).map(|v| v.to_field_text()))
        }
        FieldKind::Uint => {
            let range = parse_bound(bounds.min.as_deref(), kind, u32::MIN)?
                ..=parse_bound(bounds.max.as_deref(), kind, u32::MAX)?;
            text(fields::get_uint_clamped(node, tag, range).map(|v| v.to_field_text()))
        }
        FieldKind::Float => {
            let range = parse_bound(bounds.min.as_deref(), kind, f32::MIN)?
                ..=parse_bound(bounds.max.as_deref(), kind, f32::MAX)?;
            text(fields::get_float_clamped(node, tag, range).map(|v| v.to_field_text()))
        }
        FieldKind::Long => text(fields::get_long(node, tag).map(|v| v.to_field_text())),
        FieldKind::Hex => text(fields::get_hex(node, tag).map(|v| Hex(v).to_field_text())),
        FieldKind::Double => text(fields::get_double(node, tag).map(|v| v.to_field_text())),
        FieldKind::Bool => text(fields::get_boolean(node, tag).map(|v| v.to_field_text())),
        FieldKind::String => text(fields::get_string(node, tag)),
        FieldKind::Path => text(fields::get_path(node, tag)),
        FieldKind::Date => text(fields::get_date(node, tag).map(|v| v.to_field_text())),
        FieldKind::DateTime => {
            text(fields::get_date_time(node, tag).map(|v| v.to_field_text()))
        }
        FieldKind::Array => Ok(Some(fields::get_string_array(node, tag))),
        FieldKind::Additive => text(fields::get_additive_string(node, tag, separator)),
    }
}

fn parse_bound<T: FieldValue>(bound: Option<&str>, kind: FieldKind, default: T) -> Result<T> {
    match bound {
        Some(text) => parse_value(text, kind),
        None => Ok(default),
    }
}

fn parse_value<T: FieldValue>(text: &str, kind: FieldKind) -> Result<T> {
    T::from_field_text(text).ok_or_else(|| XmlFieldsError::InvalidValue {
        kind: kind.as_str().to_string(),
        value: text.to_string(),
    })
}

/// Execute the set command.
fn set_command(
    file: &Path,
    parent: &str,
    tag: &str,
    value: &str,
    kind: FieldKind,
    separator: &str,
) -> Result<()> {
    let mut doc = Document::load(file)?;
    let root_name = doc.root().name.clone();
    let node = doc
        .root_mut()
        .find_by_path_mut(parent)
        .ok_or_else(|| XmlFieldsError::MissingElement {
            element: parent.to_string(),
            context: root_name,
        })?;

    write_field(node, tag, value, kind, separator)?;
    doc.save(file)?;
    tracing::info!(file = %file.display(), parent, tag, kind = kind.as_str(), "Field written");
    Ok(())
}

/// Validate `value` for `kind` and write it below `node`.
pub fn write_field(
    node: &mut Element,
    tag: &str,
    value: &str,
    kind: FieldKind,
    separator: &str,
) -> Result<()> {
    match kind {
        FieldKind::Int => fields::set_int(node, tag, parse_value(value, kind)?),
        FieldKind::Uint => fields::set_uint(node, tag, parse_value(value, kind)?),
        FieldKind::Long => fields::set_long(node, tag, parse_value(value, kind)?),
        FieldKind::Hex => fields::set_hex(node, tag, parse_value::<Hex>(value, kind)?.0),
        FieldKind::Float => fields::set_float(node, tag, parse_value(value, kind)?),
        FieldKind::Double => fields::set_double(node, tag, parse_value(value, kind)?),
        FieldKind::Bool => fields::set_boolean(node, tag, parse_value(value, kind)?),
        FieldKind::String => fields::set_string(node, tag, value),
        FieldKind::Path => fields::set_path(node, tag, value),
        FieldKind::Date => fields::set_date(node, tag, Some(parse_value(value, kind)?)),
        FieldKind::DateTime => {
            fields::set_date_time(node, tag, Some(parse_value(value, kind)?));
        }
        FieldKind::Array => {
            let values: Vec<&str> = if separator.is_empty() {
                vec![value]
            } else {
                value.split(separator).collect()
            };
            fields::set_string_array(node, tag, &values);
        }
        FieldKind::Additive => fields::set_additive_string(node, tag, separator, value),
    }
    Ok(())
}
