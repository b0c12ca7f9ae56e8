//! Conversion between element text and typed values.
//!
//! [`FieldValue`] is the single place where text formats live: numbers,
//! booleans, hex, dates and date-times. Parse failures are `None`; the
//! accessors in [`crate::fields`] do not distinguish them from absence.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::{DATE_FORMAT, DATE_TIME_FORMAT, HEX_PREFIX};

/// A value that can be stored as the text of an XML element.
pub trait FieldValue: Sized {
    /// Short name used in log messages and CLI errors.
    const KIND: &'static str;

    /// Parse element text. Returns `None` when the text does not hold a value
    /// of this type.
    fn from_field_text(text: &str) -> Option<Self>;

    /// Canonical text form written by setters.
    fn to_field_text(&self) -> String;
}

/// An unsigned 32-bit value written as `0x`-prefixed lowercase hex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hex(pub u32);

impl From<u32> for Hex {
    fn from(value: u32) -> Self {
        Hex(value)
    }
}

impl From<Hex> for u32 {
    fn from(value: Hex) -> Self {
        value.0
    }
}

macro_rules! integer_field_value {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const KIND: &'static str = $kind;

                fn from_field_text(text: &str) -> Option<Self> {
                    text.trim().parse().ok()
                }

                fn to_field_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_field_value!(i32 => "int", u32 => "uint", i64 => "long");

/// Strip a C-style `f` suffix as in `1000.1f`.
fn strip_float_suffix(text: &str) -> &str {
    let text = text.trim();
    text.strip_suffix(['f', 'F']).unwrap_or(text)
}

impl FieldValue for f32 {
    const KIND: &'static str = "float";

    fn from_field_text(text: &str) -> Option<Self> {
        strip_float_suffix(text).parse().ok()
    }

    fn to_field_text(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for f64 {
    const KIND: &'static str = "double";

    fn from_field_text(text: &str) -> Option<Self> {
        strip_float_suffix(text).parse().ok()
    }

    fn to_field_text(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for bool {
    const KIND: &'static str = "bool";

    // Exact match only, surrounding whitespace is not accepted
    fn from_field_text(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("true") {
            Some(true)
        } else if text.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    fn to_field_text(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for Hex {
    const KIND: &'static str = "hex";

    fn from_field_text(text: &str) -> Option<Self> {
        let text = text.trim();
        let digits = text
            .strip_prefix(HEX_PREFIX)
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        // from_str_radix would otherwise accept a sign
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Hex)
    }

    fn to_field_text(&self) -> String {
        format!("{HEX_PREFIX}{:x}", self.0)
    }
}

impl FieldValue for String {
    const KIND: &'static str = "string";

    fn from_field_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }

    fn to_field_text(&self) -> String {
        self.clone()
    }
}

impl FieldValue for NaiveDate {
    const KIND: &'static str = "date";

    fn from_field_text(text: &str) -> Option<Self> {
        NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
    }

    fn to_field_text(&self) -> String {
        self.format(DATE_FORMAT).to_string()
    }
}

impl FieldValue for NaiveDateTime {
    const KIND: &'static str = "date-time";

    fn from_field_text(text: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(text.trim(), DATE_TIME_FORMAT).ok()
    }

    fn to_field_text(&self) -> String {
        self.format(DATE_TIME_FORMAT).to_string()
    }
}
