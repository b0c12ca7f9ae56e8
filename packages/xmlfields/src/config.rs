//! Configuration constants and the shared attribute-flag parser.

/// Attribute that resets an additive string at the element carrying it.
pub const CLEAR_ATTRIBUTE: &str = "clear";

/// Attribute marking a path value as percent-encoded.
pub const URLENCODED_ATTRIBUTE: &str = "urlencoded";

/// Canonical date format (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical date-time format (`YYYY-MM-DD HH:MM:SS`).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prefix written in front of hex values.
pub const HEX_PREFIX: &str = "0x";

/// Indentation width (in spaces) used when serializing documents.
pub const INDENT_WIDTH: usize = 2;

/// Attribute values that switch a boolean attribute on.
const TRUTHY_FLAGS: [&str; 4] = ["true", "yes", "on", "1"];

/// Interpret a boolean attribute value such as `clear="true"` or `urlencoded="yes"`.
///
/// Comparison ignores ASCII case and surrounding whitespace. A missing
/// attribute is simply `false`.
///
/// # Examples
/// ```
/// use xmlfields::config::is_truthy_flag;
///
/// assert!(is_truthy_flag(Some("yes")));
/// assert!(is_truthy_flag(Some("TRUE")));
/// assert!(!is_truthy_flag(Some("no")));
/// assert!(!is_truthy_flag(None));
/// ```
pub fn is_truthy_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let v = v.trim();
        TRUTHY_FLAGS.iter().any(|flag| v.eq_ignore_ascii_case(flag))
    })
}
