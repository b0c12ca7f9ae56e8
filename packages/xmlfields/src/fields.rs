//! Typed getters and setters for named child elements.
//!
//! Getters look up the first direct child with the given tag (all of them for
//! arrays and additive strings) and return `None` when it is missing or its
//! text does not hold a value of the requested type. The two cases are
//! deliberately indistinguishable. Callers that keep a pre-initialized value
//! on failure use [`assign`].
//!
//! Singular setters overwrite the first matching child in place, or append a
//! new child when there is none. Array and additive setters always append.
//!
//! # Example
//!
//! ```
//! use xmlfields::fields;
//! use xmlfields::xml::Document;
//!
//! let mut doc = Document::parse("<settings><volume>80</volume></settings>").unwrap();
//!
//! let mut volume = 100;
//! assert!(fields::assign(&mut volume, fields::get_int_clamped(doc.root(), "volume", 0..=100)));
//! assert_eq!(volume, 80);
//!
//! fields::set_int(doc.root_mut(), "volume", 60);
//! assert_eq!(fields::get_int(doc.root(), "volume"), Some(60));
//! ```

use std::fmt::Debug;
use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::{is_truthy_flag, CLEAR_ATTRIBUTE, URLENCODED_ATTRIBUTE};
use crate::value::{FieldValue, Hex};
use crate::xml::{find_child, find_children, get_attribute, XmlNode, XmlNodeMut};

/// Store `value` into `slot` if present, leaving `slot` untouched otherwise.
///
/// Returns whether a value was stored.
pub fn assign<T>(slot: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) => {
            *slot = value;
            true
        }
        None => false,
    }
}

/// Read the first child `tag` as any [`FieldValue`].
pub fn get_value<'a, T, N>(node: N, tag: &str) -> Option<T>
where
    T: FieldValue,
    N: XmlNode<'a>,
{
    let text = find_child(node, tag)?.text_content();
    let value = T::from_field_text(text);
    if value.is_none() {
        tracing::debug!(tag, text, kind = T::KIND, "Element text is not a valid value");
    }
    value
}

/// Write `value` as the text of the first child `tag`, creating it if needed.
pub fn set_value<T, N>(node: &mut N, tag: &str, value: &T)
where
    T: FieldValue,
    N: XmlNodeMut + ?Sized,
{
    set_text(node, tag, &value.to_field_text());
}

fn set_text<N: XmlNodeMut + ?Sized>(node: &mut N, tag: &str, text: &str) {
    if !node.set_child_text(tag, text) {
        node.append_child_text(tag, text);
    }
}

fn clamp_to<T>(tag: &str, value: T, range: &RangeInclusive<T>) -> T
where
    T: PartialOrd + Copy + Debug,
{
    let clamped = if value < *range.start() {
        *range.start()
    } else if value > *range.end() {
        *range.end()
    } else {
        return value;
    };
    tracing::debug!(tag, value = ?value, clamped = ?clamped, "Value out of range, clamping");
    clamped
}

pub fn get_int<'a, N: XmlNode<'a>>(node: N, tag: &str) -> Option<i32> {
    get_value(node, tag)
}

/// Like [`get_int`], clamping an out-of-range value to the nearest bound.
pub fn get_int_clamped<'a, N: XmlNode<'a>>(
    node: N,
    tag: &str,
    range: RangeInclusive<i32>,
) -> Option<i32> {
    get_int(node, tag).map(|value| clamp_to(tag, value, &range))
}

pub fn get_uint<'a, N: XmlNode<'a>>(node: N, tag: &str) -> Option<u32> {
    get_value(node, tag)
}

/// Like [`get_uint`], clamping an out-of-range value to the nearest bound.
pub fn get_uint_clamped<'a, N: XmlNode<'a>>(
    node: N,
    tag: &str,
    range: RangeInclusive<u32>,
) -> Option<u32> {
    get_uint(node, tag).map(|value| clamp_to(tag, value, &range))
}

pub fn get_long<'a, N: XmlNode<'a>>(node: N, tag: &str) -> Option<i64> {
    get_value(node, tag)
}

/// Read a hex value such as `0xFF` or `ff`.
pub fn get_hex<'a, N: XmlNode<'a>>(node: N, tag: &str) -> Option<u32> {
    get_value::<Hex, _>(node, tag).map(u32::from)
}

pub fn get_float<'a, N: XmlNode<'a>>(node: N, tag: &str) -> Option<f32> {
    get_value(node, tag)
}

/// Like [`get_float`], clamping an out-of-range value to the nearest bound.
pub fn get_float_clamped<'a, N: XmlNode<'a>>(
    node: N,
    tag: &str,
    range: RangeInclusive<f32>,
) -> Option<f32> {
    get_float(node, tag).map(|value| clamp_to(tag, value, &range))
}

pub fn get_double<'a, N: XmlNode<'a>>(node: N, tag: &str) -> Option<f64> {
    get_value(node, tag)
}

/// Read `true` or `false` (ASCII case-insensitive). Any other text is `None`.
pub fn get_boolean<'a, N: XmlNode<'a>>(node: N, tag: &str) -> Option<bool> {
    get_value(node, tag)
}

/// Read the raw text of the first child `tag`; an empty element yields `""`.
pub fn get_string<'a, N: XmlNode<'a>>(node: N, tag: &str) -> Option<String> {
    get_value(node, tag)
}

/// Read a path, percent-decoding it when the element is marked `urlencoded`.
pub fn get_path<'a, N: XmlNode<'a>>(node: N, tag: &str) -> Option<String> {
    let child = find_child(node, tag)?;
    let text = child.text_content();
    if !is_truthy_flag(get_attribute(child, URLENCODED_ATTRIBUTE)) {
        return Some(text.to_string());
    }

    let decoded = match urlencoding::decode(text) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::debug!(tag, error = %e, "Decoded path is not valid UTF-8");
            String::from_utf8_lossy(&urlencoding::decode_binary(text.as_bytes())).into_owned()
        }
    };
    Some(decoded)
}

/// Read a `YYYY-MM-DD` date.
pub fn get_date<'a, N: XmlNode<'a>>(node: N, tag: &str) -> Option<NaiveDate> {
    get_value(node, tag)
}

/// Read a `YYYY-MM-DD HH:MM:SS` date-time.
pub fn get_date_time<'a, N: XmlNode<'a>>(node: N, tag: &str) -> Option<NaiveDateTime> {
    get_value(node, tag)
}

/// Collect the text of every child `tag` in document order.
///
/// Returns an empty vector, not `None`, when there are no matches.
pub fn get_string_array<'a, N: XmlNode<'a>>(node: N, tag: &str) -> Vec<String> {
    find_children(node, tag)
        .map(|child| child.text_content().to_string())
        .collect()
}

/// Like [`get_string_array`], additionally splitting each child's text on
/// `separator`. Empty pieces are skipped.
pub fn get_string_array_split<'a, N: XmlNode<'a>>(
    node: N,
    tag: &str,
    separator: &str,
) -> Vec<String> {
    let mut values = Vec::new();
    for child in find_children(node, tag) {
        let text = child.text_content();
        if separator.is_empty() {
            values.push(text.to_string());
        } else {
            values.extend(text.split(separator).map(str::to_string));
        }
    }
    values.retain(|value| !value.is_empty());
    values
}

/// Join the text of every child `tag` with `separator`.
///
/// A contributing child with a truthy `clear` attribute discards everything
/// accumulated before it. Children without text are skipped entirely, their
/// `clear` attribute included. Returns `None` when no child contributed text.
///
/// # Examples
/// ```
/// use xmlfields::fields::get_additive_string;
/// use xmlfields::xml::Document;
///
/// let doc = Document::parse(
///     r#"<root><ext>.mkv</ext><ext clear="true">.mp4</ext><ext>.avi</ext></root>"#,
/// )
/// .unwrap();
/// assert_eq!(get_additive_string(doc.root(), "ext", "|").as_deref(), Some(".mp4|.avi"));
/// ```
pub fn get_additive_string<'a, N: XmlNode<'a>>(
    node: N,
    tag: &str,
    separator: &str,
) -> Option<String> {
    let mut pieces: Vec<&str> = Vec::new();
    for child in find_children(node, tag) {
        let text = child.text_content();
        if text.is_empty() {
            continue;
        }
        if is_truthy_flag(get_attribute(child, CLEAR_ATTRIBUTE)) {
            pieces.clear();
        }
        pieces.push(text);
    }
    (!pieces.is_empty()).then(|| pieces.join(separator))
}

pub fn set_int<N: XmlNodeMut + ?Sized>(node: &mut N, tag: &str, value: i32) {
    set_value(node, tag, &value);
}

pub fn set_uint<N: XmlNodeMut + ?Sized>(node: &mut N, tag: &str, value: u32) {
    set_value(node, tag, &value);
}

pub fn set_long<N: XmlNodeMut + ?Sized>(node: &mut N, tag: &str, value: i64) {
    set_value(node, tag, &value);
}

/// Write `value` as `0x`-prefixed lowercase hex.
pub fn set_hex<N: XmlNodeMut + ?Sized>(node: &mut N, tag: &str, value: u32) {
    set_value(node, tag, &Hex(value));
}

pub fn set_float<N: XmlNodeMut + ?Sized>(node: &mut N, tag: &str, value: f32) {
    set_value(node, tag, &value);
}

pub fn set_double<N: XmlNodeMut + ?Sized>(node: &mut N, tag: &str, value: f64) {
    set_value(node, tag, &value);
}

pub fn set_boolean<N: XmlNodeMut + ?Sized>(node: &mut N, tag: &str, value: bool) {
    set_value(node, tag, &value);
}

pub fn set_string<N: XmlNodeMut + ?Sized>(node: &mut N, tag: &str, value: &str) {
    set_text(node, tag, value);
}

/// Write a path in plain form. The `urlencoded` attribute is never set.
pub fn set_path<N: XmlNodeMut + ?Sized>(node: &mut N, tag: &str, value: &str) {
    set_text(node, tag, value);
}

/// Write a date, or clear the text of an existing child when `value` is `None`.
pub fn set_date<N: XmlNodeMut + ?Sized>(node: &mut N, tag: &str, value: Option<NaiveDate>) {
    match value {
        Some(date) => set_value(node, tag, &date),
        None => {
            node.set_child_text(tag, "");
        }
    }
}

/// Write a date-time, or clear the text of an existing child when `value` is `None`.
pub fn set_date_time<N: XmlNodeMut + ?Sized>(
    node: &mut N,
    tag: &str,
    value: Option<NaiveDateTime>,
) {
    match value {
        Some(date_time) => set_value(node, tag, &date_time),
        None => {
            node.set_child_text(tag, "");
        }
    }
}

/// Append one child `tag` per entry. Existing children are kept.
pub fn set_string_array<N, S>(node: &mut N, tag: &str, values: &[S])
where
    N: XmlNodeMut + ?Sized,
    S: AsRef<str>,
{
    for value in values {
        node.append_child_text(tag, value.as_ref());
    }
}

/// Split `value` on `separator` and append one child `tag` per segment.
///
/// An empty `value` appends nothing; an empty `separator` stores `value`
/// as a single child. No `clear` attribute is written.
pub fn set_additive_string<N: XmlNodeMut + ?Sized>(
    node: &mut N,
    tag: &str,
    separator: &str,
    value: &str,
) {
    if value.is_empty() {
        return;
    }
    if separator.is_empty() {
        node.append_child_text(tag, value);
        return;
    }
    for segment in value.split(separator) {
        node.append_child_text(tag, segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{Document, Element};
    use pretty_assertions::assert_eq;

    fn parse(xml: &str) -> Document {
        Document::parse(xml).unwrap()
    }

    fn five_nodes(third_attribute: &str) -> String {
        format!(
            "<root>\n  <node>some string1</node>\n  <node>some string2</node>\n  \
             <node{third_attribute}>some string3</node>\n  <node>some string4</node>\n  \
             <node>some string5</node>\n</root>\n"
        )
    }

    #[test]
    fn test_assign_leaves_slot_untouched_on_none() {
        let mut value = 42;
        assert!(!assign(&mut value, None));
        assert_eq!(value, 42);
        assert!(assign(&mut value, Some(7)));
        assert_eq!(value, 7);
    }

    #[test]
    fn test_get_hex() {
        let doc = parse("<root><node>0xFF</node></root>");
        assert_eq!(get_hex(doc.root(), "node"), Some(0xFF));
    }

    #[test]
    fn test_get_uint() {
        let doc = parse("<root><node>1000</node></root>");
        assert_eq!(get_uint(doc.root(), "node"), Some(1000));
    }

    #[test]
    fn test_get_long() {
        let doc = parse("<root><node>1000</node></root>");
        assert_eq!(get_long(doc.root(), "node"), Some(1000));
    }

    #[test]
    fn test_get_float() {
        let doc = parse("<root><node>1000.1f</node></root>");
        assert_eq!(get_float(doc.root(), "node"), Some(1000.1));
        assert_eq!(
            get_float_clamped(doc.root(), "node", 1000.0..=1000.2),
            Some(1000.1)
        );
    }

    #[test]
    fn test_get_double() {
        let doc = parse("<root><node>1000.1f</node></root>");
        let value = get_double(doc.root(), "node").unwrap();
        assert_eq!(format!("{value:.6}"), "1000.100000");
    }

    #[test]
    fn test_get_int() {
        let doc = parse("<root><node>1000</node></root>");
        assert_eq!(get_int(doc.root(), "node"), Some(1000));
        assert_eq!(get_int_clamped(doc.root(), "node", 999..=1001), Some(1000));
    }

    #[test]
    fn test_clamped_getters_clamp_to_nearest_bound() {
        let doc = parse("<root><low>-5</low><high>500</high><f>2.5</f></root>");
        assert_eq!(get_int_clamped(doc.root(), "low", 0..=100), Some(0));
        assert_eq!(get_int_clamped(doc.root(), "high", 0..=100), Some(100));
        assert_eq!(get_uint_clamped(doc.root(), "high", 10..=20), Some(20));
        assert_eq!(get_float_clamped(doc.root(), "f", 0.0..=1.0), Some(1.0));
        assert_eq!(get_float_clamped(doc.root(), "f", 3.0..=4.0), Some(3.0));
    }

    #[test]
    fn test_clamped_getter_unparsable_is_none() {
        let doc = parse("<root><node>loud</node></root>");
        assert_eq!(get_int_clamped(doc.root(), "node", 0..=100), None);
    }

    #[test]
    fn test_get_boolean() {
        let doc = parse("<root><a>true</a><b>FALSE</b><c>yes</c><d>1</d></root>");
        assert_eq!(get_boolean(doc.root(), "a"), Some(true));
        assert_eq!(get_boolean(doc.root(), "b"), Some(false));
        assert_eq!(get_boolean(doc.root(), "c"), None);
        assert_eq!(get_boolean(doc.root(), "d"), None);

        let doc = parse("<root><node> true </node></root>");
        assert_eq!(get_boolean(doc.root(), "node"), None);
    }

    #[test]
    fn test_get_string() {
        let doc = parse("<root><node>some string</node><empty/></root>");
        assert_eq!(
            get_string(doc.root(), "node").as_deref(),
            Some("some string")
        );
        assert_eq!(get_string(doc.root(), "empty").as_deref(), Some(""));
    }

    #[test]
    fn test_get_additive_string() {
        let doc = parse(&five_nodes(""));
        assert_eq!(
            get_additive_string(doc.root(), "node", ",").as_deref(),
            Some("some string1,some string2,some string3,some string4,some string5")
        );

        let doc = parse(&five_nodes(r#" clear="true""#));
        assert_eq!(
            get_additive_string(doc.root(), "node", ",").as_deref(),
            Some("some string3,some string4,some string5")
        );
    }

    #[test]
    fn test_get_additive_string_edge_cases() {
        let doc = parse(r#"<root><node>a</node><node/><node>b</node><node clear="yes"/></root>"#);
        assert_eq!(get_additive_string(doc.root(), "node", ",").as_deref(), Some("a,b"));
        assert_eq!(get_additive_string(doc.root(), "missing", ","), None);

        let doc = parse("<root><node/><node></node></root>");
        assert_eq!(get_additive_string(doc.root(), "node", ","), None);

        let doc = parse(r#"<root><node>a</node><node>b</node><node clear="true"/></root>"#);
        assert_eq!(get_additive_string(doc.root(), "node", ",").as_deref(), Some("a,b"));

        let doc = parse(r#"<root><node>a</node><node clear="false">b</node></root>"#);
        assert_eq!(get_additive_string(doc.root(), "node", "+").as_deref(), Some("a+b"));
    }

    #[test]
    fn test_get_string_array() {
        let doc = parse(&five_nodes(""));
        assert_eq!(
            get_string_array(doc.root(), "node"),
            [
                "some string1",
                "some string2",
                "some string3",
                "some string4",
                "some string5"
            ]
        );
    }

    #[test]
    fn test_get_string_array_ignores_clear() {
        let doc = parse(&five_nodes(r#" clear="true""#));
        assert_eq!(get_string_array(doc.root(), "node").len(), 5);
    }

    #[test]
    fn test_get_string_array_empty() {
        let doc = parse("<root><other/></root>");
        assert!(get_string_array(doc.root(), "node").is_empty());
    }

    #[test]
    fn test_get_string_array_split() {
        let doc = parse("<root><ext>.mkv|.avi</ext><ext>.mp4</ext><ext/></root>");
        assert_eq!(
            get_string_array_split(doc.root(), "ext", "|"),
            [".mkv", ".avi", ".mp4"]
        );
        assert_eq!(
            get_string_array_split(doc.root(), "ext", ""),
            [".mkv|.avi", ".mp4"]
        );
    }

    #[test]
    fn test_get_path() {
        let doc = parse(r#"<root><node urlencoded="yes">special://xbmc/</node></root>"#);
        assert_eq!(
            get_path(doc.root(), "node").as_deref(),
            Some("special://xbmc/")
        );

        let doc = parse("<root><node>special://xbmcbin/</node></root>");
        assert_eq!(
            get_path(doc.root(), "node").as_deref(),
            Some("special://xbmcbin/")
        );
    }

    #[test]
    fn test_get_path_decodes_only_when_marked() {
        let doc = parse(
            r#"<root><enc urlencoded="true">smb%3A%2F%2Fnas%2Fmy%20movies</enc><plain>a%20b</plain></root>"#,
        );
        assert_eq!(
            get_path(doc.root(), "enc").as_deref(),
            Some("smb://nas/my movies")
        );
        assert_eq!(get_path(doc.root(), "plain").as_deref(), Some("a%20b"));
    }

    #[test]
    fn test_get_date() {
        let doc = parse("<root><node>2012-07-08</node></root>");
        assert_eq!(get_date(doc.root(), "node"), NaiveDate::from_ymd_opt(2012, 7, 8));
    }

    #[test]
    fn test_get_date_time() {
        let doc = parse("<root><node>2012-07-08 01:02:03</node></root>");
        let expected = NaiveDate::from_ymd_opt(2012, 7, 8).and_then(|d| d.and_hms_opt(1, 2, 3));
        assert_eq!(get_date_time(doc.root(), "node"), expected);
    }

    #[test]
    fn test_invalid_date_is_none() {
        let doc = parse("<root><node>not a date</node></root>");
        assert_eq!(get_date(doc.root(), "node"), None);
        assert_eq!(get_date_time(doc.root(), "node"), None);
    }

    #[test]
    fn test_missing_tag_leaves_output_unchanged() {
        let doc = parse("<root><other>1</other></root>");
        let mut value = 5;
        assert!(!assign(&mut value, get_int(doc.root(), "node")));
        assert_eq!(value, 5);

        let mut text = "default".to_string();
        assert!(!assign(&mut text, get_string(doc.root(), "node")));
        assert_eq!(text, "default");
    }

    #[test]
    fn test_unparsable_is_none() {
        let doc = parse("<root><node>abc</node></root>");
        assert_eq!(get_int(doc.root(), "node"), None);
        assert_eq!(get_hex(doc.root(), "node"), Some(0xABC));
        assert_eq!(get_float(doc.root(), "node"), None);
    }

    #[test]
    fn test_getters_work_on_roxmltree() {
        let xml = "<root><node>0x1f</node><flag>true</flag></root>";
        let doc = roxmltree::Document::parse(xml).unwrap();
        assert_eq!(get_hex(doc.root_element(), "node"), Some(31));
        assert_eq!(get_boolean(doc.root_element(), "flag"), Some(true));
    }

    #[test]
    fn test_set_string() {
        let mut root = Element::new("root");
        set_string(&mut root, "node", "some string");
        assert_eq!(get_string(&root, "node").as_deref(), Some("some string"));
    }

    #[test]
    fn test_set_additive_string() {
        let mut root = Element::new("root");
        set_additive_string(
            &mut root,
            "node",
            ",",
            "some string1,some string2,some string3,some string4,some string5",
        );
        assert_eq!(get_string_array(&root, "node").len(), 5);
        assert_eq!(
            get_additive_string(&root, "node", ",").as_deref(),
            Some("some string1,some string2,some string3,some string4,some string5")
        );
    }

    #[test]
    fn test_set_additive_string_edge_cases() {
        let mut root = Element::new("root");
        set_additive_string(&mut root, "node", ",", "");
        assert!(get_string_array(&root, "node").is_empty());

        set_additive_string(&mut root, "node", "", "a,b");
        assert_eq!(get_string_array(&root, "node"), ["a,b"]);
    }

    #[test]
    fn test_set_string_array() {
        let values = [
            "some string1",
            "some string2",
            "some string3",
            "some string4",
            "some string5",
        ];
        let mut root = Element::new("root");
        set_string_array(&mut root, "node", &values);
        assert_eq!(get_string_array(&root, "node"), values);
    }

    #[test]
    fn test_set_string_array_appends() {
        let mut root = Element::new("root");
        set_string_array(&mut root, "node", &["a"]);
        set_string_array(&mut root, "node", &["b", "c"]);
        assert_eq!(get_string_array(&root, "node"), ["a", "b", "c"]);
    }

    #[test]
    fn test_set_int() {
        let mut root = Element::new("root");
        set_int(&mut root, "node", 1000);
        assert_eq!(get_int(&root, "node"), Some(1000));
    }

    #[test]
    fn test_set_uint() {
        let mut root = Element::new("root");
        set_uint(&mut root, "node", u32::MAX);
        assert_eq!(get_uint(&root, "node"), Some(u32::MAX));
    }

    #[test]
    fn test_set_float() {
        let mut root = Element::new("root");
        set_float(&mut root, "node", 1000.1);
        assert_eq!(get_float(&root, "node"), Some(1000.1));
    }

    #[test]
    fn test_set_double() {
        let mut root = Element::new("root");
        set_double(&mut root, "node", 0.1 + 0.2);
        assert_eq!(get_double(&root, "node"), Some(0.1 + 0.2));
    }

    #[test]
    fn test_set_boolean() {
        let mut root = Element::new("root");
        set_boolean(&mut root, "node", true);
        assert_eq!(get_boolean(&root, "node"), Some(true));
    }

    #[test]
    fn test_set_hex() {
        let mut root = Element::new("root");
        set_hex(&mut root, "node", 0xFF);
        assert_eq!(get_string(&root, "node").as_deref(), Some("0xff"));
        assert_eq!(get_hex(&root, "node"), Some(0xFF));
    }

    #[test]
    fn test_set_path() {
        let mut root = Element::new("root");
        set_path(&mut root, "node", "special://xbmc/");
        assert_eq!(get_path(&root, "node").as_deref(), Some("special://xbmc/"));
        assert_eq!(root.child("node").and_then(|n| n.attribute("urlencoded")), None);
    }

    #[test]
    fn test_set_long() {
        let mut root = Element::new("root");
        set_long(&mut root, "node", 1000);
        assert_eq!(get_long(&root, "node"), Some(1000));
    }

    #[test]
    fn test_set_date() {
        let date = NaiveDate::from_ymd_opt(2012, 7, 8);
        let mut root = Element::new("root");
        set_date(&mut root, "node", date);
        assert_eq!(get_date(&root, "node"), date);
    }

    #[test]
    fn test_set_date_time() {
        let date_time = NaiveDate::from_ymd_opt(2012, 7, 8).and_then(|d| d.and_hms_opt(1, 2, 3));
        let mut root = Element::new("root");
        set_date_time(&mut root, "node", date_time);
        assert_eq!(get_date_time(&root, "node"), date_time);
    }

    #[test]
    fn test_set_date_none() {
        let mut root = Element::new("root");
        set_date(&mut root, "node", None);
        assert!(root.child("node").is_none());

        set_date(&mut root, "node", NaiveDate::from_ymd_opt(2012, 7, 8));
        set_date(&mut root, "node", None);
        assert_eq!(get_string(&root, "node").as_deref(), Some(""));
        assert_eq!(get_date(&root, "node"), None);

        set_date_time(&mut root, "stamp", None);
        assert!(root.child("stamp").is_none());
    }

    #[test]
    fn test_scalar_setter_overwrites_in_place() {
        let mut doc = parse("<root><node>1</node><other/><node>2</node></root>");
        set_int(doc.root_mut(), "node", 3);
        assert_eq!(get_string_array(doc.root(), "node"), ["3", "2"]);
        assert_eq!(doc.root().children.len(), 3);
    }
}
