//! Text extraction for labels and comments.
//!
//! Labels and comments arrive either as plain strings or as localized
//! literal nodes (`{"@language": "en", "@value": "..."}`), may contain HTML
//! entities, and sometimes carry `<br />` markers or newlines that would
//! break a generated doc comment.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

use crate::model::terms;

/// Extracts display text from a label or comment value.
///
/// Localized nodes yield their `@value`; a list yields its first element.
/// HTML entities are decoded. With `collapse_breaks`, `<br />` markers,
/// literal `\n` sequences and real newlines each become a single space.
/// A missing value or missing `@value` yields an empty string.
#[must_use]
pub fn extract_text(value: Option<&Value>, collapse_breaks: bool) -> String {
    let raw = match value {
        Some(v) => raw_text(v),
        None => String::new(),
    };
    let decoded = decode_entities(&raw);
    if collapse_breaks {
        collapse(&decoded)
    } else {
        decoded
    }
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get(terms::VALUE)
            .map(raw_text)
            .unwrap_or_default(),
        Value::Array(items) => items.first().map(raw_text).unwrap_or_default(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
    }
}

fn collapse(text: &str) -> String {
    text.replace("<br />", " ")
        .replace("\\n", " ")
        .replace('\n', " ")
}

/// Numeric character references, decimal or hexadecimal.
#[allow(clippy::expect_used)]
static NUMERIC_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&#(?:[xX]([0-9A-Fa-f]+)|([0-9]+));").expect("invalid numeric reference regex")
});

/// Decodes HTML character references (the full named table, decimal and
/// hexadecimal).
///
/// Unknown references, and numeric references to NUL, control characters,
/// surrogates or out-of-range code points, are left untouched.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    let guarded = NUMERIC_REFERENCE.replace_all(text, |caps: &Captures| {
        let code = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
            (None, None) => None,
        };
        let reference = &caps[0];
        if code.and_then(char::from_u32).is_some_and(is_text_char) {
            reference.to_string()
        } else {
            // Escaping the ampersand makes the decoder emit the reference verbatim.
            format!("&amp;{}", &reference[1..])
        }
    });
    html_escape::decode_html_entities(&*guarded).into_owned()
}

fn is_text_char(ch: char) -> bool {
    !ch.is_control() || matches!(ch, '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn localized_node_and_plain_string_agree() {
        let localized = json!({ "@value": "Line one<br />Line two" });
        let plain = json!("Line one<br />Line two");
        assert_eq!(extract_text(Some(&localized), true), "Line one Line two");
        assert_eq!(extract_text(Some(&plain), true), "Line one Line two");
    }

    #[test]
    fn breaks_kept_without_collapse() {
        let v = json!("a\nb");
        assert_eq!(extract_text(Some(&v), false), "a\nb");
        assert_eq!(extract_text(Some(&v), true), "a b");
    }

    #[test]
    fn literal_backslash_n_is_collapsed() {
        let v = json!("first\\nsecond");
        assert_eq!(extract_text(Some(&v), true), "first second");
    }

    #[test]
    fn missing_value_is_empty() {
        assert_eq!(extract_text(None, true), "");
        assert_eq!(extract_text(Some(&json!({ "@language": "en" })), true), "");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(decode_entities("&lt;b&gt;"), "<b>");
        assert_eq!(decode_entities("&#39;x&#x27;"), "'x'");
        assert_eq!(decode_entities("a & b"), "a & b");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
    }

    #[test]
    fn full_named_table_is_decoded() {
        assert_eq!(extract_text(Some(&json!("a &rarr; b")), true), "a \u{2192} b");
        assert_eq!(decode_entities("&frac12; cup"), "\u{bd} cup");
        assert_eq!(decode_entities("&Auml;rger"), "\u{c4}rger");
    }

    #[test]
    fn references_to_non_characters_stay_encoded() {
        assert_eq!(decode_entities("x&#0;y"), "x&#0;y");
        assert_eq!(decode_entities("&#x0;"), "&#x0;");
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
        assert_eq!(decode_entities("&#99999999999;"), "&#99999999999;");
        assert_eq!(decode_entities("tab&#9;stop"), "tab\tstop");
    }

    #[test]
    fn encoded_break_is_collapsed_after_decoding() {
        let v = json!("one&lt;br /&gt;two");
        assert_eq!(extract_text(Some(&v), true), "one two");
    }
}
