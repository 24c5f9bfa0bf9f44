//! Vocabulary → PHP mapping tables.
//!
//! Deterministic mappings from vocabulary labels and range types to PHP
//! identifiers and primitive types.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// PHP identifier shape; bytes 0x80-0xff are allowed so non-ASCII labels pass.
#[allow(clippy::expect_used)]
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)^[A-Za-z_\x80-\xff][A-Za-z0-9_\x80-\xff]*$")
        .expect("invalid identifier regex")
});

/// Lower-cased words that PHP rejects as class names.
const RESERVED: &[&str] = &[
    "abstract", "and", "array", "as", "bool", "break", "callable", "case", "catch", "class",
    "clone", "const", "continue", "declare", "default", "do", "echo", "else", "elseif",
    "empty", "enum", "extends", "false", "final", "finally", "float", "fn", "for", "foreach",
    "function", "global", "goto", "if", "implements", "include", "instanceof", "insteadof",
    "int", "interface", "isset", "iterable", "list", "match", "mixed", "namespace", "never",
    "new", "null", "object", "or", "parent", "print", "private", "protected", "public",
    "readonly", "require", "return", "self", "static", "string", "switch", "throw", "trait",
    "true", "try", "unset", "use", "var", "void", "while", "xor", "yield",
];

/// Returns true if `word` (any case) is reserved.
#[must_use]
pub fn is_reserved(word: &str) -> bool {
    let lower = word.to_lowercase();
    RESERVED.contains(&lower.as_str())
}

/// Returns true if `name` is a syntactically valid PHP identifier.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name.as_bytes())
}

/// Derives the generated class name for a vocabulary label.
///
/// Valid, non-reserved labels are used verbatim. Anything else is prefixed
/// with `prefix`, and characters that still cannot appear in an identifier
/// are replaced with `_`.
#[must_use]
pub fn derive_safe_name(label: &str, prefix: &str) -> String {
    if is_identifier(label) && !is_reserved(label) {
        return label.to_string();
    }
    let mut safe = String::with_capacity(prefix.len() + label.len());
    safe.push_str(prefix);
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || !ch.is_ascii() {
            safe.push(ch);
        } else {
            safe.push('_');
        }
    }
    safe
}

/// Maps a vocabulary scalar type to its PHP primitive.
#[must_use]
pub fn php_primitive(range: &str) -> Option<&'static str> {
    match range {
        "Text" | "URL" => Some("string"),
        "Integer" => Some("int"),
        "Number" | "Float" => Some("float"),
        "Boolean" => Some("bool"),
        _ => None,
    }
}

/// Maps a range list to PHP types: mapped primitives first, then every
/// unmapped name, each group in declaration order and free of duplicates.
#[must_use]
pub fn php_types(ranges: &[String]) -> Vec<String> {
    let mut mapped: Vec<String> = Vec::new();
    let mut passthrough: Vec<String> = Vec::new();
    for range in ranges {
        let (bucket, ty) = match php_primitive(range) {
            Some(p) => (&mut mapped, p.to_string()),
            None => (&mut passthrough, range.clone()),
        };
        if !bucket.contains(&ty) {
            bucket.push(ty);
        }
    }
    mapped.extend(passthrough);
    mapped
}

/// File name of the field-container trait for a class.
#[must_use]
pub fn trait_name(safe_name: &str) -> String {
    format!("{safe_name}Trait")
}

/// File name of the marker interface for a class.
#[must_use]
pub fn interface_name(safe_name: &str) -> String {
    format!("{safe_name}Interface")
}
