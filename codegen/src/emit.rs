//! Template substitution and PHP literal formatting.
//!
//! Templates carry `{@name}` slots. Substitution is textual and scalar-only:
//! list- and map-shaped values are flattened into PHP literal syntax by the
//! helpers below before they are handed to a template.

use std::collections::BTreeMap;

/// A source template with `{@name}` slots.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    source: &'static str,
}

impl Template {
    /// Wraps template text.
    #[must_use]
    pub const fn new(source: &'static str) -> Self {
        Self { source }
    }

    /// Renders the template with `slots`.
    #[must_use]
    pub fn render(&self, slots: &Slots) -> String {
        substitute(self.source, slots)
    }
}

/// Named scalar values for a template.
#[derive(Debug, Clone, Default)]
pub struct Slots {
    values: BTreeMap<&'static str, String>,
}

impl Slots {
    /// Creates an empty slot set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a slot value.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    /// Returns a slot value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Replaces every `{@name}` slot that has a value; unknown slots are left as-is.
///
/// Substituted values are not scanned again.
#[must_use]
pub fn substitute(template: &str, slots: &Slots) -> String {
    let mut result = String::with_capacity(template.len());
    let mut remaining = template;

    while let Some(start) = remaining.find("{@") {
        result.push_str(&remaining[..start]);
        remaining = &remaining[start..];

        let end = match remaining.find('}') {
            Some(e) => e,
            None => break,
        };

        let name = &remaining[2..end];
        match slots.get(name) {
            Some(value) => result.push_str(value),
            None => result.push_str(&remaining[..=end]),
        }
        remaining = &remaining[end + 1..];
    }

    result.push_str(remaining);
    result
}

/// Quotes `s` as a single-quoted PHP string literal.
#[must_use]
pub fn php_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\\' || ch == '\'' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

/// Formats strings as a one-line PHP array literal: `['a', 'b']`.
#[must_use]
pub fn php_list<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| php_string(s.as_ref())).collect();
    format!("[{}]", quoted.join(", "))
}

/// Formats `key => value` entries as a multi-line PHP array literal.
///
/// Keys are quoted; values must already be PHP literals. `indent` is the
/// indentation of the line the literal opens on.
#[must_use]
pub fn php_map(entries: &[(String, String)], indent: usize) -> String {
    if entries.is_empty() {
        return "[]".to_string();
    }
    let pad = " ".repeat(indent + 4);
    let lines: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{pad}{} => {value}", php_string(key)))
        .collect();
    format!("[\n{}\n{}]", lines.join(",\n"), " ".repeat(indent))
}

/// Wraps `text` at `width` columns, joining lines with `line_break`.
///
/// Words longer than `width` are kept whole on their own line.
#[must_use]
pub fn word_wrap(text: &str, width: usize, line_break: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for word in text.split(' ') {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        } else if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    lines.push(line);
    lines
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join(line_break)
}
