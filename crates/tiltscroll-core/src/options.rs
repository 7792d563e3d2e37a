//! Parsing of attribute-style option strings.
//!
//! Options arrive as a single string of comma-separated `key:value` pairs,
//! e.g. `"speed:200, insensitivity:2"`. Values are coerced in order:
//! empty -> missing, `true`/`false` -> bool, numeric -> number, anything
//! else stays a string.

use std::collections::HashMap;

/// One coerced option value.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    /// The key was present with an empty value (`"speed:"`).
    Missing,
    Bool(bool),
    Number(f32),
    Text(String),
}

/// Outcome of [`parse_options`].
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedOptions {
    /// At least one `key:value` pair was parsed.
    Values(HashMap<String, OptionValue>),
    /// Nothing could be parsed; the input is handed back unchanged. Callers
    /// must treat this as a caller error and skip activation.
    Raw(String),
}

impl ParsedOptions {
    /// The parsed map, or `None` for the raw passthrough case.
    pub fn into_values(self) -> Option<HashMap<String, OptionValue>> {
        match self {
            ParsedOptions::Values(values) => Some(values),
            ParsedOptions::Raw(_) => None,
        }
    }
}

/// Parses a `key:value, key:value` option string.
///
/// Whitespace around `:` and `,` is ignored. Parsing stops at the first
/// segment that has no colon or that looks like a URL; pairs parsed before
/// that point are kept. If the very first segment already fails, the raw
/// input is returned unchanged.
pub fn parse_options(input: &str) -> ParsedOptions {
    let mut values = HashMap::new();

    for segment in input.split(',') {
        let segment = segment.trim();

        // URLs contain colons but are not options; stop rather than
        // misread the tail of the string.
        if segment.starts_with("http://")
            || segment.starts_with("https://")
            || segment.starts_with("ftp://")
        {
            log::debug!("options: stopping at URL-like segment {segment:?}");
            break;
        }

        let Some(delimiter) = segment.find(':') else {
            log::debug!("options: stopping at non-keyed segment {segment:?}");
            break;
        };

        let key = segment[..delimiter].trim_end().to_string();
        let raw_value = segment[delimiter + 1..].trim_start();

        values.insert(key, coerce_value(raw_value));
    }

    if values.is_empty() {
        ParsedOptions::Raw(input.to_string())
    } else {
        ParsedOptions::Values(values)
    }
}

fn coerce_value(raw: &str) -> OptionValue {
    if raw.is_empty() {
        return OptionValue::Missing;
    }
    match raw {
        "true" => return OptionValue::Bool(true),
        "false" => return OptionValue::Bool(false),
        _ => {}
    }
    match raw.parse::<f32>() {
        Ok(number) => OptionValue::Number(number),
        Err(_) => OptionValue::Text(raw.to_string()),
    }
}
