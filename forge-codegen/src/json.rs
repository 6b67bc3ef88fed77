//! Relaxed parsing for hand-typed example payloads.
//!
//! Parsing is two-staged: a JSON5 parse, then one bounded repair pass and a
//! retry. The repair only inserts a missing comma between a value that just
//! ended (`}`, `]`, a closing `"`, or a digit) and a following `"`, outside of
//! string literals. Anything more exotic is expected to fail, and the failure
//! carries both parser messages.

use serde_json::Value;
use thiserror::Error;

/// Both attempts of a relaxed parse failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid JSON: {original}. Repair attempt failed: {repair}")]
pub struct ParseFailure {
    pub original: String,
    pub repair: String,
}

/// Parse JSON or JSON5 text, retrying once with missing commas repaired.
pub fn parse_relaxed(input: &str) -> Result<Value, ParseFailure> {
    let original = match json5::from_str::<Value>(input) {
        Ok(value) => return Ok(value),
        Err(e) => e.to_string(),
    };

    let repaired = repair_missing_commas(input);
    tracing::debug!(%original, "example is not valid JSON5, retrying after repair");
    json5::from_str::<Value>(&repaired).map_err(|e| ParseFailure {
        original,
        repair: e.to_string(),
    })
}

/// Insert commas between adjacent values that are missing one.
pub fn repair_missing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    // Byte offset in `out` just past the last value-ending token.
    let mut value_end: Option<usize> = None;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in input.chars() {
        if let Some(q) = quote {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
                value_end = (q == '"').then_some(out.len());
            }
            continue;
        }

        if c.is_whitespace() {
            out.push(c);
            continue;
        }

        if c == '"' {
            if let Some(end) = value_end {
                out.insert(end, ',');
            }
        }

        out.push(c);
        value_end = match c {
            '}' | ']' => Some(out.len()),
            c if c.is_ascii_digit() => Some(out.len()),
            _ => None,
        };
        if c == '"' || c == '\'' {
            quote = Some(c);
            value_end = None;
        }
    }
    out
}
