//! Path-string grammar: raw segment classification and predicate values.
//!
//! A path string is a `/`-delimited sequence of tokens. A token of the form
//! `field:value` (lowercase field, word-character value) is a predicate that
//! locates an array element by field equality; every other token is a plain
//! object key, kept verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A coerced predicate value.
///
/// Predicate values get best-effort integer coercion when parsed: `"5"`
/// becomes `Int(5)`, `"Gary"` stays `Str("Gary")`. Matching against document
/// values is structural, so `Int(5)` never matches the JSON string `"5"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredValue {
    /// Integer value.
    Int(i64),
    /// String value (the integer parse failed).
    Str(String),
}

impl PredValue {
    /// Coerce a raw value token. The "not a number" case is a normal branch.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) => PredValue::Int(n),
            Err(_) => PredValue::Str(raw.to_owned()),
        }
    }

    /// Structural equality against a document value.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (PredValue::Int(n), Value::Number(m)) => m.as_i64() == Some(*n),
            (PredValue::Str(s), Value::String(t)) => s == t,
            _ => false,
        }
    }
}

impl fmt::Display for PredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredValue::Int(n) => write!(f, "{n}"),
            PredValue::Str(s) => write!(f, "{s}"),
        }
    }
}

/// One parsed token of a path string, not yet resolved against a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Bare field name addressing an object key.
    Plain(String),
    /// `field:value` lookup addressing the first array element whose
    /// `field` equals `value`.
    Predicate {
        /// Field to compare on each element.
        field: String,
        /// Value the field must equal.
        value: PredValue,
    },
}

/// Split a path string on `/` and classify each token.
///
/// A token is a predicate only when the part before the first `:` is all
/// lowercase ASCII letters and the part after is non-empty word characters.
/// Anything else, including malformed predicate-looking tokens, stays a
/// plain segment verbatim.
///
/// # Examples
///
/// ```
/// use treepatch::{parse_path_str, PredValue, Segment};
///
/// let segs = parse_path_str("pets/id:2/name");
/// assert_eq!(segs[0], Segment::Plain("pets".into()));
/// assert_eq!(
///     segs[1],
///     Segment::Predicate { field: "id".into(), value: PredValue::Int(2) }
/// );
/// assert_eq!(segs[2], Segment::Plain("name".into()));
/// ```
pub fn parse_path_str(path: &str) -> Vec<Segment> {
    path.split('/').map(parse_segment).collect()
}

fn parse_segment(raw: &str) -> Segment {
    if let Some((field, value)) = raw.split_once(':') {
        if is_predicate_field(field) && is_predicate_value(value) {
            return Segment::Predicate {
                field: field.to_owned(),
                value: PredValue::parse(value),
            };
        }
    }
    Segment::Plain(raw.to_owned())
}

// [a-z]+
fn is_predicate_field(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}

// [_\w]+
fn is_predicate_value(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'_' || b.is_ascii_alphanumeric())
}
