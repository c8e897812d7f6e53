//! Format validation.
//!
//! A valid CUID2 is one lowercase letter followed by 23 to 31 lowercase
//! letters or digits. Validation is total: malformed or non-textual input
//! yields `false`, never an error.

use serde_json::Value;

use crate::generator::{MAX_LENGTH, MIN_LENGTH};

/// Returns true if `candidate` is a well-formed CUID2.
pub fn is_valid(candidate: impl AsRef<str>) -> bool {
    let bytes = candidate.as_ref().as_bytes();

    if !(MIN_LENGTH..=MAX_LENGTH).contains(&bytes.len()) {
        return false;
    }

    let Some((first, rest)) = bytes.split_first() else {
        return false;
    };

    first.is_ascii_lowercase()
        && rest
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Returns true only for a JSON string holding a well-formed CUID2.
///
/// Nulls, numbers, booleans, arrays, and objects are never valid.
pub fn is_valid_value(value: &Value) -> bool {
    match value {
        Value::String(s) => is_valid(s),
        _ => false,
    }
}
