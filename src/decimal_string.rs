//! Repair of decimal string (DS) values into JSON numbers.
//!
//! DICOM allows DS values such as `+007` or ` 3.14 ` which are not valid JSON numbers.
//! Part 18 requires DS values to be written as JSON numbers, so they are fixed up here
//! without changing their numeric meaning.
use crate::error::DicomJsonError;
use regex::Regex;
use std::sync::OnceLock;

/// Whether the entire string is a JSON number token.
pub fn is_json_number(s: &str) -> bool {
    JSON_NUMBER_RE
        .get_or_init(|| Regex::new(r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?$").unwrap())
        .is_match(s)
}

static JSON_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

/// Fix up a DS value for use as a JSON number.
///
/// Returns `None` for empty or whitespace-only values, which are written as `null`.
pub fn repair(raw: &str) -> Result<Option<String>, DicomJsonError> {
    if is_json_number(raw) {
        return Ok(Some(raw.to_string()));
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else {
        (false, trimmed)
    };
    let unsigned = strip_leading_zeros(unsigned);
    let fixed = if negative {
        format!("-{unsigned}")
    } else {
        unsigned.to_string()
    };

    if is_json_number(&fixed) {
        Ok(Some(fixed))
    } else {
        Err(DicomJsonError::Format {
            value: raw.to_string(),
        })
    }
}

/// Remove superfluous leading zeros, keeping a single digit before the decimal point.
fn strip_leading_zeros(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() && bytes[i] == b'0' && bytes[i + 1] != b'.' {
        i += 1;
    }
    &s[i..]
}
