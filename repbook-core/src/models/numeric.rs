//! Numeric form input.
//!
//! Form fields that hold numbers are typed `Option<f64>`. Free text coming from
//! the presentation layer is parsed once, here, and persisted JSON written by
//! older text-typed forms (`"100"`, `""`) is read back into the same shape.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Parse free text into a number. Blank, non-finite and unparseable input is
/// absent.
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Accepts a JSON number, a numeric string, an empty string or `null`.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64().filter(|v| v.is_finite())),
        Some(Value::String(s)) => Ok(parse_number(&s)),
        Some(other) => Err(de::Error::custom(format!(
            "expected a number, numeric string or null, got {}",
            other
        ))),
    }
}
