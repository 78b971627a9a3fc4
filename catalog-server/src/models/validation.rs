//! Validation error types

use std::fmt;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are absent or empty
    Missing { fields: Vec<&'static str> },

    /// Value doesn't have the required shape (e.g., non-integer id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { fields } => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Collects required fields while a payload is validated.
///
/// Every missing field is reported in one error instead of failing on the
/// first, so clients see the full list.
#[derive(Debug, Default)]
pub(crate) struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Take a required text field. Absent and empty strings both count as missing.
    pub(crate) fn text(&mut self, field: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    /// Take a required integer field.
    pub(crate) fn integer(&mut self, field: &'static str, value: Option<i64>) -> i64 {
        value.unwrap_or_else(|| {
            self.missing.push(field);
            0
        })
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Missing {
                fields: self.missing,
            })
        }
    }
}

/// Collapse an empty optional string to `None`.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Accept a string, number or boolean and keep its text form.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected text or number, found {}",
            other
        ))),
    }
}

/// Accept an integer or its decimal string form. A blank string counts as absent.
pub(crate) fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("expected integer, found {}", n))),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("expected integer, found \"{}\"", s)))
        }
        Some(other) => Err(de::Error::custom(format!(
            "expected integer, found {}",
            other
        ))),
    }
}
