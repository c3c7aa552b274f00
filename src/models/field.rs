//! Per-field input constraints for the edit view.
//!
//! The lookup is keyed by leaf field name regardless of nesting depth,
//! mirroring the upstream form: `email` is an email input with max length
//! 30 whether it sits at the top level or inside a nested object.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Input kind of an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Email,
    Tel,
    Url,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Email => write!(f, "email"),
            FieldKind::Tel => write!(f, "tel"),
            FieldKind::Url => write!(f, "url"),
        }
    }
}

/// Constraints applied to one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<&'static str>,
    pub read_only: bool,
}

/// Rejected input for a field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("field is read-only")]
    ReadOnly,

    #[error("value exceeds maximum length of {max}")]
    TooLong { max: usize },

    #[error("expected a numeric value, got '{raw}'")]
    NotNumeric { raw: String },
}

impl FieldSpec {
    /// Fixed constraint lookup by leaf field name.
    pub fn for_key(key: &str) -> Self {
        match key {
            "id" => Self {
                kind: FieldKind::Number,
                max_len: None,
                step: Some("1"),
                read_only: true,
            },
            "lat" | "lng" => Self {
                kind: FieldKind::Number,
                max_len: None,
                step: Some("0.0001"),
                read_only: false,
            },
            "email" => Self::typed(FieldKind::Email, 30),
            "phone" => Self::typed(FieldKind::Tel, 30),
            "website" => Self::typed(FieldKind::Url, 30),
            "catchPhrase" | "bs" => Self::typed(FieldKind::Text, 100),
            _ => Self::typed(FieldKind::Text, 40),
        }
    }

    fn typed(kind: FieldKind, max_len: usize) -> Self {
        Self {
            kind,
            max_len: Some(max_len),
            step: None,
            read_only: false,
        }
    }

    /// Turn raw input into a JSON value, enforcing the constraints the
    /// upstream form delegated to the input element.
    pub fn coerce(&self, raw: &str) -> Result<Value, FieldError> {
        if self.read_only {
            return Err(FieldError::ReadOnly);
        }
        if let Some(max) = self.max_len {
            if raw.chars().count() > max {
                return Err(FieldError::TooLong { max });
            }
        }
        match self.kind {
            FieldKind::Number => {
                // The geo coordinates are served as strings, so numeric
                // fields keep their string representation after a parse
                // check rather than being converted to JSON numbers.
                let _: f64 = raw.parse().map_err(|_| FieldError::NotNumeric {
                    raw: raw.to_string(),
                })?;
                Ok(Value::String(raw.to_string()))
            }
            _ => Ok(Value::String(raw.to_string())),
        }
    }
}
