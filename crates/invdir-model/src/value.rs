//! Raw and cleaned cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Text placeholders that mean "no data", compared case-insensitively after trimming.
pub const SENTINELS: [&str; 5] = ["nan", "n/a", "na", "-", ""];

/// Returns true when `text` is empty or a placeholder once trimmed.
pub fn is_sentinel(text: &str) -> bool {
    let trimmed = text.trim();
    SENTINELS
        .iter()
        .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel))
}

/// A cell exactly as the source reader produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// The reader's "no data" marker (empty cell).
    Missing,
    Text(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
}

impl RawValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<CleanValue> for RawValue {
    fn from(value: CleanValue) -> Self {
        match value {
            CleanValue::Text(text) => Self::Text(text),
            CleanValue::Integer(number) => Self::Integer(number),
            CleanValue::Real(number) => Self::Real(number),
        }
    }
}

/// A validated value of a normalized record.
///
/// Serialized as a bare JSON string or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CleanValue {
    Text(String),
    Integer(i64),
    Real(f64),
}

impl CleanValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for CleanValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CleanValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for CleanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(number) => write!(f, "{number}"),
            Self::Real(number) => write!(f, "{number}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_case_insensitive() {
        for text in ["NaN", "N/A", "na", " - ", "", "   ", "NA"] {
            assert!(is_sentinel(text), "{text:?} should be a sentinel");
        }
        for text in ["Nana Ventures", "n/a/b", "--", "0"] {
            assert!(!is_sentinel(text), "{text:?} should not be a sentinel");
        }
    }

    #[test]
    fn clean_value_json_shape() {
        let values = vec![
            CleanValue::from("Acme"),
            CleanValue::Integer(50_000),
            CleanValue::Real(2.5),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"["Acme",50000,2.5]"#);
        let back: Vec<CleanValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn integral_real_stays_real() {
        let json = serde_json::to_string(&CleanValue::Real(5.0)).unwrap();
        assert_eq!(json, "5.0");
        let back: CleanValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CleanValue::Real(5.0));
    }
}
