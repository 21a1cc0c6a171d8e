//! # Attribute Values
//!
//! Tagged value variants for feature attributes and their display-type
//! classification. The inspector never sees raw JSON or driver types:
//! every attribute is one of these closed variants, so classification
//! into display categories is total.
//!
//! ## Table of Contents
//! 1. AttributeValue — closed tagged value
//! 2. DisplayType — canonical inspector categories
//! 3. Classification
//! 4. JSON boundary conversion
//! 5. Display rendering

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// 1. AttributeValue — closed tagged value
// ============================================================================

/// A single attribute value as carried by an `AttributeField`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Integer (counts, object IDs)
    Int(i64),
    /// Floating point (areas, lengths, measurements)
    Float(f64),
    /// Text string
    Text(String),
    /// Boolean flag
    Bool(bool),
    /// Calendar date with no time of day
    Date(NaiveDate),
    /// Instant in time (UTC)
    Timestamp(DateTime<Utc>),
    /// No value recorded for this field
    Null,
}

// ============================================================================
// 2. DisplayType — canonical inspector categories
// ============================================================================

/// Canonical, UI-facing type category for an attribute value.
/// This is what the inspector shows next to a field, derived from the
/// value currently stored — not from a declared schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayType {
    Integer,
    Decimal,
    Text,
    Boolean,
    Date,
    Timestamp,
    Empty,
}

// ============================================================================
// 3. Classification
// ============================================================================

impl AttributeValue {
    /// Display category for the current value.
    /// Total: every variant maps to exactly one category.
    pub fn display_type(&self) -> DisplayType {
        match self {
            AttributeValue::Int(_) => DisplayType::Integer,
            AttributeValue::Float(_) => DisplayType::Decimal,
            AttributeValue::Text(_) => DisplayType::Text,
            AttributeValue::Bool(_) => DisplayType::Boolean,
            AttributeValue::Date(_) => DisplayType::Date,
            AttributeValue::Timestamp(_) => DisplayType::Timestamp,
            AttributeValue::Null => DisplayType::Empty,
        }
    }

    // ========================================================================
    // 4. JSON boundary conversion
    // ========================================================================

    /// Convert a parsed JSON property value into an attribute value.
    ///
    /// Integer-valued JSON numbers become `Int`; all other numbers `Float`.
    /// Arrays and objects are carried as their compact JSON text — the
    /// inspector displays them verbatim rather than recursing into them.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => AttributeValue::Null,
            serde_json::Value::Bool(b) => AttributeValue::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => AttributeValue::Int(i),
                None => AttributeValue::Float(n.as_f64().unwrap_or(0.0)),
            },
            serde_json::Value::String(s) => AttributeValue::Text(s.clone()),
            compound => AttributeValue::Text(compound.to_string()),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<NaiveDate> for AttributeValue {
    fn from(v: NaiveDate) -> Self {
        AttributeValue::Date(v)
    }
}

// ============================================================================
// 5. Display rendering
// ============================================================================

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Int(i) => write!(f, "{}", i),
            AttributeValue::Float(v) => write!(f, "{}", v),
            AttributeValue::Text(s) => f.write_str(s),
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            AttributeValue::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
            AttributeValue::Null => Ok(()),
        }
    }
}

impl std::fmt::Display for DisplayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DisplayType::Integer => "Integer",
            DisplayType::Decimal => "Decimal",
            DisplayType::Text => "Text",
            DisplayType::Boolean => "Boolean",
            DisplayType::Date => "Date",
            DisplayType::Timestamp => "Timestamp",
            DisplayType::Empty => "Empty",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classification_covers_every_variant() {
        assert_eq!(AttributeValue::Int(7).display_type(), DisplayType::Integer);
        assert_eq!(AttributeValue::Float(12.5).display_type(), DisplayType::Decimal);
        assert_eq!(AttributeValue::Text("A1".into()).display_type(), DisplayType::Text);
        assert_eq!(AttributeValue::Bool(true).display_type(), DisplayType::Boolean);
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(AttributeValue::Date(date).display_type(), DisplayType::Date);
        assert_eq!(
            AttributeValue::Timestamp(Utc::now()).display_type(),
            DisplayType::Timestamp
        );
        assert_eq!(AttributeValue::Null.display_type(), DisplayType::Empty);
    }

    #[test]
    fn test_from_json_splits_numbers() {
        assert_eq!(AttributeValue::from_json(&json!(42)), AttributeValue::Int(42));
        assert_eq!(AttributeValue::from_json(&json!(-3)), AttributeValue::Int(-3));
        assert_eq!(AttributeValue::from_json(&json!(12.5)), AttributeValue::Float(12.5));
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(AttributeValue::from_json(&json!(null)), AttributeValue::Null);
        assert_eq!(AttributeValue::from_json(&json!(true)), AttributeValue::Bool(true));
        assert_eq!(
            AttributeValue::from_json(&json!("Main St")),
            AttributeValue::Text("Main St".into())
        );
    }

    #[test]
    fn test_from_json_compound_values_become_text() {
        assert_eq!(
            AttributeValue::from_json(&json!([1, 2, 3])),
            AttributeValue::Text("[1,2,3]".into())
        );
        assert_eq!(
            AttributeValue::from_json(&json!({"a": 1})),
            AttributeValue::Text("{\"a\":1}".into())
        );
    }

    #[test]
    fn test_display_rendering() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(AttributeValue::Date(date).to_string(), "2024-03-01");
        assert_eq!(AttributeValue::Int(42).to_string(), "42");
        assert_eq!(AttributeValue::Null.to_string(), "");
        assert_eq!(DisplayType::Decimal.to_string(), "Decimal");
    }
}
