//! Row value types for the JSON data export.
//!
//! Values are already materialized by the time they reach this crate; the
//! only transformation applied here is the conversion to JSON, including
//! the decimal-to-string normalization rule.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde_json::Value;

/// A single row, column name to value.
pub type Row = BTreeMap<String, RowValue>;

/// A materialized column value.
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    /// SQL NULL.
    Null,

    /// Boolean value.
    Bool(bool),

    /// Integer value (covers all integer widths).
    Int(i64),

    /// Floating point value.
    Float(f64),

    /// Exact decimal value.
    Decimal(Decimal),

    /// Text value.
    Text(String),

    /// Date without time component.
    Date(NaiveDate),

    /// Timestamp without timezone.
    DateTime(NaiveDateTime),
}

impl RowValue {
    /// Convert to a JSON value.
    ///
    /// Decimals serialize as strings (see [`decimal_json_string`]); dates
    /// and timestamps serialize in ISO-8601 form. A non-finite float maps
    /// to JSON null, which has no number representation for it.
    pub fn to_json(&self) -> Value {
        match self {
            RowValue::Null => Value::Null,
            RowValue::Bool(v) => Value::Bool(*v),
            RowValue::Int(v) => Value::from(*v),
            RowValue::Float(v) => serde_json::Number::from_f64(*v)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            RowValue::Decimal(v) => Value::String(decimal_json_string(v)),
            RowValue::Text(v) => Value::String(v.clone()),
            RowValue::Date(v) => Value::String(v.format("%Y-%m-%d").to_string()),
            RowValue::DateTime(v) => Value::String(v.format("%Y-%m-%dT%H:%M:%S").to_string()),
        }
    }
}

/// Render a decimal for JSON output.
///
/// Any zero-valued decimal renders as `"0.0"` regardless of its internal
/// scale, so downstream parsers never see forms like `0E-8`. Non-zero
/// values use the plain (never scientific) decimal notation.
pub fn decimal_json_string(value: &Decimal) -> String {
    if value.is_zero() {
        "0.0".to_string()
    } else {
        value.to_string()
    }
}
