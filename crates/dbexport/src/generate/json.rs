//! JSON data export.
//!
//! Row data rides through the snapshot as plain JSON values; the only
//! normalization applied here is to decimal columns, which are re-rendered
//! as plain decimal strings so a zero never comes out as `0E-8` or similar
//! exponential notation.

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tracing::debug;

use crate::analyze::TableDescriptor;
use crate::core::value::decimal_json_string;
use crate::dialect::canonical::SchemaField;
use crate::error::{ExportError, Result};

use super::schema::table_schema;

/// Assemble the export document: a map of table name to row array.
pub fn dump_json(entries: Vec<(String, Vec<Value>)>) -> Value {
    let mut map = Map::new();
    for (table, rows) in entries {
        map.insert(table, Value::Array(rows));
    }
    Value::Object(map)
}

/// Normalize one table's rows against its schema.
///
/// Decimal column values are parsed (from a JSON number or string) and
/// re-rendered through [`decimal_json_string`]; nulls pass untouched.
/// Unclassifiable column types surface here as mapping errors, so a table
/// with an Unknown column cannot be exported.
pub fn normalize_rows(table: &TableDescriptor, rows: &[Value]) -> Result<Vec<Value>> {
    let decimal_columns: Vec<String> = table_schema(table)?
        .into_iter()
        .filter(|(_, field)| matches!(field, SchemaField::Decimal { .. }))
        .map(|(name, _)| name)
        .collect();

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let Value::Object(fields) = row else {
            return Err(ExportError::Snapshot(format!(
                "row in table {} is not an object",
                table.name
            )));
        };
        let mut fields = fields.clone();
        for column in &decimal_columns {
            if let Some(value) = fields.get_mut(column) {
                *value = normalize_decimal(&table.name, column, value)?;
            }
        }
        out.push(Value::Object(fields));
    }
    debug!(
        "normalized {} rows for table {} ({} decimal columns)",
        out.len(),
        table.name,
        decimal_columns.len()
    );
    Ok(out)
}

fn normalize_decimal(table: &str, column: &str, value: &Value) -> Result<Value> {
    // Decimal's FromStr rejects exponent notation, which is exactly the
    // form we are trying to scrub, so fall back to scientific parsing.
    let parse = |s: &str| s.parse::<Decimal>().or_else(|_| Decimal::from_scientific(s));
    let parsed = match value {
        Value::Null => return Ok(Value::Null),
        Value::Number(n) => parse(&n.to_string()),
        Value::String(s) => parse(s),
        other => {
            return Err(ExportError::Snapshot(format!(
                "non-numeric value {} in decimal column {}.{}",
                other, table, column
            )))
        }
    };
    let decimal = parsed.map_err(|e| {
        ExportError::Snapshot(format!(
            "unparseable decimal in column {}.{}: {}",
            table, column, e
        ))
    })?;
    Ok(Value::String(decimal_json_string(&decimal)))
}
