//! Reflection snapshot types.
//!
//! These mirror what a live-database reflection collaborator produces:
//! per table, a column list (name, nullability, primary-key flag, raw type,
//! foreign-key targets) and an index list (name, ordered column list).
//! Snapshots are serde-derived so they can be captured to a file once and
//! replayed through the generators without a database connection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

/// Raw, dialect-specific column type descriptor.
///
/// `name` is the base type name from the dialect's reflection vocabulary
/// (e.g. `"TINYINT"`, `"VARCHAR"`); the optional parameters carry whatever
/// the descriptor exposes. `native` is the descriptor's own full textual
/// form (e.g. `"TINYINT(1) UNSIGNED"`), used verbatim for same-dialect
/// (passthrough) rendering so options the canonical model does not capture
/// survive the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawType {
    /// Base type name.
    pub name: String,

    /// Integer display width, when the descriptor exposes one.
    #[serde(default)]
    pub display_width: Option<u32>,

    /// Declared character length, when present.
    #[serde(default)]
    pub length: Option<u32>,

    /// Fixed-point precision (total digits).
    #[serde(default)]
    pub precision: Option<u32>,

    /// Fixed-point scale (digits after the point).
    #[serde(default)]
    pub scale: Option<u32>,

    /// Full native textual form. Empty means "same as `name`".
    #[serde(default)]
    pub native: String,
}

impl RawType {
    /// Create a descriptor with just a base type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_width: None,
            length: None,
            precision: None,
            scale: None,
            native: String::new(),
        }
    }

    /// Set the native textual form.
    pub fn with_native(mut self, native: impl Into<String>) -> Self {
        self.native = native.into();
        self
    }

    /// Set the integer display width.
    pub fn with_display_width(mut self, width: u32) -> Self {
        self.display_width = Some(width);
        self
    }

    /// Set the declared character length.
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Set precision and scale together.
    pub fn with_precision_scale(mut self, precision: u32, scale: u32) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    /// Native textual form, falling back to the base name when the
    /// snapshot did not record one.
    pub fn native_form(&self) -> &str {
        if self.native.is_empty() {
            &self.name
        } else {
            &self.native
        }
    }
}

/// Reflected column metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectedColumn {
    /// Column name. Unique within a table.
    pub name: String,

    /// Raw type descriptor.
    pub raw_type: RawType,

    /// Whether the column allows NULL.
    #[serde(default = "default_true")]
    pub nullable: bool,

    /// Whether the column is part of the primary key.
    #[serde(default)]
    pub primary_key: bool,

    /// Foreign-key targets in `"table.column"` form. A column may carry
    /// zero or more.
    #[serde(default)]
    pub foreign_keys: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Reflected index metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectedIndex {
    /// Index name.
    pub name: String,

    /// Indexed column names, in index order.
    pub columns: Vec<String>,
}

/// One reflected table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectedTable {
    /// Table name.
    pub name: String,

    /// Columns in the table's native declaration order.
    #[serde(default)]
    pub columns: Vec<ReflectedColumn>,

    /// Indexes on the table.
    #[serde(default)]
    pub indexes: Vec<ReflectedIndex>,
}

/// A full reflection snapshot: the table list plus (optionally) row data
/// keyed by table name, as captured by the reflection collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Reflected tables.
    #[serde(default)]
    pub tables: Vec<ReflectedTable>,

    /// Row data per table, as plain JSON objects.
    #[serde(default)]
    pub data: BTreeMap<String, Vec<serde_json::Value>>,
}

impl Snapshot {
    /// Load a snapshot from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a snapshot from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
