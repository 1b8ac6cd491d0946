//! Canonical type model.
//!
//! Every reflected column type is classified into one of a small, closed set
//! of semantic types. A canonical type knows how to re-render itself into
//! each supported target: MySQL DDL, SQLite DDL, and a serialization schema
//! field. Rendering back into the type's *own* dialect bypasses the mapping
//! table entirely and reproduces the raw descriptor's native textual form,
//! preserving options the canonical model does not capture (unsigned flags,
//! charset suffixes, ...).
//!
//! `Unknown` is the passthrough-only fallback: it renders natively under its
//! source dialect but has no defined cross-dialect or schema-field mapping,
//! and those renders fail loudly rather than approximate.

use std::fmt;

use crate::core::reflect::RawType;
use crate::error::{ExportError, Result};

use super::Dialect;

/// Dialect-independent semantic classification of a column's storage type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalType {
    /// Boolean type (MySQL encodes this as a width-1 TINYINT).
    Boolean,

    /// Integer type with optional display width.
    Integer {
        /// MySQL display width, when declared.
        display_width: Option<u32>,
    },

    /// Floating-point type.
    Float,

    /// Fixed-point decimal. Precision and scale are captured as a pair;
    /// a descriptor exposing only one of the two is treated as exposing
    /// neither.
    Decimal {
        /// Total digits.
        precision: Option<u32>,
        /// Digits after the decimal point.
        scale: Option<u32>,
    },

    /// Character/text type with optional declared length.
    String {
        /// Declared length, when present.
        length: Option<u32>,
    },

    /// Date-only type.
    Date,

    /// Timestamp/datetime type.
    DateTime,

    /// No classification rule matched. Same-dialect rendering passes the
    /// raw descriptor through; everything else fails.
    Unknown,
}

impl CanonicalType {
    /// Cross-dialect MySQL DDL form, or `None` for `Unknown`.
    fn mysql_ddl(&self) -> Option<String> {
        match self {
            CanonicalType::Boolean => Some("TINYINT".to_string()),
            CanonicalType::Integer {
                display_width: Some(w),
            } => Some(format!("INTEGER({})", w)),
            CanonicalType::Integer { display_width: None } => Some("INTEGER".to_string()),
            CanonicalType::Float => Some("FLOAT".to_string()),
            CanonicalType::Decimal {
                precision: Some(p),
                scale: Some(s),
            } => Some(format!("DECIMAL({},{})", p, s)),
            CanonicalType::Decimal { .. } => Some("DECIMAL".to_string()),
            CanonicalType::String { length: Some(l) } => Some(format!("VARCHAR({})", l)),
            CanonicalType::String { length: None } => Some("VARCHAR".to_string()),
            CanonicalType::Date => Some("DATE".to_string()),
            CanonicalType::DateTime => Some("DATETIME".to_string()),
            CanonicalType::Unknown => None,
        }
    }

    /// Cross-dialect SQLite DDL form, or `None` for `Unknown`.
    ///
    /// `decimal_as_real` switches the Decimal rendering between TEXT (the
    /// default, exact) and REAL. It affects nothing else.
    fn sqlite_ddl(&self, decimal_as_real: bool) -> Option<String> {
        match self {
            CanonicalType::Boolean | CanonicalType::Integer { .. } => Some("INTEGER".to_string()),
            CanonicalType::Float => Some("REAL".to_string()),
            CanonicalType::Decimal { .. } => {
                if decimal_as_real {
                    Some("REAL".to_string())
                } else {
                    Some("TEXT".to_string())
                }
            }
            CanonicalType::String { .. } => Some("TEXT".to_string()),
            CanonicalType::Date => Some("DATE".to_string()),
            CanonicalType::DateTime => Some("DATETIME".to_string()),
            CanonicalType::Unknown => None,
        }
    }

    /// Serialization schema field, or `None` for `Unknown`.
    fn schema_field(&self) -> Option<SchemaField> {
        match self {
            CanonicalType::Boolean => Some(SchemaField::Boolean),
            CanonicalType::Integer { .. } => Some(SchemaField::Integer),
            CanonicalType::Float => Some(SchemaField::Float),
            CanonicalType::Decimal { scale, .. } => Some(SchemaField::Decimal { places: *scale }),
            CanonicalType::String { .. } => Some(SchemaField::String),
            CanonicalType::Date => Some(SchemaField::Date),
            CanonicalType::DateTime => Some(SchemaField::DateTime),
            CanonicalType::Unknown => None,
        }
    }
}

/// A classified column type: the canonical classification plus the dialect
/// and raw descriptor it came from. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnType {
    dialect: Dialect,
    raw: RawType,
    canonical: CanonicalType,
}

impl ColumnType {
    pub(crate) fn new(dialect: Dialect, raw: RawType, canonical: CanonicalType) -> Self {
        Self {
            dialect,
            raw,
            canonical,
        }
    }

    /// The dialect this type was reflected from.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The raw descriptor, retained for passthrough rendering.
    pub fn raw(&self) -> &RawType {
        &self.raw
    }

    /// The canonical classification.
    pub fn canonical(&self) -> &CanonicalType {
        &self.canonical
    }

    /// Whether no classification rule matched this type.
    pub fn is_unknown(&self) -> bool {
        matches!(self.canonical, CanonicalType::Unknown)
    }

    /// Render as MySQL DDL.
    ///
    /// MySQL-sourced types pass their native form through unchanged; other
    /// sources go through the canonical mapping table.
    pub fn to_mysql_ddl(&self) -> Result<String> {
        if self.dialect == Dialect::Mysql {
            return Ok(self.raw.native_form().to_string());
        }
        self.canonical
            .mysql_ddl()
            .ok_or_else(|| self.unsupported("mysql"))
    }

    /// Render as SQLite DDL.
    ///
    /// SQLite-sourced types pass their native form through unchanged;
    /// `decimal_as_real` only affects the cross-dialect Decimal path.
    pub fn to_sqlite_ddl(&self, decimal_as_real: bool) -> Result<String> {
        if self.dialect == Dialect::Sqlite {
            return Ok(self.raw.native_form().to_string());
        }
        self.canonical
            .sqlite_ddl(decimal_as_real)
            .ok_or_else(|| self.unsupported("sqlite"))
    }

    /// Render as a serialization schema field. No passthrough path exists
    /// for this target, so `Unknown` always fails here.
    pub fn schema_field(&self) -> Result<SchemaField> {
        self.canonical
            .schema_field()
            .ok_or_else(|| self.unsupported("schema field"))
    }

    fn unsupported(&self, target: &str) -> ExportError {
        ExportError::unsupported_mapping(self.raw.native_form(), self.dialect.as_str(), target)
    }
}

/// A field declaration in the generated serialization schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaField {
    Boolean,
    Integer,
    Float,
    /// Decimal field, parameterized by the number of decimal places.
    Decimal { places: Option<u32> },
    String,
    Date,
    DateTime,
}

impl SchemaField {
    /// Textual form of the field declaration, as written into the
    /// generated schema source.
    pub fn decl(&self) -> String {
        match self {
            SchemaField::Boolean => "fields.Boolean()".to_string(),
            SchemaField::Integer => "fields.Integer()".to_string(),
            SchemaField::Float => "fields.Float()".to_string(),
            SchemaField::Decimal { places: Some(p) } => format!("fields.Decimal(places={})", p),
            SchemaField::Decimal { places: None } => "fields.Decimal()".to_string(),
            SchemaField::String => "fields.String()".to_string(),
            SchemaField::Date => "fields.Date()".to_string(),
            SchemaField::DateTime => "fields.DateTime()".to_string(),
        }
    }
}

impl fmt::Display for SchemaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decl())
    }
}
