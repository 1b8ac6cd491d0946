//! Per-dialect type classification.
//!
//! Each dialect gets its own ordered, first-match rule list; there is no
//! shared rule table because the same type name can carry different
//! semantics across dialects. Rule order is load-bearing: fixed-point
//! decimal must be checked before the generic numeric rules, and the
//! width-1 TINYINT boolean special case before falling back to Integer.

use tracing::warn;

use crate::core::reflect::RawType;

use super::canonical::CanonicalType;

/// Classify a MySQL raw type descriptor.
pub(crate) fn classify_mysql(raw: &RawType) -> CanonicalType {
    match raw.name.to_ascii_lowercase().as_str() {
        // 1. fixed-point decimal, before any generic numeric rule
        "decimal" | "numeric" | "dec" | "fixed" => CanonicalType::Decimal {
            precision: raw.precision.filter(|_| raw.scale.is_some()),
            scale: raw.scale.filter(|_| raw.precision.is_some()),
        },

        // 2. floating point
        "float" | "double" | "real" => CanonicalType::Float,

        // 3. generic integers
        "int" | "integer" | "bigint" | "mediumint" | "smallint" => CanonicalType::Integer {
            display_width: raw.display_width,
        },

        // 4. width-1 TINYINT is MySQL's canonical boolean encoding;
        //    any other width (including absent) stays an integer
        "tinyint" => {
            if raw.display_width == Some(1) {
                CanonicalType::Boolean
            } else {
                CanonicalType::Integer {
                    display_width: raw.display_width,
                }
            }
        }

        // 5. character/text
        "varchar" | "char" | "text" | "tinytext" | "mediumtext" | "longtext" | "nvarchar"
        | "nchar" => CanonicalType::String { length: raw.length },

        // 6. date-only
        "date" => CanonicalType::Date,

        // 7. timestamp/datetime
        "datetime" | "timestamp" => CanonicalType::DateTime,

        // 8. no rule matched: passthrough-only
        _ => {
            warn!(
                "unclassifiable mysql type '{}'; only native rendering available",
                raw.native_form()
            );
            CanonicalType::Unknown
        }
    }
}

/// Classify a SQLite raw type descriptor.
///
/// SQLite's type system is looser: no native decimal or boolean types, so
/// the rule list is shorter and anything exotic falls through to Unknown.
pub(crate) fn classify_sqlite(raw: &RawType) -> CanonicalType {
    match raw.name.to_ascii_lowercase().as_str() {
        // 1. floating point
        "float" | "real" | "double" => CanonicalType::Float,

        // 2. integers
        "integer" | "int" | "bigint" | "smallint" => CanonicalType::Integer {
            display_width: raw.display_width,
        },

        // 3. character/text
        "varchar" | "char" | "text" | "nvarchar" | "nchar" => {
            CanonicalType::String { length: raw.length }
        }

        // 4. date-only
        "date" => CanonicalType::Date,

        // 5. no rule matched
        _ => {
            warn!(
                "unclassifiable sqlite type '{}'; only native rendering available",
                raw.native_form()
            );
            CanonicalType::Unknown
        }
    }
}
