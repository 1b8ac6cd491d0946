//! Dialect tags and the canonical type system.

pub mod canonical;
pub mod classify;

use std::fmt;
use std::str::FromStr;

use crate::core::reflect::RawType;
use crate::error::ExportError;

use canonical::ColumnType;

/// A supported source/target SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// MySQL-family.
    Mysql,
    /// SQLite-family.
    Sqlite,
}

impl Dialect {
    /// Dialect identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Mysql => "mysql",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Classify a raw type descriptor under this dialect.
    ///
    /// Classification never fails: a descriptor matching no rule becomes
    /// [`canonical::CanonicalType::Unknown`], which retains passthrough
    /// capability for same-dialect rendering only.
    pub fn classify(&self, raw: &RawType) -> ColumnType {
        let canonical = match self {
            Dialect::Mysql => classify::classify_mysql(raw),
            Dialect::Sqlite => classify::classify_sqlite(raw),
        };
        ColumnType::new(*self, raw.clone(), canonical)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = ExportError;

    /// Parse a dialect tag. Anything outside `{mysql, sqlite}` is a caller
    /// error and fails before any column is touched.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(Dialect::Mysql),
            "sqlite" => Ok(Dialect::Sqlite),
            other => Err(ExportError::UnsupportedDialect(other.to_string())),
        }
    }
}
