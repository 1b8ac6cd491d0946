//! # dbexport
//!
//! Dialect-neutral schema analysis and artifact generation for reflected
//! relational tables.
//!
//! The library consumes a reflection snapshot (tables, columns, indexes and
//! foreign keys, as produced by an external reflection collaborator) and
//! re-derives a normalized structural description per table. That description
//! drives several independent generators:
//!
//! - **MySQL DDL** and **SQLite DDL** (`CREATE TABLE` scripts)
//! - **Serialization schema definitions** (one class-like block per table)
//! - **JSON data export** with decimal-to-string normalization
//!
//! The core is the canonical type model: each reflected column type is
//! classified into a small set of semantic types (Boolean, Integer, Float,
//! Decimal, String, Date, DateTime, plus a passthrough-only Unknown), each of
//! which knows how to re-render itself for every supported target.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dbexport::{analyze_table, generate, Dialect, Snapshot};
//!
//! fn main() -> dbexport::Result<()> {
//!     let snapshot = Snapshot::load("snapshot.yaml")?;
//!     let tables: Vec<_> = snapshot
//!         .tables
//!         .iter()
//!         .map(|t| analyze_table(t, Dialect::Mysql))
//!         .collect();
//!     let ddl = generate::sqlite_ddl(&tables, false)?;
//!     std::fs::write("sqlite_table.sql", ddl)?;
//!     Ok(())
//! }
//! ```

pub mod analyze;
pub mod config;
pub mod core;
pub mod dialect;
pub mod error;
pub mod generate;

// Re-exports for convenient access
pub use analyze::{analyze_table, ColumnDescriptor, TableDescriptor};
pub use config::Config;
pub use core::reflect::{RawType, ReflectedColumn, ReflectedIndex, ReflectedTable, Snapshot};
pub use core::value::{Row, RowValue};
pub use dialect::canonical::{CanonicalType, ColumnType, SchemaField};
pub use dialect::Dialect;
pub use error::{ExportError, Result};
