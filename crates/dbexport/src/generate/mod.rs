//! Rendering/generation drivers.
//!
//! Thin text-assembly layers over the canonical type model's render methods.
//! The DDL drivers emit columns in name-sorted order (not declaration order)
//! so the generated scripts are diff-stable across runs regardless of
//! reflection ordering quirks; the schema and JSON drivers keep native
//! column order.

pub mod json;
pub mod mysql;
pub mod reserved;
pub mod schema;
pub mod sqlite;

pub use json::{dump_json, normalize_rows};
pub use mysql::mysql_ddl;
pub use schema::{schema_defs, table_schema};
pub use sqlite::sqlite_ddl;
