//! Table analysis: reflected snapshot in, normalized description out.

use crate::core::reflect::ReflectedTable;
use crate::dialect::canonical::ColumnType;
use crate::dialect::Dialect;

/// Normalized column description.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    /// Column name, unique within the table.
    pub name: String,

    /// Classified column type.
    pub ty: ColumnType,

    /// Whether the column allows NULL.
    pub nullable: bool,

    /// Whether the column is part of the primary key.
    pub primary_key: bool,
}

/// Normalized, in-memory structural summary of one table.
///
/// Constructed once per analysis pass and read-only afterward; consumed
/// directly by a generation driver, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDescriptor {
    /// Table name.
    pub name: String,

    /// Columns in the table's native declaration order.
    pub columns: Vec<ColumnDescriptor>,

    /// Foreign keys as `(column, "table.column")` pairs.
    pub foreign_keys: Vec<(String, String)>,

    /// Indexes as `(index name, first column)` pairs.
    pub indexes: Vec<(String, String)>,
}

/// Analyze one reflected table under the given dialect.
///
/// Pure transformation: classifies every column type, records nullability
/// and primary-key flags verbatim, and collects foreign-key references and
/// index metadata.
///
/// # Limitation
///
/// Only the first column of each index is retained; the remainder of a
/// composite index is discarded. Indexes with an empty column list are
/// skipped.
pub fn analyze_table(table: &ReflectedTable, dialect: Dialect) -> TableDescriptor {
    let mut columns = Vec::with_capacity(table.columns.len());
    let mut foreign_keys = Vec::new();

    for column in &table.columns {
        let ty = dialect.classify(&column.raw_type);
        for target in &column.foreign_keys {
            foreign_keys.push((column.name.clone(), target.clone()));
        }
        columns.push(ColumnDescriptor {
            name: column.name.clone(),
            ty,
            nullable: column.nullable,
            primary_key: column.primary_key,
        });
    }

    let indexes = table
        .indexes
        .iter()
        .filter_map(|idx| {
            idx.columns
                .first()
                .map(|col| (idx.name.clone(), col.clone()))
        })
        .collect();

    TableDescriptor {
        name: table.name.clone(),
        columns,
        foreign_keys,
        indexes,
    }
}
