//! SQLite DDL generation.
//!
//! SQLite has no `KEY` clause, so indexes from the source schema are not
//! rendered. Instead, columns that other tables reference through foreign
//! keys are marked `UNIQUE` inline (unless they are already primary keys),
//! which SQLite requires of any foreign-key target.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::analyze::TableDescriptor;
use crate::error::Result;

use super::mysql::split_reference;
use super::reserved::quote_sqlite;

/// Render `DROP TABLE`/`CREATE TABLE` blocks for every table.
///
/// `decimal_as_real` selects lossy `REAL` storage for decimal columns
/// instead of the default exact `TEXT` encoding.
pub fn sqlite_ddl(tables: &[TableDescriptor], decimal_as_real: bool) -> Result<String> {
    // Cross-table pass first: collect every foreign-key target column so
    // each table knows which of its columns must carry UNIQUE.
    let mut referenced: HashMap<&str, HashSet<&str>> = HashMap::new();
    for table in tables {
        for (column, reference) in &table.foreign_keys {
            let (ref_table, ref_column) = split_reference(table, column, reference)?;
            referenced.entry(ref_table).or_default().insert(ref_column);
        }
    }

    let mut out = String::new();
    for table in tables {
        let unique = referenced.get(table.name.as_str());
        out.push_str(&table_block(table, unique, decimal_as_real)?);
        debug!("rendered sqlite ddl for table {}", table.name);
    }
    Ok(out)
}

fn table_block(
    table: &TableDescriptor,
    referenced: Option<&HashSet<&str>>,
    decimal_as_real: bool,
) -> Result<String> {
    let mut block = format!(
        "DROP TABLE IF EXISTS {name};\nCREATE TABLE {name}\n    (\n",
        name = table.name
    );

    let width = table.columns.iter().map(|c| c.name.len()).max().unwrap_or(0);

    let mut sorted: Vec<_> = table.columns.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut primary_keys = Vec::new();
    let mut first = true;
    for column in sorted {
        let name = quote_sqlite(&column.name);
        if column.primary_key {
            primary_keys.push(name.clone());
        }
        let mut line = format!(
            "{:<width$} {}",
            name,
            column.ty.to_sqlite_ddl(decimal_as_real)?
        );
        if !column.nullable {
            line.push_str(" NOT NULL");
        }
        // foreign-key targets must be unique; primary keys already are
        let is_target = referenced.is_some_and(|set| set.contains(column.name.as_str()));
        if is_target && !column.primary_key {
            line.push_str(" UNIQUE");
        }
        if first {
            block.push_str("      ");
            first = false;
        } else {
            block.push_str("    , ");
        }
        block.push_str(&line);
        block.push('\n');
    }

    if primary_keys.is_empty() {
        warn!("table {} has no primary key columns", table.name);
    }
    block.push_str(&format!("    , PRIMARY KEY ({})\n", primary_keys.join(", ")));

    for (column, reference) in &table.foreign_keys {
        let (ref_table, ref_column) = split_reference(table, column, reference)?;
        block.push_str(&format!(
            "    , FOREIGN KEY ({}) REFERENCES {} ({})\n",
            column, ref_table, ref_column
        ));
    }

    block.push_str("    );\n\n");
    Ok(block)
}
