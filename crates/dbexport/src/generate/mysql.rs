//! MySQL DDL generation.

use tracing::debug;

use crate::analyze::TableDescriptor;
use crate::error::{ExportError, Result};

use super::reserved::quote_mysql;

/// Render `DROP TABLE`/`CREATE TABLE` blocks for every table, blank-line
/// separated. Each block is rendered atomically: a type that fails to
/// render aborts the whole block, not just one line.
pub fn mysql_ddl(tables: &[TableDescriptor]) -> Result<String> {
    let mut out = String::new();
    for table in tables {
        out.push_str(&table_block(table)?);
        debug!("rendered mysql ddl for table {}", table.name);
    }
    Ok(out)
}

fn table_block(table: &TableDescriptor) -> Result<String> {
    let mut block = format!(
        "DROP TABLE IF EXISTS {name};\nCREATE TABLE {name}\n    (\n",
        name = table.name
    );

    // pad to the longest raw name so types line up
    let width = table.columns.iter().map(|c| c.name.len()).max().unwrap_or(0);

    let mut sorted: Vec<_> = table.columns.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut primary_keys = Vec::new();
    let mut first = true;
    for column in sorted {
        let name = quote_mysql(&column.name);
        if column.primary_key {
            primary_keys.push(name.clone());
        }
        let mut line = format!("{:<width$} {}", name, column.ty.to_mysql_ddl()?);
        if !column.nullable {
            line.push_str(" NOT NULL");
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

    if !primary_keys.is_empty() {
        block.push_str(&format!("    , PRIMARY KEY ({})\n", primary_keys.join(", ")));
    }

    for (index_name, column) in &table.indexes {
        block.push_str(&format!("    , KEY {} ({})\n", index_name, column));
    }

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

/// Split a `"table.column"` foreign-key target.
pub(crate) fn split_reference<'a>(
    table: &TableDescriptor,
    column: &str,
    reference: &'a str,
) -> Result<(&'a str, &'a str)> {
    reference.split_once('.').ok_or_else(|| {
        ExportError::Snapshot(format!(
            "malformed foreign key target {:?} on {}.{}",
            reference, table.name, column
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze_table;
    use crate::core::reflect::{RawType, ReflectedColumn, ReflectedIndex, ReflectedTable};
    use crate::dialect::Dialect;

    fn col(name: &str, raw: RawType, nullable: bool, pk: bool) -> ReflectedColumn {
        ReflectedColumn {
            name: name.to_string(),
            raw_type: raw,
            nullable,
            primary_key: pk,
            foreign_keys: vec![],
        }
    }

    fn users() -> TableDescriptor {
        // deliberately out of lexicographic order
        let table = ReflectedTable {
            name: "users".to_string(),
            columns: vec![
                col("id", RawType::new("INT"), false, true),
                col(
                    "active",
                    RawType::new("TINYINT")
                        .with_display_width(1)
                        .with_native("TINYINT(1)"),
                    true,
                    false,
                ),
                col(
                    "balance",
                    RawType::new("DECIMAL")
                        .with_precision_scale(10, 2)
                        .with_native("DECIMAL(10, 2)"),
                    true,
                    false,
                ),
            ],
            indexes: vec![ReflectedIndex {
                name: "ix_users_active".to_string(),
                columns: vec!["active".to_string()],
            }],
        };
        analyze_table(&table, Dialect::Mysql)
    }

    #[test]
    fn test_columns_emitted_in_sorted_order() {
        let ddl = mysql_ddl(&[users()]).unwrap();
        let active = ddl.find("active").unwrap();
        let balance = ddl.find("balance").unwrap();
        let id = ddl.find("\n    , id").unwrap();
        assert!(active < balance && balance < id);
    }

    #[test]
    fn test_native_passthrough_in_same_dialect_ddl() {
        let ddl = mysql_ddl(&[users()]).unwrap();
        // mysql source, mysql target: the raw native forms survive
        assert!(ddl.contains("TINYINT(1)"), "{}", ddl);
        assert!(ddl.contains("DECIMAL(10, 2)"), "{}", ddl);
    }

    #[test]
    fn test_block_shape_and_clauses() {
        let ddl = mysql_ddl(&[users()]).unwrap();
        assert!(ddl.starts_with("DROP TABLE IF EXISTS users;\nCREATE TABLE users\n    (\n"));
        assert!(ddl.contains("    , PRIMARY KEY (id)\n"));
        assert!(ddl.contains("    , KEY ix_users_active (active)\n"));
        assert!(ddl.contains("id      INT NOT NULL"), "{}", ddl);
        assert!(ddl.ends_with("    );\n\n"));
    }

    #[test]
    fn test_no_primary_key_clause_when_table_has_none() {
        let table = ReflectedTable {
            name: "log".to_string(),
            columns: vec![col("message", RawType::new("TEXT"), true, false)],
            indexes: vec![],
        };
        let ddl = mysql_ddl(&[analyze_table(&table, Dialect::Mysql)]).unwrap();
        assert!(!ddl.contains("PRIMARY KEY"));
    }

    #[test]
    fn test_reserved_column_names_are_backticked() {
        let table = ReflectedTable {
            name: "events".to_string(),
            columns: vec![
                col("order", RawType::new("INT"), true, false),
                col("name", RawType::new("VARCHAR").with_length(20), true, false),
            ],
            indexes: vec![],
        };
        let ddl = mysql_ddl(&[analyze_table(&table, Dialect::Mysql)]).unwrap();
        assert!(ddl.contains("`order`"));
        assert!(!ddl.contains("`name`"));
    }

    #[test]
    fn test_foreign_key_clause() {
        let mut posts = ReflectedTable {
            name: "posts".to_string(),
            columns: vec![col("author", RawType::new("INT"), false, false)],
            indexes: vec![],
        };
        posts.columns[0].foreign_keys = vec!["users.id".to_string()];
        let ddl = mysql_ddl(&[analyze_table(&posts, Dialect::Mysql)]).unwrap();
        assert!(ddl.contains("    , FOREIGN KEY (author) REFERENCES users (id)\n"));
    }

    #[test]
    fn test_malformed_foreign_key_target_fails() {
        let mut posts = ReflectedTable {
            name: "posts".to_string(),
            columns: vec![col("author", RawType::new("INT"), false, false)],
            indexes: vec![],
        };
        posts.columns[0].foreign_keys = vec!["users-id".to_string()];
        let err = mysql_ddl(&[analyze_table(&posts, Dialect::Mysql)]).unwrap_err();
        assert!(matches!(err, ExportError::Snapshot(_)));
    }

    #[test]
    fn test_unknown_type_cross_dialect_fails_atomically() {
        let table = ReflectedTable {
            name: "widgets".to_string(),
            columns: vec![col("payload", RawType::new("BLOB"), true, false)],
            indexes: vec![],
        };
        // sqlite source, mysql target: BLOB is unclassifiable under sqlite
        let desc = analyze_table(&table, Dialect::Sqlite);
        let err = mysql_ddl(&[desc]).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedTypeMapping { .. }));
    }
}
