//! Serialization schema generation.
//!
//! Emits one marshmallow `Schema` subclass per table, with a field
//! declaration per column. Unlike the DDL drivers there is no native
//! passthrough: every column must classify, so unclassifiable types fail
//! the whole table.

use tracing::debug;

use crate::analyze::TableDescriptor;
use crate::dialect::canonical::SchemaField;
use crate::error::Result;

const HEADER: &str = "# -*- coding: utf-8 -*-\n\n\nfrom marshmallow import fields, Schema\n\n\n";

/// Render schema class definitions for every table.
pub fn schema_defs(tables: &[TableDescriptor]) -> Result<String> {
    let mut blocks = Vec::with_capacity(tables.len());
    for table in tables {
        let mut block = format!("class {}Schema(Schema):\n\n", class_name(&table.name));
        for (name, field) in table_schema(table)? {
            block.push_str(&format!("    {} = {}\n", name, field.decl()));
        }
        blocks.push(block);
        debug!("rendered schema class for table {}", table.name);
    }
    Ok(format!("{}{}", HEADER, blocks.join("\n\n")))
}

/// The schema fields for one table, in native column order.
pub fn table_schema(table: &TableDescriptor) -> Result<Vec<(String, SchemaField)>> {
    table
        .columns
        .iter()
        .map(|col| Ok((col.name.clone(), col.ty.schema_field()?)))
        .collect()
}

/// `snake_case` table name to a `CamelCase` class name.
fn class_name(table: &str) -> String {
    table
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze_table;
    use crate::core::reflect::{RawType, ReflectedColumn, ReflectedTable};
    use crate::dialect::Dialect;
    use crate::error::ExportError;

    fn col(name: &str, raw: RawType) -> ReflectedColumn {
        ReflectedColumn {
            name: name.to_string(),
            raw_type: raw,
            nullable: true,
            primary_key: false,
            foreign_keys: vec![],
        }
    }

    fn order_items() -> TableDescriptor {
        let table = ReflectedTable {
            name: "order_items".to_string(),
            columns: vec![
                col("id", RawType::new("INT")),
                col("price", RawType::new("DECIMAL").with_precision_scale(10, 2)),
                col("added_at", RawType::new("DATETIME")),
            ],
            indexes: vec![],
        };
        analyze_table(&table, Dialect::Mysql)
    }

    #[test]
    fn test_class_name_camelcases_snake_case() {
        assert_eq!(class_name("order_items"), "OrderItems");
        assert_eq!(class_name("users"), "Users");
        assert_eq!(class_name("a__b"), "AB");
    }

    #[test]
    fn test_schema_defs_shape() {
        let out = schema_defs(&[order_items()]).unwrap();
        assert!(out.starts_with(
            "# -*- coding: utf-8 -*-\n\n\nfrom marshmallow import fields, Schema\n\n\n"
        ));
        assert!(out.contains("class OrderItemsSchema(Schema):\n\n"));
        assert!(out.contains("    id = fields.Integer()\n"));
        assert!(out.contains("    price = fields.Decimal(places=2)\n"));
        assert!(out.contains("    added_at = fields.DateTime()\n"));
    }

    #[test]
    fn test_fields_keep_native_column_order() {
        let out = schema_defs(&[order_items()]).unwrap();
        let id = out.find("id =").unwrap();
        let price = out.find("price =").unwrap();
        let added = out.find("added_at =").unwrap();
        assert!(id < price && price < added);
    }

    #[test]
    fn test_blocks_joined_by_blank_line() {
        let users = analyze_table(
            &ReflectedTable {
                name: "users".to_string(),
                columns: vec![col("id", RawType::new("INT"))],
                indexes: vec![],
            },
            Dialect::Mysql,
        );
        let out = schema_defs(&[users, order_items()]).unwrap();
        assert!(out.contains("    id = fields.Integer()\n\n\nclass OrderItemsSchema"));
    }

    #[test]
    fn test_unknown_type_has_no_schema_field() {
        let table = ReflectedTable {
            name: "blobs".to_string(),
            columns: vec![col("payload", RawType::new("BLOB"))],
            indexes: vec![],
        };
        let desc = analyze_table(&table, Dialect::Mysql);
        let err = schema_defs(&[desc]).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedTypeMapping { .. }));
    }
}
