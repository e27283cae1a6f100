//! Load table definitions from JSON and replay them through the builder.

use crate::build::build_table_with;
use crate::config::types::*;
use crate::config::validate;
use crate::diagnostics::Diagnostics;
use crate::error::{BuildError, ConfigError};
use std::path::Path;

pub fn parse_schema(json: &str) -> Result<SchemaConfig, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a schema file. Validation is left to [`build_schema`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<SchemaConfig, ConfigError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading schema");
    let raw = std::fs::read_to_string(path)?;
    parse_schema(&raw)
}

/// Build one table: columns are created in order, then each column's flags are applied.
pub fn build_from_config(
    table: &TableConfig,
    diagnostics: &mut dyn Diagnostics,
) -> Result<String, BuildError> {
    build_table_with(&table.name, diagnostics, |tb| {
        for c in &table.columns {
            tb.column(&c.name, c.kind.clone());
        }
        for c in &table.columns {
            if c.nullable {
                tb.nullable(&c.name);
            }
            if c.auto_increment {
                tb.auto_increment(&c.name);
            }
            if c.unique {
                tb.unique(&c.name);
            }
            if c.unsigned {
                tb.unsigned(&c.name);
            }
        }
    })
}

/// Validate, then build every table in declaration order. Stops at the first failing table.
pub fn build_schema(
    config: &SchemaConfig,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Vec<TableSql>, ConfigError> {
    validate(config)?;
    config
        .tables
        .iter()
        .map(|t| {
            let sql = build_from_config(t, diagnostics).map_err(|source| ConfigError::Build {
                table: t.name.clone(),
                source,
            })?;
            Ok(TableSql {
                table: t.name.clone(),
                sql,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Warning;

    const USERS: &str = r#"{
        "tables": [
            {
                "name": "users",
                "columns": [
                    { "name": "name", "type": "varchar", "length": 40, "unique": true },
                    { "name": "age", "type": "integer", "unsigned": true },
                    { "name": "bio", "type": "text", "nullable": true },
                    { "name": "role", "type": "enum", "values": ["admin", "member"] }
                ]
            },
            {
                "name": "ledger",
                "columns": [
                    { "name": "seq", "type": "bigint", "auto_increment": true },
                    { "name": "amount", "type": "numeric", "precision": 10, "scale": 2 },
                    { "name": "mask", "type": "bit", "length": 0 }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_schema() {
        let config = parse_schema(USERS).unwrap();
        assert_eq!(config.tables.len(), 2);
        let name = &config.tables[0].columns[0];
        assert_eq!(name.kind, crate::sql::SqlType::Varchar { length: 40 });
        assert!(name.unique);
        assert!(!name.nullable);
    }

    #[test]
    fn test_build_schema_renders_each_table() {
        let config = parse_schema(USERS).unwrap();
        let mut warnings: Vec<Warning> = Vec::new();
        let out = build_schema(&config, &mut warnings).unwrap();

        assert_eq!(out[0].table, "users");
        let users = &out[0].sql;
        assert!(users.starts_with("CREATE TABLE IF NOT EXISTS users("));
        assert!(users.contains("name VARCHAR(40) NOT NULL UNIQUE KEY"));
        assert!(users.contains("age UNSIGNED INTEGER NOT NULL"));
        assert!(users.contains("bio TEXT ,"));
        assert!(users.contains("role ENUM('admin', 'member') NOT NULL"));

        let ledger = &out[1].sql;
        assert!(ledger.contains("seq BIGINT NOT NULL AUTO_INCREMENT"));
        assert!(ledger.contains("amount DECIMAL(10, 2) NOT NULL"));
        assert!(ledger.contains("mask BIT(1) NOT NULL"));

        assert_eq!(
            warnings,
            vec![Warning::BitLengthClamped { column: "mask".into(), requested: 0, clamped: 1 }]
        );
    }

    #[test]
    fn test_build_schema_reports_failing_table() {
        let config = parse_schema(r#"{ "tables": [ { "name": "bad name", "columns": [] } ] }"#).unwrap();
        let mut warnings: Vec<Warning> = Vec::new();
        match build_schema(&config, &mut warnings) {
            Err(ConfigError::Build { table, source }) => {
                assert_eq!(table, "bad name");
                assert_eq!(source, BuildError::InvalidName("bad name".into()));
            }
            other => panic!("expected build error, got {:?}", other),
        }
    }

    #[test]
    fn test_table_without_columns_is_empty_builder() {
        let table = TableConfig {
            name: "empty".into(),
            columns: Vec::new(),
        };
        let mut warnings: Vec<Warning> = Vec::new();
        assert_eq!(build_from_config(&table, &mut warnings), Err(BuildError::EmptyBuilder));
    }

    #[test]
    fn test_unknown_type_is_parse_error() {
        let err = parse_schema(r#"{ "tables": [ { "name": "t", "columns": [ { "name": "c", "type": "uuid" } ] } ] }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_from_path("/nonexistent/schema.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
