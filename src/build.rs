//! Entry point: validate the table name, run the configuration closure, inject
//! system columns and render.

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::BuildError;
use crate::sql::{Table, TableBuilder};
use regex::Regex;
use std::sync::OnceLock;

const TABLE_NAME_PATTERN: &str = r"^[0-9a-zA-Z$_]+$";

fn table_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TABLE_NAME_PATTERN).expect("table name pattern compiles"))
}

/// MySQL unquoted identifier subset: ASCII letters, digits, `$` and `_`.
pub fn is_valid_table_name(name: &str) -> bool {
    table_name_regex().is_match(name)
}

/// Build a `CREATE TABLE IF NOT EXISTS` statement, logging warnings through `tracing`.
pub fn build_table<F>(table_name: &str, configure: F) -> Result<String, BuildError>
where
    F: FnOnce(&mut TableBuilder<'_>),
{
    build_table_with(table_name, &mut TracingDiagnostics, configure)
}

/// Same as [`build_table`] with an explicit warning sink.
///
/// `configure` runs exactly once, and only when the name is valid. It must add at
/// least one column; `ID`, `CreatedAt`, `UpdatedAt` and `DeletedAt` are appended
/// afterwards unless it already defined columns with those names.
pub fn build_table_with<F>(
    table_name: &str,
    diagnostics: &mut dyn Diagnostics,
    configure: F,
) -> Result<String, BuildError>
where
    F: FnOnce(&mut TableBuilder<'_>),
{
    if !is_valid_table_name(table_name) {
        return Err(BuildError::InvalidName(table_name.to_string()));
    }

    let mut table = Table::new(table_name);
    {
        let mut builder = TableBuilder::new(&mut table, diagnostics);
        configure(&mut builder);
        if builder.table().is_empty() {
            return Err(BuildError::EmptyBuilder);
        }
        builder.inject_system_columns();
    }

    let sql = table.to_sql();
    tracing::debug!(table = %table.name, sql = %sql, "create table");
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Warning;

    #[test]
    fn test_table_name_validation() {
        for name in ["test", "test1234", "test_table", "TEST", "Test1234", "Test_Table_1234", "$Test_1234"] {
            assert!(is_valid_table_name(name), "{} should be valid", name);
        }
        for name in ["Test Table", "Test T@ble", "", "naïve", "a-b"] {
            assert!(!is_valid_table_name(name), "{} should be invalid", name);
        }
    }

    #[test]
    fn test_invalid_name_skips_callback() {
        let mut called = false;
        let err = build_table("Test T@ble", |tb| {
            called = true;
            tb.id();
        })
        .unwrap_err();
        assert!(!called);
        assert_eq!(err, BuildError::InvalidName("Test T@ble".into()));
    }

    #[test]
    fn test_empty_builder() {
        let err = build_table("test", |_| {}).unwrap_err();
        assert_eq!(err, BuildError::EmptyBuilder);
    }

    #[test]
    fn test_system_columns_follow_user_columns() {
        let mut warnings: Vec<Warning> = Vec::new();
        let sql = build_table_with("test", &mut warnings, |tb| {
            tb.integer("age");
        })
        .unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS test(age INTEGER NOT NULL ,\
             ID CHAR(40) NOT NULL PRIMARY UNIQUE KEY,\
             CreatedAt DATETIME NOT NULL ,\
             UpdatedAt DATETIME NOT NULL ,\
             DeletedAt DATETIME )"
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_user_defined_system_column_wins() {
        let mut warnings: Vec<Warning> = Vec::new();
        let sql = build_table_with("test", &mut warnings, |tb| {
            tb.id();
        })
        .unwrap();
        assert_eq!(sql.matches("ID CHAR(40)").count(), 1);
        assert!(warnings.is_empty());
    }
}
