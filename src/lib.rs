//! Table builder: renders a column model into a MySQL-flavoured `CREATE TABLE` statement.

pub mod build;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod sql;

pub use build::{build_table, build_table_with, is_valid_table_name};
pub use config::{build_from_config, build_schema, load_from_path, parse_schema, SchemaConfig, TableConfig, TableSql};
pub use diagnostics::{Diagnostics, TracingDiagnostics, Warning};
pub use error::{BuildError, ConfigError};
pub use sql::{Column, Modifiers, SqlType, Table, TableBuilder};
