//! Declarative table definitions, as read from JSON.

use crate::sql::SqlType;
use serde::{Deserialize, Serialize};

/// One column: name, type tag with its parameters, and flags applied after creation.
///
/// ```json
/// { "name": "price", "type": "decimal", "precision": 5, "scale": 2, "unsigned": true }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub name: String,
    #[serde(flatten)]
    pub kind: SqlType,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub unsigned: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

/// All tables of one schema file, built in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub tables: Vec<TableConfig>,
}

/// Rendered statement for one table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableSql {
    pub table: String,
    pub sql: String,
}
