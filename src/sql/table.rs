//! In-memory table model and its `CREATE TABLE` rendering.

use crate::sql::Modifiers;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    /// Literal SQL type fragment, fixed when the column is created.
    pub data_type: String,
    pub modifiers: Modifiers,
    pub unsigned: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, modifiers: Modifiers) -> Self {
        Column {
            name: name.into(),
            data_type: data_type.into(),
            modifiers,
            unsigned: false,
        }
    }

    fn key_clause(&self) -> &'static str {
        let primary = self.modifiers.contains(Modifiers::PRIMARY);
        let unique = self.modifiers.contains(Modifiers::UNIQUE);
        match (primary, unique) {
            (true, true) => "PRIMARY UNIQUE KEY",
            (true, false) => "PRIMARY KEY",
            (false, true) => "UNIQUE KEY",
            (false, false) => "",
        }
    }

    /// One column clause, including its separating comma.
    pub fn to_sql(&self) -> String {
        format!(
            "{} {}{} {}{}{},",
            self.name,
            if self.unsigned { "UNSIGNED " } else { "" },
            self.data_type,
            if self.modifiers.contains(Modifiers::NOT_NULL) { "NOT NULL " } else { "" },
            if self.modifiers.contains(Modifiers::AUTO_INCREMENT) { "AUTO_INCREMENT " } else { "" },
            self.key_clause(),
        )
    }
}

/// Ordered column list plus a name. Column order is render order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Table {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Exact, case-sensitive name match.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    pub fn to_sql(&self) -> String {
        let clauses: String = self.columns.iter().map(Column::to_sql).collect();
        let clauses = clauses.strip_suffix(',').unwrap_or(&clauses);
        format!("CREATE TABLE IF NOT EXISTS {}({})", self.name, clauses)
    }
}
