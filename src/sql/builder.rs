//! Column factory surface handed to configuration closures.
//!
//! Every type method funnels into [`TableBuilder::make_column`]; names are never
//! quoted or escaped.

use crate::diagnostics::{Diagnostics, Warning};
use crate::sql::types::{BIT_LENGTH_MAX, BIT_LENGTH_MIN};
use crate::sql::{Column, Modifiers, SqlType, Table};

/// Name and fragment of the injected identifier column.
pub const ID_COLUMN: &str = "ID";
const ID_TYPE: &str = "CHAR(40)";
const ID_MODIFIERS: Modifiers = Modifiers::UNIQUE
    .union(Modifiers::PRIMARY)
    .union(Modifiers::NOT_NULL);
const DATETIME: &str = "DATETIME";

pub const CREATED_AT_COLUMN: &str = "CreatedAt";
pub const UPDATED_AT_COLUMN: &str = "UpdatedAt";
pub const DELETED_AT_COLUMN: &str = "DeletedAt";

/// Mutable view over one table being built. Methods return `&mut Self` so calls chain.
pub struct TableBuilder<'a> {
    table: &'a mut Table,
    diagnostics: &'a mut dyn Diagnostics,
}

impl<'a> TableBuilder<'a> {
    pub fn new(table: &'a mut Table, diagnostics: &'a mut dyn Diagnostics) -> Self {
        TableBuilder { table, diagnostics }
    }

    pub fn table(&self) -> &Table {
        &*self.table
    }

    /// Appends a column unless one with the same name exists; the first definition wins.
    pub fn make_column(&mut self, name: &str, data_type: &str, modifiers: Modifiers) -> &mut Self {
        if self.table.has_column(name) {
            self.diagnostics.warn(Warning::DuplicateColumn {
                column: name.to_string(),
                table: self.table.name.clone(),
            });
            return self;
        }
        self.table.columns.push(Column::new(name, data_type, modifiers));
        self
    }

    /// Adds a NOT NULL column of the given type. `BIT` lengths are clamped into 1..=64.
    pub fn column(&mut self, name: &str, ty: SqlType) -> &mut Self {
        let ty = match ty {
            SqlType::Bit { length } => SqlType::Bit {
                length: self.clamp_bit_length(name, length),
            },
            other => other,
        };
        self.make_column(name, &ty.to_string(), Modifiers::NOT_NULL)
    }

    fn clamp_bit_length(&mut self, name: &str, length: i64) -> i64 {
        let clamped = length.clamp(BIT_LENGTH_MIN, BIT_LENGTH_MAX);
        if clamped != length {
            self.diagnostics.warn(Warning::BitLengthClamped {
                column: name.to_string(),
                requested: length,
                clamped,
            });
        }
        clamped
    }

    fn with_column(&mut self, name: &str, apply: impl FnOnce(&mut Column)) -> &mut Self {
        match self.table.column_mut(name) {
            Some(col) => apply(col),
            None => self.diagnostics.warn(Warning::ColumnNotFound {
                column: name.to_string(),
            }),
        }
        self
    }

    // Identifier and audit columns

    /// `ID CHAR(40)`, NOT NULL primary and unique key.
    pub fn id(&mut self) -> &mut Self {
        self.make_column(ID_COLUMN, ID_TYPE, ID_MODIFIERS)
    }

    /// `CreatedAt` and `UpdatedAt` as NOT NULL `DATETIME`, `DeletedAt` as nullable `DATETIME`.
    pub fn timestamps(&mut self) -> &mut Self {
        self.make_column(CREATED_AT_COLUMN, DATETIME, Modifiers::NOT_NULL)
            .make_column(UPDATED_AT_COLUMN, DATETIME, Modifiers::NOT_NULL)
            .make_column(DELETED_AT_COLUMN, DATETIME, Modifiers::NONE)
    }

    /// Same columns as [`TableBuilder::id`] and [`TableBuilder::timestamps`], except an
    /// existing column with a system name is kept without a warning.
    pub(crate) fn inject_system_columns(&mut self) {
        let system = [
            (ID_COLUMN, ID_TYPE, ID_MODIFIERS),
            (CREATED_AT_COLUMN, DATETIME, Modifiers::NOT_NULL),
            (UPDATED_AT_COLUMN, DATETIME, Modifiers::NOT_NULL),
            (DELETED_AT_COLUMN, DATETIME, Modifiers::NONE),
        ];
        for (name, data_type, modifiers) in system {
            if !self.table.has_column(name) {
                self.table.columns.push(Column::new(name, data_type, modifiers));
            }
        }
    }

    // Numeric

    pub fn tinyint(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Tinyint)
    }

    pub fn smallint(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Smallint)
    }

    pub fn mediumint(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Mediumint)
    }

    pub fn integer(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Integer)
    }

    pub fn bigint(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Bigint)
    }

    pub fn decimal(&mut self, name: &str, precision: u32, scale: u32) -> &mut Self {
        self.column(name, SqlType::Decimal { precision, scale })
    }

    /// Alias of [`TableBuilder::decimal`].
    pub fn numeric(&mut self, name: &str, precision: u32, scale: u32) -> &mut Self {
        self.decimal(name, precision, scale)
    }

    pub fn float(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Float)
    }

    pub fn double(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Double)
    }

    /// `BIT(length)`; out-of-range lengths are clamped with a warning, never an error.
    pub fn bit(&mut self, name: &str, length: i64) -> &mut Self {
        self.column(name, SqlType::Bit { length })
    }

    // Date and time

    pub fn date(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Date)
    }

    pub fn date_time(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::DateTime)
    }

    pub fn timestamp(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Timestamp)
    }

    pub fn time(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Time)
    }

    pub fn year(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Year)
    }

    // String and binary

    pub fn char(&mut self, name: &str, length: u32) -> &mut Self {
        self.column(name, SqlType::Char { length })
    }

    pub fn varchar(&mut self, name: &str, length: u32) -> &mut Self {
        self.column(name, SqlType::Varchar { length })
    }

    pub fn binary(&mut self, name: &str, length: u32) -> &mut Self {
        self.column(name, SqlType::Binary { length })
    }

    pub fn varbinary(&mut self, name: &str, length: u32) -> &mut Self {
        self.column(name, SqlType::Varbinary { length })
    }

    pub fn tinyblob(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Tinyblob)
    }

    pub fn blob(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Blob)
    }

    pub fn mediumblob(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Mediumblob)
    }

    pub fn longblob(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Longblob)
    }

    pub fn tinytext(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Tinytext)
    }

    pub fn text(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Text)
    }

    pub fn mediumtext(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Mediumtext)
    }

    pub fn longtext(&mut self, name: &str) -> &mut Self {
        self.column(name, SqlType::Longtext)
    }

    /// `ENUM('v1', 'v2', ...)` in the given order. Members are not escaped.
    pub fn enumeration<I, S>(&mut self, name: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.column(name, SqlType::Enum { values })
    }

    /// `SET('v1', 'v2', ...)` in the given order. Members are not escaped.
    pub fn set<I, S>(&mut self, name: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.column(name, SqlType::Set { values })
    }

    // Flag mutators: a missing column is a warning, never an error.

    pub fn not_null(&mut self, name: &str) -> &mut Self {
        self.with_column(name, |c| c.modifiers.insert(Modifiers::NOT_NULL))
    }

    pub fn nullable(&mut self, name: &str) -> &mut Self {
        self.with_column(name, |c| c.modifiers.remove(Modifiers::NOT_NULL))
    }

    pub fn auto_increment(&mut self, name: &str) -> &mut Self {
        self.with_column(name, |c| c.modifiers.insert(Modifiers::AUTO_INCREMENT))
    }

    pub fn unique(&mut self, name: &str) -> &mut Self {
        self.with_column(name, |c| c.modifiers.insert(Modifiers::UNIQUE))
    }

    pub fn unsigned(&mut self, name: &str) -> &mut Self {
        self.with_column(name, |c| c.unsigned = true)
    }
}
