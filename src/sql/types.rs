//! Supported column types and the SQL fragment each one renders to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower and upper bound for `BIT(n)` lengths.
pub const BIT_LENGTH_MIN: i64 = 1;
pub const BIT_LENGTH_MAX: i64 = 64;

/// Type tag for a column. In JSON definitions the tag is the `"type"` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SqlType {
    Tinyint,
    Smallint,
    Mediumint,
    Integer,
    Bigint,
    #[serde(alias = "numeric")]
    Decimal { precision: u32, scale: u32 },
    Float,
    Double,
    Bit { length: i64 },
    Date,
    #[serde(alias = "datetime")]
    DateTime,
    Timestamp,
    Time,
    Year,
    Char { length: u32 },
    Varchar { length: u32 },
    Binary { length: u32 },
    Varbinary { length: u32 },
    Tinyblob,
    Blob,
    Mediumblob,
    Longblob,
    Tinytext,
    Text,
    Mediumtext,
    Longtext,
    Enum { values: Vec<String> },
    Set { values: Vec<String> },
}

/// `'a', 'b'` with no escaping of the members.
fn quoted_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("'{}'", v))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::Tinyint => f.write_str("TINYINT"),
            SqlType::Smallint => f.write_str("SMALLINT"),
            SqlType::Mediumint => f.write_str("MEDIUMINT"),
            SqlType::Integer => f.write_str("INTEGER"),
            SqlType::Bigint => f.write_str("BIGINT"),
            SqlType::Decimal { precision, scale } => write!(f, "DECIMAL({}, {})", precision, scale),
            SqlType::Float => f.write_str("FLOAT"),
            SqlType::Double => f.write_str("DOUBLE"),
            SqlType::Bit { length } => write!(f, "BIT({})", length),
            SqlType::Date => f.write_str("DATE"),
            SqlType::DateTime => f.write_str("DATETIME"),
            SqlType::Timestamp => f.write_str("TIMESTAMP"),
            SqlType::Time => f.write_str("TIME"),
            SqlType::Year => f.write_str("YEAR"),
            SqlType::Char { length } => write!(f, "CHAR({})", length),
            SqlType::Varchar { length } => write!(f, "VARCHAR({})", length),
            SqlType::Binary { length } => write!(f, "BINARY({})", length),
            SqlType::Varbinary { length } => write!(f, "VARBINARY({})", length),
            SqlType::Tinyblob => f.write_str("TINYBLOB"),
            SqlType::Blob => f.write_str("BLOB"),
            SqlType::Mediumblob => f.write_str("MEDIUMBLOB"),
            SqlType::Longblob => f.write_str("LONGBLOB"),
            SqlType::Tinytext => f.write_str("TINYTEXT"),
            SqlType::Text => f.write_str("TEXT"),
            SqlType::Mediumtext => f.write_str("MEDIUMTEXT"),
            SqlType::Longtext => f.write_str("LONGTEXT"),
            SqlType::Enum { values } => write!(f, "ENUM({})", quoted_list(values)),
            SqlType::Set { values } => write!(f, "SET({})", quoted_list(values)),
        }
    }
}
