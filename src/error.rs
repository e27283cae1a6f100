//! Typed errors for table building and declarative definitions.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("table name {0} is invalid")]
    InvalidName(String),
    #[error("builder method is empty")]
    EmptyBuilder,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config read: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("validation: {0}")]
    Validation(String),
    #[error("duplicate table: {0}")]
    DuplicateTable(String),
    #[error("table {table}: {source}")]
    Build {
        table: String,
        #[source]
        source: BuildError,
    },
}
