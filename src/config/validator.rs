//! Schema-level checks that a single table build cannot see.

use crate::config::SchemaConfig;
use crate::error::ConfigError;
use std::collections::HashSet;

pub fn validate(config: &SchemaConfig) -> Result<(), ConfigError> {
    if config.tables.is_empty() {
        return Err(ConfigError::Validation("at least one table required".into()));
    }

    let mut names = HashSet::new();
    for t in &config.tables {
        if !names.insert(t.name.as_str()) {
            return Err(ConfigError::DuplicateTable(t.name.clone()));
        }
    }

    Ok(())
}
