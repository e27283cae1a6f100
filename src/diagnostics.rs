//! Non-fatal build warnings and the sinks that receive them.

use std::fmt;

/// Anomaly the builder recovered from. Never changes the outcome of a build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// Second definition of a column; the first one is kept.
    DuplicateColumn { column: String, table: String },
    /// Flag mutator named a column the table does not have.
    ColumnNotFound { column: String },
    /// `BIT(n)` length outside 1..=64 was clamped.
    BitLengthClamped { column: String, requested: i64, clamped: i64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DuplicateColumn { column, table } => {
                write!(f, "column {} already defined in table {}", column, table)
            }
            Warning::ColumnNotFound { column } => write!(f, "column {} not found", column),
            Warning::BitLengthClamped { column, requested, clamped } => write!(
                f,
                "bit length {} for column {} is out of range, using {}",
                requested, column, clamped
            ),
        }
    }
}

/// Receives warnings emitted while a table is being built.
pub trait Diagnostics {
    fn warn(&mut self, warning: Warning);
}

/// Forwards every warning to `tracing` at WARN level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning);
    }
}

/// Collects warnings in emission order (used by tests and callers that report them later).
impl Diagnostics for Vec<Warning> {
    fn warn(&mut self, warning: Warning) {
        self.push(warning);
    }
}
