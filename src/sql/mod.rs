//! Table model, column factory surface and DDL rendering.

mod builder;
pub mod modifiers;
mod table;
pub mod types;

pub use builder::*;
pub use modifiers::Modifiers;
pub use table::{Column, Table};
pub use types::SqlType;
