//! Example consumer: a separate Rust project that uses table-builder as a dependency.
//!
//! Run from repo root: `cargo run -p example-consumer -- example_consumer/schema.json`
//! Or set `SCHEMA_PATH` (a `.env` file is honoured).

use table_builder::{build_schema, build_table, load_from_path, TracingDiagnostics};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("table_builder=info")),
        )
        .init();

    let schema_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SCHEMA_PATH").ok())
        .unwrap_or_else(|| "example_consumer/schema.json".into());

    let schema = load_from_path(&schema_path)?;
    for table in build_schema(&schema, &mut TracingDiagnostics)? {
        println!("{};", table.sql);
    }

    // Programmatic definitions go through the same builder.
    let audit = build_table("audit_log", |tb| {
        tb.bigint("seq")
            .auto_increment("seq")
            .unsigned("seq")
            .varchar("action", 64)
            .longtext("payload")
            .nullable("payload");
    })?;
    println!("{};", audit);

    tracing::info!(path = %schema_path, tables = schema.tables.len() + 1, "rendered schema");
    Ok(())
}
