//! PostgreSQL plumbing shared by the repositories

pub mod migrations;
mod pool;

pub use migrations::{run_schema_migrations, schema_migrations, Migration, PostgresMigrator};
pub use pool::connect;
