//! Migrate command - applies the PostgreSQL schema

use tracing::info;

use crate::config::{AppConfig, StorageBackend};
use crate::infrastructure::storage;

pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    if config.storage.backend != StorageBackend::Postgres {
        anyhow::bail!("migrations require storage.backend = \"postgres\"");
    }

    let pool = storage::connect(&config.storage).await?;
    let applied = storage::run_schema_migrations(&pool).await?;
    let version = storage::PostgresMigrator::new(pool).current_version().await?;

    info!(applied, version = ?version, "Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrate_rejects_memory_backend() {
        let err = run(&AppConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("postgres"));
    }
}
