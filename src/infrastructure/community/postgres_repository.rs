//! PostgreSQL community repository implementation

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::domain::community::{Community, CommunityAdmin, CommunityId, CommunityRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of CommunityRepository.
///
/// Communities live in `communities`; administrator associations live in
/// `community_admins` keyed by `(community_id, admin_id)`.
#[derive(Debug, Clone)]
pub struct PostgresCommunityRepository {
    pool: PgPool,
}

impl PostgresCommunityRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_admins(&self, id: &CommunityId) -> Result<Vec<CommunityAdmin>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT admin_id FROM community_admins
            WHERE community_id = $1
            ORDER BY created_at, admin_id
            "#,
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to load community admins: {}", e)))?;

        rows.iter()
            .map(|row| {
                row.try_get::<String, _>("admin_id")
                    .map(CommunityAdmin::new)
                    .map_err(read_error)
            })
            .collect()
    }
}

#[async_trait]
impl CommunityRepository for PostgresCommunityRepository {
    async fn get(&self, id: &CommunityId) -> Result<Option<Community>, DomainError> {
        let row = sqlx::query(
            "SELECT community_id, name, district, created_at FROM communities WHERE community_id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get community: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let admins = self.load_admins(id).await?;
        row_to_community(&row, admins).map(Some)
    }

    async fn create(&self, community: Community) -> Result<Community, DomainError> {
        let mut tx = begin(&self.pool).await?;

        sqlx::query(
            r#"
            INSERT INTO communities (community_id, name, district, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(community.id().as_str())
        .bind(community.name())
        .bind(community.district())
        .bind(community.created_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::conflict(
                format!("Community '{}' already exists", community.id()),
            ),
            _ => DomainError::storage(format!("Failed to create community: {}", e)),
        })?;

        insert_admins(&mut tx, community.id(), community.admins()).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit community: {}", e)))?;

        Ok(community)
    }

    async fn add_admins(
        &self,
        id: &CommunityId,
        admins: Vec<CommunityAdmin>,
    ) -> Result<Option<Community>, DomainError> {
        let mut tx = begin(&self.pool).await?;

        let locked = sqlx::query("SELECT 1 FROM communities WHERE community_id = $1 FOR UPDATE")
            .bind(id.as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check community: {}", e)))?;

        if locked.is_none() {
            return Ok(None);
        }

        insert_admins(&mut tx, id, &admins).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit community admins: {}", e)))?;

        self.get(id).await
    }

    async fn list(&self) -> Result<Vec<Community>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT community_id, name, district, created_at
            FROM communities
            ORDER BY created_at, community_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list communities: {}", e)))?;

        let admin_rows = sqlx::query(
            "SELECT community_id, admin_id FROM community_admins ORDER BY created_at, admin_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list community admins: {}", e)))?;

        let mut admins = group_admins(
            admin_rows
                .iter()
                .map(|row| -> Result<(String, String), DomainError> {
                    Ok((
                        row.try_get::<String, _>("community_id").map_err(read_error)?,
                        row.try_get::<String, _>("admin_id").map_err(read_error)?,
                    ))
                })
                .collect::<Result<Vec<_>, _>>()?,
        );

        rows.iter()
            .map(|row| {
                let id: String = row.try_get("community_id").map_err(read_error)?;
                let community_admins = admins.remove(&id).unwrap_or_default();
                row_to_community(row, community_admins)
            })
            .collect()
    }
}

async fn begin(pool: &PgPool) -> Result<Transaction<'static, Postgres>, DomainError> {
    pool.begin()
        .await
        .map_err(|e| DomainError::storage(format!("Failed to start transaction: {}", e)))
}

async fn insert_admins(
    tx: &mut Transaction<'static, Postgres>,
    id: &CommunityId,
    admins: &[CommunityAdmin],
) -> Result<(), DomainError> {
    for admin in admins {
        sqlx::query(
            r#"
            INSERT INTO community_admins (community_id, admin_id)
            VALUES ($1, $2)
            ON CONFLICT (community_id, admin_id) DO NOTHING
            "#,
        )
        .bind(id.as_str())
        .bind(admin.admin_id())
        .execute(&mut **tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to add community admin: {}", e)))?;
    }

    Ok(())
}

/// Bucket `(community_id, admin_id)` pairs by community, keeping row order
fn group_admins(pairs: Vec<(String, String)>) -> HashMap<String, Vec<CommunityAdmin>> {
    let mut grouped: HashMap<String, Vec<CommunityAdmin>> = HashMap::new();

    for (community_id, admin_id) in pairs {
        grouped
            .entry(community_id)
            .or_default()
            .push(CommunityAdmin::new(admin_id));
    }

    grouped
}

fn row_to_community(row: &PgRow, admins: Vec<CommunityAdmin>) -> Result<Community, DomainError> {
    let id: String = row.try_get("community_id").map_err(read_error)?;
    let id = CommunityId::new(id)
        .map_err(|e| DomainError::storage(format!("Invalid community id in storage: {}", e)))?;

    Ok(Community::restore(
        id,
        row.try_get::<String, _>("name").map_err(read_error)?,
        row.try_get::<String, _>("district").map_err(read_error)?,
        admins,
        row.try_get("created_at").map_err(read_error)?,
    ))
}

fn read_error(e: sqlx::Error) -> DomainError {
    DomainError::storage(format!("Failed to read community row: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_admins_by_community() {
        let grouped = group_admins(vec![
            ("maple".to_string(), "user-1".to_string()),
            ("oak".to_string(), "user-2".to_string()),
            ("maple".to_string(), "user-3".to_string()),
        ]);

        let maple: Vec<&str> = grouped["maple"].iter().map(CommunityAdmin::admin_id).collect();
        assert_eq!(maple, vec!["user-1", "user-3"]);
        assert_eq!(grouped["oak"].len(), 1);
        assert!(!grouped.contains_key("elm"));
    }

    #[test]
    fn test_group_admins_empty() {
        assert!(group_admins(Vec::new()).is_empty());
    }
}
