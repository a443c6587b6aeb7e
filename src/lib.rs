//! MyHome user service
//!
//! User accounts for a property-management application:
//! - User creation with duplicate-email checks and Argon2 password hashing
//! - User details enriched with the communities the user administers
//! - Community management and administrator associations
//! - In-memory or PostgreSQL persistence

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use config::StorageBackend;
use domain::{CommunityDirectory, CommunityRepository, DomainError, UserRepository};
use infrastructure::{
    community::{CommunityService, InMemoryCommunityRepository, PostgresCommunityRepository},
    storage,
    user::{
        Argon2Hasher, DefaultUserMapper, InMemoryUserRepository, PostgresUserRepository,
        UserService,
    },
};

/// User service wired against trait objects so the storage backend can be
/// picked at runtime
pub type AppUserService =
    UserService<dyn UserRepository, DefaultUserMapper, Argon2Hasher, dyn CommunityDirectory>;

/// Community service wired against a trait-object repository
pub type AppCommunityService = CommunityService<dyn CommunityRepository>;

/// Services shared by every entry point
#[derive(Debug, Clone)]
pub struct AppServices {
    pub users: Arc<AppUserService>,
    pub communities: Arc<AppCommunityService>,
    /// Present with the postgres backend
    pub pool: Option<PgPool>,
}

/// Build the services for the configured storage backend
pub async fn create_app_services(config: &AppConfig) -> Result<AppServices, DomainError> {
    info!(backend = ?config.storage.backend, "Storage backend");

    let (user_repository, community_repository, pool): (
        Arc<dyn UserRepository>,
        Arc<dyn CommunityRepository>,
        Option<PgPool>,
    ) = match config.storage.backend {
        StorageBackend::Memory => (
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryCommunityRepository::new()),
            None,
        ),
        StorageBackend::Postgres => {
            let pool = storage::connect(&config.storage).await?;
            (
                Arc::new(PostgresUserRepository::new(pool.clone())),
                Arc::new(PostgresCommunityRepository::new(pool.clone())),
                Some(pool),
            )
        }
    };

    Ok(wire_services(user_repository, community_repository, pool))
}

/// Assemble the services around the given repositories
pub fn wire_services(
    user_repository: Arc<dyn UserRepository>,
    community_repository: Arc<dyn CommunityRepository>,
    pool: Option<PgPool>,
) -> AppServices {
    let communities: Arc<AppCommunityService> =
        Arc::new(CommunityService::new(community_repository));
    let directory: Arc<dyn CommunityDirectory> = communities.clone();

    let users = Arc::new(UserService::new(
        user_repository,
        Arc::new(DefaultUserMapper::new()),
        Arc::new(Argon2Hasher::new()),
        directory,
    ));

    AppServices {
        users,
        communities,
        pool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::UserDto;
    use infrastructure::community::CreateCommunityRequest;

    #[tokio::test]
    async fn test_memory_backend_wiring() {
        let services = create_app_services(&AppConfig::default()).await.unwrap();
        assert!(services.pool.is_none());

        services
            .users
            .create_user(UserDto::new_request("resident", "Resident", "r@example.com", "pw"))
            .await
            .unwrap()
            .unwrap();

        let community = services
            .communities
            .create_community(CreateCommunityRequest {
                name: "Maple Court".to_string(),
                district: "Riverside".to_string(),
                admin_user_id: "resident".to_string(),
            })
            .await
            .unwrap();

        let details = services.users.get_user_details("resident").await.unwrap().unwrap();
        assert!(details.community_ids.contains(community.id().as_str()));
    }
}
