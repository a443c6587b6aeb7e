//! User service for account creation and lookup

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::community::CommunityDirectory;
use crate::domain::user::{User, UserDto, UserMapper, UserQuery, UserRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// User service over a store, a mapper, a password hasher and a community
/// directory
#[derive(Debug)]
pub struct UserService<R, M, H, C>
where
    R: UserRepository + ?Sized,
    M: UserMapper + ?Sized,
    H: PasswordHasher + ?Sized,
    C: CommunityDirectory + ?Sized,
{
    repository: Arc<R>,
    mapper: Arc<M>,
    hasher: Arc<H>,
    communities: Arc<C>,
}

impl<R, M, H, C> UserService<R, M, H, C>
where
    R: UserRepository + ?Sized,
    M: UserMapper + ?Sized,
    H: PasswordHasher + ?Sized,
    C: CommunityDirectory + ?Sized,
{
    /// Create a new user service
    pub fn new(repository: Arc<R>, mapper: Arc<M>, hasher: Arc<H>, communities: Arc<C>) -> Self {
        Self {
            repository,
            mapper,
            hasher,
            communities,
        }
    }

    /// Create a new user.
    ///
    /// Returns `Ok(None)` without touching anything else when the email is
    /// already registered.
    pub async fn create_user(&self, mut request: UserDto) -> Result<Option<UserDto>, DomainError> {
        if self.repository.find_by_email(&request.email).await?.is_some() {
            warn!(email = %request.email, "Email already registered, user not created");
            return Ok(None);
        }

        let password = request
            .password
            .take()
            .ok_or_else(|| DomainError::validation("Password is required"))?;
        request.encrypted_password = Some(self.hasher.hash(&password)?);

        let user = self.mapper.user_dto_to_user(&request);
        let saved = self.repository.save(user).await?;

        info!(user_id = %saved.user_id(), id = ?saved.id(), "Created user");

        Ok(Some(self.mapper.user_to_user_dto(&saved)))
    }

    /// Get a user with the identifiers of the communities they administer
    pub async fn get_user_details(&self, user_id: &str) -> Result<Option<UserDto>, DomainError> {
        let Some(user) = self.repository.find_by_user_id(user_id).await? else {
            debug!(user_id, "User not found");
            return Ok(None);
        };

        let community_ids = self.administered_community_ids(&user).await?;

        let mut dto = self.mapper.user_to_user_dto(&user);
        dto.community_ids = community_ids;

        Ok(Some(dto))
    }

    /// List users page by page. Community ids are not resolved here.
    pub async fn list_users(&self, query: &UserQuery) -> Result<Vec<UserDto>, DomainError> {
        let users = self.repository.list(query).await?;
        debug!(count = users.len(), "Listed users");

        Ok(users
            .iter()
            .map(|user| self.mapper.user_to_user_dto(user))
            .collect())
    }

    async fn administered_community_ids(
        &self,
        user: &User,
    ) -> Result<BTreeSet<String>, DomainError> {
        let communities = self.communities.list_all().await?;

        Ok(communities
            .iter()
            .filter(|c| c.is_administered_by(user.user_id()))
            .map(|c| c.id().to_string())
            .collect())
    }
}
