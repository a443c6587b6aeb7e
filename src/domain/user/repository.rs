//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Query parameters for listing users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    /// Maximum number of results
    pub limit: Option<usize>,
    /// Offset for pagination
    pub offset: Option<usize>,
}

impl UserQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Repository trait for user storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by internal identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Get a user by external user identifier
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, DomainError>;

    /// Get a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user, returning it with its internal identifier set
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// List users ordered by internal identifier
    async fn list(&self, query: &UserQuery) -> Result<Vec<User>, DomainError>;
}
