//! Community repository and directory traits

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Community, CommunityAdmin, CommunityId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository for managing communities
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CommunityRepository: Send + Sync + Debug {
    /// Get a community by ID
    async fn get(&self, id: &CommunityId) -> Result<Option<Community>, DomainError>;

    /// Create a new community together with its administrators
    async fn create(&self, community: Community) -> Result<Community, DomainError>;

    /// Attach administrators to an existing community. Returns `None` when
    /// the community does not exist.
    async fn add_admins(
        &self,
        id: &CommunityId,
        admins: Vec<CommunityAdmin>,
    ) -> Result<Option<Community>, DomainError>;

    /// List every community with its administrators
    async fn list(&self) -> Result<Vec<Community>, DomainError>;
}

/// Read-only view of all communities, used to resolve which communities a
/// user administers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CommunityDirectory: Send + Sync + Debug {
    /// Every known community with its administrator associations
    async fn list_all(&self) -> Result<Vec<Community>, DomainError>;
}
