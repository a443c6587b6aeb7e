//! In-memory community repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::community::{Community, CommunityAdmin, CommunityId, CommunityRepository};
use crate::domain::DomainError;

/// In-memory implementation of CommunityRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommunityRepository {
    communities: Arc<RwLock<HashMap<CommunityId, Community>>>,
}

impl InMemoryCommunityRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial communities
    pub fn with_communities(communities: Vec<Community>) -> Self {
        let map = communities
            .into_iter()
            .map(|c| (c.id().clone(), c))
            .collect();

        Self {
            communities: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl CommunityRepository for InMemoryCommunityRepository {
    async fn get(&self, id: &CommunityId) -> Result<Option<Community>, DomainError> {
        let communities = self.communities.read().await;
        Ok(communities.get(id).cloned())
    }

    async fn create(&self, community: Community) -> Result<Community, DomainError> {
        let mut communities = self.communities.write().await;

        if communities.contains_key(community.id()) {
            return Err(DomainError::conflict(format!(
                "Community '{}' already exists",
                community.id()
            )));
        }

        communities.insert(community.id().clone(), community.clone());
        Ok(community)
    }

    async fn add_admins(
        &self,
        id: &CommunityId,
        admins: Vec<CommunityAdmin>,
    ) -> Result<Option<Community>, DomainError> {
        let mut communities = self.communities.write().await;

        let Some(community) = communities.get_mut(id) else {
            return Ok(None);
        };

        for admin in admins {
            community.add_admin(admin);
        }

        Ok(Some(community.clone()))
    }

    async fn list(&self) -> Result<Vec<Community>, DomainError> {
        let communities = self.communities.read().await;

        let mut result: Vec<Community> = communities.values().cloned().collect();
        result.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });

        Ok(result)
    }
}
