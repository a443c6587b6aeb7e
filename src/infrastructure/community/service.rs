//! Community service for community management

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::community::{
    Community, CommunityAdmin, CommunityDirectory, CommunityId, CommunityRepository,
};
use crate::domain::DomainError;

/// Request for creating a new community
#[derive(Debug, Clone)]
pub struct CreateCommunityRequest {
    pub name: String,
    pub district: String,
    /// User creating the community; becomes its first administrator
    pub admin_user_id: String,
}

/// Community service for managing communities and their administrators
#[derive(Debug)]
pub struct CommunityService<R: CommunityRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CommunityRepository + ?Sized> CommunityService<R> {
    /// Create a new community service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new community administered by the requesting user
    pub async fn create_community(
        &self,
        request: CreateCommunityRequest,
    ) -> Result<Community, DomainError> {
        info!(name = %request.name, admin = %request.admin_user_id, "Creating community");

        let community = Community::new(CommunityId::generate(), &request.name, &request.district)
            .map_err(|e| DomainError::validation(e.to_string()))?
            .with_admin(CommunityAdmin::new(request.admin_user_id));

        self.repository.create(community).await
    }

    /// Get a community by ID
    pub async fn get_community(&self, id: &str) -> Result<Option<Community>, DomainError> {
        let community_id = parse_id(id)?;
        self.repository.get(&community_id).await
    }

    /// Add administrators to a community. Returns `None` when the community
    /// does not exist.
    pub async fn add_admins(
        &self,
        id: &str,
        admin_ids: Vec<String>,
    ) -> Result<Option<Community>, DomainError> {
        let community_id = parse_id(id)?;
        info!(id = %community_id, count = admin_ids.len(), "Adding community admins");

        let admins = admin_ids.into_iter().map(CommunityAdmin::new).collect();
        let community = self.repository.add_admins(&community_id, admins).await?;

        if community.is_none() {
            debug!(id = %community_id, "Community not found");
        }

        Ok(community)
    }

    /// List all communities
    pub async fn list_all(&self) -> Result<Vec<Community>, DomainError> {
        self.repository.list().await
    }
}

#[async_trait]
impl<R: CommunityRepository + ?Sized> CommunityDirectory for CommunityService<R> {
    async fn list_all(&self) -> Result<Vec<Community>, DomainError> {
        CommunityService::list_all(self).await
    }
}

fn parse_id(id: &str) -> Result<CommunityId, DomainError> {
    CommunityId::new(id).map_err(|e| DomainError::validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::community::MockCommunityRepository;
    use crate::infrastructure::community::InMemoryCommunityRepository;

    fn create_service() -> CommunityService<InMemoryCommunityRepository> {
        CommunityService::new(Arc::new(InMemoryCommunityRepository::new()))
    }

    fn request(name: &str, admin: &str) -> CreateCommunityRequest {
        CreateCommunityRequest {
            name: name.to_string(),
            district: "Riverside".to_string(),
            admin_user_id: admin.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_community_registers_creator_as_admin() {
        let service = create_service();

        let community = service
            .create_community(request("Maple Court", "user-1"))
            .await
            .unwrap();

        assert_eq!(community.name(), "Maple Court");
        assert_eq!(community.district(), "Riverside");
        assert!(community.is_administered_by("user-1"));
        assert_eq!(community.admins().len(), 1);
    }

    #[tokio::test]
    async fn test_create_community_blank_name() {
        let service = create_service();

        let result = service.create_community(request("  ", "user-1")).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_get_community() {
        let service = create_service();
        let created = service
            .create_community(request("Maple Court", "user-1"))
            .await
            .unwrap();

        let found = service.get_community(created.id().as_str()).await.unwrap();
        assert_eq!(found, Some(created));

        let missing = service.get_community("unknown-community").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_get_community_invalid_id() {
        let service = create_service();

        let result = service.get_community("").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_add_admins_is_idempotent() {
        let service = create_service();
        let created = service
            .create_community(request("Maple Court", "user-1"))
            .await
            .unwrap();

        let updated = service
            .add_admins(
                created.id().as_str(),
                vec!["user-1".to_string(), "user-2".to_string(), "user-2".to_string()],
            )
            .await
            .unwrap()
            .unwrap();

        let admins: Vec<&str> = updated.admins().iter().map(CommunityAdmin::admin_id).collect();
        assert_eq!(admins, vec!["user-1", "user-2"]);
    }

    #[tokio::test]
    async fn test_add_admins_unknown_community() {
        let service = create_service();

        let result = service
            .add_admins("unknown-community", vec!["user-1".to_string()])
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_directory_lists_all_communities() {
        let service = create_service();
        service.create_community(request("Maple Court", "user-1")).await.unwrap();
        service.create_community(request("Oak Row", "user-2")).await.unwrap();

        let directory: &dyn CommunityDirectory = &service;
        let all = directory.list_all().await.unwrap();

        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_directory_propagates_repository_failure() {
        let mut repository = MockCommunityRepository::new();
        repository
            .expect_list()
            .times(1)
            .returning(|| Err(DomainError::storage("connection reset")));

        let service = CommunityService::new(Arc::new(repository));

        let result = CommunityDirectory::list_all(&service).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
