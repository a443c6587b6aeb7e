//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserQuery, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Inner {
    /// Users keyed by internal id, kept ordered for listing
    users: BTreeMap<i64, User>,
    next_id: i64,
}

/// In-memory implementation of UserRepository.
///
/// Assigns sequential internal ids starting at 1. Rejects a second user with
/// the same user id or email, like the unique constraints of the users table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|u| u.user_id() == user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email() == email).cloned())
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut inner = self.inner.write().await;

        let clash = inner.users.values().find(|u| {
            u.id() != user.id() && (u.user_id() == user.user_id() || u.email() == user.email())
        });
        if let Some(existing) = clash {
            let message = if existing.user_id() == user.user_id() {
                format!("User '{}' already exists", user.user_id())
            } else {
                format!("Email '{}' is already registered", user.email())
            };
            return Err(DomainError::conflict(message));
        }

        let user = match user.id() {
            Some(_) => user,
            None => {
                inner.next_id += 1;
                user.with_id(inner.next_id)
            }
        };

        let id = user
            .id()
            .ok_or_else(|| DomainError::internal("User has no id after save"))?;
        inner.next_id = inner.next_id.max(id);
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn list(&self, query: &UserQuery) -> Result<Vec<User>, DomainError> {
        let inner = self.inner.read().await;

        Ok(inner
            .users
            .values()
            .skip(query.offset.unwrap_or(0))
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(user_id: &str, email: &str) -> User {
        User::new("Test User", user_id, email, "hashed_password")
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(create_test_user("user-1", "one@example.com")).await.unwrap();
        let second = repo.save(create_test_user("user-2", "two@example.com")).await.unwrap();

        assert_eq!(first.id(), Some(1));
        assert_eq!(second.id(), Some(2));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_user_id() {
        let repo = InMemoryUserRepository::new();
        repo.save(create_test_user("same", "a@example.com")).await.unwrap();

        let result = repo.save(create_test_user("same", "b@example.com")).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert_eq!(repo.len().await, 1);
        let stored = repo.find_by_user_id("same").await.unwrap().unwrap();
        assert_eq!(stored.email(), "a@example.com");
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.save(create_test_user("user-1", "shared@example.com")).await.unwrap();

        let err = repo
            .save(create_test_user("user-2", "shared@example.com"))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Conflict: Email 'shared@example.com' is already registered"
        );
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_save_existing_user_replaces_it() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(create_test_user("user-1", "one@example.com")).await.unwrap();

        repo.save(saved.clone()).await.unwrap();

        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_lookups() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(create_test_user("user-1", "one@example.com")).await.unwrap();

        let by_id = repo.find_by_id(saved.id().unwrap()).await.unwrap();
        assert_eq!(by_id.as_ref().map(User::user_id), Some("user-1"));

        let by_user_id = repo.find_by_user_id("user-1").await.unwrap();
        assert_eq!(by_user_id.map(|u| u.id()), Some(saved.id()));

        let by_email = repo.find_by_email("one@example.com").await.unwrap();
        assert!(by_email.is_some());

        assert!(repo.find_by_user_id("nobody").await.unwrap().is_none());
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_with_preassigned_id_advances_sequence() {
        let repo = InMemoryUserRepository::new();

        repo.save(create_test_user("user-1", "one@example.com").with_id(10))
            .await
            .unwrap();
        let next = repo.save(create_test_user("user-2", "two@example.com")).await.unwrap();

        assert_eq!(next.id(), Some(11));
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let repo = InMemoryUserRepository::new();
        for i in 1..=5 {
            repo.save(create_test_user(&format!("user-{i}"), &format!("{i}@example.com")))
                .await
                .unwrap();
        }

        let all = repo.list(&UserQuery::new()).await.unwrap();
        assert_eq!(all.len(), 5);

        let page = repo
            .list(&UserQuery::new().with_offset(1).with_limit(2))
            .await
            .unwrap();
        let ids: Vec<&str> = page.iter().map(User::user_id).collect();
        assert_eq!(ids, vec!["user-2", "user-3"]);
    }
}
