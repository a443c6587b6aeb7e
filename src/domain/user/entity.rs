//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Internal identifier assigned by the store on save
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    /// External identifier supplied by the caller
    user_id: String,
    /// Display name
    name: String,
    /// Email address, unique across users
    email: String,
    /// Stored credential - never exposed in serialization
    #[serde(skip_serializing)]
    encrypted_password: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new, not yet persisted user
    pub fn new(
        name: impl Into<String>,
        user_id: impl Into<String>,
        email: impl Into<String>,
        encrypted_password: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
            encrypted_password: encrypted_password.into(),
            created_at: Utc::now(),
        }
    }

    /// Rebuild a user loaded from storage
    pub fn restore(
        id: i64,
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        encrypted_password: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
            encrypted_password: encrypted_password.into(),
            created_at,
        }
    }

    /// Attach the store-assigned identifier. An identifier that is already
    /// set is kept.
    pub fn with_id(mut self, id: i64) -> Self {
        if self.id.is_none() {
            self.id = Some(id);
        }
        self
    }

    // Getters

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn encrypted_password(&self) -> &str {
        &self.encrypted_password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the store has assigned an identifier yet
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User::new("Jane Doe", "jane-doe", "jane@example.com", "hashed_password")
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user();

        assert_eq!(user.name(), "Jane Doe");
        assert_eq!(user.user_id(), "jane-doe");
        assert_eq!(user.email(), "jane@example.com");
        assert_eq!(user.encrypted_password(), "hashed_password");
        assert!(user.id().is_none());
        assert!(!user.is_persisted());
    }

    #[test]
    fn test_with_id_assigns_once() {
        let user = create_test_user().with_id(7);
        assert_eq!(user.id(), Some(7));

        let user = user.with_id(9);
        assert_eq!(user.id(), Some(7));
    }

    #[test]
    fn test_restore() {
        let created_at = Utc::now();
        let user = User::restore(3, "jane-doe", "Jane", "jane@example.com", "hash", created_at);

        assert!(user.is_persisted());
        assert_eq!(user.id(), Some(3));
        assert_eq!(user.created_at(), created_at);
    }

    #[test]
    fn test_user_serialization_excludes_password() {
        let user = create_test_user();

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("encrypted_password"));
        assert!(json.contains("jane@example.com"));
    }
}
