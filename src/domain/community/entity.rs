//! Community entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_community_id, validate_community_name, CommunityValidationError};

/// Community identifier - generated UUID string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommunityId(String);

impl CommunityId {
    /// Create a CommunityId from an existing value after validation
    pub fn new(id: impl Into<String>) -> Result<Self, CommunityValidationError> {
        let id = id.into();
        validate_community_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CommunityId {
    type Error = CommunityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CommunityId> for String {
    fn from(id: CommunityId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CommunityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Administrator association of a community
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommunityAdmin {
    /// External user identifier of the administrator
    admin_id: String,
}

impl CommunityAdmin {
    pub fn new(admin_id: impl Into<String>) -> Self {
        Self {
            admin_id: admin_id.into(),
        }
    }

    pub fn admin_id(&self) -> &str {
        &self.admin_id
    }
}

/// Community entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    /// Unique identifier
    id: CommunityId,
    /// Display name
    name: String,
    /// District the community is located in
    district: String,
    /// Administrators, without duplicates
    admins: Vec<CommunityAdmin>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Community {
    /// Create a new community without administrators
    pub fn new(
        id: CommunityId,
        name: impl Into<String>,
        district: impl Into<String>,
    ) -> Result<Self, CommunityValidationError> {
        let name = name.into();
        validate_community_name(&name)?;

        Ok(Self {
            id,
            name,
            district: district.into(),
            admins: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Rebuild a community loaded from storage
    pub fn restore(
        id: CommunityId,
        name: impl Into<String>,
        district: impl Into<String>,
        admins: Vec<CommunityAdmin>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut community = Self {
            id,
            name: name.into(),
            district: district.into(),
            admins: Vec::with_capacity(admins.len()),
            created_at,
        };

        for admin in admins {
            community.add_admin(admin);
        }

        community
    }

    /// Add an administrator (builder pattern)
    pub fn with_admin(mut self, admin: CommunityAdmin) -> Self {
        self.add_admin(admin);
        self
    }

    // Getters

    pub fn id(&self) -> &CommunityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn district(&self) -> &str {
        &self.district
    }

    pub fn admins(&self) -> &[CommunityAdmin] {
        &self.admins
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Check whether the given user administers this community
    pub fn is_administered_by(&self, user_id: &str) -> bool {
        self.admins.iter().any(|a| a.admin_id() == user_id)
    }

    // Mutators

    /// Add an administrator. Returns false if already present.
    pub fn add_admin(&mut self, admin: CommunityAdmin) -> bool {
        if self.admins.contains(&admin) {
            return false;
        }
        self.admins.push(admin);
        true
    }
}
