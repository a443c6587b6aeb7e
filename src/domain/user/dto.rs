//! User transfer record

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Transfer representation of a user.
///
/// `password` is accepted on input only and `community_ids` is computed on
/// output only. Neither credential field is ever serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user_id: String,
    pub name: String,
    pub email: String,
    /// Plaintext credential supplied on creation
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    /// Stored credential, filled in by the service before mapping
    #[serde(default, skip_serializing)]
    pub encrypted_password: Option<String>,
    /// Communities this user administers
    #[serde(default)]
    pub community_ids: BTreeSet<String>,
}

impl UserDto {
    /// Build a creation request
    pub fn new_request(
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
            password: Some(password.into()),
            encrypted_password: None,
            community_ids: BTreeSet::new(),
        }
    }
}
