//! Conversion between persisted users and transfer records

use std::fmt::Debug;

use super::dto::UserDto;
use super::entity::User;

#[cfg(test)]
use mockall::automock;

/// Bidirectional mapping between [`User`] and [`UserDto`]
#[cfg_attr(test, automock)]
pub trait UserMapper: Send + Sync + Debug {
    /// Convert a transfer record into an entity ready to persist
    fn user_dto_to_user(&self, dto: &UserDto) -> User;

    /// Convert an entity into its transfer record
    fn user_to_user_dto(&self, user: &User) -> UserDto;
}
