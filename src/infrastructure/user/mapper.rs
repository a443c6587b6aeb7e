//! Field-by-field user mapper

use std::collections::BTreeSet;

use crate::domain::user::{User, UserDto, UserMapper};

/// Maps every public field one to one. Community ids are left empty; the
/// service fills them in when it has resolved them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUserMapper;

impl DefaultUserMapper {
    pub fn new() -> Self {
        Self
    }
}

impl UserMapper for DefaultUserMapper {
    fn user_dto_to_user(&self, dto: &UserDto) -> User {
        let user = User::new(
            &dto.name,
            &dto.user_id,
            &dto.email,
            dto.encrypted_password.clone().unwrap_or_default(),
        );

        match dto.id {
            Some(id) => user.with_id(id),
            None => user,
        }
    }

    fn user_to_user_dto(&self, user: &User) -> UserDto {
        UserDto {
            id: user.id(),
            user_id: user.user_id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            password: None,
            encrypted_password: Some(user.encrypted_password().to_string()),
            community_ids: BTreeSet::new(),
        }
    }
}
