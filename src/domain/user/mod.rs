//! User domain
//!
//! This module provides domain types and traits for user accounts: the
//! persisted entity, its transfer record, the repository and mapper traits.

mod dto;
mod entity;
mod mapper;
mod repository;

pub use dto::UserDto;
pub use entity::User;
pub use mapper::UserMapper;
pub use repository::{UserQuery, UserRepository};

#[cfg(test)]
pub use mapper::MockUserMapper;
#[cfg(test)]
pub use repository::MockUserRepository;
