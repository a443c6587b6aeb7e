//! Domain layer - Core business logic and entities

pub mod community;
pub mod error;
pub mod user;

pub use community::{Community, CommunityAdmin, CommunityDirectory, CommunityId, CommunityRepository};
pub use error::DomainError;
pub use user::{User, UserDto, UserMapper, UserQuery, UserRepository};
