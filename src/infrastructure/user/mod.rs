//! User infrastructure module
//!
//! Implementations for user management: Argon2 password hashing, the
//! field-by-field mapper, in-memory and PostgreSQL repositories, and the
//! user service.

mod mapper;
mod password;
mod postgres_repository;
mod repository;
mod service;

pub use mapper::DefaultUserMapper;
pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::UserService;

#[cfg(test)]
pub use password::MockPasswordHasher;
