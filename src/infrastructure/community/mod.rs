//! Community infrastructure implementations

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresCommunityRepository;
pub use repository::InMemoryCommunityRepository;
pub use service::{CommunityService, CreateCommunityRequest};
