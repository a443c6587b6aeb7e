//! Community domain module
//!
//! Communities group residents and are managed by one or more administrators.
//! A user's administered communities are derived from these associations.

mod entity;
mod repository;
mod validation;

pub use entity::{Community, CommunityAdmin, CommunityId};
pub use repository::{CommunityDirectory, CommunityRepository};
pub use validation::{validate_community_id, validate_community_name, CommunityValidationError};

#[cfg(test)]
pub use repository::{MockCommunityDirectory, MockCommunityRepository};
