//! Infrastructure layer - Storage, hashing and service implementations

pub mod community;
pub mod logging;
pub mod storage;
pub mod user;
