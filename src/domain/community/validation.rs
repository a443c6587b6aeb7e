//! Community validation

use thiserror::Error;

/// Errors that can occur during community validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommunityValidationError {
    #[error("Community ID cannot be empty")]
    EmptyId,

    #[error("Community ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Community ID cannot contain whitespace")]
    InvalidIdCharacters,

    #[error("Community name cannot be empty")]
    EmptyName,

    #[error("Community name cannot exceed {0} characters")]
    NameTooLong(usize),
}

const MAX_COMMUNITY_ID_LENGTH: usize = 64;
const MAX_COMMUNITY_NAME_LENGTH: usize = 100;

/// Validate a community ID
pub fn validate_community_id(id: &str) -> Result<(), CommunityValidationError> {
    if id.is_empty() {
        return Err(CommunityValidationError::EmptyId);
    }

    if id.len() > MAX_COMMUNITY_ID_LENGTH {
        return Err(CommunityValidationError::IdTooLong(MAX_COMMUNITY_ID_LENGTH));
    }

    if id.chars().any(char::is_whitespace) {
        return Err(CommunityValidationError::InvalidIdCharacters);
    }

    Ok(())
}

/// Validate a community name. Blank names are rejected.
pub fn validate_community_name(name: &str) -> Result<(), CommunityValidationError> {
    if name.trim().is_empty() {
        return Err(CommunityValidationError::EmptyName);
    }

    if name.len() > MAX_COMMUNITY_NAME_LENGTH {
        return Err(CommunityValidationError::NameTooLong(
            MAX_COMMUNITY_NAME_LENGTH,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_community_id() {
        assert!(validate_community_id("north-hill").is_ok());
        assert!(validate_community_id("0b6f9c1e-55b2-4a8e-8d0c-0d7a9a9e5f4e").is_ok());
    }

    #[test]
    fn test_empty_community_id() {
        assert_eq!(
            validate_community_id(""),
            Err(CommunityValidationError::EmptyId)
        );
    }

    #[test]
    fn test_community_id_too_long() {
        let long_id = "a".repeat(65);
        assert_eq!(
            validate_community_id(&long_id),
            Err(CommunityValidationError::IdTooLong(64))
        );
    }

    #[test]
    fn test_community_id_with_whitespace() {
        assert_eq!(
            validate_community_id("north hill"),
            Err(CommunityValidationError::InvalidIdCharacters)
        );
    }

    #[test]
    fn test_community_name() {
        assert!(validate_community_name("Maple Court").is_ok());
        assert_eq!(
            validate_community_name("   "),
            Err(CommunityValidationError::EmptyName)
        );
        assert_eq!(
            validate_community_name(&"a".repeat(101)),
            Err(CommunityValidationError::NameTooLong(100))
        );
    }
}
