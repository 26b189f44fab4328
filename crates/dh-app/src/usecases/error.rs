use thiserror::Error;

use dh_core::ports::DeviceRepositoryError;
use dh_core::{DeviceId, DeviceRuleViolation, InvalidDeviceState};

/// Failure kinds surfaced to callers of the use cases.
///
/// Mapping a kind to an external status is the outer layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    RuleViolation,
    InvalidInput,
    StoreFailure,
}

#[derive(Debug, Error)]
pub enum DeviceUseCaseError {
    #[error("device not found: {0}")]
    NotFound(DeviceId),

    #[error(transparent)]
    RuleViolation(#[from] DeviceRuleViolation),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Store(DeviceRepositoryError),
}

impl DeviceUseCaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeviceUseCaseError::NotFound(_) => ErrorKind::NotFound,
            DeviceUseCaseError::RuleViolation(_) => ErrorKind::RuleViolation,
            DeviceUseCaseError::InvalidInput(_) => ErrorKind::InvalidInput,
            DeviceUseCaseError::Store(_) => ErrorKind::StoreFailure,
        }
    }
}

impl From<DeviceRepositoryError> for DeviceUseCaseError {
    fn from(err: DeviceRepositoryError) -> Self {
        match err {
            // The row vanished between our read and our write
            DeviceRepositoryError::NotFound(id) => DeviceUseCaseError::NotFound(id),
            other => DeviceUseCaseError::Store(other),
        }
    }
}

impl From<InvalidDeviceState> for DeviceUseCaseError {
    fn from(err: InvalidDeviceState) -> Self {
        DeviceUseCaseError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_for_each_variant() {
        assert_eq!(
            DeviceUseCaseError::NotFound(DeviceId::from("x")).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            DeviceUseCaseError::from(DeviceRuleViolation::DeleteWhileInUse).kind(),
            ErrorKind::RuleViolation
        );
        assert_eq!(
            DeviceUseCaseError::from(InvalidDeviceState("bogus".into())).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            DeviceUseCaseError::from(DeviceRepositoryError::Storage("down".into())).kind(),
            ErrorKind::StoreFailure
        );
    }

    #[test]
    fn test_repository_not_found_maps_to_not_found() {
        let err = DeviceUseCaseError::from(DeviceRepositoryError::NotFound(DeviceId::from("gone")));
        assert!(matches!(err, DeviceUseCaseError::NotFound(ref id) if id.as_str() == "gone"));
    }

    #[test]
    fn test_rule_violation_message_is_passed_through() {
        let err = DeviceUseCaseError::from(DeviceRuleViolation::NameOrBrandLockedWhileInUse);
        assert_eq!(err.to_string(), "cannot change name or brand while in use");
    }
}
