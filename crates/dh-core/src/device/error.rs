use thiserror::Error;

/// A device-level rule that an operation would break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeviceRuleViolation {
    #[error("cannot change name or brand while in use")]
    NameOrBrandLockedWhileInUse,

    #[error("cannot delete while in use")]
    DeleteWhileInUse,
}
