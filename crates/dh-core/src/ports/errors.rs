use thiserror::Error;

use crate::device::DeviceId;

#[derive(Debug, Error)]
pub enum DeviceRepositoryError {
    /// A write targeted a device that is no longer stored.
    #[error("device not found: {0}")]
    NotFound(DeviceId),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("stored device is corrupt: {0}")]
    Corrupt(String),
}
