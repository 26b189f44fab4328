use crate::device::DeviceId;

/// Source of globally unique device identifiers.
pub trait DeviceIdGeneratorPort: Send + Sync {
    fn next_id(&self) -> DeviceId;
}
