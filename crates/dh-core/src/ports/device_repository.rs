use async_trait::async_trait;

use crate::{
    device::{Device, DeviceBrand, DeviceId, DeviceState},
    ports::errors::DeviceRepositoryError,
};

/// Durable storage for devices.
///
/// Pure persistence: implementations never apply the device rules. Lookups by
/// id return `Ok(None)` for unknown ids, and brand/state filters are exact matches.
#[async_trait]
pub trait DeviceRepositoryPort: Send + Sync {
    /// Persist a new device
    async fn create(&self, device: &Device) -> Result<(), DeviceRepositoryError>;

    /// Overwrite name, brand and state of an existing device
    async fn update(&self, device: &Device) -> Result<(), DeviceRepositoryError>;

    async fn delete(&self, id: &DeviceId) -> Result<(), DeviceRepositoryError>;

    async fn find_by_id(&self, id: &DeviceId) -> Result<Option<Device>, DeviceRepositoryError>;

    async fn find_all(&self) -> Result<Vec<Device>, DeviceRepositoryError>;

    async fn find_by_brand(&self, brand: &DeviceBrand)
        -> Result<Vec<Device>, DeviceRepositoryError>;

    async fn find_by_state(&self, state: DeviceState)
        -> Result<Vec<Device>, DeviceRepositoryError>;
}
