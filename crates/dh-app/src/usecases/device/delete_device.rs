use std::sync::Arc;
use tracing::info;

use dh_core::ports::DeviceRepositoryPort;
use dh_core::DeviceId;

use crate::usecases::DeviceUseCaseError;

/// Use case for removing a device.
///
/// A second delete of the same id fails with `NotFound`.
pub struct DeleteDevice {
    repo: Arc<dyn DeviceRepositoryPort>,
}

impl DeleteDevice {
    pub fn new(repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(name = "usecase.delete_device.execute", skip(self), fields(device_id = %id))]
    pub async fn execute(&self, id: &DeviceId) -> Result<(), DeviceUseCaseError> {
        let device = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DeviceUseCaseError::NotFound(id.clone()))?;

        device.ensure_can_be_deleted()?;

        self.repo.delete(device.id()).await?;

        info!("Device deleted");
        Ok(())
    }
}
