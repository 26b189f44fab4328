use std::sync::Arc;

use dh_core::ports::DeviceRepositoryPort;
use dh_core::{Device, DeviceBrand};

use crate::usecases::DeviceUseCaseError;

/// Use case for listing devices of one brand (exact match).
///
/// Returns an empty list when nothing matches.
pub struct GetDevicesByBrand {
    repo: Arc<dyn DeviceRepositoryPort>,
}

impl GetDevicesByBrand {
    pub fn new(repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(
        name = "usecase.get_devices_by_brand.execute",
        skip(self, brand),
        fields(brand = %brand)
    )]
    pub async fn execute(&self, brand: &DeviceBrand) -> Result<Vec<Device>, DeviceUseCaseError> {
        Ok(self.repo.find_by_brand(brand).await?)
    }
}
