use std::sync::Arc;
use tracing::info;

use dh_core::ports::{ClockPort, DeviceIdGeneratorPort, DeviceRepositoryPort};
use dh_core::{Device, DeviceBrand, DeviceName, DeviceState};

use crate::usecases::DeviceUseCaseError;

/// Input for registering a new device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDeviceRequest {
    pub name: DeviceName,
    pub brand: DeviceBrand,
    pub state: DeviceState,
}

/// Use case for registering a new device.
///
/// Every call produces a new identity, so the operation is not idempotent.
pub struct CreateDevice {
    repo: Arc<dyn DeviceRepositoryPort>,
    id_generator: Arc<dyn DeviceIdGeneratorPort>,
    clock: Arc<dyn ClockPort>,
}

impl CreateDevice {
    pub fn new(
        repo: Arc<dyn DeviceRepositoryPort>,
        id_generator: Arc<dyn DeviceIdGeneratorPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            repo,
            id_generator,
            clock,
        }
    }

    /// Builds the device with a fresh id and the current instant, then persists it.
    ///
    /// # Returns
    /// The device exactly as handed to the store.
    #[tracing::instrument(
        name = "usecase.create_device.execute",
        skip(self, request),
        fields(brand = %request.brand, state = %request.state)
    )]
    pub async fn execute(&self, request: CreateDeviceRequest) -> Result<Device, DeviceUseCaseError> {
        let device = Device::new(
            self.id_generator.next_id(),
            request.name,
            request.brand,
            request.state,
            self.clock.now(),
        );

        self.repo.create(&device).await?;

        info!(device_id = %device.id(), "Device created");
        Ok(device)
    }
}
