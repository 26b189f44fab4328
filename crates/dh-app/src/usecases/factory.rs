//! Factory accessors for creating use cases from [`AppDeps`].

use crate::deps::AppDeps;
use crate::usecases::device::*;

/// Use case accessor bound to one set of dependencies.
///
/// Use cases are cheap, stateless values; build one per call.
///
/// ```ignore
/// let uc = UseCases::new(&deps).get_all_devices();
/// let devices = uc.execute().await?;
/// ```
pub struct UseCases<'a> {
    deps: &'a AppDeps,
}

impl<'a> UseCases<'a> {
    pub fn new(deps: &'a AppDeps) -> Self {
        Self { deps }
    }

    pub fn create_device(&self) -> CreateDevice {
        CreateDevice::new(
            self.deps.device_repo.clone(),
            self.deps.id_generator.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn update_device(&self) -> UpdateDevice {
        UpdateDevice::new(self.deps.device_repo.clone())
    }

    pub fn delete_device(&self) -> DeleteDevice {
        DeleteDevice::new(self.deps.device_repo.clone())
    }

    pub fn get_device_by_id(&self) -> GetDeviceById {
        GetDeviceById::new(self.deps.device_repo.clone())
    }

    pub fn get_all_devices(&self) -> GetAllDevices {
        GetAllDevices::new(self.deps.device_repo.clone())
    }

    pub fn get_devices_by_brand(&self) -> GetDevicesByBrand {
        GetDevicesByBrand::new(self.deps.device_repo.clone())
    }

    pub fn get_devices_by_state(&self) -> GetDevicesByState {
        GetDevicesByState::new(self.deps.device_repo.clone())
    }
}
