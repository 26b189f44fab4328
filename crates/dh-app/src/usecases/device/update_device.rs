use std::sync::Arc;
use tracing::{debug, info};

use dh_core::ports::DeviceRepositoryPort;
use dh_core::{DeviceBrand, DeviceId, DeviceName, DevicePatch, DeviceState};

use crate::usecases::DeviceUseCaseError;

/// Input for a partial device update. Absent fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDeviceRequest {
    pub id: DeviceId,
    pub name: Option<DeviceName>,
    pub brand: Option<DeviceBrand>,
    pub state: Option<DeviceState>,
}

/// Use case for updating an existing device.
///
/// ## Behavior
/// - Loads the device; unknown ids fail with `NotFound`
/// - Applies the patch through the entity, which rejects name/brand changes while in use
/// - Writes the same, mutated instance back
pub struct UpdateDevice {
    repo: Arc<dyn DeviceRepositoryPort>,
}

impl UpdateDevice {
    pub fn new(repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(
        name = "usecase.update_device.execute",
        skip(self, request),
        fields(device_id = %request.id)
    )]
    pub async fn execute(&self, request: UpdateDeviceRequest) -> Result<(), DeviceUseCaseError> {
        let UpdateDeviceRequest {
            id,
            name,
            brand,
            state,
        } = request;

        let mut device = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or(DeviceUseCaseError::NotFound(id))?;

        debug!(current_state = %device.state(), "Applying device patch");
        device.update(DevicePatch { name, brand, state })?;

        self.repo.update(&device).await?;

        info!(state = %device.state(), "Device updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{stored_device, MockDeviceRepo, DEVICE_ID};
    use dh_core::ports::DeviceRepositoryError;
    use dh_core::{Device, DeviceRuleViolation};

    fn request(
        name: Option<&str>,
        brand: Option<&str>,
        state: Option<DeviceState>,
    ) -> UpdateDeviceRequest {
        UpdateDeviceRequest {
            id: DeviceId::from(DEVICE_ID),
            name: name.map(DeviceName::from),
            brand: brand.map(DeviceBrand::from),
            state,
        }
    }

    #[tokio::test]
    async fn test_update_writes_back_the_loaded_and_mutated_device() {
        let loaded = stored_device(DeviceState::Available);
        let created_at = loaded.created_at();

        let mut repo = MockDeviceRepo::new();
        repo.expect_find_by_id()
            .withf(|id: &DeviceId| id.as_str() == DEVICE_ID)
            .times(1)
            .return_once(move |_| Ok(Some(loaded)));
        repo.expect_update()
            .withf(move |device: &Device| {
                device.id().as_str() == DEVICE_ID
                    && device.name().as_str() == "Renamed"
                    && device.brand().as_str() == "My Brand"
                    && device.state() == DeviceState::Inactive
                    && device.created_at() == created_at
            })
            .times(1)
            .returning(|_| Ok(()));

        let uc = UpdateDevice::new(Arc::new(repo));

        uc.execute(request(Some("Renamed"), None, Some(DeviceState::Inactive)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_unknown_device_fails_not_found() {
        let mut repo = MockDeviceRepo::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        repo.expect_update().never();

        let uc = UpdateDevice::new(Arc::new(repo));

        let err = uc
            .execute(request(Some("Renamed"), None, None))
            .await
            .unwrap_err();

        assert!(matches!(err, DeviceUseCaseError::NotFound(ref id) if id.as_str() == DEVICE_ID));
    }

    #[tokio::test]
    async fn test_update_name_of_in_use_device_fails_without_writing() {
        let mut repo = MockDeviceRepo::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored_device(DeviceState::InUse))));
        repo.expect_update().never();

        let uc = UpdateDevice::new(Arc::new(repo));

        let err = uc
            .execute(request(Some("Renamed"), Some("Other"), None))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DeviceUseCaseError::RuleViolation(DeviceRuleViolation::NameOrBrandLockedWhileInUse)
        ));
    }

    #[tokio::test]
    async fn test_update_state_of_in_use_device_succeeds() {
        let mut repo = MockDeviceRepo::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored_device(DeviceState::InUse))));
        repo.expect_update()
            .withf(|device: &Device| {
                device.state() == DeviceState::Available && device.name().as_str() == "My Device"
            })
            .times(1)
            .returning(|_| Ok(()));

        let uc = UpdateDevice::new(Arc::new(repo));

        uc.execute(request(None, None, Some(DeviceState::Available)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_propagates_store_failure_on_write() {
        let mut repo = MockDeviceRepo::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored_device(DeviceState::Available))));
        repo.expect_update()
            .times(1)
            .returning(|_| Err(DeviceRepositoryError::Storage("disk full".into())));

        let uc = UpdateDevice::new(Arc::new(repo));

        let err = uc
            .execute(request(None, Some("Other"), None))
            .await
            .unwrap_err();

        assert!(matches!(err, DeviceUseCaseError::Store(_)));
    }
}
