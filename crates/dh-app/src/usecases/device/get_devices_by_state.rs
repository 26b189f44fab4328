use std::sync::Arc;

use dh_core::ports::DeviceRepositoryPort;
use dh_core::{Device, DeviceState};

use crate::usecases::DeviceUseCaseError;

/// Use case for listing devices in one state.
///
/// Takes the raw state text; anything outside `available | in-use | inactive`
/// fails with `InvalidInput` before the store is touched.
pub struct GetDevicesByState {
    repo: Arc<dyn DeviceRepositoryPort>,
}

impl GetDevicesByState {
    pub fn new(repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(name = "usecase.get_devices_by_state.execute", skip(self))]
    pub async fn execute(&self, state: &str) -> Result<Vec<Device>, DeviceUseCaseError> {
        let state: DeviceState = state.parse()?;
        Ok(self.repo.find_by_state(state).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{stored_device, MockDeviceRepo};

    #[tokio::test]
    async fn test_invalid_state_fails_without_calling_store() {
        let mut repo = MockDeviceRepo::new();
        repo.expect_find_by_state().never();

        let uc = GetDevicesByState::new(Arc::new(repo));
        let err = uc.execute("invalid-state").await.unwrap_err();

        assert!(matches!(err, DeviceUseCaseError::InvalidInput(_)));
        assert_eq!(err.to_string(), "invalid input: invalid device state: invalid-state");
    }

    #[tokio::test]
    async fn test_in_use_text_maps_to_in_use_and_result_is_returned_verbatim() {
        let stored = vec![stored_device(DeviceState::InUse)];
        let expected = stored.clone();

        let mut repo = MockDeviceRepo::new();
        repo.expect_find_by_state()
            .withf(|state: &DeviceState| *state == DeviceState::InUse)
            .times(1)
            .return_once(move |_| Ok(stored));

        let uc = GetDevicesByState::new(Arc::new(repo));
        let devices = uc.execute("in-use").await.unwrap();

        assert_eq!(devices, expected);
    }
}
