use std::sync::Arc;

use dh_core::ports::DeviceRepositoryPort;
use dh_core::{Device, DeviceId};

use crate::usecases::DeviceUseCaseError;

/// Use case for looking up a single device.
///
/// An unknown id is not a failure: it yields `Ok(None)`.
pub struct GetDeviceById {
    repo: Arc<dyn DeviceRepositoryPort>,
}

impl GetDeviceById {
    pub fn new(repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(name = "usecase.get_device_by_id.execute", skip(self), fields(device_id = %id))]
    pub async fn execute(&self, id: &DeviceId) -> Result<Option<Device>, DeviceUseCaseError> {
        Ok(self.repo.find_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{stored_device, MockDeviceRepo, DEVICE_ID};
    use dh_core::DeviceState;

    #[tokio::test]
    async fn test_returns_stored_device() {
        let mut repo = MockDeviceRepo::new();
        repo.expect_find_by_id()
            .withf(|id: &DeviceId| id.as_str() == DEVICE_ID)
            .times(1)
            .returning(|_| Ok(Some(stored_device(DeviceState::Available))));

        let uc = GetDeviceById::new(Arc::new(repo));
        let device = uc.execute(&DeviceId::from(DEVICE_ID)).await.unwrap();

        assert_eq!(device, Some(stored_device(DeviceState::Available)));
    }

    #[tokio::test]
    async fn test_unknown_id_returns_none() {
        let mut repo = MockDeviceRepo::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let uc = GetDeviceById::new(Arc::new(repo));

        assert_eq!(uc.execute(&DeviceId::from("missing")).await.unwrap(), None);
    }
}
