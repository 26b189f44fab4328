use std::sync::Arc;

use dh_core::ports::DeviceRepositoryPort;
use dh_core::Device;

use crate::usecases::DeviceUseCaseError;

pub struct GetAllDevices {
    repo: Arc<dyn DeviceRepositoryPort>,
}

impl GetAllDevices {
    pub fn new(repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(name = "usecase.get_all_devices.execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<Device>, DeviceUseCaseError> {
        let devices = self.repo.find_all().await?;
        tracing::debug!(count = devices.len(), "Listed devices");
        Ok(devices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{stored_device, MockDeviceRepo};
    use dh_core::ports::DeviceRepositoryError;
    use dh_core::DeviceState;

    #[tokio::test]
    async fn test_returns_everything_the_store_holds() {
        let mut repo = MockDeviceRepo::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![stored_device(DeviceState::Available)]));

        let uc = GetAllDevices::new(Arc::new(repo));
        let devices = uc.execute().await.unwrap();

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].name().as_str(), "My Device");
    }

    #[tokio::test]
    async fn test_propagates_store_failure() {
        let mut repo = MockDeviceRepo::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| Err(DeviceRepositoryError::Storage("timeout".into())));

        let uc = GetAllDevices::new(Arc::new(repo));

        assert!(matches!(
            uc.execute().await,
            Err(DeviceUseCaseError::Store(_))
        ));
    }
}
