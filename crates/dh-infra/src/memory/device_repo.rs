use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use dh_core::ports::{DeviceRepositoryError, DeviceRepositoryPort};
use dh_core::{Device, DeviceBrand, DeviceId, DeviceState};

/// In-memory implementation of DeviceRepositoryPort keyed by device id.
///
/// Contents are lost when the process exits.
#[derive(Clone)]
pub struct InMemoryDeviceRepository {
    devices: Arc<RwLock<HashMap<String, Device>>>,
}

impl InMemoryDeviceRepository {
    pub fn new() -> Self {
        Self {
            devices: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn select(&self, predicate: impl Fn(&Device) -> bool) -> Vec<Device> {
        let devices = self.devices.read().await;
        let mut matching: Vec<Device> =
            devices.values().filter(|d| predicate(d)).cloned().collect();
        matching.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        matching
    }
}

impl Default for InMemoryDeviceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeviceRepositoryPort for InMemoryDeviceRepository {
    async fn create(&self, device: &Device) -> Result<(), DeviceRepositoryError> {
        let mut devices = self.devices.write().await;
        let key = device.id().as_str().to_string();
        if devices.contains_key(&key) {
            return Err(DeviceRepositoryError::Storage(format!(
                "duplicate device id: {}",
                key
            )));
        }
        devices.insert(key, device.clone());
        Ok(())
    }

    async fn update(&self, device: &Device) -> Result<(), DeviceRepositoryError> {
        let mut devices = self.devices.write().await;
        match devices.get_mut(device.id().as_str()) {
            Some(slot) => {
                *slot = device.clone();
                Ok(())
            }
            None => Err(DeviceRepositoryError::NotFound(device.id().clone())),
        }
    }

    async fn delete(&self, device_id: &DeviceId) -> Result<(), DeviceRepositoryError> {
        let mut devices = self.devices.write().await;
        devices
            .remove(device_id.as_str())
            .map(|_| ())
            .ok_or_else(|| DeviceRepositoryError::NotFound(device_id.clone()))
    }

    async fn find_by_id(
        &self,
        device_id: &DeviceId,
    ) -> Result<Option<Device>, DeviceRepositoryError> {
        let devices = self.devices.read().await;
        Ok(devices.get(device_id.as_str()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Device>, DeviceRepositoryError> {
        Ok(self.select(|_| true).await)
    }

    async fn find_by_brand(
        &self,
        brand: &DeviceBrand,
    ) -> Result<Vec<Device>, DeviceRepositoryError> {
        Ok(self.select(|d| d.brand() == brand).await)
    }

    async fn find_by_state(
        &self,
        state: DeviceState,
    ) -> Result<Vec<Device>, DeviceRepositoryError> {
        Ok(self.select(|d| d.state() == state).await)
    }
}
