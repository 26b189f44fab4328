//! Test doubles for use-case unit tests.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mockall::mock;

use dh_core::ports::{ClockPort, DeviceIdGeneratorPort, DeviceRepositoryError, DeviceRepositoryPort};
use dh_core::{Device, DeviceBrand, DeviceId, DeviceName, DeviceState};

mock! {
    pub DeviceRepo {}

    #[async_trait]
    impl DeviceRepositoryPort for DeviceRepo {
        async fn create(&self, device: &Device) -> Result<(), DeviceRepositoryError>;
        async fn update(&self, device: &Device) -> Result<(), DeviceRepositoryError>;
        async fn delete(&self, id: &DeviceId) -> Result<(), DeviceRepositoryError>;
        async fn find_by_id(&self, id: &DeviceId) -> Result<Option<Device>, DeviceRepositoryError>;
        async fn find_all(&self) -> Result<Vec<Device>, DeviceRepositoryError>;
        async fn find_by_brand(&self, brand: &DeviceBrand) -> Result<Vec<Device>, DeviceRepositoryError>;
        async fn find_by_state(&self, state: DeviceState) -> Result<Vec<Device>, DeviceRepositoryError>;
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub struct FixedIds(pub &'static str);

impl DeviceIdGeneratorPort for FixedIds {
    fn next_id(&self) -> DeviceId {
        DeviceId::from(self.0)
    }
}

pub const DEVICE_ID: &str = "9a8f5e3c-6d21-4b7a-8f0e-1c2d3e4f5a6b";

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()
}

pub fn stored_device(state: DeviceState) -> Device {
    Device::new(
        DeviceId::from(DEVICE_ID),
        DeviceName::from("My Device"),
        DeviceBrand::from("My Brand"),
        state,
        fixed_instant(),
    )
}
