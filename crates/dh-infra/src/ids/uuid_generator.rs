use dh_core::ports::DeviceIdGeneratorPort;
use dh_core::DeviceId;

/// Random (v4) UUIDs as device identifiers.
pub struct UuidDeviceIdGenerator;

impl DeviceIdGeneratorPort for UuidDeviceIdGenerator {
    fn next_id(&self) -> DeviceId {
        DeviceId::new(uuid::Uuid::new_v4().to_string())
    }
}
