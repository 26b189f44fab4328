//! Device domain models.

pub mod device;
pub mod error;
pub mod state;
pub mod value_objects;

pub use device::{Device, DevicePatch};
pub use error::DeviceRuleViolation;
pub use state::{DeviceState, InvalidDeviceState};
pub use value_objects::{DeviceBrand, DeviceId, DeviceName};
