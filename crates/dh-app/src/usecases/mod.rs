//! Device use cases
//!
//! caller
//!   ↓
//! use case ── (optional) DeviceRepositoryPort read
//!   ↓
//! Device rule check / mutation
//!   ↓
//! (optional) DeviceRepositoryPort write → result or DeviceUseCaseError

pub mod device;
mod error;
mod factory;

#[cfg(test)]
pub(crate) mod test_support;

pub use device::{
    CreateDevice, CreateDeviceRequest, DeleteDevice, GetAllDevices, GetDeviceById,
    GetDevicesByBrand, GetDevicesByState, UpdateDevice, UpdateDeviceRequest,
};
pub use error::{DeviceUseCaseError, ErrorKind};
pub use factory::UseCases;
