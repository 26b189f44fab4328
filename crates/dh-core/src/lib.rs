//! # dh-core
//!
//! Core domain models and business rules for DeviceHub.
//!
//! This crate contains pure business logic without any infrastructure dependencies.
//! Persistence, clocks and identifier sources are reached only through [`ports`].

pub mod config;
pub mod device;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use device::{
    Device, DeviceBrand, DeviceId, DeviceName, DevicePatch, DeviceRuleViolation, DeviceState,
    InvalidDeviceState,
};
