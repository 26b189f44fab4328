//! Command surface over the device use cases.

pub mod device;
pub mod dto;
pub mod error;

use serde_json::Value;

pub use dto::{CreateDeviceInput, DeviceDto, UpdateDeviceInput};
pub use error::{map_err, CommandError};

/// Successful command result with its HTTP-style status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Created(DeviceDto),
    NoContent,
    Device(DeviceDto),
    Devices(Vec<DeviceDto>),
}

impl CommandOutput {
    pub fn status(&self) -> u16 {
        match self {
            CommandOutput::Created(_) => 201,
            CommandOutput::NoContent => 204,
            CommandOutput::Device(_) | CommandOutput::Devices(_) => 200,
        }
    }

    /// JSON body, `None` for 204.
    pub fn to_json(&self) -> serde_json::Result<Option<Value>> {
        match self {
            CommandOutput::Created(device) | CommandOutput::Device(device) => {
                serde_json::to_value(device).map(Some)
            }
            CommandOutput::Devices(devices) => serde_json::to_value(devices).map(Some),
            CommandOutput::NoContent => Ok(None),
        }
    }
}
