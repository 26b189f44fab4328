use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use dh_app::usecases::{CreateDeviceRequest, UpdateDeviceRequest};
use dh_core::{Device, DeviceBrand, DeviceId, DeviceName, DeviceState};

use super::error::CommandError;

/// Device as rendered to callers.
///
/// `state` uses `available | in-use | inactive`; `createdAt` is RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDto {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub state: DeviceState,
    pub created_at: String,
}

impl From<&Device> for DeviceDto {
    fn from(device: &Device) -> Self {
        Self {
            id: device.id().to_string(),
            name: device.name().to_string(),
            brand: device.brand().to_string(),
            state: device.state(),
            created_at: device
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Raw create input, validated by [`CreateDeviceInput::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDeviceInput {
    pub name: String,
    pub brand: String,
    pub state: String,
}

impl CreateDeviceInput {
    pub fn validate(self) -> Result<CreateDeviceRequest, CommandError> {
        Ok(CreateDeviceRequest {
            name: DeviceName::new(required_text(&self.name, "Name is required")?),
            brand: DeviceBrand::new(required_text(&self.brand, "Brand is required")?),
            state: parse_state(&self.state)?,
        })
    }
}

/// Raw partial update input. All fields optional, present ones must be valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDeviceInput {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub state: Option<String>,
}

impl UpdateDeviceInput {
    pub fn validate(self, id: &str) -> Result<UpdateDeviceRequest, CommandError> {
        let id = parse_device_id(id)?;
        let name = self
            .name
            .map(|n| required_text(&n, "Name must not be empty").map(DeviceName::new))
            .transpose()?;
        let brand = self
            .brand
            .map(|b| required_text(&b, "Brand must not be empty").map(DeviceBrand::new))
            .transpose()?;
        let state = self.state.map(|s| parse_state(&s)).transpose()?;

        Ok(UpdateDeviceRequest {
            id,
            name,
            brand,
            state,
        })
    }
}

/// Accepts only the hyphenated UUID form and returns it lowercased,
/// the same text the id generator produces.
pub fn parse_device_id(raw: &str) -> Result<DeviceId, CommandError> {
    let raw = raw.trim();
    if raw.len() != uuid::fmt::Hyphenated::LENGTH {
        return Err(CommandError::BadRequest("Invalid UUID".to_string()));
    }
    uuid::Uuid::try_parse(raw)
        .map(|id| DeviceId::new(id.hyphenated().to_string()))
        .map_err(|_| CommandError::BadRequest("Invalid UUID".to_string()))
}

pub fn parse_state(raw: &str) -> Result<DeviceState, CommandError> {
    raw.trim()
        .parse()
        .map_err(|e: dh_core::InvalidDeviceState| CommandError::BadRequest(e.to_string()))
}

/// Trimmed, non-empty text.
pub fn required_text(raw: &str, message: &str) -> Result<String, CommandError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CommandError::BadRequest(message.to_string()));
    }
    Ok(trimmed.to_string())
}
