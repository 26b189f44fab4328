use crate::db::models::{DeviceRow, NewDeviceRow};
use crate::db::ports::{InsertMapper, RowMapper};
use anyhow::{anyhow, Result};
use chrono::{DateTime, TimeZone, Utc};
use dh_core::{Device, DeviceBrand, DeviceId, DeviceName, DeviceState};

pub struct DeviceRowMapper;

impl InsertMapper<Device, NewDeviceRow> for DeviceRowMapper {
    fn to_row(&self, domain: &Device) -> Result<NewDeviceRow> {
        Ok(NewDeviceRow {
            id: domain.id().as_str().to_string(),
            name: domain.name().as_str().to_string(),
            brand: domain.brand().as_str().to_string(),
            state: state_to_storage(domain.state()).to_string(),
            created_at: domain.created_at().timestamp_millis(),
        })
    }
}

impl RowMapper<DeviceRow, Device> for DeviceRowMapper {
    fn to_domain(&self, row: &DeviceRow) -> Result<Device> {
        Ok(Device::new(
            DeviceId::from(row.id.as_str()),
            DeviceName::from(row.name.as_str()),
            DeviceBrand::from(row.brand.as_str()),
            state_from_storage(&row.state)?,
            millis_to_utc(row.created_at)?,
        ))
    }
}

/// Storage encoding of [`DeviceState`]. The hyphen becomes an underscore.
pub fn state_to_storage(state: DeviceState) -> &'static str {
    match state {
        DeviceState::Available => "available",
        DeviceState::InUse => "in_use",
        DeviceState::Inactive => "inactive",
    }
}

pub fn state_from_storage(value: &str) -> Result<DeviceState> {
    match value {
        "available" => Ok(DeviceState::Available),
        "in_use" => Ok(DeviceState::InUse),
        "inactive" => Ok(DeviceState::Inactive),
        _ => Err(anyhow!("invalid device state: {}", value)),
    }
}

fn millis_to_utc(ms: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| anyhow!("invalid created_at timestamp: {}", ms))
}
