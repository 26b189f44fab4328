//! Device commands
//!
//! Driving adapter: validate raw input, call one use case through the
//! runtime's `UseCases` accessor, render the result.

use tracing::{info_span, Instrument};

use dh_core::DeviceBrand;

use super::dto::{
    parse_device_id, parse_state, required_text, CreateDeviceInput, DeviceDto, UpdateDeviceInput,
};
use super::error::{map_err, CommandError};
use crate::bootstrap::AppRuntime;

pub async fn create_device(
    runtime: &AppRuntime,
    input: CreateDeviceInput,
) -> Result<DeviceDto, CommandError> {
    let request = input.validate()?;
    let span = info_span!("command.device.create", brand = %request.brand);

    let device = runtime
        .usecases()
        .create_device()
        .execute(request)
        .instrument(span)
        .await
        .map_err(map_err)?;

    Ok(DeviceDto::from(&device))
}

/// Partial update. An input with no fields is accepted and changes nothing.
pub async fn update_device(
    runtime: &AppRuntime,
    id: &str,
    input: UpdateDeviceInput,
) -> Result<(), CommandError> {
    let request = input.validate(id)?;
    let span = info_span!("command.device.update", device_id = %request.id);

    runtime
        .usecases()
        .update_device()
        .execute(request)
        .instrument(span)
        .await
        .map_err(map_err)
}

pub async fn delete_device(runtime: &AppRuntime, id: &str) -> Result<(), CommandError> {
    let id = parse_device_id(id)?;
    let span = info_span!("command.device.delete", device_id = %id);

    runtime
        .usecases()
        .delete_device()
        .execute(&id)
        .instrument(span)
        .await
        .map_err(map_err)
}

/// Absence is reported as NotFound here; the use case itself returns `None`.
pub async fn get_device(runtime: &AppRuntime, id: &str) -> Result<DeviceDto, CommandError> {
    let id = parse_device_id(id)?;
    let span = info_span!("command.device.get", device_id = %id);

    runtime
        .usecases()
        .get_device_by_id()
        .execute(&id)
        .instrument(span)
        .await
        .map_err(map_err)?
        .map(|device| DeviceDto::from(&device))
        .ok_or_else(|| CommandError::NotFound("Device not found".to_string()))
}

pub async fn list_devices(runtime: &AppRuntime) -> Result<Vec<DeviceDto>, CommandError> {
    let devices = runtime
        .usecases()
        .get_all_devices()
        .execute()
        .instrument(info_span!("command.device.list"))
        .await
        .map_err(map_err)?;

    Ok(devices.iter().map(DeviceDto::from).collect())
}

pub async fn list_devices_by_brand(
    runtime: &AppRuntime,
    brand: &str,
) -> Result<Vec<DeviceDto>, CommandError> {
    let brand = DeviceBrand::new(required_text(brand, "Brand is required")?);
    let span = info_span!("command.device.by_brand", brand = %brand);

    let devices = runtime
        .usecases()
        .get_devices_by_brand()
        .execute(&brand)
        .instrument(span)
        .await
        .map_err(map_err)?;

    Ok(devices.iter().map(DeviceDto::from).collect())
}

pub async fn list_devices_by_state(
    runtime: &AppRuntime,
    state: &str,
) -> Result<Vec<DeviceDto>, CommandError> {
    let state = parse_state(state)?;
    let span = info_span!("command.device.by_state", state = %state);

    let devices = runtime
        .usecases()
        .get_devices_by_state()
        .execute(state.as_str())
        .instrument(span)
        .await
        .map_err(map_err)?;

    Ok(devices.iter().map(DeviceDto::from).collect())
}
