use chrono::{DateTime, Utc};

use super::error::DeviceRuleViolation;
use super::state::DeviceState;
use super::value_objects::{DeviceBrand, DeviceId, DeviceName};

/// Partial change set for a device.
///
/// `None` means "leave as is"; only the present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevicePatch {
    pub name: Option<DeviceName>,
    pub brand: Option<DeviceBrand>,
    pub state: Option<DeviceState>,
}

impl DevicePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.brand.is_none() && self.state.is_none()
    }

    /// Whether the patch touches name or brand, which are frozen while in use.
    pub fn touches_descriptor(&self) -> bool {
        self.name.is_some() || self.brand.is_some()
    }
}

/// A registered device.
///
/// Business rules:
/// - `id` and `created_at` never change after construction.
/// - name and brand cannot change while the device is in use.
/// - a device in use cannot be deleted.
/// - state itself can always be changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    id: DeviceId,
    name: DeviceName,
    brand: DeviceBrand,
    state: DeviceState,
    created_at: DateTime<Utc>,
}

impl Device {
    /// Builds a device from already validated parts. Never fails.
    pub fn new(
        id: DeviceId,
        name: DeviceName,
        brand: DeviceBrand,
        state: DeviceState,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            brand,
            state,
            created_at,
        }
    }

    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    pub fn name(&self) -> &DeviceName {
        &self.name
    }

    pub fn brand(&self) -> &DeviceBrand {
        &self.brand
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_in_use(&self) -> bool {
        self.state == DeviceState::InUse
    }

    /// Applies a partial update in place.
    ///
    /// Fails without touching the device when the patch carries a name or brand
    /// and the device is currently in use.
    pub fn update(&mut self, patch: DevicePatch) -> Result<(), DeviceRuleViolation> {
        if self.is_in_use() && patch.touches_descriptor() {
            return Err(DeviceRuleViolation::NameOrBrandLockedWhileInUse);
        }

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }

        Ok(())
    }

    pub fn ensure_can_be_deleted(&self) -> Result<(), DeviceRuleViolation> {
        if self.is_in_use() {
            return Err(DeviceRuleViolation::DeleteWhileInUse);
        }
        Ok(())
    }

    pub fn activate(&mut self) {
        self.state = DeviceState::InUse;
    }

    pub fn deactivate(&mut self) {
        self.state = DeviceState::Inactive;
    }
}
