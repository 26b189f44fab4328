use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Operational state of a device.
///
/// The set is closed. Its textual form (`available`, `in-use`, `inactive`) is the
/// one callers use; storage adapters keep their own encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceState {
    Available,
    InUse,
    Inactive,
}

impl DeviceState {
    pub const ALL: [DeviceState; 3] = [
        DeviceState::Available,
        DeviceState::InUse,
        DeviceState::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceState::Available => "available",
            DeviceState::InUse => "in-use",
            DeviceState::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid device state: {0}")]
pub struct InvalidDeviceState(pub String);

impl FromStr for DeviceState {
    type Err = InvalidDeviceState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(DeviceState::Available),
            "in-use" => Ok(DeviceState::InUse),
            "inactive" => Ok(DeviceState::Inactive),
            other => Err(InvalidDeviceState(other.to_string())),
        }
    }
}

impl Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_every_state_text() {
        for state in DeviceState::ALL {
            assert_eq!(state.as_str().parse::<DeviceState>(), Ok(state));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_values() {
        assert_eq!(
            "invalid-state".parse::<DeviceState>(),
            Err(InvalidDeviceState("invalid-state".to_string()))
        );
        // Storage encoding is not accepted at the domain boundary
        assert!("in_use".parse::<DeviceState>().is_err());
        assert!("In-Use".parse::<DeviceState>().is_err());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&DeviceState::InUse).unwrap();
        assert_eq!(json, "\"in-use\"");

        let state: DeviceState = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(state, DeviceState::Inactive);
    }
}
