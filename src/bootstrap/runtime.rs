//! Application runtime holding the wired dependencies.
//!
//! Commands call `runtime.usecases().xxx()` to get a use case with its ports
//! already attached.

use dh_app::{AppDeps, UseCases};
use dh_core::config::AppConfig;

use crate::bootstrap::wiring::{wire_dependencies, WiringResult};

pub struct AppRuntime {
    /// Application dependencies
    pub deps: AppDeps,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    /// Wire dependencies from the config and wrap them.
    pub fn from_config(config: &AppConfig) -> WiringResult<Self> {
        Ok(Self::new(wire_dependencies(config)?))
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(&self.deps)
    }
}
