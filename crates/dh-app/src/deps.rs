//! # Application Dependencies
//!
//! This module defines the dependency grouping for use-case construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping

use std::sync::Arc;
use dh_core::ports::*;

/// Application dependency grouping.
///
/// All dependencies are required - no defaults, no optional fields.
#[derive(Clone)]
pub struct AppDeps {
    // Device dependencies
    pub device_repo: Arc<dyn DeviceRepositoryPort>,
    pub id_generator: Arc<dyn DeviceIdGeneratorPort>,

    // System dependencies
    pub clock: Arc<dyn ClockPort>,
}
