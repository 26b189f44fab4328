//! DeviceHub Application Orchestration Layer
//!
//! This crate contains the device use cases. Each one composes at most one
//! store read, the entity's own rule checks, and at most one store write.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::{DeviceUseCaseError, ErrorKind, UseCases};
