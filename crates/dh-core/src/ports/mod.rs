//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and infrastructure
//! implementations. Use cases receive every port explicitly at construction,
//! so a relational store, an in-memory store or a test double can be swapped
//! in without touching use-case code.

mod clock;
pub mod device_repository;
pub mod errors;
mod id_generator;

pub use clock::ClockPort;
pub use device_repository::DeviceRepositoryPort;
pub use errors::DeviceRepositoryError;
pub use id_generator::DeviceIdGeneratorPort;
