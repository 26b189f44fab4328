//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! **No business logic, no validation, no default value calculation.**
//! Which backend to use when `storage_backend` is empty is decided by wiring.

mod app_config;

pub use app_config::AppConfig;
