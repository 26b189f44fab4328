pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config, CONFIG_ENV};
pub use runtime::AppRuntime;
pub use wiring::{wire_dependencies, WiringError};
