//! # Dependency Injection
//!
//! The only place that depends on dh-infra and dh-app at the same time.
//! It assembles adapters behind their ports and hands back [`AppDeps`];
//! it makes no business decisions.

use std::path::Path;
use std::sync::Arc;

use dh_app::AppDeps;
use dh_core::config::AppConfig;
use dh_core::ports::{ClockPort, DeviceIdGeneratorPort, DeviceRepositoryPort};
use dh_infra::db::executor::DieselSqliteExecutor;
use dh_infra::db::mappers::DeviceRowMapper;
use dh_infra::db::pool::{init_db_pool, DbPool};
use dh_infra::db::repositories::DieselDeviceRepository;
use dh_infra::{InMemoryDeviceRepository, SystemClock, UuidDeviceIdGenerator};
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),

    #[error("Unknown storage backend: {0}")]
    UnknownBackend(String),
}

/// Storage backends selectable through `[storage] backend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl StorageBackend {
    /// An empty value selects SQLite.
    pub fn from_config(value: &str) -> WiringResult<Self> {
        match value.trim() {
            "" | "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(WiringError::UnknownBackend(other.to_string())),
        }
    }
}

/// Create SQLite database connection pool
///
/// # Errors
///
/// Returns `WiringError::DatabaseInit` if:
/// - The path is empty or not valid UTF-8
/// - Parent directory creation fails
/// - Database pool creation or migration fails
fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    if db_path.as_os_str().is_empty() {
        return Err(WiringError::DatabaseInit(
            "database path is not configured".to_string(),
        ));
    }

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e))
        })?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url)
        .map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {}", e)))
}

fn create_device_repo(config: &AppConfig) -> WiringResult<Arc<dyn DeviceRepositoryPort>> {
    match StorageBackend::from_config(&config.storage_backend)? {
        StorageBackend::Sqlite => {
            let db_pool = create_db_pool(&config.database_path)?;
            info!(path = %config.database_path.display(), "Using SQLite device store");
            Ok(Arc::new(DieselDeviceRepository::new(
                DieselSqliteExecutor::new(db_pool),
                DeviceRowMapper,
            )))
        }
        StorageBackend::Memory => {
            info!("Using in-memory device store");
            Ok(Arc::new(InMemoryDeviceRepository::new()))
        }
    }
}

/// Wire all dependencies together.
///
/// # Errors
///
/// Returns `WiringError` if the configured store cannot be built.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let device_repo = create_device_repo(config)?;
    let id_generator: Arc<dyn DeviceIdGeneratorPort> = Arc::new(UuidDeviceIdGenerator);
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    Ok(AppDeps {
        device_repo,
        id_generator,
        clock,
    })
}
