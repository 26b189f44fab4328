pub mod db;
pub mod ids;
pub mod memory;
pub mod time;

pub use ids::UuidDeviceIdGenerator;
pub use memory::InMemoryDeviceRepository;
pub use time::SystemClock;
