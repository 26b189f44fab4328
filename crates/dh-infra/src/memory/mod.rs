mod device_repo;

pub use device_repo::InMemoryDeviceRepository;
