mod create_device;
mod delete_device;
mod get_all_devices;
mod get_device_by_id;
mod get_devices_by_brand;
mod get_devices_by_state;
mod update_device;

pub use create_device::{CreateDevice, CreateDeviceRequest};
pub use delete_device::DeleteDevice;
pub use get_all_devices::GetAllDevices;
pub use get_device_by_id::GetDeviceById;
pub use get_devices_by_brand::GetDevicesByBrand;
pub use get_devices_by_state::GetDevicesByState;
pub use update_device::{UpdateDevice, UpdateDeviceRequest};
