use crate::db::schema::t_device;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = t_device)]
pub struct DeviceRow {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub state: String,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = t_device)]
pub struct NewDeviceRow {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub state: String,
    pub created_at: i64,
}
