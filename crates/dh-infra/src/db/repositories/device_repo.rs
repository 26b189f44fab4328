use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use dh_core::ports::{DeviceRepositoryError, DeviceRepositoryPort};
use dh_core::{Device, DeviceBrand, DeviceId, DeviceState};

use crate::db::mappers::device_mapper::state_to_storage;
use crate::db::models::{DeviceRow, NewDeviceRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::t_device;

pub struct DieselDeviceRepository<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselDeviceRepository<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

impl<E, M> DieselDeviceRepository<E, M>
where
    M: RowMapper<DeviceRow, Device>,
{
    fn map_rows(&self, rows: Vec<DeviceRow>) -> Result<Vec<Device>, DeviceRepositoryError> {
        let mut devices = Vec::with_capacity(rows.len());
        for row in rows {
            let device = self.mapper.to_domain(&row).map_err(|e| {
                DeviceRepositoryError::Corrupt(format!("device {}: {}", row.id, e))
            })?;
            devices.push(device);
        }
        Ok(devices)
    }
}

#[async_trait]
impl<E, M> DeviceRepositoryPort for DieselDeviceRepository<E, M>
where
    E: DbExecutor,
    M: InsertMapper<Device, NewDeviceRow> + RowMapper<DeviceRow, Device> + Send + Sync,
{
    async fn create(&self, device: &Device) -> Result<(), DeviceRepositoryError> {
        let row = self
            .mapper
            .to_row(device)
            .map_err(|e| DeviceRepositoryError::Storage(e.to_string()))?;

        self.executor
            .run(move |conn| {
                diesel::insert_into(t_device::table)
                    .values(&row)
                    .execute(conn)?;
                Ok(())
            })
            .map_err(|e| DeviceRepositoryError::Storage(e.to_string()))?;

        debug!(device_id = %device.id(), "Inserted device row");
        Ok(())
    }

    async fn update(&self, device: &Device) -> Result<(), DeviceRepositoryError> {
        let row = self
            .mapper
            .to_row(device)
            .map_err(|e| DeviceRepositoryError::Storage(e.to_string()))?;

        // id and created_at are never rewritten
        let affected = self
            .executor
            .run(move |conn| {
                let affected = diesel::update(t_device::table.filter(t_device::id.eq(&row.id)))
                    .set((
                        t_device::name.eq(&row.name),
                        t_device::brand.eq(&row.brand),
                        t_device::state.eq(&row.state),
                    ))
                    .execute(conn)?;
                Ok(affected)
            })
            .map_err(|e| DeviceRepositoryError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(DeviceRepositoryError::NotFound(device.id().clone()));
        }

        Ok(())
    }

    async fn delete(&self, device_id: &DeviceId) -> Result<(), DeviceRepositoryError> {
        let id_str = device_id.as_str().to_string();
        let affected = self
            .executor
            .run(move |conn| {
                let affected = diesel::delete(t_device::table.filter(t_device::id.eq(&id_str)))
                    .execute(conn)?;
                Ok(affected)
            })
            .map_err(|e| DeviceRepositoryError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(DeviceRepositoryError::NotFound(device_id.clone()));
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        device_id: &DeviceId,
    ) -> Result<Option<Device>, DeviceRepositoryError> {
        let id_str = device_id.as_str().to_string();
        let row = self
            .executor
            .run(move |conn| {
                let row = t_device::table
                    .filter(t_device::id.eq(&id_str))
                    .first::<DeviceRow>(conn)
                    .optional()?;
                Ok(row)
            })
            .map_err(|e| DeviceRepositoryError::Storage(e.to_string()))?;

        match row {
            Some(row) => Ok(self.map_rows(vec![row])?.pop()),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Device>, DeviceRepositoryError> {
        let rows = self
            .executor
            .run(|conn| {
                let rows = t_device::table
                    .order((t_device::created_at.asc(), t_device::id.asc()))
                    .load::<DeviceRow>(conn)?;
                Ok(rows)
            })
            .map_err(|e| DeviceRepositoryError::Storage(e.to_string()))?;

        self.map_rows(rows)
    }

    async fn find_by_brand(
        &self,
        brand_value: &DeviceBrand,
    ) -> Result<Vec<Device>, DeviceRepositoryError> {
        let brand_str = brand_value.as_str().to_string();
        let rows = self
            .executor
            .run(move |conn| {
                let rows = t_device::table
                    .filter(t_device::brand.eq(&brand_str))
                    .order((t_device::created_at.asc(), t_device::id.asc()))
                    .load::<DeviceRow>(conn)?;
                Ok(rows)
            })
            .map_err(|e| DeviceRepositoryError::Storage(e.to_string()))?;

        self.map_rows(rows)
    }

    async fn find_by_state(
        &self,
        state_value: DeviceState,
    ) -> Result<Vec<Device>, DeviceRepositoryError> {
        let state_str = state_to_storage(state_value);
        let rows = self
            .executor
            .run(move |conn| {
                let rows = t_device::table
                    .filter(t_device::state.eq(state_str))
                    .order((t_device::created_at.asc(), t_device::id.asc()))
                    .load::<DeviceRow>(conn)?;
                Ok(rows)
            })
            .map_err(|e| DeviceRepositoryError::Storage(e.to_string()))?;

        self.map_rows(rows)
    }
}
