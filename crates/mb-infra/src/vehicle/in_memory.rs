use async_trait::async_trait;
use std::sync::Mutex;

use mb_core::ports::{VehicleRepositoryError, VehicleRepositoryPort};
use mb_core::{NewVehicleRecord, StoredVehicle, UserId, VehicleId};

/// Process-local vehicle store, lost on exit.
#[derive(Default)]
pub struct InMemoryVehicleRepository {
    vehicles: Mutex<Vec<StoredVehicle>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored vehicle regardless of owner, in insertion order.
    pub fn snapshot(&self) -> Result<Vec<StoredVehicle>, VehicleRepositoryError> {
        Ok(self.lock()?.clone())
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, Vec<StoredVehicle>>, VehicleRepositoryError> {
        self.vehicles
            .lock()
            .map_err(|_| VehicleRepositoryError::Storage("vehicle store poisoned".into()))
    }
}

#[async_trait]
impl VehicleRepositoryPort for InMemoryVehicleRepository {
    async fn create(&self, record: &NewVehicleRecord) -> Result<VehicleId, VehicleRepositoryError> {
        let id = VehicleId::new();
        self.lock()?.push(StoredVehicle {
            id: id.clone(),
            record: record.clone(),
        });
        Ok(id)
    }

    async fn list_by_owner(
        &self,
        owner: &UserId,
    ) -> Result<Vec<StoredVehicle>, VehicleRepositoryError> {
        Ok(self
            .lock()?
            .iter()
            .filter(|vehicle| &vehicle.record.owner_id == owner)
            .cloned()
            .collect())
    }
}
