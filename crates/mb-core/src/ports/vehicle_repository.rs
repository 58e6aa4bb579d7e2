//! Vehicle persistence port
//!
//! Implementations are provided by the infrastructure layer. `create` carries
//! no deduplication key, so calling it twice stores two vehicles.

use async_trait::async_trait;

use crate::ids::{UserId, VehicleId};
use crate::ports::errors::VehicleRepositoryError;
use crate::vehicle::{NewVehicleRecord, StoredVehicle};

#[async_trait]
pub trait VehicleRepositoryPort: Send + Sync {
    /// Store a new vehicle and return its assigned identifier.
    async fn create(&self, record: &NewVehicleRecord) -> Result<VehicleId, VehicleRepositoryError>;

    /// All vehicles owned by `owner`, oldest first.
    async fn list_by_owner(&self, owner: &UserId)
        -> Result<Vec<StoredVehicle>, VehicleRepositoryError>;
}
