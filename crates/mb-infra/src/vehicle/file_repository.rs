//! File-based vehicle repository
//!
//! Persists every stored vehicle as one JSON array in the application data
//! directory. Identifiers are assigned here, never by the caller.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use mb_core::ports::{VehicleRepositoryError, VehicleRepositoryPort};
use mb_core::{NewVehicleRecord, StoredVehicle, UserId, VehicleId};

pub const DEFAULT_VEHICLES_FILE: &str = "vehicles.json";

pub struct FileVehicleRepository {
    vehicles_file_path: PathBuf,
    // Read-modify-write on the file must not interleave.
    write_lock: Mutex<()>,
}

impl FileVehicleRepository {
    /// Create repository with custom file path
    pub fn new(vehicles_file_path: PathBuf) -> Self {
        Self {
            vehicles_file_path,
            write_lock: Mutex::new(()),
        }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_VEHICLES_FILE))
    }

    async fn ensure_parent_dir(&self) -> Result<(), VehicleRepositoryError> {
        if let Some(parent) = self.vehicles_file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| VehicleRepositoryError::Storage(e.to_string()))?;
        }
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<StoredVehicle>, VehicleRepositoryError> {
        if !self.vehicles_file_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.vehicles_file_path)
            .await
            .map_err(|e| VehicleRepositoryError::Storage(e.to_string()))?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            VehicleRepositoryError::Serialization(format!("Failed to parse vehicles: {e}"))
        })
    }

    async fn write_all(&self, vehicles: &[StoredVehicle]) -> Result<(), VehicleRepositoryError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(vehicles).map_err(|e| {
            VehicleRepositoryError::Serialization(format!("Failed to serialize vehicles: {e}"))
        })?;

        let mut file = fs::File::create(&self.vehicles_file_path)
            .await
            .map_err(|e| {
                VehicleRepositoryError::Storage(format!("Failed to create vehicles file: {e}"))
            })?;

        file.write_all(json.as_bytes()).await.map_err(|e| {
            VehicleRepositoryError::Storage(format!("Failed to write vehicles file: {e}"))
        })?;

        file.sync_all().await.map_err(|e| {
            VehicleRepositoryError::Storage(format!("Failed to sync vehicles file: {e}"))
        })?;

        Ok(())
    }
}

#[async_trait]
impl VehicleRepositoryPort for FileVehicleRepository {
    async fn create(&self, record: &NewVehicleRecord) -> Result<VehicleId, VehicleRepositoryError> {
        let _guard = self.write_lock.lock().await;

        let mut vehicles = self.read_all().await?;
        let id = VehicleId::new();
        vehicles.push(StoredVehicle {
            id: id.clone(),
            record: record.clone(),
        });
        self.write_all(&vehicles).await?;

        debug!(vehicle_id = %id, total = vehicles.len(), "vehicle appended to file");
        Ok(id)
    }

    async fn list_by_owner(
        &self,
        owner: &UserId,
    ) -> Result<Vec<StoredVehicle>, VehicleRepositoryError> {
        let _guard = self.write_lock.lock().await;

        Ok(self
            .read_all()
            .await?
            .into_iter()
            .filter(|vehicle| &vehicle.record.owner_id == owner)
            .collect())
    }
}
