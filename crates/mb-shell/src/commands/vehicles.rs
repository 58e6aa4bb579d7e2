use mb_app::usecases::ListVehiclesError;
use mb_core::StoredVehicle;

use crate::bootstrap::Runtime;

pub async fn list_vehicles(runtime: &Runtime) -> Result<Vec<StoredVehicle>, ListVehiclesError> {
    runtime.usecases().list_vehicles().execute().await
}
