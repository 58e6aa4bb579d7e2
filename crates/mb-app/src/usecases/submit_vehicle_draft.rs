use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use mb_core::ports::{
    ClockPort, SessionError, SessionPort, VehicleRepositoryError, VehicleRepositoryPort,
};
use mb_core::{FormDraft, NewVehicleRecord, VehicleId};

#[derive(Debug, thiserror::Error)]
pub enum SubmitVehicleError {
    #[error("no authenticated user")]
    NotAuthenticated,

    #[error("failed to resolve session")]
    Session(#[from] SessionError),

    #[error("failed to store vehicle")]
    Persistence(#[from] VehicleRepositoryError),
}

impl SubmitVehicleError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitVehicleError::NotAuthenticated | SubmitVehicleError::Session(_) => {
                "You need to sign in again before saving this vehicle."
            }
            SubmitVehicleError::Persistence(_) => {
                "Could not save the vehicle. Please try again."
            }
        }
    }
}

/// Use case turning a finished draft into a stored vehicle.
///
/// Performs at most one create call per invocation and never retries.
/// The draft is only borrowed, so a failed attempt can be repeated as is.
pub struct SubmitVehicleDraft {
    vehicles: Arc<dyn VehicleRepositoryPort>,
    session: Arc<dyn SessionPort>,
    clock: Arc<dyn ClockPort>,
}

impl SubmitVehicleDraft {
    pub fn new(
        vehicles: Arc<dyn VehicleRepositoryPort>,
        session: Arc<dyn SessionPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            vehicles,
            session,
            clock,
        }
    }

    pub async fn execute(&self, draft: &FormDraft) -> Result<VehicleId, SubmitVehicleError> {
        let span = info_span!("usecase.submit_vehicle_draft.execute");
        async {
            // No session, no write.
            let owner = self
                .session
                .current_user()
                .await?
                .ok_or(SubmitVehicleError::NotAuthenticated)?;

            let record = NewVehicleRecord::from_draft(draft, owner, self.clock.now());

            match self.vehicles.create(&record).await {
                Ok(id) => {
                    info!(vehicle_id = %id, plate = %record.license_plate, "vehicle created");
                    Ok(id)
                }
                Err(err) => {
                    warn!(error = %err, "vehicle create failed");
                    Err(err.into())
                }
            }
        }
        .instrument(span)
        .await
    }
}
