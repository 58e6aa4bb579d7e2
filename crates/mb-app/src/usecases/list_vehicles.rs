use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use mb_core::ports::{SessionError, SessionPort, VehicleRepositoryError, VehicleRepositoryPort};
use mb_core::StoredVehicle;

#[derive(Debug, thiserror::Error)]
pub enum ListVehiclesError {
    #[error("no authenticated user")]
    NotAuthenticated,

    #[error("failed to resolve session")]
    Session(#[from] SessionError),

    #[error("failed to read vehicles")]
    Persistence(#[from] VehicleRepositoryError),
}

/// Use case listing the vehicles owned by the signed-in user.
pub struct ListVehicles {
    vehicles: Arc<dyn VehicleRepositoryPort>,
    session: Arc<dyn SessionPort>,
}

impl ListVehicles {
    pub fn new(vehicles: Arc<dyn VehicleRepositoryPort>, session: Arc<dyn SessionPort>) -> Self {
        Self { vehicles, session }
    }

    pub async fn execute(&self) -> Result<Vec<StoredVehicle>, ListVehiclesError> {
        let span = info_span!("usecase.list_vehicles.execute");
        async {
            let owner = self
                .session
                .current_user()
                .await?
                .ok_or(ListVehiclesError::NotAuthenticated)?;
            let vehicles = self.vehicles.list_by_owner(&owner).await?;
            debug!(owner = %owner, count = vehicles.len(), "listed vehicles");
            Ok(vehicles)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mb_core::{FormDraft, NewVehicleRecord, UserId, VehicleId};
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Vehicles {}

        #[async_trait]
        impl VehicleRepositoryPort for Vehicles {
            async fn create(&self, record: &NewVehicleRecord) -> Result<VehicleId, VehicleRepositoryError>;
            async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<StoredVehicle>, VehicleRepositoryError>;
        }
    }

    mock! {
        pub Session {}

        #[async_trait]
        impl SessionPort for Session {
            async fn current_user(&self) -> Result<Option<UserId>, SessionError>;
        }
    }

    fn stored(owner: &str) -> StoredVehicle {
        let draft = FormDraft {
            make: Some("Fiat".into()),
            ..Default::default()
        };
        StoredVehicle {
            id: VehicleId::from("veh-1"),
            record: NewVehicleRecord::from_draft(
                &draft,
                owner.into(),
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            ),
        }
    }

    #[tokio::test]
    async fn lists_vehicles_of_current_user() {
        let mut session = MockSession::new();
        session
            .expect_current_user()
            .returning(|| Ok(Some(UserId::from("uid-1"))));
        let mut vehicles = MockVehicles::new();
        vehicles
            .expect_list_by_owner()
            .withf(|owner| owner.as_str() == "uid-1")
            .times(1)
            .returning(|_| Ok(vec![stored("uid-1")]));

        let listed = ListVehicles::new(Arc::new(vehicles), Arc::new(session))
            .execute()
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].record.make, "Fiat");
    }

    #[tokio::test]
    async fn requires_session() {
        let mut session = MockSession::new();
        session.expect_current_user().returning(|| Ok(None));
        let mut vehicles = MockVehicles::new();
        vehicles.expect_list_by_owner().never();

        let err = ListVehicles::new(Arc::new(vehicles), Arc::new(session))
            .execute()
            .await
            .unwrap_err();

        assert!(matches!(err, ListVehiclesError::NotAuthenticated));
    }
}
