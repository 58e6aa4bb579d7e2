//! Full registration through the use case accessor, backed by in-memory storage.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mb_app::usecases::{SubmitVehicleError, WizardError};
use mb_app::{AppDeps, UseCases};
use mb_core::ports::{
    DateInputError, DateInputPort, FilePickerError, FilePickerPort, NavigationPort, Platform,
};
use mb_core::{
    DateValue, FormDraft, MediaDescriptor, MediaKind, NumberInput, UserId, WizardVariant,
};
use mb_infra::{InMemoryVehicleRepository, StaticSession, SystemClock};

#[derive(Default)]
struct RecordingNavigation {
    calls: Mutex<Vec<&'static str>>,
}

#[async_trait]
impl NavigationPort for RecordingNavigation {
    async fn go_back(&self) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push("back");
        Ok(())
    }

    async fn reset_to_home(&self) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push("home");
        Ok(())
    }
}

struct NoDates;

impl DateInputPort for NoDates {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    fn parse(&self, raw: &str) -> Result<DateValue, DateInputError> {
        Err(DateInputError::Unrecognized(raw.to_string()))
    }

    fn format(&self, _value: &DateValue) -> Option<String> {
        None
    }
}

struct NoFiles;

#[async_trait]
impl FilePickerPort for NoFiles {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    async fn pick(
        &self,
        _sources: &[String],
        _kind: MediaKind,
    ) -> Result<Vec<MediaDescriptor>, FilePickerError> {
        Ok(Vec::new())
    }
}

fn deps(
    repo: Arc<InMemoryVehicleRepository>,
    session: StaticSession,
    navigation: Arc<RecordingNavigation>,
) -> AppDeps {
    AppDeps {
        vehicles: repo,
        session: Arc::new(session),
        navigation,
        date_input: Arc::new(NoDates),
        file_picker: Arc::new(NoFiles),
        clock: Arc::new(SystemClock),
    }
}

#[tokio::test]
async fn five_step_registration_stores_defaulted_record() {
    let repo = Arc::new(InMemoryVehicleRepository::new());
    let navigation = Arc::new(RecordingNavigation::default());
    let deps = deps(
        repo.clone(),
        StaticSession::signed_in(UserId::from("uid-1")),
        navigation.clone(),
    );
    let wizard = UseCases::new(&deps).registration_wizard(WizardVariant::Full, FormDraft::default());

    wizard
        .update(FormDraft {
            make: Some("Fiat".into()),
            model: Some("Panda".into()),
            year: Some(NumberInput::from(2020)),
            license_plate: Some("ab123cd".into()),
            ..Default::default()
        })
        .await;
    let snapshot = wizard.go_next().await.unwrap();
    assert_eq!(snapshot.state.current, 2);
    assert_eq!(snapshot.draft.license_plate.as_deref(), Some("AB123CD"));

    wizard
        .update(FormDraft {
            fuel_type: Some("benzina".into()),
            ..Default::default()
        })
        .await;
    assert_eq!(wizard.go_next().await.unwrap().state.current, 3);
    assert_eq!(wizard.go_next().await.unwrap().state.current, 4);
    assert_eq!(wizard.go_next().await.unwrap().state.current, 5);

    let snapshot = wizard.submit().await.unwrap();
    assert!(snapshot.vehicle_id.is_some());

    let stored = repo.snapshot().unwrap();
    assert_eq!(stored.len(), 1);
    let record = &stored[0].record;
    assert_eq!(record.make, "Fiat");
    assert_eq!(record.license_plate, "AB123CD");
    assert_eq!(record.fuel_type, "benzina");
    assert_eq!(record.maintenance_count, 0);
    assert!(!record.privacy_settings.show_costs);
    assert_eq!(record.owner_id, UserId::from("uid-1"));

    assert_eq!(*navigation.calls.lock().unwrap(), vec!["home"]);

    let listed = UseCases::new(&deps).list_vehicles().execute().await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn signed_out_submission_keeps_wizard_open() {
    let repo = Arc::new(InMemoryVehicleRepository::new());
    let navigation = Arc::new(RecordingNavigation::default());
    let deps = deps(repo.clone(), StaticSession::signed_out(), navigation.clone());
    let wizard =
        UseCases::new(&deps).registration_wizard(WizardVariant::Compact, FormDraft::default());

    wizard
        .update(FormDraft {
            make: Some("Lancia".into()),
            model: Some("Ypsilon".into()),
            license_plate: Some("AB12345".into()),
            fuel_type: Some("gpl".into()),
            ..Default::default()
        })
        .await;
    for _ in 0..3 {
        wizard.go_next().await.unwrap();
    }

    let err = wizard.submit().await.unwrap_err();
    assert!(matches!(
        err,
        WizardError::Submit(SubmitVehicleError::NotAuthenticated)
    ));

    let snapshot = wizard.snapshot().await;
    assert_eq!(snapshot.state.current, 4);
    assert_eq!(snapshot.draft.make.as_deref(), Some("Lancia"));
    assert!(repo.snapshot().unwrap().is_empty());
    assert!(navigation.calls.lock().unwrap().is_empty());
}
