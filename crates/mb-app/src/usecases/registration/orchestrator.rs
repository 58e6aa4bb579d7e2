//! Registration wizard orchestrator.
//!
//! This module coordinates the wizard state machine, the draft store and the
//! side effects the state machine asks for.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};

use mb_core::ports::{
    ClockPort, DateInputError, DateInputPort, FilePickerError, FilePickerPort, NavigationPort,
};
use mb_core::{
    DraftDate, FormDraft, FormStore, MediaKind, VehicleId, WizardAction, WizardEvent, WizardState,
    WizardStateMachine, WizardVariant,
};

use super::context::WizardContext;
use crate::usecases::submit_vehicle_draft::{SubmitVehicleDraft, SubmitVehicleError};

/// Errors produced by the wizard orchestrator.
///
/// A refused step change is not an error: it shows up in the snapshot's
/// `state.errors`.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("vehicle already submitted")]
    AlreadySubmitted,

    #[error(transparent)]
    Submit(#[from] SubmitVehicleError),

    #[error("date input rejected: {0}")]
    DateInput(#[from] DateInputError),

    #[error("file selection failed: {0}")]
    FilePicker(#[from] FilePickerError),

    #[error("navigation failed: {0}")]
    Navigation(#[source] anyhow::Error),
}

/// What the view layer renders after each operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSnapshot {
    pub state: WizardState,
    pub draft: FormDraft,
    pub vehicle_id: Option<VehicleId>,
    /// Entered dates rendered by the platform date input.
    pub display_dates: BTreeMap<DraftDate, String>,
}

/// Orchestrator that drives one wizard instance from mount to submission.
pub struct RegistrationWizard {
    context: WizardContext,
    submitting: AtomicBool,

    submit_vehicle: Arc<SubmitVehicleDraft>,
    navigation: Arc<dyn NavigationPort>,
    date_input: Arc<dyn DateInputPort>,
    file_picker: Arc<dyn FilePickerPort>,
}

impl RegistrationWizard {
    pub fn new(
        variant: WizardVariant,
        initial: FormDraft,
        submit_vehicle: Arc<SubmitVehicleDraft>,
        navigation: Arc<dyn NavigationPort>,
        date_input: Arc<dyn DateInputPort>,
        file_picker: Arc<dyn FilePickerPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let store = FormStore::initialize(initial, clock.current_year());
        Self {
            context: WizardContext::new(WizardState::new(variant), store),
            submitting: AtomicBool::new(false),
            submit_vehicle,
            navigation,
            date_input,
            file_picker,
        }
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        let session = self.context.session().await;
        let display_dates = DraftDate::ALL
            .into_iter()
            .filter_map(|date| {
                let value = date.value(session.store.draft())?;
                Some((date, self.date_input.format(value)?))
            })
            .collect();
        WizardSnapshot {
            display_dates,
            draft: session.store.draft().clone(),
            state: session.state,
            vehicle_id: session.submitted,
        }
    }

    /// Merge a patch into the draft. Never validates.
    pub async fn update(&self, patch: FormDraft) -> WizardSnapshot {
        self.context.update_draft(patch).await;
        self.snapshot().await
    }

    /// Parse a date through the platform date input and store it.
    pub async fn enter_date(
        &self,
        date: DraftDate,
        raw: &str,
    ) -> Result<WizardSnapshot, WizardError> {
        let value = self.date_input.parse(raw)?;
        Ok(self.update(date.patch(value)).await)
    }

    /// Resolve picked files and append them to the photo or document list.
    pub async fn attach(
        &self,
        kind: MediaKind,
        sources: &[String],
    ) -> Result<WizardSnapshot, WizardError> {
        let picked = self.file_picker.pick(sources, kind).await?;
        debug!(?kind, count = picked.len(), "media attached");

        self.context.append_media(kind, picked).await;
        Ok(self.snapshot().await)
    }

    pub async fn go_next(&self) -> Result<WizardSnapshot, WizardError> {
        self.dispatch(WizardEvent::Next).await
    }

    pub async fn go_back(&self) -> Result<WizardSnapshot, WizardError> {
        self.dispatch(WizardEvent::Back).await
    }

    pub async fn go_to_step(&self, step: usize) -> Result<WizardSnapshot, WizardError> {
        self.dispatch(WizardEvent::GoTo { step }).await
    }

    pub async fn reset(&self) -> Result<WizardSnapshot, WizardError> {
        self.dispatch(WizardEvent::Reset).await
    }

    /// Confirm on the last step. At most one submission runs at a time, and
    /// none after a successful one.
    pub async fn submit(&self) -> Result<WizardSnapshot, WizardError> {
        let _in_flight =
            InFlightGuard::acquire(&self.submitting).ok_or(WizardError::SubmissionInFlight)?;
        if self.context.submitted().await.is_some() {
            return Err(WizardError::AlreadySubmitted);
        }
        self.dispatch(WizardEvent::Submit).await
    }

    async fn dispatch(&self, event: WizardEvent) -> Result<WizardSnapshot, WizardError> {
        // Serialize dispatch so a transition and its actions are never interleaved.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.registration_wizard.dispatch", event = ?event);
        async {
            let session = self.context.session().await;
            let from = session.state.current;
            let (next, actions) =
                WizardStateMachine::transition(session.state, event, session.store.draft());
            info!(
                from,
                to = next.current,
                valid = next.errors.is_valid,
                ?event,
                "wizard transition"
            );
            self.context.set_state(next).await;
            self.execute_actions(actions).await?;
            Ok(self.snapshot().await)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<WizardAction>) -> Result<(), WizardError> {
        for action in actions {
            debug!(?action, "wizard executing action");
            match action {
                WizardAction::ExitWizard => {
                    self.navigation
                        .go_back()
                        .await
                        .map_err(WizardError::Navigation)?;
                }
                WizardAction::SubmitDraft => {
                    let draft = self.context.draft().await;
                    let id = self.submit_vehicle.execute(&draft).await?;
                    self.context.mark_submitted(id).await;
                    // The vehicle exists now; a routing hiccup must not invite a resubmission.
                    if let Err(err) = self.navigation.reset_to_home().await {
                        warn!(error = %err, "reset to home failed after submission");
                    }
                }
                WizardAction::ResetDraft => {
                    self.context.reset_draft().await;
                }
            }
        }
        Ok(())
    }
}

/// Holds the in-flight flag for the lifetime of one submission.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
