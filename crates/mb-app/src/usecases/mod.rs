//! Business logic use cases
//!
//! A step change inside the wizard is not a use case of its own: the
//! orchestrator owns those. Anything that reaches a port is.
//!
//! RegistrationWizard
//         ↓ (Submit on the last step)
// SubmitVehicleDraft  → VehicleRepositoryPort::create
// ---------------------------------
// ListVehicles        → VehicleRepositoryPort::list_by_owner
// ValidateAccountForm → pure, no port

pub mod list_vehicles;
pub mod registration;
pub mod submit_vehicle_draft;
pub mod validate_account;

pub use list_vehicles::{ListVehicles, ListVehiclesError};
pub use registration::{RegistrationWizard, WizardError, WizardSnapshot};
pub use submit_vehicle_draft::{SubmitVehicleDraft, SubmitVehicleError};
pub use validate_account::ValidateAccountForm;

use std::sync::Arc;

use mb_core::{FormDraft, WizardVariant};

use crate::deps::AppDeps;

/// Use case accessor over [`AppDeps`].
///
/// Callers never need to know which ports a use case takes; all
/// port-to-use-case wiring lives here.
pub struct UseCases<'a> {
    deps: &'a AppDeps,
}

impl<'a> UseCases<'a> {
    pub fn new(deps: &'a AppDeps) -> Self {
        Self { deps }
    }

    pub fn submit_vehicle_draft(&self) -> SubmitVehicleDraft {
        SubmitVehicleDraft::new(
            self.deps.vehicles.clone(),
            self.deps.session.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn list_vehicles(&self) -> ListVehicles {
        ListVehicles::new(self.deps.vehicles.clone(), self.deps.session.clone())
    }

    pub fn validate_account(&self) -> ValidateAccountForm {
        ValidateAccountForm::new()
    }

    /// Open a fresh wizard. `initial` is laid over the default draft.
    pub fn registration_wizard(
        &self,
        variant: WizardVariant,
        initial: FormDraft,
    ) -> RegistrationWizard {
        RegistrationWizard::new(
            variant,
            initial,
            Arc::new(self.submit_vehicle_draft()),
            self.deps.navigation.clone(),
            self.deps.date_input.clone(),
            self.deps.file_picker.clone(),
            self.deps.clock.clone(),
        )
    }
}
