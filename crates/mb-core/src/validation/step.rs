//! Per-step validators.
//!
//! Only the identification and technical steps gate progress; deadlines,
//! photos and the summary are always valid.

use super::field;
use super::result::ErrorCollector;
use super::{DraftField, ValidationResult};
use crate::vehicle::FormDraft;
use crate::wizard::WizardStep;

/// Validate the fields owned by `step`. Fields of other steps are never reported.
pub fn validate_step(step: WizardStep, draft: &FormDraft) -> ValidationResult {
    match step {
        WizardStep::Identification => validate_identification(draft),
        WizardStep::TechnicalDetails => validate_technical_details(draft),
        WizardStep::Deadlines | WizardStep::Photos | WizardStep::Summary => {
            ValidationResult::valid()
        }
    }
}

fn validate_identification(draft: &FormDraft) -> ValidationResult {
    let mut errors = ErrorCollector::new();
    errors
        .check(
            DraftField::Make,
            field::required(draft.make.as_deref(), DraftField::Make.label()),
        )
        .check(
            DraftField::Model,
            field::required(draft.model.as_deref(), DraftField::Model.label()),
        )
        .check(
            DraftField::Year,
            field::required_number(draft.year.as_ref(), DraftField::Year.label()),
        )
        .check(
            DraftField::LicensePlate,
            field::license_plate(draft.license_plate.as_deref().unwrap_or_default()),
        );
    if let Some(year) = &draft.year {
        errors.check(DraftField::Year, field::year(year));
    }
    errors.finish()
}

fn validate_technical_details(draft: &FormDraft) -> ValidationResult {
    let mut errors = ErrorCollector::new();
    errors.check(
        DraftField::FuelType,
        field::required(draft.fuel_type.as_deref(), DraftField::FuelType.label()),
    );
    errors.finish()
}
