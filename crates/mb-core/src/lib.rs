//! # mb-core
//!
//! Core domain models and business logic for Motorbook.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the vehicle registration draft, field and step validation, the wizard step
//! state machine and the transformation of a finished draft into a vehicle record.

pub mod account;
pub mod app_dirs;
pub mod config;
pub mod ids;
pub mod ports;
pub mod validation;
pub mod vehicle;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{UserId, VehicleId};
pub use validation::{DraftField, ValidationResult};
pub use vehicle::{
    BackendTimestamp, DateValue, DraftDate, FormDraft, MediaDescriptor, MediaKind,
    NewVehicleRecord, NumberInput, PrivacySettings, StoredVehicle,
};
pub use wizard::{
    FormStore, StepDescriptor, WizardAction, WizardEvent, WizardState, WizardStateMachine,
    WizardStep, WizardVariant,
};
