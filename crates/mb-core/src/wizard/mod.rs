//! Vehicle registration wizard domain.
//!
//! The wizard is a pure state machine over an ordered list of steps; side
//! effects (leaving the wizard, submitting the draft) are returned as actions
//! and executed by the application layer.

pub mod form_store;
pub mod state_machine;
pub mod step;

pub use form_store::FormStore;
pub use state_machine::{WizardAction, WizardEvent, WizardState, WizardStateMachine};
pub use step::{StepDescriptor, WizardStep, WizardVariant};
