//! Wizard step state machine.
//!
//! Defines a pure state transition function for the registration wizard.
//! Validation failures are ordinary outcomes recorded in the state, never errors.

use serde::{Deserialize, Serialize};

use super::{StepDescriptor, WizardStep, WizardVariant};
use crate::validation::{validate_step, ValidationResult};
use crate::vehicle::FormDraft;

/// Wizard progress. `current` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub variant: WizardVariant,
    pub current: usize,
    pub steps: Vec<StepDescriptor>,
    /// Field errors from the last refused `Next`; empty otherwise.
    pub errors: ValidationResult,
}

impl WizardState {
    pub fn new(variant: WizardVariant) -> Self {
        let steps = variant
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| StepDescriptor::new(index + 1, *step))
            .collect();
        Self {
            variant,
            current: 1,
            steps,
            errors: ValidationResult::valid(),
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// `None` when `current` does not name one of the steps.
    pub fn current_descriptor(&self) -> Option<&StepDescriptor> {
        self.steps.get(self.current.checked_sub(1)?)
    }

    pub fn current_step(&self) -> Option<WizardStep> {
        self.current_descriptor().map(|descriptor| descriptor.step)
    }

    pub fn is_in_range(&self) -> bool {
        (1..=self.step_count()).contains(&self.current)
    }

    pub fn is_last_step(&self) -> bool {
        self.current == self.step_count()
    }

    fn current_descriptor_mut(&mut self) -> Option<&mut StepDescriptor> {
        let index = self.current.checked_sub(1)?;
        self.steps.get_mut(index)
    }
}

/// Inputs that drive the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardEvent {
    /// Validate the current step and advance on success.
    Next,
    /// Go one step back, or leave the wizard from the first step.
    Back,
    /// Jump to a step by 1-based position, without re-validating.
    GoTo { step: usize },
    /// Confirm on the last step.
    Submit,
    /// Start over with an empty draft.
    Reset,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardAction {
    /// Leave the wizard through the navigation collaborator.
    ExitWizard,
    /// Run the draft submission pipeline.
    SubmitDraft,
    /// Restore the draft to its initial shape.
    ResetDraft,
}

/// Pure wizard state machine: no side effects.
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(
        mut state: WizardState,
        event: WizardEvent,
        draft: &FormDraft,
    ) -> (WizardState, Vec<WizardAction>) {
        // A state built or deserialized with a bad position only accepts Reset.
        if !state.is_in_range() && event != WizardEvent::Reset {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                current = state.current,
                count = state.step_count(),
                ?event,
                "wizard position out of range, event ignored"
            );
            return (state, Vec::new());
        }

        match event {
            WizardEvent::Next => {
                if Self::validate_current(&mut state, draft) && !state.is_last_step() {
                    state.current += 1;
                }
                (state, Vec::new())
            }
            WizardEvent::Back => {
                if state.current == 1 {
                    return (state, vec![WizardAction::ExitWizard]);
                }
                state.current -= 1;
                state.errors = ValidationResult::valid();
                (state, Vec::new())
            }
            WizardEvent::GoTo { step } => {
                if (1..=state.step_count()).contains(&step) {
                    state.current = step;
                    state.errors = ValidationResult::valid();
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(step, count = state.step_count(), "wizard jump out of range");
                }
                (state, Vec::new())
            }
            WizardEvent::Submit => {
                if !state.is_last_step() {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(current = state.current, "wizard submit outside last step");
                    return (state, Vec::new());
                }
                if Self::validate_current(&mut state, draft) {
                    (state, vec![WizardAction::SubmitDraft])
                } else {
                    (state, Vec::new())
                }
            }
            WizardEvent::Reset => (
                WizardState::new(state.variant),
                vec![WizardAction::ResetDraft],
            ),
        }
    }

    /// Run the current step's validator and record the outcome on its descriptor.
    fn validate_current(state: &mut WizardState, draft: &FormDraft) -> bool {
        let Some(step) = state.current_step() else {
            return false;
        };
        let result = validate_step(step, draft);
        if let Some(descriptor) = state.current_descriptor_mut() {
            descriptor.is_valid = result.is_valid;
            if result.is_valid {
                descriptor.is_completed = true;
            }
        }
        let is_valid = result.is_valid;
        state.errors = result;
        is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::DraftField;
    use crate::vehicle::NumberInput;

    fn valid_identification() -> FormDraft {
        FormDraft {
            make: Some("Fiat".into()),
            model: Some("Panda".into()),
            year: Some(NumberInput::from(2020)),
            license_plate: Some("AB123CD".into()),
            ..Default::default()
        }
    }

    fn at_step(variant: WizardVariant, current: usize) -> WizardState {
        let mut state = WizardState::new(variant);
        state.current = current;
        state
    }

    #[test]
    fn initial_state_starts_at_first_step() {
        let state = WizardState::new(WizardVariant::Full);
        assert_eq!(state.current, 1);
        assert_eq!(state.step_count(), 5);
        assert!(state.steps.iter().all(|s| !s.is_valid && !s.is_completed));
        assert_eq!(
            state.steps.iter().map(|s| s.position).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn next_with_invalid_draft_stays_and_flags_step() {
        for current in [1, 2] {
            let state = at_step(WizardVariant::Full, current);
            let (next, actions) =
                WizardStateMachine::transition(state, WizardEvent::Next, &FormDraft::default());

            assert_eq!(next.current, current);
            assert!(!next.current_descriptor().unwrap().is_valid);
            assert!(!next.current_descriptor().unwrap().is_completed);
            assert!(!next.errors.is_valid);
            assert!(actions.is_empty());
        }
    }

    #[test]
    fn next_with_valid_draft_advances_by_one_and_marks_step() {
        let state = WizardState::new(WizardVariant::Full);
        let (next, actions) =
            WizardStateMachine::transition(state, WizardEvent::Next, &valid_identification());

        assert_eq!(next.current, 2);
        assert!(next.steps[0].is_valid);
        assert!(next.steps[0].is_completed);
        assert!(next.errors.is_valid);
        assert!(actions.is_empty());
    }

    #[test]
    fn refused_next_surfaces_field_errors() {
        let state = WizardState::new(WizardVariant::Full);
        let draft = FormDraft {
            license_plate: Some("AB1234".into()),
            ..valid_identification()
        };
        let (next, _) = WizardStateMachine::transition(state, WizardEvent::Next, &draft);

        assert!(next.errors.error(&DraftField::LicensePlate).is_some());
        assert_eq!(next.errors.errors.len(), 1);
    }

    #[test]
    fn next_on_last_step_does_not_move() {
        let state = at_step(WizardVariant::Compact, 4);
        let (next, actions) =
            WizardStateMachine::transition(state, WizardEvent::Next, &FormDraft::default());

        assert_eq!(next.current, 4);
        assert!(next.current_descriptor().unwrap().is_completed);
        assert!(actions.is_empty());
    }

    #[test]
    fn back_on_first_step_requests_exit() {
        let state = WizardState::new(WizardVariant::Full);
        let (next, actions) =
            WizardStateMachine::transition(state, WizardEvent::Back, &FormDraft::default());

        assert_eq!(next.current, 1);
        assert_eq!(actions, vec![WizardAction::ExitWizard]);
    }

    #[test]
    fn back_decrements_without_validation() {
        let state = at_step(WizardVariant::Full, 3);
        let (next, actions) =
            WizardStateMachine::transition(state, WizardEvent::Back, &FormDraft::default());

        assert_eq!(next.current, 2);
        assert!(actions.is_empty());
    }

    #[test]
    fn go_to_jumps_within_range_only() {
        let state = WizardState::new(WizardVariant::Full);
        let (next, _) = WizardStateMachine::transition(
            state,
            WizardEvent::GoTo { step: 4 },
            &FormDraft::default(),
        );
        assert_eq!(next.current, 4);

        for step in [0, 6] {
            let (same, _) = WizardStateMachine::transition(
                next.clone(),
                WizardEvent::GoTo { step },
                &FormDraft::default(),
            );
            assert_eq!(same.current, 4);
        }
    }

    #[test]
    fn completed_flags_are_not_revoked_by_later_edits() {
        let state = WizardState::new(WizardVariant::Full);
        let (state, _) =
            WizardStateMachine::transition(state, WizardEvent::Next, &valid_identification());
        let (state, _) = WizardStateMachine::transition(
            state,
            WizardEvent::GoTo { step: 5 },
            &FormDraft::default(),
        );

        assert!(state.steps[0].is_completed);
        assert!(state.steps[0].is_valid);
    }

    #[test]
    fn submit_only_from_last_step() {
        let state = at_step(WizardVariant::Full, 4);
        let (state, actions) =
            WizardStateMachine::transition(state, WizardEvent::Submit, &FormDraft::default());
        assert!(actions.is_empty());
        assert_eq!(state.current, 4);

        let (state, _) = WizardStateMachine::transition(
            state,
            WizardEvent::GoTo { step: 5 },
            &FormDraft::default(),
        );
        let (_, actions) =
            WizardStateMachine::transition(state, WizardEvent::Submit, &FormDraft::default());
        assert_eq!(actions, vec![WizardAction::SubmitDraft]);
    }

    #[test]
    fn reset_restores_initial_state() {
        let state = at_step(WizardVariant::Compact, 3);
        let (next, actions) =
            WizardStateMachine::transition(state, WizardEvent::Reset, &FormDraft::default());

        assert_eq!(next, WizardState::new(WizardVariant::Compact));
        assert_eq!(actions, vec![WizardAction::ResetDraft]);
    }

    #[test]
    fn out_of_range_position_ignores_events_until_reset() {
        let deserialized: WizardState = {
            let mut json = serde_json::to_value(WizardState::new(WizardVariant::Full)).unwrap();
            json["current"] = serde_json::json!(0);
            serde_json::from_value(json).unwrap()
        };
        let states = [
            deserialized,
            at_step(WizardVariant::Full, 9),
            at_step(WizardVariant::Compact, 5),
        ];

        for state in states {
            assert!(!state.is_in_range());
            assert_eq!(state.current_descriptor(), None);
            for event in [
                WizardEvent::Next,
                WizardEvent::Back,
                WizardEvent::GoTo { step: 2 },
                WizardEvent::Submit,
            ] {
                let (same, actions) =
                    WizardStateMachine::transition(state.clone(), event, &valid_identification());
                assert_eq!(same, state);
                assert!(actions.is_empty());
            }

            let (fresh, actions) = WizardStateMachine::transition(
                state.clone(),
                WizardEvent::Reset,
                &FormDraft::default(),
            );
            assert_eq!(fresh, WizardState::new(state.variant));
            assert_eq!(actions, vec![WizardAction::ResetDraft]);
        }
    }
}
