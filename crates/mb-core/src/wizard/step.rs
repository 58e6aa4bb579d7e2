use serde::{Deserialize, Serialize};

/// One page of the registration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Identification,
    TechnicalDetails,
    Deadlines,
    Photos,
    Summary,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Identification => "Vehicle",
            WizardStep::TechnicalDetails => "Technical details",
            WizardStep::Deadlines => "Deadlines & documents",
            WizardStep::Photos => "Photos",
            WizardStep::Summary => "Summary",
        }
    }
}

/// The two wizard layouts. Both share the same transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardVariant {
    /// Five steps, deadlines included.
    #[default]
    Full,
    /// Four steps, no deadlines page.
    Compact,
}

impl WizardVariant {
    pub fn steps(&self) -> &'static [WizardStep] {
        match self {
            WizardVariant::Full => &[
                WizardStep::Identification,
                WizardStep::TechnicalDetails,
                WizardStep::Deadlines,
                WizardStep::Photos,
                WizardStep::Summary,
            ],
            WizardVariant::Compact => &[
                WizardStep::Identification,
                WizardStep::TechnicalDetails,
                WizardStep::Photos,
                WizardStep::Summary,
            ],
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "full" => Some(WizardVariant::Full),
            "compact" => Some(WizardVariant::Compact),
            _ => None,
        }
    }
}

/// Progress metadata for one step.
///
/// `is_completed` means the step passed validation when the user last advanced
/// past it; later edits to the draft do not reset it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDescriptor {
    pub position: usize,
    pub step: WizardStep,
    pub title: String,
    pub is_valid: bool,
    pub is_completed: bool,
}

impl StepDescriptor {
    pub fn new(position: usize, step: WizardStep) -> Self {
        Self {
            position,
            step,
            title: step.title().to_string(),
            is_valid: false,
            is_completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_differ_only_by_deadlines_step() {
        assert_eq!(WizardVariant::Full.steps().len(), 5);
        assert_eq!(WizardVariant::Compact.steps().len(), 4);
        assert!(!WizardVariant::Compact
            .steps()
            .contains(&WizardStep::Deadlines));
        assert_eq!(
            WizardVariant::Compact.steps().last(),
            Some(&WizardStep::Summary)
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(WizardVariant::parse(" Compact "), Some(WizardVariant::Compact));
        assert_eq!(WizardVariant::parse("FULL"), Some(WizardVariant::Full));
        assert_eq!(WizardVariant::parse(""), None);
    }
}
