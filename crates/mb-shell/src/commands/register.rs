//! Scripted registration.
//!
//! A script is a JSON array of wizard commands replayed against one wizard,
//! the way a user would tap through the screens:
//!
//! ```json
//! [
//!   { "update": { "make": "Fiat", "model": "Panda", "year": 2020, "licensePlate": "ab123cd" } },
//!   "next",
//!   { "update": { "fuelType": "benzina" } },
//!   "next",
//!   { "date": { "field": "insurance_expiry", "value": "2025-03-31" } },
//!   "next",
//!   { "attach": { "kind": "image", "sources": ["./front.jpg"] } },
//!   "next",
//!   "submit"
//! ]
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn, Instrument};

use mb_app::usecases::{RegistrationWizard, WizardError, WizardSnapshot};
use mb_core::{DraftDate, FormDraft, MediaKind};

use crate::bootstrap::Runtime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardCommand {
    Update(FormDraft),
    Next,
    Back,
    GoTo(usize),
    Date { field: DraftDate, value: String },
    Attach { kind: MediaKind, sources: Vec<String> },
    Submit,
    Reset,
}

#[derive(Debug, thiserror::Error)]
#[error("script command #{index} ({command:?}) failed: {source}")]
pub struct ScriptError {
    pub index: usize,
    pub command: WizardCommand,
    #[source]
    pub source: WizardError,
}

impl ScriptError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match &self.source {
            WizardError::Submit(err) => err.user_message().to_string(),
            other => other.to_string(),
        }
    }
}

pub fn load_script(path: &Path) -> anyhow::Result<Vec<WizardCommand>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    serde_json::from_str(&content).context("Failed to parse script as a list of wizard commands")
}

async fn apply(
    wizard: &RegistrationWizard,
    command: &WizardCommand,
) -> Result<WizardSnapshot, WizardError> {
    match command {
        WizardCommand::Update(patch) => Ok(wizard.update(patch.clone()).await),
        WizardCommand::Next => wizard.go_next().await,
        WizardCommand::Back => wizard.go_back().await,
        WizardCommand::GoTo(step) => wizard.go_to_step(*step).await,
        WizardCommand::Date { field, value } => wizard.enter_date(*field, value).await,
        WizardCommand::Attach { kind, sources } => wizard.attach(*kind, sources).await,
        WizardCommand::Submit => wizard.submit().await,
        WizardCommand::Reset => wizard.reset().await,
    }
}

/// Replay `commands` against a fresh wizard and return its last snapshot.
///
/// Stops early once the wizard navigates away (back from the first step or
/// after a successful submission). A refused step change is not an error;
/// its field messages are logged and the script goes on.
pub async fn run_script(
    runtime: &Runtime,
    initial: FormDraft,
    commands: &[WizardCommand],
) -> Result<WizardSnapshot, ScriptError> {
    let span = info_span!(
        "command.register",
        variant = ?runtime.variant,
        commands = commands.len()
    );
    async {
        let wizard = runtime
            .usecases()
            .registration_wizard(runtime.variant, initial);

        for (index, command) in commands.iter().enumerate() {
            let snapshot = apply(&wizard, command)
                .await
                .map_err(|source| ScriptError {
                    index,
                    command: command.clone(),
                    source,
                })?;

            if !snapshot.state.errors.is_valid {
                for (field, message) in &snapshot.state.errors.errors {
                    warn!(index, %field, message = %message, "step refused");
                }
            }

            if runtime.navigator.left_wizard() {
                info!(index, route = ?runtime.navigator.current(), "wizard closed");
                break;
            }
        }

        Ok(wizard.snapshot().await)
    }
    .instrument(span)
    .await
}
