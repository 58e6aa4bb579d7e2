//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - Create infra implementations (vehicle store, session, clock)
//! - Select platform capabilities (date input, file picker)
//! - Group everything into [`AppDeps`]
//!
//! ## Prohibited
//!
//! No business logic. This is the only place allowed to depend on
//! mb-infra, mb-platform and mb-app at once, and only for assembly.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use mb_app::app_paths::AppPaths;
use mb_app::{AppDeps, UseCases};
use mb_core::config::AppConfig;
use mb_core::ports::Platform;
use mb_core::WizardVariant;
use mb_infra::{FileSessionRepository, FileVehicleRepository, SystemClock};
use mb_platform::PlatformCapabilities;

use crate::adapters::CliNavigator;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Unknown wizard variant in config: {0:?}")]
    UnknownWizardVariant(String),

    #[error("Unknown platform target in config: {0:?}")]
    UnknownPlatform(String),
}

/// Everything a command needs after bootstrap.
pub struct Runtime {
    pub deps: AppDeps,
    pub variant: WizardVariant,
    pub platform: Platform,
    pub navigator: Arc<CliNavigator>,
    pub session_store: Arc<FileSessionRepository>,
}

impl Runtime {
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(&self.deps)
    }
}

fn resolve_variant(name: &str) -> WiringResult<WizardVariant> {
    if name.trim().is_empty() {
        return Ok(WizardVariant::default());
    }
    WizardVariant::parse(name).ok_or_else(|| WiringError::UnknownWizardVariant(name.to_string()))
}

fn resolve_platform(name: &str) -> WiringResult<Platform> {
    if name.trim().is_empty() {
        return Ok(Platform::default());
    }
    Platform::parse(name).ok_or_else(|| WiringError::UnknownPlatform(name.to_string()))
}

/// Configured path, or the data-dir fallback when the config left it empty.
fn path_or(configured: &Path, fallback: &Path) -> PathBuf {
    if configured.as_os_str().is_empty() {
        fallback.to_path_buf()
    } else {
        configured.to_path_buf()
    }
}

/// Assemble the runtime from configuration and resolved paths.
///
/// # Errors
///
/// Returns [`WiringError`] when the config names a variant or platform that
/// does not exist. Empty values fall back to defaults.
pub fn wire_dependencies(config: &AppConfig, paths: &AppPaths) -> WiringResult<Runtime> {
    let variant = resolve_variant(&config.wizard_variant)?;
    let platform = resolve_platform(&config.platform_target)?;

    let vehicles_path = path_or(&config.vehicles_path, &paths.vehicles_path);
    let session_path = path_or(&config.session_path, &paths.session_path);

    let capabilities = PlatformCapabilities::for_target(platform);
    let navigator = Arc::new(CliNavigator::new());
    let session_store = Arc::new(FileSessionRepository::new(session_path.clone()));

    let deps = AppDeps {
        vehicles: Arc::new(FileVehicleRepository::new(vehicles_path.clone())),
        session: session_store.clone(),
        navigation: navigator.clone(),
        date_input: capabilities.date_input,
        file_picker: capabilities.file_picker,
        clock: Arc::new(SystemClock),
    };

    info!(
        ?variant,
        ?platform,
        vehicles = %vehicles_path.display(),
        session = %session_path.display(),
        "dependencies wired"
    );

    Ok(Runtime {
        deps,
        variant,
        platform,
        navigator,
        session_store,
    })
}
