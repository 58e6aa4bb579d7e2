//! # Application Dependencies
//!
//! This module defines the dependency grouping for use case construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;

use mb_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
#[derive(Clone)]
pub struct AppDeps {
    // Persistence
    pub vehicles: Arc<dyn VehicleRepositoryPort>,

    // Identity
    pub session: Arc<dyn SessionPort>,

    // Outer collaborators
    pub navigation: Arc<dyn NavigationPort>,
    pub date_input: Arc<dyn DateInputPort>,
    pub file_picker: Arc<dyn FilePickerPort>,

    // Time
    pub clock: Arc<dyn ClockPort>,
}
