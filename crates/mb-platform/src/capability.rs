//! Capability selection per target platform.

use std::sync::Arc;

use mb_core::ports::{DateInputPort, FilePickerPort, Platform};

use crate::date_input::{NativeDateInput, WebDateInput};
use crate::file_picker::{NativeFilePicker, WebFilePicker};

/// The date input and file picker a target platform uses.
#[derive(Clone)]
pub struct PlatformCapabilities {
    pub date_input: Arc<dyn DateInputPort>,
    pub file_picker: Arc<dyn FilePickerPort>,
}

impl PlatformCapabilities {
    /// Resolved once at composition time; call sites never branch on platform.
    pub fn for_target(platform: Platform) -> Self {
        match platform {
            Platform::Native => Self {
                date_input: Arc::new(NativeDateInput),
                file_picker: Arc::new(NativeFilePicker),
            },
            Platform::Web => Self {
                date_input: Arc::new(WebDateInput),
                file_picker: Arc::new(WebFilePicker),
            },
        }
    }
}
