//! File/photo selection capability.

use async_trait::async_trait;

use crate::ports::errors::FilePickerError;
use crate::ports::Platform;
use crate::vehicle::{MediaDescriptor, MediaKind};

#[async_trait]
pub trait FilePickerPort: Send + Sync {
    fn platform(&self) -> Platform;

    /// Resolve the selected sources (paths or URIs) into descriptors.
    async fn pick(
        &self,
        sources: &[String],
        kind: MediaKind,
    ) -> Result<Vec<MediaDescriptor>, FilePickerError>;
}
