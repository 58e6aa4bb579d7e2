//! File selection adapters.

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use mb_core::ports::{FilePickerError, FilePickerPort, Platform};
use mb_core::vehicle::{MediaDescriptor, MediaKind};

const FILE_SCHEME: &str = "file://";

fn extension_of(name: &str) -> Option<&str> {
    Path::new(name).extension().and_then(|ext| ext.to_str())
}

fn mime_for(kind: MediaKind, name: &str) -> Result<&'static str, FilePickerError> {
    extension_of(name)
        .and_then(|ext| kind.mime_for_extension(ext))
        .ok_or_else(|| FilePickerError::UnsupportedType(name.to_string()))
}

/// Picks files from the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFilePicker;

impl NativeFilePicker {
    async fn describe(
        &self,
        source: &str,
        kind: MediaKind,
    ) -> Result<MediaDescriptor, FilePickerError> {
        let path = Path::new(source.strip_prefix(FILE_SCHEME).unwrap_or(source));

        let metadata = tokio::fs::metadata(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => FilePickerError::NotFound(source.to_string()),
            _ => FilePickerError::Io(e.to_string()),
        })?;
        if !metadata.is_file() {
            return Err(FilePickerError::NotFound(source.to_string()));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| FilePickerError::NotFound(source.to_string()))?
            .to_string();
        let mime = mime_for(kind, &name)?;
        let absolute = tokio::fs::canonicalize(path)
            .await
            .map_err(|e| FilePickerError::Io(e.to_string()))?;

        Ok(MediaDescriptor {
            uri: format!("{FILE_SCHEME}{}", absolute.display()),
            name,
            size: Some(metadata.len()),
            mime_type: Some(mime.to_string()),
        })
    }
}

#[async_trait]
impl FilePickerPort for NativeFilePicker {
    fn platform(&self) -> Platform {
        Platform::Native
    }

    async fn pick(
        &self,
        sources: &[String],
        kind: MediaKind,
    ) -> Result<Vec<MediaDescriptor>, FilePickerError> {
        let mut picked = Vec::with_capacity(sources.len());
        for source in sources {
            picked.push(self.describe(source, kind).await?);
        }
        debug!(?kind, count = picked.len(), "native files picked");
        Ok(picked)
    }
}

/// Browser file input: sources are already object or remote URIs.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebFilePicker;

impl WebFilePicker {
    fn describe(source: &str, kind: MediaKind) -> Result<MediaDescriptor, FilePickerError> {
        let without_query = source.split(['?', '#']).next().unwrap_or(source);
        let name = without_query
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| FilePickerError::NotFound(source.to_string()))?
            .to_string();
        let mime = mime_for(kind, &name)?;

        Ok(MediaDescriptor {
            uri: source.to_string(),
            name,
            size: None,
            mime_type: Some(mime.to_string()),
        })
    }
}

#[async_trait]
impl FilePickerPort for WebFilePicker {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    async fn pick(
        &self,
        sources: &[String],
        kind: MediaKind,
    ) -> Result<Vec<MediaDescriptor>, FilePickerError> {
        sources
            .iter()
            .map(|source| Self::describe(source, kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn native_describes_file_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("front.JPG");
        tokio::fs::write(&path, b"0123456789").await.unwrap();

        let picked = NativeFilePicker
            .pick(&[path.display().to_string()], MediaKind::Image)
            .await
            .unwrap();

        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].name, "front.JPG");
        assert_eq!(picked[0].size, Some(10));
        assert_eq!(picked[0].mime_type.as_deref(), Some("image/jpeg"));
        assert!(picked[0].uri.starts_with("file://"));
        assert!(picked[0].uri.ends_with("front.JPG"));
    }

    #[tokio::test]
    async fn native_accepts_file_uri_sources() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("libretto.pdf");
        tokio::fs::write(&path, b"%PDF").await.unwrap();

        let picked = NativeFilePicker
            .pick(&[format!("file://{}", path.display())], MediaKind::Document)
            .await
            .unwrap();

        assert_eq!(picked[0].mime_type.as_deref(), Some("application/pdf"));
    }

    #[tokio::test]
    async fn native_reports_missing_and_unsupported() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone.png").display().to_string();
        let err = NativeFilePicker
            .pick(&[missing], MediaKind::Image)
            .await
            .unwrap_err();
        assert!(matches!(err, FilePickerError::NotFound(_)));

        let pdf = temp_dir.path().join("doc.pdf");
        tokio::fs::write(&pdf, b"%PDF").await.unwrap();
        let err = NativeFilePicker
            .pick(&[pdf.display().to_string()], MediaKind::Image)
            .await
            .unwrap_err();
        assert!(matches!(err, FilePickerError::UnsupportedType(_)));
    }

    #[tokio::test]
    async fn web_keeps_uri_and_strips_query_from_name() {
        let picked = WebFilePicker
            .pick(
                &["https://cdn.example.com/u/rear.webp?token=abc".to_string()],
                MediaKind::Image,
            )
            .await
            .unwrap();

        assert_eq!(picked[0].uri, "https://cdn.example.com/u/rear.webp?token=abc");
        assert_eq!(picked[0].name, "rear.webp");
        assert_eq!(picked[0].size, None);
        assert_eq!(picked[0].mime_type.as_deref(), Some("image/webp"));
    }
}
