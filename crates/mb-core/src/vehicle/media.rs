use serde::{Deserialize, Serialize};

/// A file handed back by an image or document picker.
///
/// Content is never inspected here; only the `uri` travels into the vehicle record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDescriptor {
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Document,
}

impl MediaKind {
    /// Mime type guessed from a file extension, restricted to what the kind accepts.
    pub fn mime_for_extension(&self, extension: &str) -> Option<&'static str> {
        let ext = extension.to_ascii_lowercase();
        match (self, ext.as_str()) {
            (MediaKind::Image, "jpg" | "jpeg") => Some("image/jpeg"),
            (MediaKind::Image, "png") => Some("image/png"),
            (MediaKind::Image, "webp") => Some("image/webp"),
            (MediaKind::Image, "heic") => Some("image/heic"),
            (MediaKind::Document, "pdf") => Some("application/pdf"),
            (MediaKind::Document, "jpg" | "jpeg") => Some("image/jpeg"),
            (MediaKind::Document, "png") => Some("image/png"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_uses_type_key_for_mime() {
        let descriptor = MediaDescriptor {
            uri: "file:///tmp/front.jpg".into(),
            name: "front.jpg".into(),
            size: Some(1024),
            mime_type: Some("image/jpeg".into()),
        };

        let json = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(json["type"], "image/jpeg");
        assert_eq!(json["size"], 1024);
    }

    #[test]
    fn documents_accept_pdf_but_images_do_not() {
        assert_eq!(
            MediaKind::Document.mime_for_extension("PDF"),
            Some("application/pdf")
        );
        assert_eq!(MediaKind::Image.mime_for_extension("pdf"), None);
    }
}
