//! File-based session repository
//!
//! Reads the signed-in user from a small JSON file written by the sign-in
//! flow. A missing or empty file means nobody is signed in.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use mb_core::ports::{SessionError, SessionPort};
use mb_core::UserId;

pub const DEFAULT_SESSION_FILE: &str = ".session";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionFile {
    user_id: Option<UserId>,
}

pub struct FileSessionRepository {
    session_file_path: PathBuf,
}

impl FileSessionRepository {
    /// Create repository with custom file path
    pub fn new(session_file_path: PathBuf) -> Self {
        Self { session_file_path }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_SESSION_FILE))
    }

    /// Record `user` as signed in, or sign out with `None`.
    pub async fn set_user(&self, user: Option<&UserId>) -> Result<(), SessionError> {
        if let Some(parent) = self.session_file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SessionError::Storage(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(&SessionFile {
            user_id: user.cloned(),
        })
        .map_err(|e| SessionError::Storage(format!("Failed to serialize session: {e}")))?;

        let mut file = fs::File::create(&self.session_file_path)
            .await
            .map_err(|e| SessionError::Storage(format!("Failed to create session file: {e}")))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| SessionError::Storage(format!("Failed to write session file: {e}")))?;
        file.sync_all()
            .await
            .map_err(|e| SessionError::Storage(format!("Failed to sync session file: {e}")))?;

        Ok(())
    }
}

#[async_trait]
impl SessionPort for FileSessionRepository {
    async fn current_user(&self) -> Result<Option<UserId>, SessionError> {
        if !self.session_file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.session_file_path)
            .await
            .map_err(|e| SessionError::Storage(e.to_string()))?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let session: SessionFile = serde_json::from_str(&content)
            .map_err(|e| SessionError::Storage(format!("Failed to parse session: {e}")))?;

        Ok(session.user_id.filter(|id| !id.as_str().is_empty()))
    }
}
