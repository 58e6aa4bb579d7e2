use async_trait::async_trait;

use mb_core::ports::{SessionError, SessionPort};
use mb_core::UserId;

/// Session fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user: Option<UserId>,
}

impl StaticSession {
    pub fn signed_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl SessionPort for StaticSession {
    async fn current_user(&self) -> Result<Option<UserId>, SessionError> {
        Ok(self.user.clone())
    }
}
