//! Authenticated-session port
//!
//! Supplies the acting user's identity. An absent user is a normal answer,
//! callers decide whether it is a precondition failure.

use async_trait::async_trait;

use crate::ids::UserId;
use crate::ports::errors::SessionError;

#[async_trait]
pub trait SessionPort: Send + Sync {
    async fn current_user(&self) -> Result<Option<UserId>, SessionError>;
}
