use tracing::info;

use mb_core::ports::SessionError;
use mb_core::UserId;

use crate::bootstrap::Runtime;

/// Record `user` as the signed-in account for later commands.
pub async fn sign_in(runtime: &Runtime, user: UserId) -> Result<(), SessionError> {
    runtime.session_store.set_user(Some(&user)).await?;
    info!(user = %user, "signed in");
    Ok(())
}

pub async fn sign_out(runtime: &Runtime) -> Result<(), SessionError> {
    runtime.session_store.set_user(None).await?;
    info!("signed out");
    Ok(())
}
